//! Packet codec
//!
//! Encoding and decoding functions for the RCON wire protocol, plus
//! stream-based I/O helpers.

use std::io::{ErrorKind, Read, Write};

use super::{Packet, PacketType};
use crate::error::{AsactlError, Result};

/// Header size: three little-endian i32 fields (size, id, type)
pub const HEADER_SIZE: usize = 12;

/// Maximum body size accepted on decode
///
/// The upstream protocol caps packets at 4096 bytes; a declared body
/// beyond that is a desync, not a legitimate response.
pub const MAX_BODY_SIZE: usize = 4096;

/// Size field overhead: 4 (id) + 4 (type) + 2 NUL terminators
const SIZE_OVERHEAD: i32 = 10;

// =============================================================================
// Encoding
// =============================================================================

/// Encode a packet to bytes
///
/// The size field is always recomputed from the body; the id is fixed at 0
/// (this client never correlates responses by id).
///
/// Bodies longer than [`MAX_BODY_SIZE`] are a caller bug: the upstream
/// protocol caps packets at 4096 bytes, and the size field would not even
/// survive the `i32` cast for truly huge bodies.
pub fn encode_packet(body: &str, packet_type: PacketType) -> Vec<u8> {
    let body_bytes = body.as_bytes();
    debug_assert!(
        body_bytes.len() <= MAX_BODY_SIZE,
        "packet body exceeds the {MAX_BODY_SIZE}-byte protocol cap"
    );
    let size = SIZE_OVERHEAD + body_bytes.len() as i32;

    let mut message = Vec::with_capacity(HEADER_SIZE + body_bytes.len() + 2);
    message.extend_from_slice(&size.to_le_bytes());
    message.extend_from_slice(&0i32.to_le_bytes());
    message.extend_from_slice(&packet_type.as_i32().to_le_bytes());
    message.extend_from_slice(body_bytes);
    // Body terminator plus the empty trailing string's terminator
    message.extend_from_slice(&[0x00, 0x00]);

    message
}

// =============================================================================
// Decoding
// =============================================================================

/// Read a complete packet from a stream
///
/// Blocks until the declared body length has been received. A stream that
/// closes before delivering a full header is a protocol error; one that
/// closes mid-body is a connection error.
pub fn read_packet<R: Read>(reader: &mut R) -> Result<Packet> {
    let mut header = [0u8; HEADER_SIZE];
    let received = read_full(reader, &mut header)?;
    if received < HEADER_SIZE {
        return Err(AsactlError::ProtocolError(format!(
            "incomplete packet header: expected {HEADER_SIZE} bytes, got {received}"
        )));
    }

    let size = i32::from_le_bytes([header[0], header[1], header[2], header[3]]);
    let id = i32::from_le_bytes([header[4], header[5], header[6], header[7]]);
    let packet_type = i32::from_le_bytes([header[8], header[9], header[10], header[11]]);

    // The size field is bounds-checked but never trusted beyond that
    let body_size = size - 8;
    if body_size < 0 || body_size as usize > MAX_BODY_SIZE {
        return Err(AsactlError::ProtocolError(format!(
            "invalid packet size {size} (body would be {body_size} bytes)"
        )));
    }

    let mut body = vec![0u8; body_size as usize];
    let received = read_full(reader, &mut body)?;
    if received < body.len() {
        return Err(AsactlError::ConnectionError(format!(
            "connection closed while receiving packet body ({received} of {} bytes)",
            body.len()
        )));
    }

    // Strip the trailing NUL terminators; diagnostic output should not be
    // dropped over encoding noise, so decode leniently
    let text_end = body
        .iter()
        .rposition(|&b| b != 0x00)
        .map(|pos| pos + 1)
        .unwrap_or(0);
    let body = String::from_utf8_lossy(&body[..text_end]).into_owned();

    Ok(Packet {
        size,
        id,
        packet_type,
        body,
    })
}

/// Fill `buf` from the reader, looping on partial reads
///
/// Returns the number of bytes actually read; short counts mean the peer
/// closed the stream.
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                return Err(AsactlError::ConnectionError(format!(
                    "read failed: {e}"
                )))
            }
        }
    }
    Ok(filled)
}

// =============================================================================
// Stream-based I/O helpers
// =============================================================================

/// Write a packet to a stream
pub fn write_packet<W: Write>(writer: &mut W, body: &str, packet_type: PacketType) -> Result<()> {
    let bytes = encode_packet(body, packet_type);
    writer
        .write_all(&bytes)
        .and_then(|_| writer.flush())
        .map_err(|e| AsactlError::ConnectionError(format!("write failed: {e}")))
}
