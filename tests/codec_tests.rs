//! Codec Tests
//!
//! Tests for RCON packet encoding/decoding and the wire format.

use std::io::Cursor;

use asactl::rcon::{encode_packet, read_packet, PacketType, HEADER_SIZE, MAX_BODY_SIZE};
use asactl::AsactlError;

// =============================================================================
// Wire Format Verification Tests
// =============================================================================

#[test]
fn test_wire_format_auth() {
    let encoded = encode_packet("secret", PacketType::Auth);

    // size = 4 (id) + 4 (type) + 6 (body) + 2 (terminators) = 16
    assert_eq!(&encoded[0..4], &16i32.to_le_bytes());
    // id is always 0
    assert_eq!(&encoded[4..8], &0i32.to_le_bytes());
    // AUTH = 3
    assert_eq!(&encoded[8..12], &3i32.to_le_bytes());
    assert_eq!(&encoded[12..18], b"secret");
    // Body terminator + empty trailing string terminator
    assert_eq!(&encoded[18..], &[0x00, 0x00]);
}

#[test]
fn test_wire_format_exec_command() {
    let encoded = encode_packet("saveworld", PacketType::ExecCommand);

    assert_eq!(&encoded[0..4], &19i32.to_le_bytes());
    assert_eq!(&encoded[8..12], &2i32.to_le_bytes());
    assert_eq!(&encoded[12..21], b"saveworld");
}

#[test]
fn test_wire_format_empty_body() {
    let encoded = encode_packet("", PacketType::ResponseValue);

    assert_eq!(encoded.len(), HEADER_SIZE + 2);
    assert_eq!(&encoded[0..4], &10i32.to_le_bytes());
    assert_eq!(&encoded[8..12], &0i32.to_le_bytes());
    assert_eq!(&encoded[12..], &[0x00, 0x00]);
}

#[test]
#[should_panic(expected = "protocol cap")]
fn test_encode_rejects_oversized_body() {
    let body = "x".repeat(MAX_BODY_SIZE + 1);
    encode_packet(&body, PacketType::ExecCommand);
}

#[test]
fn test_upstream_type_numbering() {
    // The command type and the auth-response type share the value 2
    assert_eq!(PacketType::ResponseValue.as_i32(), 0);
    assert_eq!(PacketType::ExecCommand.as_i32(), 2);
    assert_eq!(PacketType::AUTH_RESPONSE.as_i32(), 2);
    assert_eq!(PacketType::Auth.as_i32(), 3);
}

// =============================================================================
// Round-Trip Tests
// =============================================================================

#[test]
fn test_encode_decode_round_trip() {
    let encoded = encode_packet("ListPlayers", PacketType::ExecCommand);
    let packet = read_packet(&mut Cursor::new(encoded)).unwrap();

    assert_eq!(packet.body, "ListPlayers");
    assert_eq!(packet.packet_type, PacketType::ExecCommand.as_i32());
    assert_eq!(packet.id, 0);
    assert_eq!(packet.size, 21);
}

#[test]
fn test_round_trip_empty_body() {
    let encoded = encode_packet("", PacketType::Auth);
    let packet = read_packet(&mut Cursor::new(encoded)).unwrap();

    assert_eq!(packet.body, "");
    assert_eq!(packet.packet_type, PacketType::Auth.as_i32());
}

#[test]
fn test_round_trip_utf8_body() {
    let encoded = encode_packet("Broadcast héllo wörld", PacketType::ExecCommand);
    let packet = read_packet(&mut Cursor::new(encoded)).unwrap();

    assert_eq!(packet.body, "Broadcast héllo wörld");
}

// =============================================================================
// Decode Error Handling Tests
// =============================================================================

#[test]
fn test_incomplete_header() {
    // Only 3 of the 12 header bytes before the stream closes
    let bytes = vec![0x13, 0x00, 0x00];
    let result = read_packet(&mut Cursor::new(bytes));

    assert!(matches!(result, Err(AsactlError::ProtocolError(_))));
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("incomplete packet header"));
}

#[test]
fn test_empty_stream() {
    let result = read_packet(&mut Cursor::new(Vec::new()));
    assert!(matches!(result, Err(AsactlError::ProtocolError(_))));
}

#[test]
fn test_truncated_body() {
    // Header declares a 12-byte body but only 4 bytes follow
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&20i32.to_le_bytes());
    bytes.extend_from_slice(&0i32.to_le_bytes());
    bytes.extend_from_slice(&0i32.to_le_bytes());
    bytes.extend_from_slice(b"trun");

    let result = read_packet(&mut Cursor::new(bytes));
    assert!(matches!(result, Err(AsactlError::ConnectionError(_))));
}

#[test]
fn test_negative_body_size() {
    // size = 4 declares a body of -4 bytes
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&4i32.to_le_bytes());
    bytes.extend_from_slice(&0i32.to_le_bytes());
    bytes.extend_from_slice(&0i32.to_le_bytes());

    let result = read_packet(&mut Cursor::new(bytes));
    assert!(matches!(result, Err(AsactlError::ProtocolError(_))));
}

#[test]
fn test_oversized_body_rejected() {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&((MAX_BODY_SIZE as i32) + 9).to_le_bytes());
    bytes.extend_from_slice(&0i32.to_le_bytes());
    bytes.extend_from_slice(&0i32.to_le_bytes());

    let result = read_packet(&mut Cursor::new(bytes));
    assert!(matches!(result, Err(AsactlError::ProtocolError(_))));
}

// =============================================================================
// Body Decoding Tests
// =============================================================================

#[test]
fn test_trailing_nulls_stripped() {
    // A response body padded with several trailing NULs
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&12i32.to_le_bytes());
    bytes.extend_from_slice(&0i32.to_le_bytes());
    bytes.extend_from_slice(&0i32.to_le_bytes());
    bytes.extend_from_slice(b"ok\x00\x00");

    let packet = read_packet(&mut Cursor::new(bytes)).unwrap();
    assert_eq!(packet.body, "ok");
}

#[test]
fn test_invalid_utf8_decoded_leniently() {
    // Diagnostic output with encoding noise must not be dropped
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&13i32.to_le_bytes());
    bytes.extend_from_slice(&0i32.to_le_bytes());
    bytes.extend_from_slice(&0i32.to_le_bytes());
    bytes.extend_from_slice(b"ok\xff\x00\x00");

    let packet = read_packet(&mut Cursor::new(bytes)).unwrap();
    assert_eq!(packet.body, "ok\u{FFFD}");
}

#[test]
fn test_negative_id_preserved() {
    // The auth-failure sentinel id must survive decoding
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&10i32.to_le_bytes());
    bytes.extend_from_slice(&(-1i32).to_le_bytes());
    bytes.extend_from_slice(&2i32.to_le_bytes());
    bytes.extend_from_slice(&[0x00, 0x00]);

    let packet = read_packet(&mut Cursor::new(bytes)).unwrap();
    assert_eq!(packet.id, -1);
    assert_eq!(packet.packet_type, PacketType::AUTH_RESPONSE.as_i32());
}

#[test]
fn test_unknown_packet_type_carried() {
    // Unknown discriminators are carried raw for diagnostics, not rejected
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&10i32.to_le_bytes());
    bytes.extend_from_slice(&0i32.to_le_bytes());
    bytes.extend_from_slice(&7i32.to_le_bytes());
    bytes.extend_from_slice(&[0x00, 0x00]);

    let packet = read_packet(&mut Cursor::new(bytes)).unwrap();
    assert_eq!(packet.packet_type, 7);
    assert!(!packet.is_response_value());
}
