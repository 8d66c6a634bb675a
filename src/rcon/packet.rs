//! Packet definitions
//!
//! Represents RCON packets exchanged with the server.

use std::fmt;

/// RCON packet types
///
/// The numbering is fixed by the upstream protocol. Auth responses reuse
/// the EXEC_COMMAND discriminator, so [`PacketType::AUTH_RESPONSE`] is an
/// alias rather than a distinct variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum PacketType {
    ResponseValue = 0,
    ExecCommand = 2,
    Auth = 3,
}

impl PacketType {
    /// Alias: auth responses share the EXEC_COMMAND value on the wire
    pub const AUTH_RESPONSE: PacketType = PacketType::ExecCommand;

    /// Wire representation
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

/// A decoded RCON packet
///
/// `packet_type` is kept as the raw wire value so packets with unknown
/// discriminators can still be carried for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    /// Declared size: 4 (id) + 4 (type) + body bytes + 2 NUL terminators
    pub size: i32,

    /// Request/response correlator (this client always sends 0)
    pub id: i32,

    /// Raw packet type discriminator
    pub packet_type: i32,

    /// Decoded body text, NUL terminators stripped
    pub body: String,
}

impl Packet {
    /// Whether this is a RESPONSE_VALUE packet (successful command result)
    pub fn is_response_value(&self) -> bool {
        self.packet_type == PacketType::ResponseValue.as_i32()
    }
}

impl fmt::Display for Packet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "packet(size={}, id={}, type={}, body={:?})",
            self.size, self.id, self.packet_type, self.body
        )
    }
}
