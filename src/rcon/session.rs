//! RCON session
//!
//! Owns a single TCP connection and drives it through its lifecycle:
//! connected → authenticated → one command executed → closed. Sessions are
//! never reused; callers wanting several commands open one session each.

use std::net::TcpStream;

use super::{read_packet, write_packet, Packet, PacketType};
use crate::error::{AsactlError, Result};

/// Response id the server uses to signal rejected credentials
pub const AUTH_FAILED_ID: i32 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Connected,
    Authenticated,
}

/// A single-command RCON session
///
/// The socket is released on every exit path: `execute` consumes the
/// session, and dropping it (including mid-protocol on error) closes the
/// stream. No retries happen inside the session; retrying is the caller's
/// responsibility.
pub struct Session {
    stream: TcpStream,
    state: State,
}

impl Session {
    /// Open a TCP connection to the RCON endpoint
    pub fn open(host: &str, port: u16) -> Result<Self> {
        let stream = TcpStream::connect((host, port)).map_err(|e| {
            AsactlError::ConnectionError(format!("failed to connect to {host}:{port}: {e}"))
        })?;

        tracing::debug!("Connected to RCON endpoint {host}:{port}");

        Ok(Self {
            stream,
            state: State::Connected,
        })
    }

    /// Authenticate with the server
    ///
    /// A single attempt: a response with id [`AUTH_FAILED_ID`] means the
    /// password was rejected, any other id means success.
    pub fn authenticate(&mut self, password: &str) -> Result<()> {
        if self.state != State::Connected {
            return Err(AsactlError::ProtocolError(
                "session is already authenticated".to_string(),
            ));
        }

        let response = self.round_trip(password, PacketType::Auth)?;
        if response.id == AUTH_FAILED_ID {
            return Err(AsactlError::AuthenticationFailed);
        }

        tracing::debug!("RCON authentication succeeded");
        self.state = State::Authenticated;
        Ok(())
    }

    /// Send one command and return the server's response packet
    ///
    /// Consumes the session; the socket closes when it is dropped.
    pub fn execute(self, command: &str) -> Result<Packet> {
        let mut session = self;
        if session.state != State::Authenticated {
            return Err(AsactlError::ProtocolError(
                "command sent before authentication".to_string(),
            ));
        }

        tracing::debug!("Executing RCON command: {command}");
        session.round_trip(command, PacketType::ExecCommand)
    }

    /// Send one packet and read one response
    fn round_trip(&mut self, body: &str, packet_type: PacketType) -> Result<Packet> {
        write_packet(&mut self.stream, body, packet_type)?;
        read_packet(&mut self.stream)
    }
}
