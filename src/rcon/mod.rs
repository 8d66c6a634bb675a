//! RCON Module
//!
//! Client for the source RCON protocol ARK servers speak.
//!
//! ## Wire Format
//!
//! ```text
//! ┌───────────┬───────────┬───────────┬────────────────┬──────┐
//! │ Size (4)  │  Id (4)   │ Type (4)  │  Body (UTF-8)  │ 0 0  │
//! └───────────┴───────────┴───────────┴────────────────┴──────┘
//! ```
//!
//! All header fields are little-endian `i32`. `Size` counts everything
//! after itself: 4 (id) + 4 (type) + body bytes + 2 NUL terminators.
//!
//! ### Packet Types
//! - 0: RESPONSE_VALUE - command result
//! - 2: EXEC_COMMAND / AUTH_RESPONSE (shared value, upstream convention)
//! - 3: AUTH - authentication request carrying the password as body
//!
//! ## Known Limitation
//! Responses fragmented across multiple packets are not reassembled; one
//! logical response is assumed to fit in one packet. Long command output
//! (e.g. a large `ListPlayers`) may be truncated at the packet boundary.

mod codec;
mod executor;
mod packet;
mod session;

pub use codec::{encode_packet, read_packet, write_packet, HEADER_SIZE, MAX_BODY_SIZE};
pub use executor::{CommandResult, RconExecutor, SERVER_HOST};
pub use packet::{Packet, PacketType};
pub use session::{Session, AUTH_FAILED_ID};
