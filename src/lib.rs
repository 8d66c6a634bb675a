//! # asactl
//!
//! Administration toolkit for ARK: Survival Ascended dedicated servers:
//! - RCON client (Valve source RCON binary protocol) for issuing
//!   administrative commands to a running server
//! - Auto-discovery of RCON connection parameters from the environment,
//!   the server start parameters, and `GameUserSettings.ini`
//! - Mod database (`mods.json`) tracking which mods the server loads
//!   at next startup
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                     CLI (asactl)                     │
//! │               rcon --exec │ mods --enable            │
//! └───────────────┬──────────────────────┬───────────────┘
//!                 │                      │
//! ┌───────────────▼───────────┐  ┌───────▼───────────────┐
//! │       RconExecutor        │  │      ModDatabase      │
//! │  resolve → open → auth →  │  │      (mods.json)      │
//! │        exec → close       │  └───────────────────────┘
//! └───────┬───────────┬───────┘
//!         │           │
//! ┌───────▼───────┐ ┌─▼─────────────────┐
//! │   Resolver    │ │      Session      │
//! │ env → params  │ │  one TCP socket,  │
//! │     → INI     │ │   packet codec    │
//! └───────────────┘ └───────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod exit_codes;

pub mod config;
pub mod mods;
pub mod rcon;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use config::Resolver;
pub use error::{AsactlError, Result};
pub use mods::ModDatabase;
pub use rcon::{CommandResult, RconExecutor};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of asactl
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
