//! Error types for asactl
//!
//! Provides a unified error type for all operations. Every variant maps to
//! a distinct process exit code at the CLI boundary (see [`crate::exit_codes`]).

use thiserror::Error;

/// Result type alias using AsactlError
pub type Result<T> = std::result::Result<T, AsactlError>;

/// Unified error type for asactl operations
#[derive(Debug, Error)]
pub enum AsactlError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Parameter Resolution Errors
    // -------------------------------------------------------------------------
    #[error("RCON password not found in configuration")]
    PasswordNotFound,

    #[error("RCON port could not be resolved: {0}")]
    PortNotFound(String),

    #[error("RCON is disabled on this server")]
    NotEnabled,

    // -------------------------------------------------------------------------
    // Session Errors
    // -------------------------------------------------------------------------
    #[error("RCON authentication failed (wrong server password)")]
    AuthenticationFailed,

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Protocol error: {0}")]
    ProtocolError(String),

    #[error("RCON command execution failed: {0}")]
    ExecutionFailed(String),

    // -------------------------------------------------------------------------
    // Mod Database Errors
    // -------------------------------------------------------------------------
    #[error("Mod {0} is already enabled")]
    ModAlreadyEnabled(u64),

    #[error("Mods database is corrupted: {0}")]
    ModDatabaseCorrupted(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
