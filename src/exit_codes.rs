//! CLI boundary mapping
//!
//! Each failure kind maps to a distinct, stable exit code so automation
//! scripts wrapping `asactl` can branch on the outcome, and to an
//! operator-facing message that tells a human how to fix the configuration.

use crate::error::AsactlError;

pub const OK: i32 = 0;
pub const UNEXPECTED: i32 = 1;
pub const RCON_PASSWORD_NOT_FOUND: i32 = 2;
pub const RCON_PORT_NOT_FOUND: i32 = 3;
pub const RCON_AUTHENTICATION_FAILED: i32 = 4;
pub const RCON_COMMAND_EXECUTION_FAILED: i32 = 5;
pub const RCON_NOT_ENABLED: i32 = 6;
pub const RCON_CONNECTION_ERROR: i32 = 7;
pub const RCON_PROTOCOL_ERROR: i32 = 8;
pub const MOD_ALREADY_ENABLED: i32 = 9;
pub const CORRUPTED_MODS_DATABASE: i32 = 10;

/// Map an error to its process exit code
pub fn for_error(error: &AsactlError) -> i32 {
    match error {
        AsactlError::PasswordNotFound => RCON_PASSWORD_NOT_FOUND,
        AsactlError::PortNotFound(_) => RCON_PORT_NOT_FOUND,
        AsactlError::NotEnabled => RCON_NOT_ENABLED,
        AsactlError::AuthenticationFailed => RCON_AUTHENTICATION_FAILED,
        AsactlError::ConnectionError(_) => RCON_CONNECTION_ERROR,
        AsactlError::ProtocolError(_) => RCON_PROTOCOL_ERROR,
        AsactlError::ExecutionFailed(_) => RCON_COMMAND_EXECUTION_FAILED,
        AsactlError::ModAlreadyEnabled(_) => MOD_ALREADY_ENABLED,
        AsactlError::ModDatabaseCorrupted(_) => CORRUPTED_MODS_DATABASE,
        AsactlError::Io(_) | AsactlError::Config(_) => UNEXPECTED,
    }
}

/// Operator-facing message for an error
///
/// Configuration failures carry guidance on where to configure the missing
/// setting; everything else renders as-is.
pub fn operator_message(error: &AsactlError) -> String {
    match error {
        AsactlError::PasswordNotFound => "Could not read RCON password. Make sure it is \
             properly configured, either as start parameter ?ServerAdminPassword=mypass \
             or in GameUserSettings.ini in the [ServerSettings] section as \
             ServerAdminPassword=mypass"
            .to_string(),
        AsactlError::PortNotFound(detail) => format!(
            "Could not read RCON port ({detail}). Make sure it is properly configured, \
             either as start parameter ?RCONPort=27020 or in GameUserSettings.ini in \
             the [ServerSettings] section as RCONPort=27020"
        ),
        AsactlError::AuthenticationFailed => "Could not execute this RCON command. \
             Authentication failed (wrong server password)."
            .to_string(),
        _ => error.to_string(),
    }
}
