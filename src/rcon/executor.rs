//! Command executor
//!
//! Facade tying parameter resolution and the session together into one
//! "execute and return result" call used by the CLI.

use super::Session;
use crate::config::Resolver;
use crate::error::{AsactlError, Result};

/// RCON always targets the local server process
pub const SERVER_HOST: &str = "127.0.0.1";

/// Result of a successfully executed RCON command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the server returned a RESPONSE_VALUE packet
    pub success: bool,

    /// Response body text
    pub output: String,
}

/// Executes RCON commands against the local server
///
/// Each `run` call opens a fresh connection, authenticates, sends exactly
/// one command and closes. Executors hold no connection state, so separate
/// instances can run commands in parallel.
pub struct RconExecutor {
    resolver: Resolver,
}

impl RconExecutor {
    /// Create an executor resolving parameters from the given sources
    pub fn new(resolver: Resolver) -> Self {
        Self { resolver }
    }

    /// Resolve connection parameters, run one command and return its output
    ///
    /// Resolver and session failures propagate unchanged; the only failure
    /// added here is [`AsactlError::NotEnabled`] when the configuration
    /// explicitly disables RCON, and [`AsactlError::ExecutionFailed`] when
    /// the server answers with anything other than a RESPONSE_VALUE packet.
    pub fn run(&self, command: &str) -> Result<CommandResult> {
        if !self.resolver.resolve_enabled() {
            return Err(AsactlError::NotEnabled);
        }

        let password = self.resolver.resolve_password()?;
        let port = self.resolver.resolve_port()?;

        let mut session = Session::open(SERVER_HOST, port)?;
        session.authenticate(&password)?;
        let response = session.execute(command)?;

        if response.is_response_value() {
            Ok(CommandResult {
                success: true,
                output: response.body,
            })
        } else {
            Err(AsactlError::ExecutionFailed(format!(
                "unexpected response {response}"
            )))
        }
    }
}
