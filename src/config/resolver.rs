//! Connection parameter resolution
//!
//! Resolves the effective RCON password, port, and enabled flag from a
//! prioritized chain of sources: environment override → start-parameter
//! string → GameUserSettings.ini. The first non-empty match wins and
//! lower-priority sources are not consulted.

use std::collections::HashMap;

use ini::Ini;

use super::{extract, SERVER_SETTINGS_SECTION};
use crate::error::{AsactlError, Result};

/// Default RCON port when no source configures one
pub const DEFAULT_RCON_PORT: u16 = 27020;

/// Environment variable carrying the full server start-parameter string
pub const START_PARAMS_VAR: &str = "ASA_START_PARAMS";

/// Environment override for the admin password
pub const ADMIN_PASSWORD_VAR: &str = "ADMIN_PASSWORD";

/// Environment override for the RCON port
pub const RCON_PORT_VAR: &str = "RCON_PORT";

/// Environment override for the RCON enabled flag
pub const RCON_ENABLED_VAR: &str = "RCON_ENABLED";

/// Resolves RCON connection parameters from prioritized sources
///
/// The resolver holds a snapshot of its inputs (environment overrides, the
/// start-parameter string, the parsed INI file), so resolution is
/// side-effect-free and repeatable. Use [`Resolver::from_env`] to wire the
/// real process environment and the well-known INI path, or the builder to
/// inject sources explicitly.
///
/// Deliberately not `Debug`: the snapshot holds the admin password.
#[derive(Default)]
pub struct Resolver {
    /// Environment override snapshot
    env: HashMap<String, String>,

    /// Server start-parameter blob, if available
    start_params: Option<String>,

    /// Parsed GameUserSettings.ini, if the file exists
    ini: Option<Ini>,
}

impl Resolver {
    /// Create a resolver builder
    pub fn builder() -> ResolverBuilder {
        ResolverBuilder::default()
    }

    /// Build a resolver from the process environment and the well-known
    /// GameUserSettings.ini location
    pub fn from_env() -> Self {
        let mut env = HashMap::new();
        for var in [ADMIN_PASSWORD_VAR, RCON_PORT_VAR, RCON_ENABLED_VAR] {
            if let Ok(value) = std::env::var(var) {
                env.insert(var.to_string(), value);
            }
        }

        Self {
            env,
            start_params: std::env::var(START_PARAMS_VAR).ok(),
            ini: super::load_ini(super::GAME_USER_SETTINGS_PATH),
        }
    }

    /// Resolve the RCON admin password
    ///
    /// No safe default exists, so exhausting all sources is a hard failure.
    pub fn resolve_password(&self) -> Result<String> {
        self.resolve(ADMIN_PASSWORD_VAR, "ServerAdminPassword")
            .ok_or(AsactlError::PasswordNotFound)
    }

    /// Resolve the RCON port, defaulting to [`DEFAULT_RCON_PORT`]
    ///
    /// A value that is present but not a valid port number is an error, not
    /// a fallthrough to the default.
    pub fn resolve_port(&self) -> Result<u16> {
        match self.resolve(RCON_PORT_VAR, "RCONPort") {
            Some(value) => value.parse::<u16>().map_err(|_| {
                AsactlError::PortNotFound(format!("'{value}' is not a valid port number"))
            }),
            None => {
                tracing::debug!("RCON port not configured, using default {DEFAULT_RCON_PORT}");
                Ok(DEFAULT_RCON_PORT)
            }
        }
    }

    /// Resolve whether RCON is enabled, defaulting to `true`
    ///
    /// Unlike password and port this never fails: absence of explicit
    /// disabling must not block administration.
    pub fn resolve_enabled(&self) -> bool {
        match self.resolve(RCON_ENABLED_VAR, "RCONEnabled") {
            Some(value) => is_truthy(&value),
            None => true,
        }
    }

    /// Walk the priority chain for one setting, returning the first
    /// non-empty value
    ///
    /// The start-parameter key and the INI key are identical for every
    /// setting we resolve; only the environment override name differs.
    fn resolve(&self, env_var: &str, key: &str) -> Option<String> {
        if let Some(value) = self.env.get(env_var).filter(|v| !v.is_empty()) {
            tracing::debug!("Resolved {key} from environment override {env_var}");
            return Some(value.clone());
        }

        if let Some(params) = &self.start_params {
            if let Some(value) = extract(params, key) {
                tracing::debug!("Resolved {key} from start parameters");
                return Some(value);
            }
        }

        if let Some(ini) = &self.ini {
            if let Some(value) = ini
                .section(Some(SERVER_SETTINGS_SECTION))
                .and_then(|section| section.get(key))
                .filter(|v| !v.is_empty())
            {
                tracing::debug!("Resolved {key} from GameUserSettings.ini");
                return Some(value.to_string());
            }
        }

        None
    }
}

/// Truthiness rules shared by the env override and the INI/start-param
/// representations: `1` and any casing of `true` are true.
fn is_truthy(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

/// Builder for [`Resolver`]
#[derive(Default)]
pub struct ResolverBuilder {
    resolver: Resolver,
}

impl ResolverBuilder {
    /// Set an environment override (e.g. `ADMIN_PASSWORD`)
    pub fn env_var(mut self, var: impl Into<String>, value: impl Into<String>) -> Self {
        self.resolver.env.insert(var.into(), value.into());
        self
    }

    /// Set the start-parameter string
    pub fn start_params(mut self, params: impl Into<String>) -> Self {
        self.resolver.start_params = Some(params.into());
        self
    }

    /// Set the parsed INI configuration
    pub fn ini(mut self, ini: Ini) -> Self {
        self.resolver.ini = Some(ini);
        self
    }

    pub fn build(self) -> Resolver {
        self.resolver
    }
}
