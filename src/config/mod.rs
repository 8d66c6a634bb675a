//! Configuration Module
//!
//! Read-only access to the configuration sources the server exposes:
//! - Process environment overrides (`ADMIN_PASSWORD`, `RCON_PORT`,
//!   `RCON_ENABLED`)
//! - The `ASA_START_PARAMS` start-parameter string
//!   (`"Map?listen?Port=7777?RCONPort=27020 -NoBattlEye"` format)
//! - `GameUserSettings.ini`, `[ServerSettings]` section
//!
//! The [`Resolver`] combines these into effective connection parameters.
//! asactl never writes to any of these sources.

mod resolver;
mod start_params;

pub use resolver::{
    Resolver, ResolverBuilder, ADMIN_PASSWORD_VAR, DEFAULT_RCON_PORT, RCON_ENABLED_VAR,
    RCON_PORT_VAR, START_PARAMS_VAR,
};
pub use start_params::extract;

use std::path::Path;

use ini::Ini;

/// Well-known location of GameUserSettings.ini inside the server container
pub const GAME_USER_SETTINGS_PATH: &str =
    "/home/gameserver/server-files/ShooterGame/Saved/Config/WindowsServer/GameUserSettings.ini";

/// Well-known location of the mods database inside the server container
pub const MOD_DATABASE_PATH: &str = "/home/gameserver/server-files/mods.json";

/// INI section holding the RCON settings
pub const SERVER_SETTINGS_SECTION: &str = "ServerSettings";

/// Parse an INI file, returning `None` if it does not exist.
///
/// Parse failures are treated the same as a missing file: the file is an
/// external collaborator and a broken one must not block resolution from
/// higher-priority sources.
pub fn load_ini(path: impl AsRef<Path>) -> Option<Ini> {
    let path = path.as_ref();
    if !path.exists() {
        return None;
    }

    match Ini::load_from_file(path) {
        Ok(ini) => Some(ini),
        Err(e) => {
            tracing::warn!("Failed to parse {}: {}", path.display(), e);
            None
        }
    }
}
