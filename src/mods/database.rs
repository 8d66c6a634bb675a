//! Mod database
//!
//! Flat JSON record store for mod state. Constructed explicitly and passed
//! around as a handle; there is no process-wide instance.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AsactlError, Result};

/// Build the `-mods=` start parameter straight from the database file
///
/// This is the read-only path the server startup scripts call to inject mod
/// parameters. It must never block a server start: a missing, empty, or
/// corrupted database yields an empty string, and the file is never created
/// or modified.
pub fn start_parameter(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();
    if !path.exists() {
        return String::new();
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!("Failed to read mods database at {}: {e}", path.display());
            return String::new();
        }
    };
    if content.trim().is_empty() {
        return String::new();
    }

    let records: Vec<ModRecord> = match serde_json::from_str(&content) {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!("Mods database at {} is corrupted: {e}", path.display());
            return String::new();
        }
    };

    let db = ModDatabase {
        path: path.to_path_buf(),
        records,
    };
    db.start_parameter()
}

/// One mod record in the database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModRecord {
    /// CurseForge project id
    pub mod_id: u64,

    /// Display name, "unknown" until the server scans the mod
    pub name: String,

    /// Whether the server should load this mod
    pub enabled: bool,

    /// Whether the server has scanned the mod's metadata
    pub scanned: bool,
}

/// Handle to the on-disk mod database
#[derive(Debug)]
pub struct ModDatabase {
    path: PathBuf,
    records: Vec<ModRecord>,
}

impl ModDatabase {
    /// Open the database, creating an empty one if the file is missing
    ///
    /// A file that exists but cannot be parsed is reported as corrupted and
    /// never deleted or overwritten; the operator may want to salvage it.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if !path.exists() || fs::metadata(&path)?.len() == 0 {
            let mut db = Self {
                path,
                records: Vec::new(),
            };
            db.persist()?;
            return Ok(db);
        }

        let content = fs::read_to_string(&path)?;
        let records = if content.trim().is_empty() {
            Vec::new()
        } else {
            serde_json::from_str(&content)
                .map_err(|e| AsactlError::ModDatabaseCorrupted(e.to_string()))?
        };

        Ok(Self { path, records })
    }

    /// Enable a mod by its id
    ///
    /// Unknown mods are added as enabled-but-unscanned records; the server
    /// fills in the name once it downloads the mod.
    pub fn enable_mod(&mut self, mod_id: u64) -> Result<()> {
        if let Some(record) = self.records.iter_mut().find(|r| r.mod_id == mod_id) {
            if record.enabled {
                return Err(AsactlError::ModAlreadyEnabled(mod_id));
            }
            record.enabled = true;
            return self.persist();
        }

        self.records.push(ModRecord {
            mod_id,
            name: "unknown".to_string(),
            enabled: true,
            scanned: false,
        });
        self.persist()
    }

    /// All mod records
    pub fn mods(&self) -> &[ModRecord] {
        &self.records
    }

    /// Ids of all enabled mods
    pub fn enabled_mods(&self) -> Vec<u64> {
        self.records
            .iter()
            .filter(|r| r.enabled)
            .map(|r| r.mod_id)
            .collect()
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build the `-mods=<comma-separated ids>` start parameter for the
    /// enabled mods, or an empty string when there are none
    pub fn start_parameter(&self) -> String {
        let ids: Vec<String> = self
            .records
            .iter()
            .filter(|r| r.enabled)
            .map(|r| r.mod_id.to_string())
            .collect();

        if ids.is_empty() {
            String::new()
        } else {
            format!("-mods={}", ids.join(","))
        }
    }

    /// Write the database back to disk
    fn persist(&mut self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&self.records)
            .map_err(|e| AsactlError::Config(format!("failed to serialize mods database: {e}")))?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
