//! Mods Module
//!
//! Tracks which CurseForge mods the server should load at next startup.
//! The store is a flat JSON array (`mods.json`) in the server files root;
//! the server's startup scripts read it to decide what to download.

mod database;

pub use database::{start_parameter, ModDatabase, ModRecord};
