//! World snapshots as pretty-printed JSON
//!
//! Regions, actors, routes, force groups and events are JSON arrays, so
//! insertion order survives a round trip intact.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::conflict::world::ConflictWorld;
use crate::core::error::Result;

pub fn to_json(world: &ConflictWorld) -> Result<String> {
    Ok(serde_json::to_string_pretty(world)?)
}

/// Decode a snapshot
///
/// Back-references are not checked here; call [`ConflictWorld::validate`].
pub fn from_json(content: &str) -> Result<ConflictWorld> {
    Ok(serde_json::from_str(content)?)
}

pub fn save_world(world: &ConflictWorld, path: &Path) -> Result<()> {
    fs::write(path, to_json(world)?)?;
    info!(path = %path.display(), week = world.week, "Snapshot saved");
    Ok(())
}

pub fn load_world(path: &Path) -> Result<ConflictWorld> {
    let world = from_json(&fs::read_to_string(path)?)?;
    info!(path = %path.display(), week = world.week, "Snapshot loaded");
    Ok(world)
}
