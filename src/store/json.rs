use std::fs;
use std::path::Path;

use super::{MemorySnapshot, Result};

/// Loads a full ledger snapshot from a JSON file.
///
/// Serves as the fixture/import format; the relational store the desktop
/// application ships with is outside this crate.
pub fn load_snapshot_from_path(path: &Path) -> Result<MemorySnapshot> {
    let data = fs::read_to_string(path)?;
    let snapshot = serde_json::from_str(&data)?;
    Ok(snapshot)
}

/// Writes a snapshot as pretty-printed JSON, the inverse of
/// [`load_snapshot_from_path`].
pub fn save_snapshot_to_path(snapshot: &MemorySnapshot, path: &Path) -> Result<()> {
    let data = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, data)?;
    Ok(())
}
