//! Snapshot persistence for destination records.
//!
//! The previous snapshot is read leniently at the start of a run; the new
//! snapshot replaces the file wholesale at the end.

use anyhow::Result;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::records::DestinationRecord;

/// Writes the full record list as pretty-printed JSON, creating missing
/// parent directories. Overwrites unconditionally; the prior file was
/// already read at the start of the run.
pub fn write_records(path: &Path, records: &[DestinationRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)?;

    Ok(())
}

/// Loads the previous snapshot as a city-to-index map.
///
/// A missing, unreadable, or malformed file means "no previous data": every
/// destination is then compared against a baseline of zero. Entries without
/// a readable name or index are skipped.
pub fn load_previous(path: &Path) -> HashMap<String, f64> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "No previous snapshot");
            return HashMap::new();
        }
    };

    let entries: Vec<serde_json::Value> = match serde_json::from_str(&content) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Previous snapshot is malformed, ignoring");
            return HashMap::new();
        }
    };

    entries
        .iter()
        .filter_map(|entry| {
            let name = entry["name"].as_str()?;
            let index = entry["index"].as_f64()?;
            Some((name.to_string(), index))
        })
        .collect()
}
