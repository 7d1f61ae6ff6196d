//! JSON file primitives shared by every repository
//!
//! Reads tolerate missing and damaged files; writes go through a temp file
//! and rename so an interrupted write cannot corrupt the store.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::TrackerError;

/// Read JSON from a file, computing a fallback value if the file is missing
/// or does not parse.
///
/// A file that cannot be parsed is treated the same as a missing file, so a
/// hand-edited or damaged data file never blocks startup.
pub fn read_json_or_else<T, P, F>(path: P, fallback: F) -> Result<T, TrackerError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
    F: FnOnce() -> T,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(fallback());
    }

    let file = File::open(path)
        .map_err(|e| TrackerError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    match serde_json::from_reader(reader) {
        Ok(data) => Ok(data),
        Err(_) => Ok(fallback()),
    }
}

/// Read JSON from a file, returning a default value if the file is missing
/// or does not parse
pub fn read_json<T, P>(path: P) -> Result<T, TrackerError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    read_json_or_else(path, T::default)
}

/// Write JSON to a file atomically
///
/// The data reaches its final name only through a rename of a fully written
/// and fsynced temp file, so a crash mid-write leaves the previous contents
/// intact.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), TrackerError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            TrackerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // The temp file must share the target's directory; rename is only atomic
    // within one filesystem.
    let temp_path = path.with_extension("json.tmp");
    let file = File::create(&temp_path)
        .map_err(|e| TrackerError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| TrackerError::Storage(format!("Failed to serialize data: {}", e)))?;
    writer
        .flush()
        .map_err(|e| TrackerError::Storage(format!("Failed to flush data: {}", e)))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| TrackerError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        TrackerError::Storage(format!("Failed to rename temp file: {}", e))
    })
}
