//! Age-based snapshot pruning
//!
//! Snapshot directories are named `YYYY-MM-DD_HHMMSS`, a fixed-width
//! zero-padded format, so descending lexicographic order over the names is
//! descending chronological order. Pruning keeps the newest N directories
//! and deletes the rest wholesale.

use std::fs;
use std::path::Path;

use crate::error::{BackupError, BackupResult};

/// Delete snapshot directories beyond the retention count
///
/// Lists the immediate subdirectories of `backup_root`, keeps the
/// `retention_count` newest by name, and recursively deletes every older
/// one. Returns the deleted directory names, oldest-deleted last. With
/// `retention_count` or fewer directories present, nothing is deleted.
pub fn enforce_retention(backup_root: &Path, retention_count: usize) -> BackupResult<Vec<String>> {
    let mut names = Vec::new();

    for entry in fs::read_dir(backup_root).map_err(|e| {
        BackupError::Io(format!(
            "Failed to read backup root {}: {}",
            backup_root.display(),
            e
        ))
    })? {
        let entry =
            entry.map_err(|e| BackupError::Io(format!("Failed to read directory entry: {}", e)))?;

        if entry
            .file_type()
            .map_err(|e| BackupError::Io(format!("Failed to stat directory entry: {}", e)))?
            .is_dir()
        {
            names.push(entry.file_name().to_string_lossy().to_string());
        }
    }

    // Newest first; name order equals time order for the fixed timestamp format.
    names.sort_by(|a, b| b.cmp(a));

    let mut deleted = Vec::new();
    for name in names.into_iter().skip(retention_count) {
        let path = backup_root.join(&name);
        fs::remove_dir_all(&path).map_err(|e| {
            BackupError::Io(format!("Failed to delete old backup {}: {}", path.display(), e))
        })?;
        deleted.push(name);
    }

    Ok(deleted)
}
