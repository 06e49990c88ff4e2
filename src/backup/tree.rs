//! Recursive media tree replication
//!
//! Copies an upload directory wholesale into a snapshot, preserving the
//! relative structure, and reports how many regular files were copied.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::{BackupError, BackupResult};

/// Recursive directory replication into a snapshot
pub trait TreeCopier {
    /// Copy the whole tree rooted at `source` to `dest`
    ///
    /// Returns the number of regular files copied; directory entries are not
    /// counted. `dest` must not already exist.
    fn copy_tree(&self, source: &Path, dest: &Path) -> BackupResult<u64>;
}

/// Production copier walking the real filesystem
#[derive(Debug, Default)]
pub struct FsTreeCopier;

impl TreeCopier for FsTreeCopier {
    fn copy_tree(&self, source: &Path, dest: &Path) -> BackupResult<u64> {
        if dest.exists() {
            return Err(BackupError::DestinationExists(dest.to_path_buf()));
        }

        let mut copied = 0u64;

        for entry in WalkDir::new(source) {
            let entry = entry.map_err(|e| {
                BackupError::Io(format!("Failed to walk {}: {}", source.display(), e))
            })?;

            let relative = entry.path().strip_prefix(source).map_err(|e| {
                BackupError::Io(format!(
                    "Path {} escapes source tree: {}",
                    entry.path().display(),
                    e
                ))
            })?;
            let target = dest.join(relative);

            if entry.file_type().is_dir() {
                fs::create_dir_all(&target).map_err(|e| {
                    BackupError::Io(format!(
                        "Failed to create directory {}: {}",
                        target.display(),
                        e
                    ))
                })?;
            } else if entry.file_type().is_file() {
                fs::copy(entry.path(), &target).map_err(|e| {
                    BackupError::Io(format!(
                        "Failed to copy {} to {}: {}",
                        entry.path().display(),
                        target.display(),
                        e
                    ))
                })?;
                copied += 1;
            }
            // Symlinks and other special entries are not replicated.
        }

        Ok(copied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_file(path: &Path, contents: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn test_copy_counts_regular_files_only() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("uploads");
        let dest = temp_dir.path().join("copy");

        write_file(&source.join("a.jpg"), "a");
        write_file(&source.join("nested/b.jpg"), "b");
        write_file(&source.join("nested/deeper/c.jpg"), "c");
        fs::create_dir_all(source.join("empty")).unwrap();

        let count = FsTreeCopier.copy_tree(&source, &dest).unwrap();

        assert_eq!(count, 3);
        assert!(dest.join("empty").is_dir());
    }

    #[test]
    fn test_copy_preserves_structure_and_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("uploads");
        let dest = temp_dir.path().join("copy");

        write_file(&source.join("one.txt"), "first file");
        write_file(&source.join("sub/two.txt"), "second file");

        FsTreeCopier.copy_tree(&source, &dest).unwrap();

        assert_eq!(fs::read_to_string(dest.join("one.txt")).unwrap(), "first file");
        assert_eq!(
            fs::read_to_string(dest.join("sub/two.txt")).unwrap(),
            "second file"
        );
    }

    #[test]
    fn test_existing_destination_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("uploads");
        let dest = temp_dir.path().join("copy");

        write_file(&source.join("a.txt"), "a");
        fs::create_dir_all(&dest).unwrap();

        let err = FsTreeCopier.copy_tree(&source, &dest).unwrap_err();
        assert!(err.is_destination_exists());
    }
}
