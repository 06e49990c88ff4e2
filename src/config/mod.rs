//! Configuration module for garden-backup
//!
//! This module provides configuration management including:
//! - Project and backup-root path resolution
//! - The explicit configuration struct handed to the backup runner

pub mod paths;

use std::path::PathBuf;

pub use paths::GardenPaths;

/// Number of snapshot directories kept after pruning, by default
pub const DEFAULT_RETENTION_COUNT: usize = 10;

/// Everything the backup runner needs to know, resolved up front
///
/// Constructed from [`GardenPaths`] in production; tests build one directly
/// against temporary directories.
#[derive(Debug, Clone)]
pub struct BackupConfig {
    /// Live SQLite database to snapshot
    pub database_file: PathBuf,
    /// Media copies preserve their path relative to this directory
    pub media_base: PathBuf,
    /// Source directories replicated into each snapshot
    pub media_dirs: Vec<PathBuf>,
    /// Directory snapshots are written to and pruned from
    pub backup_root: PathBuf,
    /// Maximum number of snapshot directories kept after pruning
    pub retention_count: usize,
}

impl BackupConfig {
    /// Build a config from the resolved project layout with the default
    /// retention count
    pub fn from_paths(paths: &GardenPaths) -> Self {
        Self {
            database_file: paths.database_file(),
            media_base: paths.static_dir(),
            media_dirs: paths.media_dirs(),
            backup_root: paths.backup_root().clone(),
            retention_count: DEFAULT_RETENTION_COUNT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_paths() {
        let paths = GardenPaths::with_dirs(PathBuf::from("/proj"), PathBuf::from("/bk"));
        let config = BackupConfig::from_paths(&paths);

        assert_eq!(config.database_file, PathBuf::from("/proj/database/garden.db"));
        assert_eq!(config.media_base, PathBuf::from("/proj/static"));
        assert_eq!(config.media_dirs.len(), 2);
        assert_eq!(config.backup_root, PathBuf::from("/bk"));
        assert_eq!(config.retention_count, DEFAULT_RETENTION_COUNT);
    }
}
