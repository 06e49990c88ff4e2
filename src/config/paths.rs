//! Path management for garden-backup
//!
//! Resolves the garden planner project layout and the cloud-mirrored backup
//! root.
//!
//! ## Path Resolution Order
//!
//! 1. `GARDEN_PLANNER_DIR` / `GARDEN_BACKUP_DIR` environment variables (if set)
//! 2. Project: the current working directory
//! 3. Backup root: the iCloud Drive mirror under the user's home directory

use std::path::PathBuf;

use directories::UserDirs;

use crate::error::BackupError;

/// Backup root relative to the user's home directory. This is the local
/// mirror of an iCloud Drive folder; a background sync agent replicates
/// everything written here to cloud storage.
const CLOUD_BACKUP_SUBDIR: &str =
    "Library/Mobile Documents/com~apple~CloudDocs/GardenPlannerBackups";

/// Manages all paths used by garden-backup
#[derive(Debug, Clone)]
pub struct GardenPaths {
    /// Root of the garden planner project checkout
    project_dir: PathBuf,
    /// Directory backups are written to and pruned from
    backup_root: PathBuf,
}

impl GardenPaths {
    /// Resolve paths from the environment
    ///
    /// Path resolution:
    /// 1. `GARDEN_PLANNER_DIR` env var (explicit override), else the current
    ///    working directory
    /// 2. `GARDEN_BACKUP_DIR` env var (explicit override), else the iCloud
    ///    Drive mirror under the home directory
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined while the
    /// backup root is not overridden.
    pub fn resolve() -> Result<Self, BackupError> {
        let project_dir = if let Ok(custom) = std::env::var("GARDEN_PLANNER_DIR") {
            PathBuf::from(custom)
        } else {
            std::env::current_dir()
                .map_err(|e| BackupError::Config(format!("Could not determine working directory: {}", e)))?
        };

        let backup_root = if let Ok(custom) = std::env::var("GARDEN_BACKUP_DIR") {
            PathBuf::from(custom)
        } else {
            let user_dirs = UserDirs::new().ok_or_else(|| {
                BackupError::Config("Could not determine home directory".into())
            })?;
            user_dirs.home_dir().join(CLOUD_BACKUP_SUBDIR)
        };

        Ok(Self {
            project_dir,
            backup_root,
        })
    }

    /// Create GardenPaths with explicit directories (useful for testing)
    pub fn with_dirs(project_dir: PathBuf, backup_root: PathBuf) -> Self {
        Self {
            project_dir,
            backup_root,
        }
    }

    /// Get the project root directory
    pub fn project_dir(&self) -> &PathBuf {
        &self.project_dir
    }

    /// Get the backup root directory
    pub fn backup_root(&self) -> &PathBuf {
        &self.backup_root
    }

    /// Get the path to the live SQLite database
    pub fn database_file(&self) -> PathBuf {
        self.project_dir.join("database").join("garden.db")
    }

    /// Get the static assets directory; media copies preserve their path
    /// relative to this directory
    pub fn static_dir(&self) -> PathBuf {
        self.project_dir.join("static")
    }

    /// Get the upload directories to replicate into each snapshot
    pub fn media_dirs(&self) -> Vec<PathBuf> {
        vec![
            self.static_dir().join("plant-images").join("uploads"),
            self.static_dir().join("journal-images").join("uploads"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let project = temp_dir.path().join("project");
        let backups = temp_dir.path().join("backups");
        let paths = GardenPaths::with_dirs(project.clone(), backups.clone());

        assert_eq!(paths.project_dir(), &project);
        assert_eq!(paths.backup_root(), &backups);
        assert_eq!(
            paths.database_file(),
            project.join("database").join("garden.db")
        );
    }

    #[test]
    fn test_media_dirs_under_static() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GardenPaths::with_dirs(
            temp_dir.path().to_path_buf(),
            temp_dir.path().join("backups"),
        );

        let static_dir = paths.static_dir();
        for dir in paths.media_dirs() {
            assert!(dir.starts_with(&static_dir));
            assert!(dir.ends_with("uploads"));
        }
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let project = temp_dir.path().join("proj");
        let backups = temp_dir.path().join("bk");

        env::set_var("GARDEN_PLANNER_DIR", &project);
        env::set_var("GARDEN_BACKUP_DIR", &backups);

        let paths = GardenPaths::resolve().unwrap();
        assert_eq!(paths.project_dir(), &project);
        assert_eq!(paths.backup_root(), &backups);

        // Clean up
        env::remove_var("GARDEN_PLANNER_DIR");
        env::remove_var("GARDEN_BACKUP_DIR");
    }
}
