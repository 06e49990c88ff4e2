//! Backup runner for garden-backup
//!
//! Executes one complete backup cycle: name a timestamped destination,
//! snapshot the database, replicate the media trees, prune old snapshots.
//! The cycle is linear with no retry; the first unhandled error aborts the
//! run, leaving the partially written snapshot directory in place. Such a
//! directory is never rolled back and ages out through retention like any
//! other.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::backup::prune;
use crate::backup::snapshot::{DatabaseSnapshotter, SqliteSnapshotter};
use crate::backup::tree::{FsTreeCopier, TreeCopier};
use crate::config::BackupConfig;
use crate::error::{BackupError, BackupResult};

/// Snapshot directory name format, second granularity, local time.
///
/// Fixed-width and zero-padded: lexicographic order over directory names is
/// chronological order, which retention pruning relies on. Changing this
/// format breaks the pruning sort.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H%M%S";

/// What happened to the database during a run
#[derive(Debug)]
pub enum DatabaseOutcome {
    /// Snapshot written to the given path
    BackedUp(PathBuf),
    /// Source database absent; step skipped with a warning
    SourceMissing(PathBuf),
}

/// What happened to one configured media directory during a run
#[derive(Debug)]
pub enum MediaOutcome {
    /// Tree replicated under the snapshot at the given relative path
    Copied {
        /// Path relative to the media base, preserved under the snapshot
        relative: PathBuf,
        /// Regular files copied
        files: u64,
    },
    /// Source directory absent; skipped
    Skipped(PathBuf),
}

/// Everything a completed run did, for reporting
#[derive(Debug)]
pub struct RunReport {
    /// The snapshot directory this run wrote
    pub destination: PathBuf,
    /// Database snapshot outcome
    pub database: DatabaseOutcome,
    /// One outcome per configured media directory, in configuration order
    pub media: Vec<MediaOutcome>,
    /// Names of snapshot directories deleted by retention pruning
    pub pruned: Vec<String>,
}

/// Executes backup cycles against a fixed configuration
pub struct BackupRunner<S = SqliteSnapshotter, C = FsTreeCopier> {
    config: BackupConfig,
    snapshotter: S,
    copier: C,
}

impl BackupRunner {
    /// Create a runner with the production snapshotter and copier
    pub fn new(config: BackupConfig) -> Self {
        Self::with_parts(config, SqliteSnapshotter, FsTreeCopier)
    }
}

impl<S: DatabaseSnapshotter, C: TreeCopier> BackupRunner<S, C> {
    /// Create a runner with explicit snapshotter and copier implementations
    pub fn with_parts(config: BackupConfig, snapshotter: S, copier: C) -> Self {
        Self {
            config,
            snapshotter,
            copier,
        }
    }

    /// Execute one complete backup cycle
    ///
    /// Returns a report of everything the run did; the caller decides how to
    /// present it.
    pub fn run(&self) -> BackupResult<RunReport> {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        self.run_at(&timestamp)
    }

    /// Run a cycle into the snapshot directory named `timestamp`
    ///
    /// Directory creation is idempotent: a second invocation within the same
    /// second reuses the directory and merges into it.
    fn run_at(&self, timestamp: &str) -> BackupResult<RunReport> {
        let destination = self.config.backup_root.join(timestamp);
        fs::create_dir_all(&destination).map_err(|e| {
            BackupError::Io(format!(
                "Failed to create snapshot directory {}: {}",
                destination.display(),
                e
            ))
        })?;

        let database = self.snapshot_database(&destination)?;

        let mut media = Vec::with_capacity(self.config.media_dirs.len());
        for source in &self.config.media_dirs {
            media.push(self.replicate_media_dir(source, &destination)?);
        }

        let pruned = prune::enforce_retention(&self.config.backup_root, self.config.retention_count)?;

        Ok(RunReport {
            destination,
            database,
            media,
            pruned,
        })
    }

    /// Snapshot the live database into the snapshot directory, if it exists
    fn snapshot_database(&self, destination: &Path) -> BackupResult<DatabaseOutcome> {
        let source = &self.config.database_file;
        if !source.exists() {
            return Ok(DatabaseOutcome::SourceMissing(source.clone()));
        }

        let file_name = source.file_name().ok_or_else(|| {
            BackupError::Config(format!(
                "Database path has no file name: {}",
                source.display()
            ))
        })?;
        let dest = destination.join(file_name);

        self.snapshotter.snapshot(source, &dest)?;
        Ok(DatabaseOutcome::BackedUp(dest))
    }

    /// Replicate one media directory under the snapshot, if it exists
    fn replicate_media_dir(
        &self,
        source: &Path,
        destination: &Path,
    ) -> BackupResult<MediaOutcome> {
        if !source.exists() {
            return Ok(MediaOutcome::Skipped(source.to_path_buf()));
        }

        let relative = source
            .strip_prefix(&self.config.media_base)
            .map_err(|_| {
                BackupError::Config(format!(
                    "Media directory {} is not under media base {}",
                    source.display(),
                    self.config.media_base.display()
                ))
            })?
            .to_path_buf();

        let files = self.copier.copy_tree(source, &destination.join(&relative))?;
        Ok(MediaOutcome::Copied { relative, files })
    }
}
