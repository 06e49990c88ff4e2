//! Backup system for garden-backup
//!
//! One backup cycle produces one snapshot directory under the backup root,
//! named `YYYY-MM-DD_HHMMSS`, containing a consistent copy of the live
//! SQLite database and full replicas of the upload directories. After
//! writing a snapshot, the cycle prunes the oldest directories beyond the
//! retention count.
//!
//! # Architecture
//!
//! - `BackupRunner`: drives a cycle end to end and reports what it did
//! - `DatabaseSnapshotter` / `SqliteSnapshotter`: live-safe database copy
//! - `TreeCopier` / `FsTreeCopier`: recursive media replication
//! - `prune`: retention enforcement over the backup root
//!
//! # Snapshot naming
//!
//! The timestamp format is fixed-width and zero-padded so that sorting
//! directory names lexicographically sorts them chronologically; retention
//! pruning depends on this.

pub mod prune;
mod runner;
mod snapshot;
mod tree;

pub use runner::{BackupRunner, DatabaseOutcome, MediaOutcome, RunReport, TIMESTAMP_FORMAT};
pub use snapshot::{DatabaseSnapshotter, SqliteSnapshotter};
pub use tree::{FsTreeCopier, TreeCopier};
