//! garden-backup - Rolling snapshot backups for the garden planner
//!
//! This library backs up the garden planner's persistent state — its SQLite
//! database and uploaded media directories — into a cloud-mirrored folder
//! under the user's home directory, keeping a bounded history of timestamped
//! snapshots.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and the runner configuration
//! - `error`: Custom error types
//! - `backup`: Snapshotting, media replication, and retention pruning
//! - `cli`: Command handlers and progress output
//!
//! # Example
//!
//! ```rust,ignore
//! use garden_backup::backup::BackupRunner;
//! use garden_backup::config::{BackupConfig, GardenPaths};
//!
//! let paths = GardenPaths::resolve()?;
//! let runner = BackupRunner::new(BackupConfig::from_paths(&paths));
//! let report = runner.run()?;
//! ```

pub mod backup;
pub mod cli;
pub mod config;
pub mod error;

pub use error::BackupError;
