//! Consistent database snapshotting
//!
//! The live database belongs to the garden planner server process, which may
//! be writing while a backup runs. A raw byte copy could capture a torn page,
//! so snapshots go through SQLite's online backup API, which replays pages
//! until it has a single consistent transactional state.

use std::path::Path;
use std::time::Duration;

use rusqlite::backup::Backup;
use rusqlite::{Connection, OpenFlags};

use crate::error::BackupResult;

/// Pages copied per backup step before yielding to concurrent writers
const PAGES_PER_STEP: std::os::raw::c_int = 100;

/// Pause between backup steps, giving a concurrent writer time to commit
const PAUSE_BETWEEN_STEPS: Duration = Duration::from_millis(250);

/// A point-in-time consistent copy of a database file
///
/// Implementations must be safe to run while another process holds the
/// source open for read/write.
pub trait DatabaseSnapshotter {
    /// Write a consistent copy of `source` to `dest`
    fn snapshot(&self, source: &Path, dest: &Path) -> BackupResult<()>;
}

/// Production snapshotter backed by SQLite's online backup API
///
/// The destination is reset and rewritten, so snapshotting over an existing
/// file from a previous same-second run succeeds.
#[derive(Debug, Default)]
pub struct SqliteSnapshotter;

impl DatabaseSnapshotter for SqliteSnapshotter {
    fn snapshot(&self, source: &Path, dest: &Path) -> BackupResult<()> {
        let src = Connection::open_with_flags(
            source,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        let mut dst = Connection::open(dest)?;

        let backup = Backup::new(&src, &mut dst)?;
        backup.run_to_completion(PAGES_PER_STEP, PAUSE_BETWEEN_STEPS, None)?;

        // Both connections close on drop, releasing source and destination.
        Ok(())
    }
}
