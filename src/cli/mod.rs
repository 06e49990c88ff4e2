//! CLI command handlers
//!
//! Bridges clap argument parsing with the backup runner and renders run
//! reports as the human-readable progress lines printed to stdout.

use crate::backup::{BackupRunner, DatabaseOutcome, MediaOutcome, RunReport};
use crate::config::BackupConfig;
use crate::error::BackupResult;

/// Execute one backup cycle and print its progress lines
pub fn handle_run_command(config: BackupConfig) -> BackupResult<()> {
    let runner = BackupRunner::new(config);
    let report = runner.run()?;

    for line in report_lines(&report) {
        println!("{}", line);
    }

    Ok(())
}

/// Render a run report as one line per step, in execution order
fn report_lines(report: &RunReport) -> Vec<String> {
    let mut lines = Vec::new();

    match &report.database {
        DatabaseOutcome::BackedUp(path) => {
            lines.push(format!("Database backed up to {}", path.display()));
        }
        DatabaseOutcome::SourceMissing(path) => {
            lines.push(format!("Warning: database not found at {}", path.display()));
        }
    }

    for outcome in &report.media {
        match outcome {
            MediaOutcome::Copied { relative, files } => {
                lines.push(format!("Copied {} files from {}", files, relative.display()));
            }
            MediaOutcome::Skipped(path) => {
                lines.push(format!("Skipping {} (does not exist)", path.display()));
            }
        }
    }

    for name in &report.pruned {
        lines.push(format!("Pruned old backup: {}", name));
    }

    lines.push(format!("Backup complete: {}", report.destination.display()));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_report_lines_full_run() {
        let report = RunReport {
            destination: PathBuf::from("/backups/2026-08-29_101500"),
            database: DatabaseOutcome::BackedUp(PathBuf::from(
                "/backups/2026-08-29_101500/garden.db",
            )),
            media: vec![
                MediaOutcome::Copied {
                    relative: PathBuf::from("plant-images/uploads"),
                    files: 42,
                },
                MediaOutcome::Skipped(PathBuf::from("/proj/static/journal-images/uploads")),
            ],
            pruned: vec!["2026-07-01_000000".to_string()],
        };

        let lines = report_lines(&report);

        assert_eq!(
            lines,
            vec![
                "Database backed up to /backups/2026-08-29_101500/garden.db",
                "Copied 42 files from plant-images/uploads",
                "Skipping /proj/static/journal-images/uploads (does not exist)",
                "Pruned old backup: 2026-07-01_000000",
                "Backup complete: /backups/2026-08-29_101500",
            ]
        );
    }

    #[test]
    fn test_report_lines_missing_database() {
        let report = RunReport {
            destination: PathBuf::from("/backups/2026-08-29_101500"),
            database: DatabaseOutcome::SourceMissing(PathBuf::from("/proj/database/garden.db")),
            media: vec![],
            pruned: vec![],
        };

        let lines = report_lines(&report);

        assert_eq!(lines[0], "Warning: database not found at /proj/database/garden.db");
        assert_eq!(lines.last().unwrap(), "Backup complete: /backups/2026-08-29_101500");
    }
}
