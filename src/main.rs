use anyhow::Result;
use clap::{Parser, Subcommand};

use garden_backup::cli::handle_run_command;
use garden_backup::config::{BackupConfig, GardenPaths};

#[derive(Parser)]
#[command(
    name = "garden-backup",
    version,
    about = "Rolling snapshot backups for the garden planner",
    long_about = "Backs up the garden planner database and uploaded media to a \
                  cloud-mirrored folder, keeping the most recent snapshots and \
                  pruning the rest. Invoked with no arguments it runs one \
                  backup cycle."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one backup cycle (the default)
    Run,

    /// Show the resolved paths and retention policy
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = GardenPaths::resolve()?;
    let config = BackupConfig::from_paths(&paths);

    match cli.command {
        Some(Commands::Run) | None => {
            handle_run_command(config)?;
        }
        Some(Commands::Config) => {
            println!("garden-backup Configuration");
            println!("===========================");
            println!("Project directory: {}", paths.project_dir().display());
            println!("Database file:     {}", config.database_file.display());
            for dir in &config.media_dirs {
                println!("Media directory:   {}", dir.display());
            }
            println!("Backup root:       {}", config.backup_root.display());
            println!("Retention count:   {}", config.retention_count);
        }
    }

    Ok(())
}
