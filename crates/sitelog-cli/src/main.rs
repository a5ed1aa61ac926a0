//! Sitelog CLI - daily field report tool
//!
//! A command-line interface for recording daily site reports, browsing the
//! stored collection, and producing Excel and backup exports.

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sitelog_core::{FileBackend, ReportStore, SeedPolicy};

#[derive(Parser)]
#[command(name = "sitelog")]
#[command(author, version, about = "Daily field report CLI", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format: table (default) or json
    #[arg(long, global = true, default_value = "table")]
    format: output::OutputFormat,

    /// Suppress progress messages
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Override data directory (or set SITELOG_DATA_DIR env var)
    #[arg(long, env = "SITELOG_DATA_DIR", global = true)]
    data_dir: Option<String>,

    /// Start with an empty collection instead of the example seed data
    #[arg(long, global = true)]
    no_seed: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage daily reports
    Report {
        #[command(subcommand)]
        action: commands::report::ReportAction,
    },

    /// Dashboard statistics
    Dashboard {
        #[command(subcommand)]
        action: commands::dashboard::DashboardAction,
    },

    /// Export reports to a spreadsheet
    Export {
        #[command(subcommand)]
        action: commands::export::ExportAction,
    },

    /// Backup and restore the stored collection
    Backup {
        #[command(subcommand)]
        action: commands::backup::BackupAction,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let data_dir = match &cli.data_dir {
        Some(dir) => std::path::PathBuf::from(shellexpand::tilde(dir).into_owned()),
        None => FileBackend::default_root()?,
    };
    log::debug!("using data directory {}", data_dir.display());

    let backend = FileBackend::new(data_dir);
    let seed = if cli.no_seed { SeedPolicy::StartEmpty } else { SeedPolicy::SeedExamples };
    let store = ReportStore::with_seed_policy(Box::new(backend), seed);

    let ctx = commands::Context { store, format: cli.format, quiet: cli.quiet };

    match cli.command {
        Commands::Report { action } => commands::report::execute(&ctx, action),
        Commands::Dashboard { action } => commands::dashboard::execute(&ctx, action),
        Commands::Export { action } => commands::export::execute(&ctx, action),
        Commands::Backup { action } => commands::backup::execute(&ctx, action),
    }
}
