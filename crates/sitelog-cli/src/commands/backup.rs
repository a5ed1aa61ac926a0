//! Backup commands
//!
//! Full-collection JSON snapshots: export to a file, restore wholesale.

use anyhow::{Context as _, Result};
use clap::Subcommand;

use super::Context;
use crate::output::{print_info, print_success};
use sitelog_core::backup_file_name;

#[derive(Subcommand)]
pub enum BackupAction {
    /// Write the whole collection to a backup file
    Export {
        /// Output path, defaults to backup_<today>.json
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Replace the whole collection from a backup file
    Restore {
        /// Backup file to restore
        file: String,
    },
}

pub fn execute(ctx: &Context, action: BackupAction) -> Result<()> {
    match action {
        BackupAction::Export { output } => export(ctx, output),
        BackupAction::Restore { file } => restore(ctx, &file),
    }
}

fn export(ctx: &Context, output: Option<String>) -> Result<()> {
    let text = ctx.store.export_backup()?;
    let path = match output {
        Some(p) => shellexpand::tilde(&p).into_owned(),
        None => backup_file_name(chrono::Local::now().date_naive()),
    };

    std::fs::write(&path, text).with_context(|| format!("writing backup to {}", path))?;
    print_success(&format!("Backup written to {}", path), ctx.quiet);
    Ok(())
}

fn restore(ctx: &Context, file: &str) -> Result<()> {
    let path = shellexpand::tilde(file).into_owned();
    let text =
        std::fs::read_to_string(&path).with_context(|| format!("reading backup {}", path))?;

    print_info(&format!("Restoring from {}", path), ctx.quiet);

    // Parse failures leave the stored collection untouched
    let count = ctx.store.restore_backup(&text)?;
    print_success(&format!("Restored {} reports", count), ctx.quiet);
    Ok(())
}
