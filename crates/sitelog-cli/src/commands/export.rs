//! Export commands
//!
//! Produce the downloadable spreadsheet for the stored collection.

use anyhow::Result;
use clap::Subcommand;

use super::Context;
use crate::output::{print_info, print_success};
use sitelog_core::{export_file_name, ExcelExportBuilder};

#[derive(Subcommand)]
pub enum ExportAction {
    /// Export all reports to an .xlsx workbook
    Excel {
        /// Output path, defaults to Daily_Reports_Export_<today>.xlsx
        #[arg(short, long)]
        output: Option<String>,
    },
}

pub fn execute(ctx: &Context, action: ExportAction) -> Result<()> {
    match action {
        ExportAction::Excel { output } => excel(ctx, output),
    }
}

fn excel(ctx: &Context, output: Option<String>) -> Result<()> {
    let reports = ctx.store.list()?;
    if reports.is_empty() {
        print_info("No reports to export.", ctx.quiet);
        return Ok(());
    }

    let path = match output {
        Some(p) => shellexpand::tilde(&p).into_owned(),
        None => export_file_name(chrono::Local::now().date_naive()),
    };

    print_info(&format!("Exporting {} reports", reports.len()), ctx.quiet);

    let mut builder = ExcelExportBuilder::new();
    builder.add_reports(&reports)?;
    builder.save(&path)?;

    print_success(&format!("Exported {} reports to {}", reports.len(), path), ctx.quiet);
    Ok(())
}
