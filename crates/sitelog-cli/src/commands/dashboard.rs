//! Dashboard commands
//!
//! Aggregate statistics over the stored report collection.

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;
use tabled::Tabled;

use super::Context;
use crate::output::print_output;
use sitelog_core::{department_breakdown, status_breakdown, summarize};

#[derive(Subcommand)]
pub enum DashboardAction {
    /// Show summary statistics
    Stats,
}

#[derive(Debug, Serialize, Tabled)]
pub struct StatsRow {
    #[tabled(rename = "Metric")]
    pub metric: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

#[derive(Debug, Serialize, Tabled)]
pub struct BreakdownRow {
    #[tabled(rename = "Group")]
    pub group: String,
    #[tabled(rename = "Count")]
    pub count: usize,
}

pub fn execute(ctx: &Context, action: DashboardAction) -> Result<()> {
    match action {
        DashboardAction::Stats => stats(ctx),
    }
}

fn stats(ctx: &Context) -> Result<()> {
    let reports = ctx.store.list()?;
    let summary = summarize(&reports);

    if !ctx.quiet {
        println!("╔══════════════════════════════════════════════════════════════╗");
        println!("║  Sitelog Dashboard");
        println!("║  Reports in store: {}", summary.total_reports);
        println!("╚══════════════════════════════════════════════════════════════╝");
        println!();
    }

    let rows = vec![
        StatsRow {
            metric: "Total Reports".to_string(),
            value: summary.total_reports.to_string(),
        },
        StatsRow {
            metric: "Total Activities".to_string(),
            value: summary.total_activities.to_string(),
        },
        StatsRow {
            metric: "Completion Rate".to_string(),
            value: format!("{}%", summary.completion_rate),
        },
        StatsRow {
            metric: "Total Manpower".to_string(),
            value: summary.total_manpower.to_string(),
        },
    ];
    print_output(&rows, ctx.format)?;

    let statuses = status_breakdown(&reports);
    if !statuses.is_empty() {
        if !ctx.quiet {
            println!();
            println!("Activities by status");
        }
        let rows: Vec<BreakdownRow> = statuses
            .into_iter()
            .map(|s| BreakdownRow { group: s.status, count: s.count })
            .collect();
        print_output(&rows, ctx.format)?;
    }

    let departments = department_breakdown(&reports);
    if !departments.is_empty() {
        if !ctx.quiet {
            println!();
            println!("Reports by department (top 5)");
        }
        let rows: Vec<BreakdownRow> = departments
            .into_iter()
            .map(|d| BreakdownRow { group: d.dept, count: d.count })
            .collect();
        print_output(&rows, ctx.format)?;
    }

    Ok(())
}
