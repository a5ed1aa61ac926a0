//! Report commands
//!
//! Create, browse and copy daily reports.

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;
use tabled::Tabled;

use super::helpers::{parse_date, resolve_report, truncate};
use super::Context;
use crate::output::{print_output, print_section, print_success};
use sitelog_core::{Report, ReportDraft};

#[derive(Subcommand)]
pub enum ReportAction {
    /// List stored reports, newest first
    List {
        /// Maximum number of reports to show
        #[arg(short, long, default_value = "50")]
        limit: usize,
    },

    /// Show one report in full
    Show {
        /// Report id or unique short-id prefix
        id: String,
    },

    /// Record a new report
    Add {
        /// Project name
        #[arg(short, long)]
        project: String,

        /// Report date (YYYY-MM-DD, `today` or `yesterday`), defaults to today
        #[arg(short, long)]
        date: Option<String>,

        /// Reporter name
        #[arg(short, long)]
        name: String,

        /// Reporter department
        #[arg(long, default_value = "")]
        dept: String,

        /// Recipient department
        #[arg(long, default_value = "")]
        to_dept: String,

        /// Recipient manager
        #[arg(long, default_value = "")]
        to_manager: String,

        /// General note
        #[arg(long, default_value = "")]
        note: String,
    },

    /// Start a new report from the most recent one
    CopyLast {
        /// Report date for the copy, defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
}

/// Report row for table display
#[derive(Debug, Serialize, Tabled)]
pub struct ReportRow {
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Ref")]
    pub reference: String,
    #[tabled(rename = "Project")]
    pub project: String,
    #[tabled(rename = "Reported By")]
    pub reported_by: String,
    #[tabled(rename = "Dept")]
    pub dept: String,
    #[tabled(rename = "Manpower")]
    pub manpower: u32,
    #[tabled(rename = "Activities")]
    pub activities: usize,
}

impl From<&Report> for ReportRow {
    fn from(report: &Report) -> Self {
        Self {
            date: report.report_date.clone(),
            reference: report.short_ref(),
            project: truncate(&report.project_name, 30),
            reported_by: report.reported_by_name.clone(),
            dept: report.reported_by_dept.clone(),
            manpower: report.total_manpower(),
            activities: report.activities.len(),
        }
    }
}

pub fn execute(ctx: &Context, action: ReportAction) -> Result<()> {
    match action {
        ReportAction::List { limit } => list(ctx, limit),
        ReportAction::Show { id } => show(ctx, &id),
        ReportAction::Add { project, date, name, dept, to_dept, to_manager, note } => {
            add(ctx, project, date, name, dept, to_dept, to_manager, note)
        }
        ReportAction::CopyLast { date } => copy_last(ctx, date),
    }
}

fn list(ctx: &Context, limit: usize) -> Result<()> {
    let reports = ctx.store.list()?;
    let rows: Vec<ReportRow> = reports.iter().take(limit).map(ReportRow::from).collect();
    print_output(&rows, ctx.format)
}

fn show(ctx: &Context, id: &str) -> Result<()> {
    let report = resolve_report(&ctx.store, id)?;

    if ctx.format == crate::output::OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Report {}", report.short_ref());
    println!("  Project:      {}", report.project_name);
    println!("  Date:         {}", report.report_date);
    println!("  Reported by:  {} ({})", report.reported_by_name, report.reported_by_dept);
    println!("  Reporting to: {} ({})", report.reporting_to_manager, report.reporting_to_dept);

    if let Some(hse) = &report.hse_info {
        print_section("HSE & Weather");
        println!(
            "  Weather: {}   Temp: {} C   Wind: {} km/h   Toolbox talk: {}",
            hse.weather_condition,
            hse.temperature,
            hse.wind_speed,
            if hse.toolbox_talk { "Yes" } else { "No" }
        );
        if !hse.remarks.is_empty() {
            println!("  Remarks: {}", hse.remarks);
        }
    }

    print_section(&format!("Manpower ({} total)", report.total_manpower()));
    for row in report.manpower.iter().filter(|m| m.total() > 0) {
        println!("  {:<25} {}", row.job_title, row.total());
    }

    print_section(&format!("Activities ({})", report.activities.len()));
    for (idx, act) in report.activities.iter().enumerate() {
        println!(
            "  {}. [{}] {} ({}-{})",
            idx + 1,
            act.status.as_str(),
            act.description,
            act.start_time,
            act.end_time
        );
    }

    print_section(&format!("Tomorrow's plan ({})", report.tomorrow_plan.len()));
    for (idx, plan) in report.tomorrow_plan.iter().enumerate() {
        println!("  {}. [{}] {}", idx + 1, plan.priority.as_str(), plan.description);
    }

    if !report.general_note.is_empty() {
        print_section("General notes");
        println!("  {}", report.general_note);
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn add(
    ctx: &Context,
    project: String,
    date: Option<String>,
    name: String,
    dept: String,
    to_dept: String,
    to_manager: String,
    note: String,
) -> Result<()> {
    let date = match date {
        Some(d) => parse_date(&d)?,
        None => chrono::Local::now().date_naive(),
    };

    let mut draft = ReportDraft::new(project, date.to_string(), name);
    draft.reported_by_dept = dept;
    draft.reporting_to_dept = to_dept;
    draft.reporting_to_manager = to_manager;
    draft.general_note = note;

    let report = ctx.store.create(draft)?;
    print_success(
        &format!("Created report {} for {}", report.short_ref(), report.report_date),
        ctx.quiet,
    );
    Ok(())
}

fn copy_last(ctx: &Context, date: Option<String>) -> Result<()> {
    let Some(last) = ctx.store.last_report()? else {
        anyhow::bail!("No reports to copy from");
    };

    let date = match date {
        Some(d) => parse_date(&d)?,
        None => chrono::Local::now().date_naive(),
    };

    let draft = last.template_copy(date.to_string());
    let report = ctx.store.create(draft)?;
    print_success(
        &format!(
            "Copied report {} into {} for {}",
            last.short_ref(),
            report.short_ref(),
            report.report_date
        ),
        ctx.quiet,
    );
    Ok(())
}
