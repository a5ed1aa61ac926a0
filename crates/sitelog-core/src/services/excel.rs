//! Excel export for report collections
//!
//! Builds the downloadable workbook: one "Summary List" sheet plus one
//! detail sheet per distinct report date, each rendering its day's reports
//! as stacked blocks separated by a full-width band.

use chrono::NaiveDate;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, Worksheet};
use std::path::Path;

use crate::error::Result;
use crate::models::{LocationCode, Report};

/// Name of the master summary sheet.
pub const SUMMARY_SHEET_NAME: &str = "Summary List";

const BANNER_BLUE: Color = Color::RGB(0x1E40AF);
const SECTION_FILL: Color = Color::RGB(0xEFF6FF);
const SLATE: Color = Color::RGB(0x64748B);
const SEPARATOR_FILL: Color = Color::RGB(0xCBD5E1);

/// Detail sheets use eleven fixed-width columns: one wide label column,
/// nine narrow numeric columns and a total column. Wide cells are made by
/// merging across the narrow slots.
const DETAIL_COLUMN_WIDTHS: [f64; 11] =
    [25.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 10.0];

const SUMMARY_COLUMN_WIDTHS: [f64; 7] = [12.0, 15.0, 30.0, 20.0, 15.0, 10.0, 10.0];

/// Export files are named by the day the export runs.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("Daily_Reports_Export_{}.xlsx", date)
}

/// Partition a collection by exact report-date string equality. Distinct
/// dates come out descending (valid ordering because the dates are
/// zero-padded ISO strings); within a date the input's relative order is
/// preserved.
pub fn group_by_date(reports: &[Report]) -> Vec<(String, Vec<&Report>)> {
    let mut groups: Vec<(String, Vec<&Report>)> = Vec::new();
    for report in reports {
        match groups.iter_mut().find(|(date, _)| *date == report.report_date) {
            Some((_, members)) => members.push(report),
            None => groups.push((report.report_date.clone(), vec![report])),
        }
    }
    groups.sort_by(|a, b| b.0.cmp(&a.0));
    groups
}

/// Declarative cell styles, built once and applied uniformly by the layout
/// code.
struct SheetStyles {
    title_banner: Format,
    summary_header: Format,
    section_label: Format,
    section_title: Format,
    table_header: Format,
    table_header_left: Format,
    cell: Format,
    cell_left: Format,
    cell_desc: Format,
    cell_bold: Format,
    hse_banner: Format,
    hse_label: Format,
    header_label: Format,
    header_right: Format,
    plain: Format,
    centered: Format,
    total_label: Format,
    total_cell: Format,
    sig_header: Format,
    sig_line: Format,
    note_box: Format,
    separator: Format,
}

impl SheetStyles {
    fn new() -> Self {
        let bordered = Format::new().set_border(FormatBorder::Thin);

        Self {
            title_banner: Format::new()
                .set_bold()
                .set_font_size(14)
                .set_font_color(Color::White)
                .set_background_color(BANNER_BLUE)
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter),
            summary_header: Format::new()
                .set_bold()
                .set_font_color(Color::White)
                .set_background_color(BANNER_BLUE),
            section_label: Format::new()
                .set_bold()
                .set_font_size(11)
                .set_font_color(BANNER_BLUE)
                .set_border_bottom(FormatBorder::Thick)
                .set_border_bottom_color(BANNER_BLUE),
            section_title: Format::new()
                .set_bold()
                .set_font_size(11)
                .set_font_color(BANNER_BLUE),
            table_header: bordered
                .clone()
                .set_bold()
                .set_font_size(9)
                .set_background_color(SECTION_FILL)
                .set_align(FormatAlign::Center),
            table_header_left: bordered
                .clone()
                .set_bold()
                .set_font_size(9)
                .set_background_color(SECTION_FILL)
                .set_align(FormatAlign::Left),
            cell: bordered.clone().set_align(FormatAlign::Center),
            cell_left: bordered.clone().set_align(FormatAlign::Left),
            cell_desc: bordered
                .clone()
                .set_align(FormatAlign::Left)
                .set_align(FormatAlign::VerticalCenter)
                .set_text_wrap(),
            cell_bold: bordered.clone().set_bold().set_align(FormatAlign::Center),
            hse_banner: Format::new()
                .set_bold()
                .set_font_color(Color::White)
                .set_background_color(SLATE)
                .set_align(FormatAlign::Center),
            hse_label: bordered
                .clone()
                .set_bold()
                .set_font_color(SLATE)
                .set_align(FormatAlign::Center),
            header_label: Format::new().set_bold().set_font_size(12),
            header_right: Format::new().set_align(FormatAlign::Right),
            plain: Format::new(),
            centered: Format::new().set_align(FormatAlign::Center),
            total_label: Format::new().set_bold().set_align(FormatAlign::Right),
            total_cell: bordered
                .clone()
                .set_bold()
                .set_font_size(11)
                .set_background_color(SECTION_FILL)
                .set_align(FormatAlign::Center),
            sig_header: Format::new()
                .set_bold()
                .set_font_size(10)
                .set_align(FormatAlign::Center),
            sig_line: Format::new().set_border_bottom(FormatBorder::Thin),
            note_box: bordered
                .set_align(FormatAlign::Left)
                .set_align(FormatAlign::Top)
                .set_text_wrap(),
            separator: Format::new().set_background_color(SEPARATOR_FILL),
        }
    }
}

/// Builds the export workbook for a report collection.
pub struct ExcelExportBuilder {
    workbook: Workbook,
    styles: SheetStyles,
}

impl ExcelExportBuilder {
    pub fn new() -> Self {
        Self { workbook: Workbook::new(), styles: SheetStyles::new() }
    }

    /// Add the summary sheet and the per-date detail sheets for the given
    /// collection. The collection is read-only input.
    pub fn add_reports(&mut self, reports: &[Report]) -> Result<()> {
        self.add_summary_sheet(reports)?;
        self.add_daily_sheets(reports)?;
        Ok(())
    }

    /// One row per report under a frozen, styled header row.
    fn add_summary_sheet(&mut self, reports: &[Report]) -> Result<()> {
        let ws = self.workbook.add_worksheet();
        ws.set_name(SUMMARY_SHEET_NAME)?;
        ws.set_right_to_left(true);
        ws.set_freeze_panes(1, 0)?;

        let headers = ["Date", "Ref ID", "Project", "Reported By", "Dept", "Manpower", "Activities"];
        for (col, header) in headers.iter().enumerate() {
            ws.write_with_format(0, col as u16, *header, &self.styles.summary_header)?;
        }

        for (idx, report) in reports.iter().enumerate() {
            let row = 1 + idx as u32;
            ws.write(row, 0, &report.report_date)?;
            ws.write(row, 1, report.short_ref())?;
            ws.write(row, 2, &report.project_name)?;
            ws.write(row, 3, &report.reported_by_name)?;
            ws.write(row, 4, &report.reported_by_dept)?;
            ws.write(row, 5, report.total_manpower())?;
            ws.write(row, 6, report.activities.len() as u32)?;
        }

        for (col, width) in SUMMARY_COLUMN_WIDTHS.iter().enumerate() {
            ws.set_column_width(col as u16, *width)?;
        }

        Ok(())
    }

    /// One sheet per distinct report date, each stacking that day's
    /// reports sequentially.
    fn add_daily_sheets(&mut self, reports: &[Report]) -> Result<()> {
        for (date, day_reports) in group_by_date(reports) {
            let ws = self.workbook.add_worksheet();
            ws.set_name(&date)?;
            ws.set_right_to_left(true);
            ws.set_screen_gridlines(false);
            for (col, width) in DETAIL_COLUMN_WIDTHS.iter().enumerate() {
                ws.set_column_width(col as u16, *width)?;
            }

            let mut row = 0u32;
            for report in day_reports {
                row = render_report(ws, &self.styles, report, row)?;
            }
        }
        Ok(())
    }

    /// Serialize the workbook to the binary spreadsheet container.
    pub fn save_to_buffer(mut self) -> Result<Vec<u8>> {
        Ok(self.workbook.save_to_buffer()?)
    }

    /// Save the workbook to a file.
    pub fn save<P: AsRef<Path>>(mut self, path: P) -> Result<()> {
        self.workbook.save(path)?;
        Ok(())
    }
}

impl Default for ExcelExportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Render one report as a stacked block starting at `start_row`; returns
/// the next free row so following blocks never overlap.
fn render_report(
    ws: &mut Worksheet,
    s: &SheetStyles,
    report: &Report,
    start_row: u32,
) -> Result<u32> {
    let mut row = start_row;

    // Title banner across two rows
    ws.merge_range(row, 0, row + 1, 10, "DAILY PROGRESS REPORT / التقرير اليومي", &s.title_banner)?;
    row += 3;

    // Header info
    ws.merge_range(row, 0, row, 4, &format!("Project: {}", report.project_name), &s.header_label)?;
    ws.merge_range(row, 6, row, 10, &format!("Date: {}", report.report_date), &s.header_right)?;
    row += 1;
    ws.merge_range(
        row,
        0,
        row,
        4,
        &format!("Reported By: {} ({})", report.reported_by_name, report.reported_by_dept),
        &s.plain,
    )?;
    ws.merge_range(row, 6, row, 10, &format!("Ref: {}", report.short_ref()), &s.header_right)?;
    row += 2;

    // HSE strip; missing or blank values render as "-"
    ws.merge_range(row, 0, row, 10, "HSE & WEATHER / السلامة والطقس", &s.hse_banner)?;
    row += 1;
    let hse = report.hse_info.as_ref();
    let weather = hse.map(|h| h.weather_condition.as_str()).filter(|v| !v.is_empty()).unwrap_or("-");
    let temperature = hse.map(|h| h.temperature.as_str()).filter(|v| !v.is_empty()).unwrap_or("-");
    let wind = hse.map(|h| h.wind_speed.as_str()).filter(|v| !v.is_empty()).unwrap_or("-");
    let toolbox = hse.map(|h| h.toolbox_talk).unwrap_or(false);

    ws.write_with_format(row, 0, "Weather:", &s.hse_label)?;
    ws.merge_range(row, 1, row, 2, weather, &s.cell)?;
    ws.write_with_format(row, 3, "Temp:", &s.hse_label)?;
    ws.merge_range(row, 4, row, 5, &format!("{} C", temperature), &s.cell)?;
    ws.write_with_format(row, 6, "Wind:", &s.hse_label)?;
    ws.merge_range(row, 7, row, 8, &format!("{} km/h", wind), &s.cell)?;
    ws.write_with_format(row, 9, "TBT:", &s.hse_label)?;
    ws.write_with_format(row, 10, if toolbox { "Yes" } else { "No" }, &s.cell)?;
    row += 2;

    // Manpower table: rows with a nonzero total only, then a grand total
    ws.merge_range(row, 0, row, 10, "01. MANPOWER SUMMARY / القوى العاملة", &s.section_label)?;
    row += 1;
    ws.write_with_format(row, 0, "Job Title", &s.table_header_left)?;
    for (idx, location) in LocationCode::ALL.iter().enumerate() {
        ws.write_with_format(row, 1 + idx as u16, location.label(), &s.table_header)?;
    }
    ws.write_with_format(row, 10, "Total", &s.table_header)?;
    row += 1;

    for mp in report.manpower.iter().filter(|m| m.total() > 0) {
        ws.write_with_format(row, 0, mp.job_title.as_str(), &s.cell_left)?;
        for (idx, location) in LocationCode::ALL.iter().enumerate() {
            ws.write_with_format(row, 1 + idx as u16, mp.count(*location), &s.cell)?;
        }
        ws.write_with_format(row, 10, mp.total(), &s.cell_bold)?;
        row += 1;
    }

    ws.merge_range(row, 0, row, 9, "TOTAL MANPOWER", &s.total_label)?;
    ws.write_with_format(row, 10, report.total_manpower(), &s.total_cell)?;
    row += 2;

    // Activities log
    ws.merge_range(row, 0, row, 10, "02. ACTIVITIES LOG / سجل الأنشطة", &s.section_label)?;
    row += 1;
    ws.write_with_format(row, 0, "#", &s.table_header)?;
    ws.merge_range(row, 1, row, 5, "Description", &s.table_header)?;
    for (idx, header) in ["Permit", "Equip", "Loc", "Time", "Status"].iter().enumerate() {
        ws.write_with_format(row, 6 + idx as u16, *header, &s.table_header)?;
    }
    row += 1;

    for (idx, act) in report.activities.iter().enumerate() {
        ws.write_with_format(row, 0, (idx + 1) as u32, &s.cell)?;
        ws.merge_range(row, 1, row, 5, &act.description, &s.cell_desc)?;
        ws.write_with_format(row, 6, act.permit_no.as_str(), &s.cell)?;
        ws.write_with_format(row, 7, act.equip_no.as_str(), &s.cell)?;
        ws.write_with_format(row, 8, act.location.as_str(), &s.cell)?;
        ws.write_with_format(row, 9, format!("{}-{}", act.start_time, act.end_time), &s.cell)?;
        ws.write_with_format(row, 10, act.status.as_str(), &s.cell)?;
        row += 1;
    }
    if report.activities.is_empty() {
        row += 1;
    }
    row += 2;

    // Tomorrow's plan: same table shape with a priority column
    ws.merge_range(row, 0, row, 10, "03. TOMORROW'S PLAN / خطة الغد", &s.section_label)?;
    row += 1;
    ws.write_with_format(row, 0, "#", &s.table_header)?;
    ws.merge_range(row, 1, row, 5, "Description", &s.table_header)?;
    ws.write_with_format(row, 6, "Priority", &s.table_header)?;
    ws.write_with_format(row, 7, "Equip", &s.table_header)?;
    ws.write_with_format(row, 8, "Loc", &s.table_header)?;
    ws.merge_range(row, 9, row, 10, "Time", &s.table_header)?;
    row += 1;

    for (idx, plan) in report.tomorrow_plan.iter().enumerate() {
        ws.write_with_format(row, 0, (idx + 1) as u32, &s.cell)?;
        ws.merge_range(row, 1, row, 5, &plan.description, &s.cell_desc)?;
        ws.write_with_format(row, 6, plan.priority.as_str(), &s.cell)?;
        ws.write_with_format(row, 7, plan.equip_no.as_str(), &s.cell)?;
        ws.write_with_format(row, 8, plan.location.as_str(), &s.cell)?;
        ws.merge_range(row, 9, row, 10, &format!("{}-{}", plan.start_time, plan.end_time), &s.cell)?;
        row += 1;
    }
    row += 2;

    // General notes, only when present
    if !report.general_note.is_empty() {
        ws.merge_range(row, 0, row, 10, "04. GENERAL NOTES / ملاحظات عامة", &s.section_title)?;
        row += 1;
        ws.merge_range(row, 0, row + 2, 10, &report.general_note, &s.note_box)?;
        row += 4;
    }

    // Signature block: three columns with underline rows
    row += 1;
    ws.merge_range(row, 0, row, 2, "Reported By", &s.sig_header)?;
    ws.merge_range(row, 4, row, 6, "Verified By", &s.sig_header)?;
    ws.merge_range(row, 8, row, 10, "Approved By", &s.sig_header)?;
    row += 1;
    ws.merge_range(row, 0, row, 2, &report.reported_by_name, &s.centered)?;
    row += 3;
    ws.merge_range(row, 0, row, 2, "", &s.sig_line)?;
    ws.merge_range(row, 4, row, 6, "", &s.sig_line)?;
    ws.merge_range(row, 8, row, 10, "", &s.sig_line)?;

    // Separator band before the next stacked report
    row += 2;
    ws.merge_range(row, 0, row, 10, "", &s.separator)?;

    Ok(row + 2)
}
