//! Services module

pub mod aggregate;
pub mod excel;

pub use aggregate::{
    department_breakdown, status_breakdown, summarize, DashboardStats, DeptCount, StatusCount,
};
pub use excel::{export_file_name, group_by_date, ExcelExportBuilder, SUMMARY_SHEET_NAME};
