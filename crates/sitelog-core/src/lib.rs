//! # sitelog-core
//!
//! Core business logic for Sitelog - daily field reports for site crews.
//!
//! This crate provides:
//! - The report data model (`models` module)
//! - Single-slot JSON persistence with backup/restore (`store` module)
//! - Aggregate statistics and Excel export (`services` module)
//! - Unified error handling (`error` module)

pub mod error;
pub mod models;
pub mod services;
pub mod store;

// Re-exports for convenience
pub use error::{Error, Result};

// Re-export commonly used types from models
pub use models::{
    Activity, ActivityStatus, FormTab, HseInfo, LocationCode, ManpowerRow, Priority, Report,
    ReportDraft, TomorrowActivity, WorkType, DEPARTMENTS, DISCIPLINES, JOB_TITLES,
};

// Re-export commonly used types from services
pub use services::{
    department_breakdown, export_file_name, group_by_date, status_breakdown, summarize,
    DashboardStats, DeptCount, ExcelExportBuilder, StatusCount, SUMMARY_SHEET_NAME,
};

// Re-export the store surface
pub use store::{
    backup_file_name, FileBackend, KvBackend, MemoryBackend, ReportStore, SeedPolicy, STORAGE_KEY,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!version().is_empty());
    }
}
