//! CLI commands module
//!
//! Contains all CLI command implementations.

pub mod backup;
pub mod dashboard;
pub mod export;
pub mod helpers;
pub mod report;

use crate::output::OutputFormat;
use sitelog_core::ReportStore;

/// Shared context for all commands
pub struct Context {
    pub store: ReportStore,
    pub format: OutputFormat,
    pub quiet: bool,
}
