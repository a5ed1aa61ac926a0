//! Aggregate statistics over a report collection
//!
//! Pure functions: the collection is read-only input, nothing is cached
//! between calls.

use serde::Serialize;
use std::collections::HashMap;

use crate::models::{ActivityStatus, Report};

/// Bucket label for records with an empty grouping field. Grouping keeps
/// such records rather than dropping them.
pub const UNSPECIFIED: &str = "Unspecified";

/// How many departments the breakdown keeps for display.
const TOP_DEPARTMENTS: usize = 5;

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_reports: usize,
    pub total_activities: usize,
    /// Completed activities as a whole percentage, 0 when there are no
    /// activities at all.
    pub completion_rate: u32,
    pub total_manpower: u32,
}

/// One slice of the activity-status chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: String,
    pub count: usize,
}

/// One slice of the per-department report counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeptCount {
    pub dept: String,
    pub count: usize,
}

/// Compute the headline numbers for a collection.
pub fn summarize(reports: &[Report]) -> DashboardStats {
    let total_activities: usize = reports.iter().map(|r| r.activities.len()).sum();
    let completed = reports
        .iter()
        .flat_map(|r| &r.activities)
        .filter(|a| a.status == ActivityStatus::Completed)
        .count();
    let completion_rate = if total_activities == 0 {
        0
    } else {
        (completed as f64 * 100.0 / total_activities as f64).round() as u32
    };
    let total_manpower = reports.iter().map(Report::total_manpower).sum();

    DashboardStats {
        total_reports: reports.len(),
        total_activities,
        completion_rate,
        total_manpower,
    }
}

/// Activity counts per status, chart-ready: an empty status counts as
/// "Unspecified" and zero-count buckets are dropped.
pub fn status_breakdown(reports: &[Report]) -> Vec<StatusCount> {
    let order = [
        ActivityStatus::Completed,
        ActivityStatus::InProgress,
        ActivityStatus::Stopped,
        ActivityStatus::Unset,
    ];
    let mut counts = [0usize; 4];
    for activity in reports.iter().flat_map(|r| &r.activities) {
        let idx = order
            .iter()
            .position(|s| *s == activity.status)
            .unwrap_or(order.len() - 1);
        counts[idx] += 1;
    }

    order
        .iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(status, count)| StatusCount {
            status: match status {
                ActivityStatus::Unset => UNSPECIFIED.to_string(),
                other => other.as_str().to_string(),
            },
            count,
        })
        .collect()
}

/// Report counts per filing department, sorted descending and truncated to
/// the top five. Empty departments land in the "Unspecified" bucket.
pub fn department_breakdown(reports: &[Report]) -> Vec<DeptCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for report in reports {
        let dept = report.reported_by_dept.trim();
        let key = if dept.is_empty() { UNSPECIFIED } else { dept };
        *counts.entry(key).or_insert(0) += 1;
    }

    let mut breakdown: Vec<DeptCount> = counts
        .into_iter()
        .map(|(dept, count)| DeptCount { dept: dept.to_string(), count })
        .collect();
    breakdown.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.dept.cmp(&b.dept)));
    breakdown.truncate(TOP_DEPARTMENTS);
    breakdown
}
