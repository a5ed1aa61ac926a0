//! Data models for daily field reports
//!
//! The serialized form is camelCase JSON so stored collections and backup
//! files stay interchangeable with the mobile app's export format.

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

use crate::error::{Error, Result};

/// Job titles tracked by the manpower table, one row per title.
pub const JOB_TITLES: [&str; 10] = [
    "Maintenance Supervisor",
    "Senior Engineer",
    "Maintenance Engineer",
    "Mechanical Technician",
    "Electrical Technician",
    "Instrument Technician",
    "HSE Officer",
    "Operations Supervisor",
    "Field Operator",
    "Control Room Operator",
];

/// Departments a report can be filed under or addressed to.
pub const DEPARTMENTS: [&str; 5] = [
    "Engineering",
    "Maintenance",
    "Operations",
    "Safety / HSE",
    "Quality Control",
];

/// Work disciplines for activities.
pub const DISCIPLINES: [&str; 4] = ["Electrical", "Mechanical", "Instrument", "Others"];

/// Work-location buckets of a manpower row (site-area codes plus an
/// "others" catch-all).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationCode {
    Gps,
    Ops,
    Wps,
    Pp,
    Fsf,
    Ws1,
    Ws2,
    Ogm,
    Others,
}

impl LocationCode {
    /// Every bucket, in table column order.
    pub const ALL: [LocationCode; 9] = [
        LocationCode::Gps,
        LocationCode::Ops,
        LocationCode::Wps,
        LocationCode::Pp,
        LocationCode::Fsf,
        LocationCode::Ws1,
        LocationCode::Ws2,
        LocationCode::Ogm,
        LocationCode::Others,
    ];

    /// Column label used in tables and exports.
    pub fn label(&self) -> &'static str {
        match self {
            LocationCode::Gps => "GPS",
            LocationCode::Ops => "OPS",
            LocationCode::Wps => "WPS",
            LocationCode::Pp => "PP",
            LocationCode::Fsf => "FSF",
            LocationCode::Ws1 => "WS1",
            LocationCode::Ws2 => "WS2",
            LocationCode::Ogm => "OGM",
            LocationCode::Others => "Others",
        }
    }
}

/// One job title's headcount, broken down by work location.
///
/// The count fields are private: mutation goes through [`set_count`], which
/// keeps `total` equal to the sum of the location buckets. `total` is never
/// entered directly.
///
/// [`set_count`]: ManpowerRow::set_count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManpowerRow {
    pub job_title: String,
    gps: u32,
    ops: u32,
    wps: u32,
    pp: u32,
    fsf: u32,
    ws1: u32,
    ws2: u32,
    ogm: u32,
    others: u32,
    total: u32,
}

impl ManpowerRow {
    /// Create a zeroed row for one job title.
    pub fn new(job_title: impl Into<String>) -> Self {
        Self {
            job_title: job_title.into(),
            gps: 0,
            ops: 0,
            wps: 0,
            pp: 0,
            fsf: 0,
            ws1: 0,
            ws2: 0,
            ogm: 0,
            others: 0,
            total: 0,
        }
    }

    /// The zeroed manpower table: one row per known job title.
    pub fn template() -> Vec<ManpowerRow> {
        JOB_TITLES.iter().copied().map(ManpowerRow::new).collect()
    }

    pub fn count(&self, location: LocationCode) -> u32 {
        match location {
            LocationCode::Gps => self.gps,
            LocationCode::Ops => self.ops,
            LocationCode::Wps => self.wps,
            LocationCode::Pp => self.pp,
            LocationCode::Fsf => self.fsf,
            LocationCode::Ws1 => self.ws1,
            LocationCode::Ws2 => self.ws2,
            LocationCode::Ogm => self.ogm,
            LocationCode::Others => self.others,
        }
    }

    /// Set one location bucket and recompute the total.
    pub fn set_count(&mut self, location: LocationCode, count: u32) {
        match location {
            LocationCode::Gps => self.gps = count,
            LocationCode::Ops => self.ops = count,
            LocationCode::Wps => self.wps = count,
            LocationCode::Pp => self.pp = count,
            LocationCode::Fsf => self.fsf = count,
            LocationCode::Ws1 => self.ws1 = count,
            LocationCode::Ws2 => self.ws2 = count,
            LocationCode::Ogm => self.ogm = count,
            LocationCode::Others => self.others = count,
        }
        self.recompute_total();
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// Reassert the total invariant. Rows deserialized from external JSON
    /// may carry a stale total; the store calls this before persisting.
    pub fn recompute_total(&mut self) {
        self.total = LocationCode::ALL.iter().map(|loc| self.count(*loc)).sum();
    }
}

/// Work-type tag for an activity. Serialized as the wire strings `"PM"`,
/// `"CM"` or `""`; unknown strings deserialize as [`WorkType::Unset`] so
/// legacy backups load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum WorkType {
    /// Preventive maintenance
    Preventive,
    /// Corrective maintenance
    Corrective,
    #[default]
    Unset,
}

impl WorkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkType::Preventive => "PM",
            WorkType::Corrective => "CM",
            WorkType::Unset => "",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "PM" => WorkType::Preventive,
            "CM" => WorkType::Corrective,
            _ => WorkType::Unset,
        }
    }
}

impl From<String> for WorkType {
    fn from(s: String) -> Self {
        WorkType::from_str(&s)
    }
}

impl From<WorkType> for String {
    fn from(value: WorkType) -> Self {
        value.as_str().to_string()
    }
}

/// Execution status of a logged activity. Same wire convention as
/// [`WorkType`]: the empty string means unset, unknown strings degrade to
/// unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum ActivityStatus {
    Completed,
    InProgress,
    Stopped,
    #[default]
    Unset,
}

impl ActivityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityStatus::Completed => "Completed",
            ActivityStatus::InProgress => "In Progress",
            ActivityStatus::Stopped => "Stopped",
            ActivityStatus::Unset => "",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "Completed" => ActivityStatus::Completed,
            "In Progress" => ActivityStatus::InProgress,
            "Stopped" => ActivityStatus::Stopped,
            _ => ActivityStatus::Unset,
        }
    }
}

impl From<String> for ActivityStatus {
    fn from(s: String) -> Self {
        ActivityStatus::from_str(&s)
    }
}

impl From<ActivityStatus> for String {
    fn from(value: ActivityStatus) -> Self {
        value.as_str().to_string()
    }
}

/// Priority of a planned (not yet executed) activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    High,
    Medium,
    Low,
    #[default]
    Unset,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
            Priority::Unset => "",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "High" => Priority::High,
            "Medium" => Priority::Medium,
            "Low" => Priority::Low,
            _ => Priority::Unset,
        }
    }
}

impl From<String> for Priority {
    fn from(s: String) -> Self {
        Priority::from_str(&s)
    }
}

impl From<Priority> for String {
    fn from(value: Priority) -> Self {
        value.as_str().to_string()
    }
}

/// A logged, already-performed unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: WorkType,
    pub permit_no: String,
    pub discipline: String,
    pub equip_no: String,
    pub location: String,
    pub status: ActivityStatus,
    pub workers: String,
    pub start_time: String,
    pub end_time: String,
    pub remarks: String,
    /// Downscaled attachment as a data URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A planned unit of work for the next day. Same shape as [`Activity`],
/// with a priority instead of a status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TomorrowActivity {
    pub id: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: WorkType,
    pub permit_no: String,
    pub discipline: String,
    pub equip_no: String,
    pub location: String,
    pub priority: Priority,
    pub workers: String,
    pub start_time: String,
    pub end_time: String,
    pub remarks: String,
}

/// Health/safety/environment block of a report. Optional on a report;
/// absence means "not recorded", not "zero".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HseInfo {
    pub weather_condition: String,
    pub temperature: String,
    pub wind_speed: String,
    pub toolbox_talk: bool,
    pub remarks: String,
}

/// One day's submitted field-work record for a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    /// Insertion time, epoch milliseconds.
    pub timestamp: i64,
    pub project_name: String,
    /// Calendar date in `YYYY-MM-DD` form.
    pub report_date: String,
    pub reported_by_name: String,
    pub reported_by_dept: String,
    pub reporting_to_dept: String,
    pub reporting_to_manager: String,
    pub general_note: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hse_info: Option<HseInfo>,
    pub manpower: Vec<ManpowerRow>,
    pub activities: Vec<Activity>,
    pub tomorrow_plan: Vec<TomorrowActivity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,
}

impl Report {
    /// Short reference shown in lists and exports: first 8 characters of
    /// the id, uppercased.
    pub fn short_ref(&self) -> String {
        self.id.chars().take(8).collect::<String>().to_uppercase()
    }

    /// Total headcount across all manpower rows.
    pub fn total_manpower(&self) -> u32 {
        self.manpower.iter().map(ManpowerRow::total).sum()
    }

    /// A fresh draft carrying this report's content, for the "copy
    /// previous" convenience. The store assigns a new id and timestamp at
    /// insert; admin notes do not carry over.
    pub fn template_copy(&self, report_date: impl Into<String>) -> ReportDraft {
        ReportDraft {
            project_name: self.project_name.clone(),
            report_date: report_date.into(),
            reported_by_name: self.reported_by_name.clone(),
            reported_by_dept: self.reported_by_dept.clone(),
            reporting_to_dept: self.reporting_to_dept.clone(),
            reporting_to_manager: self.reporting_to_manager.clone(),
            general_note: self.general_note.clone(),
            hse_info: self.hse_info.clone(),
            manpower: self.manpower.clone(),
            activities: self.activities.clone(),
            tomorrow_plan: self.tomorrow_plan.clone(),
            admin_notes: None,
        }
    }
}

/// A report as produced by the form flow, before the store assigns an id
/// and timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDraft {
    pub project_name: String,
    pub report_date: String,
    pub reported_by_name: String,
    pub reported_by_dept: String,
    pub reporting_to_dept: String,
    pub reporting_to_manager: String,
    pub general_note: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hse_info: Option<HseInfo>,
    pub manpower: Vec<ManpowerRow>,
    pub activities: Vec<Activity>,
    pub tomorrow_plan: Vec<TomorrowActivity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,
}

impl ReportDraft {
    /// Create an empty draft on the zeroed manpower template.
    pub fn new(
        project_name: impl Into<String>,
        report_date: impl Into<String>,
        reported_by_name: impl Into<String>,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            report_date: report_date.into(),
            reported_by_name: reported_by_name.into(),
            reported_by_dept: String::new(),
            reporting_to_dept: String::new(),
            reporting_to_manager: String::new(),
            general_note: String::new(),
            hse_info: None,
            manpower: ManpowerRow::template(),
            activities: Vec::new(),
            tomorrow_plan: Vec::new(),
            admin_notes: None,
        }
    }

    /// Check the draft before persistence. Errors point at the form tab
    /// holding the offending field.
    pub fn validate(&self) -> Result<()> {
        if self.project_name.trim().is_empty() {
            return Err(Error::validation(FormTab::Basic, "project name is required"));
        }
        if self.reported_by_name.trim().is_empty() {
            return Err(Error::validation(FormTab::Basic, "reporter name is required"));
        }
        if NaiveDate::parse_from_str(&self.report_date, "%Y-%m-%d").is_err() {
            return Err(Error::validation(
                FormTab::Basic,
                format!("report date must be a valid YYYY-MM-DD date, got '{}'", self.report_date),
            ));
        }

        let mut seen = std::collections::HashSet::new();
        for row in &self.manpower {
            if !seen.insert(row.job_title.as_str()) {
                return Err(Error::validation(
                    FormTab::Manpower,
                    format!("duplicate manpower row for '{}'", row.job_title),
                ));
            }
        }

        // Permit format is enforced on both logged and planned work.
        for (idx, act) in self.activities.iter().enumerate() {
            if !act.permit_no.is_empty() && !is_valid_permit(&act.permit_no) {
                return Err(Error::validation(
                    FormTab::Activities,
                    format!("activity {}: permit number '{}' may only contain letters, digits and hyphens", idx + 1, act.permit_no),
                ));
            }
        }
        for (idx, plan) in self.tomorrow_plan.iter().enumerate() {
            if !plan.permit_no.is_empty() && !is_valid_permit(&plan.permit_no) {
                return Err(Error::validation(
                    FormTab::TomorrowPlan,
                    format!("plan item {}: permit number '{}' may only contain letters, digits and hyphens", idx + 1, plan.permit_no),
                ));
            }
        }

        Ok(())
    }

    /// Promote the draft to a stored report. Called by the store, which
    /// owns id and timestamp assignment.
    pub(crate) fn into_report(self, id: String, timestamp: i64) -> Report {
        Report {
            id,
            timestamp,
            project_name: self.project_name,
            report_date: self.report_date,
            reported_by_name: self.reported_by_name,
            reported_by_dept: self.reported_by_dept,
            reporting_to_dept: self.reporting_to_dept,
            reporting_to_manager: self.reporting_to_manager,
            general_note: self.general_note,
            hse_info: self.hse_info,
            manpower: self.manpower,
            activities: self.activities,
            tomorrow_plan: self.tomorrow_plan,
            admin_notes: self.admin_notes,
        }
    }
}

/// Form tabs, used to point validation errors at the right screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTab {
    Basic,
    Hse,
    Manpower,
    Activities,
    TomorrowPlan,
}

impl fmt::Display for FormTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormTab::Basic => "basic info",
            FormTab::Hse => "HSE",
            FormTab::Manpower => "manpower",
            FormTab::Activities => "activities",
            FormTab::TomorrowPlan => "tomorrow's plan",
        };
        write!(f, "{}", name)
    }
}

static PERMIT_RE: OnceLock<Regex> = OnceLock::new();

/// Permit numbers are alphanumeric plus hyphens (e.g. `PTW-2024-889`).
pub fn is_valid_permit(permit: &str) -> bool {
    let re = PERMIT_RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9-]+$").expect("permit pattern is a valid regex")
    });
    re.is_match(permit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_activity() -> Activity {
        Activity {
            id: "act-1".to_string(),
            description: "Preventive maintenance for pump P-101".to_string(),
            kind: WorkType::Preventive,
            permit_no: "PTW-2024-889".to_string(),
            discipline: "Mechanical".to_string(),
            equip_no: "P-101-A".to_string(),
            location: "OPS".to_string(),
            status: ActivityStatus::Completed,
            workers: "4".to_string(),
            start_time: "08:00".to_string(),
            end_time: "14:00".to_string(),
            remarks: "Oil changed".to_string(),
            image_url: None,
        }
    }

    // ========================================================================
    // ManpowerRow Tests
    // ========================================================================

    #[test]
    fn test_manpower_template_one_row_per_job_title() {
        let template = ManpowerRow::template();
        assert_eq!(template.len(), JOB_TITLES.len());
        for (row, title) in template.iter().zip(JOB_TITLES.iter()) {
            assert_eq!(row.job_title, *title);
            assert_eq!(row.total(), 0);
        }
    }

    #[test]
    fn test_set_count_recomputes_total() {
        let mut row = ManpowerRow::new("Mechanical Technician");
        row.set_count(LocationCode::Ops, 4);
        assert_eq!(row.total(), 4);

        row.set_count(LocationCode::Wps, 2);
        assert_eq!(row.total(), 6);

        // Overwriting a bucket replaces, not adds
        row.set_count(LocationCode::Ops, 1);
        assert_eq!(row.total(), 3);

        row.set_count(LocationCode::Ops, 0);
        assert_eq!(row.total(), 2);
    }

    #[test]
    fn test_total_equals_sum_of_all_buckets() {
        let mut row = ManpowerRow::new("Field Operator");
        for (i, loc) in LocationCode::ALL.iter().enumerate() {
            row.set_count(*loc, i as u32 + 1);
        }
        let expected: u32 = LocationCode::ALL.iter().map(|loc| row.count(*loc)).sum();
        assert_eq!(row.total(), expected);
        assert_eq!(row.total(), 45);
    }

    #[test]
    fn test_recompute_total_fixes_stale_deserialized_total() {
        // External JSON can claim any total; recompute restores the invariant
        let json = r#"{"jobTitle":"Field Operator","gps":1,"ops":2,"wps":0,"pp":0,"fsf":0,"ws1":0,"ws2":0,"ogm":0,"others":0,"total":99}"#;
        let mut row: ManpowerRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.total(), 99);
        row.recompute_total();
        assert_eq!(row.total(), 3);
    }

    // ========================================================================
    // Enum Wire Format Tests
    // ========================================================================

    #[test]
    fn test_status_wire_strings() {
        assert_eq!(serde_json::to_string(&ActivityStatus::Completed).unwrap(), "\"Completed\"");
        assert_eq!(serde_json::to_string(&ActivityStatus::InProgress).unwrap(), "\"In Progress\"");
        assert_eq!(serde_json::to_string(&ActivityStatus::Stopped).unwrap(), "\"Stopped\"");
        assert_eq!(serde_json::to_string(&ActivityStatus::Unset).unwrap(), "\"\"");
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            ActivityStatus::Completed,
            ActivityStatus::InProgress,
            ActivityStatus::Stopped,
            ActivityStatus::Unset,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            let back: ActivityStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }
    }

    #[test]
    fn test_unknown_status_deserializes_as_unset() {
        // Legacy backups carry localized status strings
        let status: ActivityStatus = serde_json::from_str("\"مكتمل\"").unwrap();
        assert_eq!(status, ActivityStatus::Unset);
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!(ActivityStatus::from_str("Completed"), ActivityStatus::Completed);
        assert_eq!(ActivityStatus::from_str("In Progress"), ActivityStatus::InProgress);
        assert_eq!(ActivityStatus::from_str("Stopped"), ActivityStatus::Stopped);
        // Unknown strings degrade to unset; matching is case sensitive
        assert_eq!(ActivityStatus::from_str("COMPLETED"), ActivityStatus::Unset);
        assert_eq!(ActivityStatus::from_str(""), ActivityStatus::Unset);
    }

    #[test]
    fn test_fixed_enumerations() {
        assert_eq!(JOB_TITLES.len(), 10);
        assert!(DEPARTMENTS.contains(&"Maintenance"));
        assert!(DISCIPLINES.contains(&"Mechanical"));
    }

    #[test]
    fn test_work_type_and_priority_wire_strings() {
        assert_eq!(serde_json::to_string(&WorkType::Preventive).unwrap(), "\"PM\"");
        assert_eq!(serde_json::to_string(&WorkType::Corrective).unwrap(), "\"CM\"");
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"High\"");
        let p: Priority = serde_json::from_str("\"\"").unwrap();
        assert_eq!(p, Priority::Unset);
    }

    // ========================================================================
    // Report Serialization Tests
    // ========================================================================

    #[test]
    fn test_report_serializes_camel_case() {
        let draft = ReportDraft::new("Pump Check", "2024-05-01", "A. Smith");
        let report = draft.into_report("abcd1234-ef".to_string(), 1_700_000_000_000);
        let json = serde_json::to_string(&report).unwrap();

        assert!(json.contains("\"projectName\":\"Pump Check\""));
        assert!(json.contains("\"reportDate\":\"2024-05-01\""));
        assert!(json.contains("\"reportedByName\":\"A. Smith\""));
        assert!(json.contains("\"jobTitle\""));
        // Absent optionals are omitted entirely
        assert!(!json.contains("hseInfo"));
        assert!(!json.contains("adminNotes"));
    }

    #[test]
    fn test_activity_type_field_name() {
        let act = sample_activity();
        let json = serde_json::to_string(&act).unwrap();
        assert!(json.contains("\"type\":\"PM\""));
        assert!(json.contains("\"permitNo\":\"PTW-2024-889\""));

        let back: Activity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, act);
    }

    #[test]
    fn test_short_ref_uppercases_first_eight() {
        let draft = ReportDraft::new("P", "2024-05-01", "N");
        let report = draft.into_report("abc123def456".to_string(), 1);
        assert_eq!(report.short_ref(), "ABC123DE");
    }

    #[test]
    fn test_total_manpower_sums_rows() {
        let mut draft = ReportDraft::new("P", "2024-05-01", "N");
        draft.manpower[0].set_count(LocationCode::Gps, 3);
        draft.manpower[4].set_count(LocationCode::Wps, 2);
        let report = draft.into_report("id".to_string(), 1);
        assert_eq!(report.total_manpower(), 5);
    }

    #[test]
    fn test_template_copy_strips_admin_notes() {
        let mut draft = ReportDraft::new("Pump Check", "2024-05-01", "A. Smith");
        draft.admin_notes = Some("expedite".to_string());
        draft.activities.push(sample_activity());
        let report = draft.into_report("id-1".to_string(), 1);

        let copy = report.template_copy("2024-05-02");
        assert_eq!(copy.report_date, "2024-05-02");
        assert_eq!(copy.project_name, "Pump Check");
        assert_eq!(copy.activities.len(), 1);
        assert!(copy.admin_notes.is_none());
    }

    // ========================================================================
    // Validation Tests
    // ========================================================================

    #[test]
    fn test_validate_requires_project_name() {
        let draft = ReportDraft::new("  ", "2024-05-01", "A. Smith");
        let err = draft.validate().unwrap_err();
        assert_eq!(err.tab(), Some(FormTab::Basic));
    }

    #[test]
    fn test_validate_requires_real_calendar_date() {
        let draft = ReportDraft::new("P", "2024-13-01", "N");
        assert!(draft.validate().is_err());

        let draft = ReportDraft::new("P", "2024-02-30", "N");
        assert!(draft.validate().is_err());

        let draft = ReportDraft::new("P", "2024-02-29", "N"); // leap year
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_duplicate_job_titles() {
        let mut draft = ReportDraft::new("P", "2024-05-01", "N");
        draft.manpower.push(ManpowerRow::new(JOB_TITLES[0]));
        let err = draft.validate().unwrap_err();
        assert_eq!(err.tab(), Some(FormTab::Manpower));
    }

    #[test]
    fn test_validate_permit_on_activities() {
        let mut draft = ReportDraft::new("P", "2024-05-01", "N");
        let mut act = sample_activity();
        act.permit_no = "PTW 2024/889".to_string();
        draft.activities.push(act);
        let err = draft.validate().unwrap_err();
        assert_eq!(err.tab(), Some(FormTab::Activities));
    }

    #[test]
    fn test_validate_permit_on_tomorrow_plan() {
        let mut draft = ReportDraft::new("P", "2024-05-01", "N");
        draft.tomorrow_plan.push(TomorrowActivity {
            id: "plan-1".to_string(),
            description: "Continue alignment".to_string(),
            kind: WorkType::Corrective,
            permit_no: "NEW!".to_string(),
            discipline: "Mechanical".to_string(),
            equip_no: "WIP-205".to_string(),
            location: "OPS".to_string(),
            priority: Priority::High,
            workers: "2".to_string(),
            start_time: "07:00".to_string(),
            end_time: "12:00".to_string(),
            remarks: String::new(),
        });
        let err = draft.validate().unwrap_err();
        assert_eq!(err.tab(), Some(FormTab::TomorrowPlan));
    }

    #[test]
    fn test_empty_permit_is_allowed() {
        let mut draft = ReportDraft::new("P", "2024-05-01", "N");
        let mut act = sample_activity();
        act.permit_no = String::new();
        draft.activities.push(act);
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_permit_pattern() {
        assert!(is_valid_permit("PTW-2024-889"));
        assert!(is_valid_permit("NEW"));
        assert!(is_valid_permit("a1-b2"));
        assert!(!is_valid_permit("PTW 889"));
        assert!(!is_valid_permit("PTW_889"));
        assert!(!is_valid_permit(""));
    }
}
