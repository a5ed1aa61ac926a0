//! Example reports persisted into a never-written slot on first read.

use chrono::{Duration, Utc};

use crate::models::{
    Activity, ActivityStatus, HseInfo, LocationCode, ManpowerRow, Priority, Report,
    TomorrowActivity, WorkType,
};

const MECHANICAL_TECHNICIAN: usize = 3;
const ELECTRICAL_TECHNICIAN: usize = 4;

fn manpower_with(row: usize, location: LocationCode, count: u32) -> Vec<ManpowerRow> {
    let mut rows = ManpowerRow::template();
    rows[row].set_count(location, count);
    rows
}

/// The two bilingual example reports, dated today and yesterday.
pub fn example_reports() -> Vec<Report> {
    let now = Utc::now();
    let today = now.date_naive();
    let yesterday = today - Duration::days(1);

    vec![
        Report {
            id: "RPT-TEST-001".to_string(),
            timestamp: now.timestamp_millis(),
            project_name: "CPF Pump Maintenance / صيانة مضخات المحطة المركزية".to_string(),
            report_date: today.to_string(),
            reported_by_name: "Ahmed Hassan".to_string(),
            reported_by_dept: "Maintenance".to_string(),
            reporting_to_dept: "Operations".to_string(),
            reporting_to_manager: "Mr. Liu".to_string(),
            general_note: "Safe execution of all tasks. Waiting for gasket spare parts for P-102."
                .to_string(),
            hse_info: Some(HseInfo {
                weather_condition: "Clear / مشمس".to_string(),
                temperature: "35".to_string(),
                wind_speed: "12".to_string(),
                toolbox_talk: true,
                remarks: "Reminder about hydration".to_string(),
            }),
            manpower: manpower_with(MECHANICAL_TECHNICIAN, LocationCode::Ops, 4),
            activities: vec![
                Activity {
                    id: "act-1".to_string(),
                    description: "Preventive Maintenance for Crude Oil Pump P-101 A".to_string(),
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
                },
                Activity {
                    id: "act-2".to_string(),
                    description: "Alignment check for Water Injection Pump".to_string(),
                    kind: WorkType::Corrective,
                    permit_no: "PTW-2024-890".to_string(),
                    discipline: "Mechanical".to_string(),
                    equip_no: "WIP-205".to_string(),
                    location: "OPS".to_string(),
                    status: ActivityStatus::InProgress,
                    workers: "2".to_string(),
                    start_time: "14:00".to_string(),
                    end_time: "16:00".to_string(),
                    remarks: "High vibration detected".to_string(),
                    image_url: None,
                },
            ],
            tomorrow_plan: vec![TomorrowActivity {
                id: "plan-1".to_string(),
                description: "Continue alignment for WIP-205".to_string(),
                kind: WorkType::Corrective,
                permit_no: "PTW-2024-890".to_string(),
                discipline: "Mechanical".to_string(),
                equip_no: "WIP-205".to_string(),
                location: "OPS".to_string(),
                priority: Priority::High,
                workers: "2".to_string(),
                start_time: "07:00".to_string(),
                end_time: "12:00".to_string(),
                remarks: String::new(),
            }],
            admin_notes: Some(
                "Good progress. Please expedite the vibration analysis report.".to_string(),
            ),
        },
        Report {
            id: "RPT-TEST-002".to_string(),
            timestamp: (now - Duration::days(1)).timestamp_millis(),
            project_name: "Well Pad 5 Electrical Inspection / فحص كهرباء الآبار".to_string(),
            report_date: yesterday.to_string(),
            reported_by_name: "Ali Bassem".to_string(),
            reported_by_dept: "Engineering".to_string(),
            reporting_to_dept: "Engineering".to_string(),
            reporting_to_manager: "Eng. Sarah".to_string(),
            general_note: "Weather conditions (High Wind) delayed lifting operations in the morning."
                .to_string(),
            hse_info: Some(HseInfo {
                weather_condition: "Windy / عاصف".to_string(),
                temperature: "28".to_string(),
                wind_speed: "45".to_string(),
                toolbox_talk: true,
                remarks: "Lifting stopped due to wind > 30km/h".to_string(),
            }),
            manpower: manpower_with(ELECTRICAL_TECHNICIAN, LocationCode::Wps, 2),
            activities: vec![Activity {
                id: "act-3".to_string(),
                description: "Cable tray repair and grounding check".to_string(),
                kind: WorkType::Preventive,
                permit_no: "PTW-2024-750".to_string(),
                discipline: "Electrical".to_string(),
                equip_no: "JB-501".to_string(),
                location: "WPS".to_string(),
                status: ActivityStatus::Completed,
                workers: "2".to_string(),
                start_time: "09:00".to_string(),
                end_time: "15:00".to_string(),
                remarks: "Replaced corroded bolts".to_string(),
                image_url: None,
            }],
            tomorrow_plan: vec![TomorrowActivity {
                id: "plan-2".to_string(),
                description: "Terminate cables for new lighting pole".to_string(),
                kind: WorkType::Corrective,
                permit_no: "NEW".to_string(),
                discipline: "Electrical".to_string(),
                equip_no: "LP-09".to_string(),
                location: "WPS".to_string(),
                priority: Priority::Medium,
                workers: "2".to_string(),
                start_time: "08:00".to_string(),
                end_time: "16:00".to_string(),
                remarks: String::new(),
            }],
            admin_notes: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_reports_are_valid_dates() {
        for report in example_reports() {
            assert!(chrono::NaiveDate::parse_from_str(&report.report_date, "%Y-%m-%d").is_ok());
        }
    }

    #[test]
    fn test_example_reports_have_distinct_ids() {
        let reports = example_reports();
        assert_eq!(reports.len(), 2);
        assert_ne!(reports[0].id, reports[1].id);
    }

    #[test]
    fn test_example_manpower_placement() {
        let reports = example_reports();
        assert_eq!(reports[0].total_manpower(), 4);
        assert_eq!(reports[1].total_manpower(), 2);
    }
}
