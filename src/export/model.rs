// src/export/model.rs

use crate::models::record::KpiRecord;
use crate::utils::date;
use serde::Serialize;

/// Flat record shape shared by the CSV / JSON / XLSX writers.
#[derive(Serialize, Clone, Debug)]
pub struct RecordExport {
    pub id: i64,
    pub project: String,
    pub kpi: String,
    pub work_package: String,
    pub target: f64,
    pub current_value: f64,
    pub achievement_date: String,
    pub male_count: String,
    pub female_count: String,
    pub comments: String,
    pub start_date: String,
    pub end_date: String,
    pub timestamp: String,
}

impl From<&KpiRecord> for RecordExport {
    fn from(r: &KpiRecord) -> Self {
        Self {
            id: r.id,
            project: r.project.clone(),
            kpi: r.kpi.clone(),
            work_package: r.work_package.clone(),
            target: r.target,
            current_value: r.current_value,
            achievement_date: date::format_date(r.achievement_date),
            male_count: r.male_count.map(|n| n.to_string()).unwrap_or_default(),
            female_count: r.female_count.map(|n| n.to_string()).unwrap_or_default(),
            comments: r.comments.clone(),
            start_date: date::format_date(r.start_date),
            end_date: date::format_date(r.end_date),
            timestamp: r.created_at_str(),
        }
    }
}

/// Header row for CSV / JSON / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "id",
        "project",
        "kpi",
        "work_package",
        "target",
        "current_value",
        "achievement_date",
        "male_count",
        "female_count",
        "comments",
        "start_date",
        "end_date",
        "timestamp",
    ]
}

/// Record as a row of display strings (XLSX cell writer input).
pub(crate) fn record_to_row(r: &RecordExport) -> Vec<String> {
    vec![
        r.id.to_string(),
        r.project.clone(),
        r.kpi.clone(),
        r.work_package.clone(),
        r.target.to_string(),
        r.current_value.to_string(),
        r.achievement_date.clone(),
        r.male_count.clone(),
        r.female_count.clone(),
        r.comments.clone(),
        r.start_date.clone(),
        r.end_date.clone(),
        r.timestamp.clone(),
    ]
}
