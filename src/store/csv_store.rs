//! File-backed record store: one delimited table per project.
//!
//! Layout: `<data_dir>/<sanitized project>_KPI_data.csv` with the column
//! set `Project, KPI, Work Package, Target, Current Value, Achievement
//! Date, Male Count, Female Count, Comments, Start Date, End Date,
//! Timestamp`. The record identifier is the row position within the
//! project's table.
//!
//! Loading is lenient: malformed numerics coerce to 0, malformed dates fall
//! back to today, so a hand-edited file degrades to `Not Started` instead
//! of taking the dashboard down.

use crate::errors::{AppError, AppResult};
use crate::models::record::{KpiRecord, RecordDraft, RecordPatch};
use crate::store::KpiStore;
use crate::utils::date;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const FILE_SUFFIX: &str = "_KPI_data.csv";

pub struct CsvStore {
    data_dir: PathBuf,
}

/// On-disk row shape. Everything is text; conversion happens on the way
/// in and out so a single bad cell never poisons the table.
#[derive(Debug, Serialize, Deserialize)]
struct CsvRow {
    #[serde(rename = "Project")]
    project: String,
    #[serde(rename = "KPI")]
    kpi: String,
    #[serde(rename = "Work Package")]
    work_package: String,
    #[serde(rename = "Target")]
    target: String,
    #[serde(rename = "Current Value")]
    current_value: String,
    #[serde(rename = "Achievement Date")]
    achievement_date: String,
    #[serde(rename = "Male Count")]
    male_count: String,
    #[serde(rename = "Female Count")]
    female_count: String,
    #[serde(rename = "Comments")]
    comments: String,
    #[serde(rename = "Start Date")]
    start_date: String,
    #[serde(rename = "End Date")]
    end_date: String,
    #[serde(rename = "Timestamp")]
    timestamp: String,
}

impl CsvStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn csv_path(&self, project: &str) -> PathBuf {
        self.data_dir
            .join(format!("{}{}", sanitize_project_name(project), FILE_SUFFIX))
    }

    fn read_rows(&self, path: &Path) -> AppResult<Vec<CsvRow>> {
        if !path.exists() {
            return Ok(Vec::new());
        }

        let mut rdr = csv::Reader::from_path(path)?;
        let rows = rdr
            .deserialize::<CsvRow>()
            .filter_map(|r| r.ok())
            .collect();
        Ok(rows)
    }

    fn write_rows(&self, path: &Path, rows: &[CsvRow]) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut wtr = csv::Writer::from_path(path)?;
        for row in rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

impl KpiStore for CsvStore {
    fn append(&mut self, project: &str, draft: &RecordDraft) -> AppResult<KpiRecord> {
        let path = self.csv_path(project);
        let mut rows = self.read_rows(&path)?;

        let now = date::now();
        rows.push(row_from_draft(project, draft, now));
        self.write_rows(&path, &rows)?;

        let id = (rows.len() - 1) as i64;
        Ok(record_from_row(&rows[rows.len() - 1], id))
    }

    fn load(&self, project: &str) -> AppResult<Vec<KpiRecord>> {
        let rows = self.read_rows(&self.csv_path(project))?;
        Ok(rows
            .iter()
            .enumerate()
            .map(|(i, row)| record_from_row(row, i as i64))
            .collect())
    }

    fn load_all(&self) -> AppResult<Vec<KpiRecord>> {
        let mut out = Vec::new();
        for project in self.list_projects()? {
            out.extend(self.load(&project)?);
        }
        Ok(out)
    }

    fn update(&mut self, project: &str, id: i64, patch: &RecordPatch) -> AppResult<KpiRecord> {
        let path = self.csv_path(project);
        let mut rows = self.read_rows(&path)?;

        let not_found = || AppError::RecordNotFound {
            project: project.to_string(),
            id,
        };

        if id < 0 || id as usize >= rows.len() {
            return Err(not_found());
        }

        let idx = id as usize;
        if rows[idx].project != project {
            return Err(not_found());
        }

        let mut record = record_from_row(&rows[idx], id);
        patch.apply(&mut record);
        record.created_at = date::now();

        rows[idx] = row_from_record(&record);
        self.write_rows(&path, &rows)?;

        Ok(record)
    }

    fn list_projects(&self) -> AppResult<Vec<String>> {
        if !self.data_dir.exists() {
            return Ok(Vec::new());
        }

        let mut projects = Vec::new();
        for entry in fs::read_dir(&self.data_dir)? {
            let path = entry?.path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if let Some(stem) = name.strip_suffix(FILE_SUFFIX) {
                projects.push(stem.replace('_', " "));
            }
        }

        projects.sort();
        Ok(projects)
    }
}

/// Keep alphanumerics, spaces, underscores and dashes; spaces become
/// underscores. The reverse mapping in `list_projects` turns underscores
/// back into spaces.
pub fn sanitize_project_name(name: &str) -> String {
    let safe: String = name
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == ' ' || *c == '_' || *c == '-')
        .collect();
    safe.trim().replace(' ', "_")
}

// ---------------------------------------------------------------------------
// Row conversions
// ---------------------------------------------------------------------------

fn parse_number(s: &str) -> f64 {
    let t = s.trim();
    if t.is_empty() {
        return 0.0;
    }
    t.parse::<f64>().unwrap_or(0.0)
}

fn parse_count(s: &str) -> Option<u32> {
    let t = s.trim();
    if t.is_empty() {
        return None;
    }
    // Counts sometimes arrive as "5.0" from spreadsheet tools
    t.parse::<u32>()
        .ok()
        .or_else(|| t.parse::<f64>().ok().map(|f| f.max(0.0) as u32))
}

fn fmt_value(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{:.0}", v)
    } else {
        v.to_string()
    }
}

fn fmt_count(v: Option<u32>) -> String {
    v.map(|n| n.to_string()).unwrap_or_default()
}

fn record_from_row(row: &CsvRow, id: i64) -> KpiRecord {
    let today = date::today();
    let fallback_ts = today.and_hms_opt(0, 0, 0).unwrap_or_default();

    KpiRecord {
        id,
        project: row.project.clone(),
        kpi: row.kpi.clone(),
        work_package: row.work_package.clone(),
        target: parse_number(&row.target),
        current_value: parse_number(&row.current_value),
        achievement_date: date::parse_date_or(&row.achievement_date, today),
        male_count: parse_count(&row.male_count),
        female_count: parse_count(&row.female_count),
        comments: row.comments.clone(),
        start_date: date::parse_date_or(&row.start_date, today),
        end_date: date::parse_date_or(&row.end_date, today),
        created_at: date::parse_timestamp_or(&row.timestamp, fallback_ts),
    }
}

fn row_from_draft(project: &str, draft: &RecordDraft, now: chrono::NaiveDateTime) -> CsvRow {
    CsvRow {
        project: project.to_string(),
        kpi: draft.kpi.clone(),
        work_package: draft.work_package.clone(),
        target: fmt_value(draft.target),
        current_value: fmt_value(draft.current_value),
        achievement_date: date::format_date(draft.achievement_date),
        male_count: fmt_count(draft.male_count),
        female_count: fmt_count(draft.female_count),
        comments: draft.comments.clone(),
        start_date: date::format_date(draft.start_date),
        end_date: date::format_date(draft.end_date),
        timestamp: date::format_timestamp(now),
    }
}

fn row_from_record(record: &KpiRecord) -> CsvRow {
    CsvRow {
        project: record.project.clone(),
        kpi: record.kpi.clone(),
        work_package: record.work_package.clone(),
        target: fmt_value(record.target),
        current_value: fmt_value(record.current_value),
        achievement_date: date::format_date(record.achievement_date),
        male_count: fmt_count(record.male_count),
        female_count: fmt_count(record.female_count),
        comments: record.comments.clone(),
        start_date: date::format_date(record.start_date),
        end_date: date::format_date(record.end_date),
        timestamp: date::format_timestamp(record.created_at),
    }
}
