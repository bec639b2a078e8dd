use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// One observation of a KPI's progress at a point in time.
///
/// Within a project, several records may share a KPI name: they are
/// successive observations ordered by `created_at`. Records are never
/// deleted, only appended or field-updated in place.
#[derive(Debug, Clone, Serialize)]
pub struct KpiRecord {
    /// Store-assigned identifier: row position for CSV storage,
    /// surrogate key for the hosted table.
    pub id: i64,
    pub project: String,
    pub kpi: String,
    pub work_package: String,
    pub target: f64,
    pub current_value: f64,
    pub achievement_date: NaiveDate,
    pub male_count: Option<u32>,
    pub female_count: Option<u32>,
    pub comments: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Assigned by the store on append, rewritten on every update.
    pub created_at: NaiveDateTime,
}

impl KpiRecord {
    pub fn progress_pct(&self) -> f64 {
        if self.target > 0.0 {
            self.current_value / self.target * 100.0
        } else {
            0.0
        }
    }

    /// Gender counts are meaningful only as a pair with at least one
    /// non-zero value.
    pub fn gender_breakdown(&self) -> Option<(u32, u32)> {
        match (self.male_count, self.female_count) {
            (Some(m), Some(f)) if m > 0 || f > 0 => Some((m, f)),
            _ => None,
        }
    }

    pub fn created_at_str(&self) -> String {
        self.created_at.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// User-supplied fields of a new record, before the store assigns
/// an identifier and a timestamp.
#[derive(Debug, Clone)]
pub struct RecordDraft {
    pub kpi: String,
    pub work_package: String,
    pub target: f64,
    pub current_value: f64,
    pub achievement_date: NaiveDate,
    pub male_count: Option<u32>,
    pub female_count: Option<u32>,
    pub comments: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Partial update: only the supplied fields are rewritten on the target
/// record; the store refreshes the timestamp on every update.
#[derive(Debug, Clone, Default)]
pub struct RecordPatch {
    pub work_package: Option<String>,
    pub target: Option<f64>,
    pub current_value: Option<f64>,
    pub achievement_date: Option<NaiveDate>,
    pub male_count: Option<u32>,
    pub female_count: Option<u32>,
    pub comments: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl RecordPatch {
    pub fn is_empty(&self) -> bool {
        self.work_package.is_none()
            && self.target.is_none()
            && self.current_value.is_none()
            && self.achievement_date.is_none()
            && self.male_count.is_none()
            && self.female_count.is_none()
            && self.comments.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
    }

    /// Merge the supplied fields into `record`, leaving the rest untouched.
    pub fn apply(&self, record: &mut KpiRecord) {
        if let Some(wp) = &self.work_package {
            record.work_package = wp.clone();
        }
        if let Some(t) = self.target {
            record.target = t;
        }
        if let Some(c) = self.current_value {
            record.current_value = c;
        }
        if let Some(d) = self.achievement_date {
            record.achievement_date = d;
        }
        if let Some(m) = self.male_count {
            record.male_count = Some(m);
        }
        if let Some(f) = self.female_count {
            record.female_count = Some(f);
        }
        if let Some(c) = &self.comments {
            record.comments = c.clone();
        }
        if let Some(d) = self.start_date {
            record.start_date = d;
        }
        if let Some(d) = self.end_date {
            record.end_date = d;
        }
    }
}
