use crate::models::record::KpiRecord;
use crate::models::status::Status;

/// Latest state of one KPI, ready for the overview chart and summary table.
#[derive(Debug, Clone)]
pub struct KpiSummary {
    pub kpi: String,
    pub target: f64,
    pub current_value: f64,
    pub progress_pct: f64,
    pub status: Status,
    /// The record the summary was derived from (latest per KPI).
    pub record: KpiRecord,
}

/// Status counts across a project's KPIs (the status distribution view).
#[derive(Debug, Default)]
pub struct StatusBreakdown {
    pub counts: Vec<(Status, usize)>,
    pub total: usize,
}

/// Everything the per-KPI detail view needs.
#[derive(Debug)]
pub struct KpiDetail {
    pub kpi: String,
    pub status: Status,
    pub progress_pct: f64,
    pub latest: KpiRecord,
    /// All observations for the KPI, oldest first.
    pub history: Vec<KpiRecord>,
    pub gender: Option<(u32, u32)>,
}
