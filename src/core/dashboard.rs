//! Dashboard data shaping: overview rows, status distribution and per-KPI
//! detail. Rendering lives in `ui::charts`; everything here is plain data.

use crate::core::classify::classify_record;
use crate::core::query::{kpi_history, latest_per_kpi};
use crate::models::record::KpiRecord;
use crate::models::status::Status;
use crate::models::summary::{KpiDetail, KpiSummary, StatusBreakdown};
use chrono::NaiveDate;

pub struct Dashboard;

impl Dashboard {
    /// One summary row per KPI, derived from the latest record each.
    pub fn build_overview(records: &[KpiRecord], today: NaiveDate) -> Vec<KpiSummary> {
        latest_per_kpi(records)
            .into_iter()
            .map(|record| {
                let status = classify_record(&record, today);
                KpiSummary {
                    kpi: record.kpi.clone(),
                    target: record.target,
                    current_value: record.current_value,
                    progress_pct: record.progress_pct(),
                    status,
                    record,
                }
            })
            .collect()
    }

    /// Status counts across the overview rows, in fixed status order,
    /// zero-count statuses omitted.
    pub fn status_breakdown(summaries: &[KpiSummary]) -> StatusBreakdown {
        let mut counts = Vec::new();
        for status in Status::all() {
            let n = summaries.iter().filter(|s| s.status == status).count();
            if n > 0 {
                counts.push((status, n));
            }
        }
        StatusBreakdown {
            total: summaries.len(),
            counts,
        }
    }

    /// Detail view for one KPI; `None` when the project has no record
    /// with that name.
    pub fn build_detail(records: &[KpiRecord], kpi: &str, today: NaiveDate) -> Option<KpiDetail> {
        let history = kpi_history(records, kpi);
        let latest = history.last()?.clone();

        Some(KpiDetail {
            kpi: kpi.to_string(),
            status: classify_record(&latest, today),
            progress_pct: latest.progress_pct(),
            gender: latest.gender_breakdown(),
            latest,
            history,
        })
    }
}
