//! Named queries over loaded record sets.
//!
//! "The current state of a KPI" is always derived here, never by ad-hoc
//! sorting at the call site.

use crate::models::record::KpiRecord;

/// Latest record per KPI name, in first-seen KPI order.
///
/// Tie-break on equal timestamps: store order, later rows win. Among equal
/// timestamps the later-inserted record is the later observation.
pub fn latest_per_kpi(records: &[KpiRecord]) -> Vec<KpiRecord> {
    let mut latest: Vec<KpiRecord> = Vec::new();

    for rec in records {
        match latest.iter_mut().find(|r| r.kpi == rec.kpi) {
            Some(best) => {
                if rec.created_at >= best.created_at {
                    *best = rec.clone();
                }
            }
            None => latest.push(rec.clone()),
        }
    }

    latest
}

/// All observations for one KPI, oldest first (stable on equal timestamps,
/// so store order is preserved within ties).
pub fn kpi_history(records: &[KpiRecord], kpi: &str) -> Vec<KpiRecord> {
    let mut out: Vec<KpiRecord> = records.iter().filter(|r| r.kpi == kpi).cloned().collect();
    out.sort_by_key(|r| r.created_at);
    out
}

/// Distinct KPI names in first-seen order.
pub fn kpi_names(records: &[KpiRecord]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for rec in records {
        if !names.iter().any(|n| n == &rec.kpi) {
            names.push(rec.kpi.clone());
        }
    }
    names
}
