//! KPI status classification.
//!
//! Pure function of the four record fields plus a reference date; the
//! wall-clock wrapper is the only place "today" enters the picture.

use crate::models::record::KpiRecord;
use crate::models::status::Status;
use crate::utils::date;
use chrono::NaiveDate;

/// A KPI counts as on track while it holds at least 90% of its expected
/// pace, and at risk down to 70%.
pub const ON_TRACK_RATIO: f64 = 0.9;
pub const AT_RISK_RATIO: f64 = 0.7;

/// Classify a KPI's progress against its target over the given window,
/// relative to `today`.
///
/// Edge policy:
/// - a non-positive (or non-finite) target means the KPI was never set up;
/// - a window that has not begun, or a degenerate window (end <= start),
///   classifies as `NotStarted` rather than erroring.
pub fn classify_at(
    current_value: f64,
    target_value: f64,
    start_date: NaiveDate,
    end_date: NaiveDate,
    today: NaiveDate,
) -> Status {
    if !target_value.is_finite() || target_value <= 0.0 {
        return Status::NotStarted;
    }

    if current_value >= target_value {
        return Status::Achieved;
    }

    let total_days = date::days_between(start_date, end_date);
    let elapsed_days = date::days_between(start_date, today);

    if elapsed_days <= 0 || total_days <= 0 {
        return Status::NotStarted;
    }

    let expected_progress = (elapsed_days as f64 / total_days as f64) * target_value;
    if expected_progress <= 0.0 {
        return Status::NotStarted;
    }

    let ratio = current_value / expected_progress;

    if ratio >= ON_TRACK_RATIO {
        Status::OnTrack
    } else if ratio >= AT_RISK_RATIO {
        Status::AtRisk
    } else {
        Status::Delayed
    }
}

/// Classify against the local wall-clock date.
pub fn classify(
    current_value: f64,
    target_value: f64,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Status {
    classify_at(
        current_value,
        target_value,
        start_date,
        end_date,
        date::today(),
    )
}

pub fn classify_record(record: &KpiRecord, today: NaiveDate) -> Status {
    classify_at(
        record.current_value,
        record.target,
        record.start_date,
        record.end_date,
        today,
    )
}
