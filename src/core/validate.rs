//! Form-level checks applied before a record reaches the store.

use crate::errors::{AppError, AppResult};
use crate::models::record::RecordDraft;

/// Required fields block the write with a warning; numeric fields must not
/// be negative. Date ordering (end >= start) is expected but unchecked.
pub fn validate_draft(project: &str, draft: &RecordDraft) -> AppResult<()> {
    if project.trim().is_empty() {
        return Err(AppError::MissingField("project".into()));
    }
    if draft.kpi.trim().is_empty() {
        return Err(AppError::MissingField("KPI name".into()));
    }
    if draft.work_package.trim().is_empty() {
        return Err(AppError::MissingField("work package".into()));
    }
    if draft.target < 0.0 {
        return Err(AppError::InvalidNumber(format!(
            "target must not be negative (got {})",
            draft.target
        )));
    }
    if draft.current_value < 0.0 {
        return Err(AppError::InvalidNumber(format!(
            "current value must not be negative (got {})",
            draft.current_value
        )));
    }
    Ok(())
}
