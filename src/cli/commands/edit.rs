use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::audit::audit;
use crate::core::auth::Session;
use crate::errors::{AppError, AppResult};
use crate::models::record::RecordPatch;
use crate::store::open_store;
use crate::ui::messages::{success, warning};
use crate::utils::date;
use std::path::Path;

fn parse_optional_date(input: Option<&String>) -> AppResult<Option<chrono::NaiveDate>> {
    match input {
        Some(s) => {
            let d = date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?;
            Ok(Some(d))
        }
        None => Ok(None),
    }
}

/// Update fields on an existing record. Only the supplied flags are
/// rewritten; the store refreshes the timestamp.
pub fn handle(cmd: &Commands, cfg: &Config, session: &mut Session) -> AppResult<()> {
    if let Commands::Edit {
        project,
        id,
        work_package,
        target,
        current_value,
        achievement_date,
        male,
        female,
        comments,
        start_date,
        end_date,
        password,
    } = cmd
    {
        session.unlock(cfg, project, password.as_deref())?;

        let patch = RecordPatch {
            work_package: work_package.clone(),
            target: *target,
            current_value: *current_value,
            achievement_date: parse_optional_date(achievement_date.as_ref())?,
            male_count: *male,
            female_count: *female,
            comments: comments.clone(),
            start_date: parse_optional_date(start_date.as_ref())?,
            end_date: parse_optional_date(end_date.as_ref())?,
        };

        if patch.is_empty() {
            warning("Nothing to update: supply at least one field flag.");
            return Ok(());
        }

        let mut store = open_store(cfg)?;
        let record = store.update(project, *id, &patch)?;

        success(format!(
            "Record {} updated for '{}' ({}).",
            id, project, record.kpi
        ));

        let _ = audit(
            Path::new(&cfg.data_dir),
            "edit",
            &format!("{}/{}", project, record.kpi),
            &format!("Updated record {id}"),
        );
    }

    Ok(())
}
