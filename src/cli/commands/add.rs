use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::audit::audit;
use crate::core::auth::Session;
use crate::core::validate::validate_draft;
use crate::errors::{AppError, AppResult};
use crate::models::record::RecordDraft;
use crate::store::open_store;
use crate::ui::messages::success;
use crate::utils::date;
use std::path::Path;

/// Record a new KPI observation.
pub fn handle(cmd: &Commands, cfg: &Config, session: &mut Session) -> AppResult<()> {
    if let Commands::Add {
        project,
        kpi,
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
        //
        // 1. Unlock the project (no-op when no password is configured)
        //
        session.unlock(cfg, project, password.as_deref())?;

        //
        // 2. Parse dates
        //
        let achieved = match achievement_date {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };
        let start = date::parse_date(start_date)
            .ok_or_else(|| AppError::InvalidDate(start_date.clone()))?;
        let end =
            date::parse_date(end_date).ok_or_else(|| AppError::InvalidDate(end_date.clone()))?;

        //
        // 3. Build and validate the draft
        //
        let draft = RecordDraft {
            kpi: kpi.clone(),
            work_package: work_package.clone(),
            target: *target,
            current_value: *current_value,
            achievement_date: achieved,
            male_count: *male,
            female_count: *female,
            comments: comments.clone().unwrap_or_default(),
            start_date: start,
            end_date: end,
        };
        validate_draft(project, &draft)?;

        //
        // 4. Write
        //
        let mut store = open_store(cfg)?;
        let record = store.append(project, &draft)?;

        success(format!(
            "KPI data saved for '{}' (record id {}).",
            project, record.id
        ));

        let _ = audit(
            Path::new(&cfg.data_dir),
            "add",
            &format!("{project}/{kpi}"),
            &format!("Recorded {} of {}", record.current_value, record.target),
        );
    }

    Ok(())
}
