use crate::config::Config;
use crate::errors::AppResult;
use crate::store::open_store;

/// Distinct project names known to the store.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg)?;
    let projects = store.list_projects()?;

    if projects.is_empty() {
        println!("No projects with data yet. Use `kpitracker add` to record the first KPI.");
        return Ok(());
    }

    println!("📊 {} project(s) with data:\n", projects.len());
    for p in projects {
        println!("- {}", p);
    }

    Ok(())
}
