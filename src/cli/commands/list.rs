use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::open_store;
use crate::utils::formatting::{fmt_count, fmt_number};
use crate::utils::table::{Column, Table};

/// Tabular dump of a project's records, ids included so `edit` can target
/// a row.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { project } = cmd {
        let store = open_store(cfg)?;
        let records = store.load(project)?;

        if records.is_empty() {
            println!("No records for project '{}'.", project);
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("ID", 2),
            Column::new("KPI", 8),
            Column::new("WP", 4),
            Column::new("Target", 6),
            Column::new("Current", 7),
            Column::new("Achieved", 10),
            Column::new("M", 2),
            Column::new("F", 2),
            Column::new("Start", 10),
            Column::new("End", 10),
            Column::new("Timestamp", 19),
        ]);

        for rec in &records {
            table.add_row(vec![
                rec.id.to_string(),
                rec.kpi.clone(),
                rec.work_package.clone(),
                fmt_number(rec.target),
                fmt_number(rec.current_value),
                rec.achievement_date.format("%Y-%m-%d").to_string(),
                fmt_count(rec.male_count),
                fmt_count(rec.female_count),
                rec.start_date.format("%Y-%m-%d").to_string(),
                rec.end_date.format("%Y-%m-%d").to_string(),
                rec.created_at_str(),
            ]);
        }

        println!("\n📋 KPI records - {}\n", project);
        print!("{}", table.render());
        println!("{} record(s).", records.len());
    }

    Ok(())
}
