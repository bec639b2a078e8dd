use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dashboard::Dashboard;
use crate::errors::{AppError, AppResult};
use crate::store::open_store;
use crate::ui::charts;
use crate::ui::messages::header;
use crate::utils::date;

/// Render the dashboard: project overview, or one KPI's detail with
/// `--kpi`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dashboard {
        project,
        kpi,
        as_of,
    } = cmd
    {
        let today = match as_of {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        let store = open_store(cfg)?;
        let records = store.load(project)?;

        if records.is_empty() {
            println!("No data available for {}. Please add KPI data first.", project);
            return Ok(());
        }

        let width = cfg.chart_width;

        match kpi {
            Some(kpi_name) => {
                let detail = Dashboard::build_detail(&records, kpi_name, today).ok_or_else(|| {
                    AppError::Other(format!("No KPI named '{kpi_name}' in project '{project}'"))
                })?;

                header(format!("Detailed view: {kpi_name} - {project}"));
                println!();
                print!("{}", charts::render_gauge(&detail, width));
                println!();
                print!("{}", charts::render_current_vs_target(&detail, width));

                if detail.history.len() > 1 {
                    println!("\nProgress over time:");
                    print!("{}", charts::render_history(&detail, width));
                }

                if let Some(gender) = charts::render_gender(&detail, width) {
                    println!("\nGender distribution:");
                    print!("{}", gender);
                }

                if !detail.latest.comments.trim().is_empty() {
                    println!("\n💬 {}", detail.latest.comments);
                }
            }
            None => {
                let summaries = Dashboard::build_overview(&records, today);
                let breakdown = Dashboard::status_breakdown(&summaries);

                header(format!("KPI dashboard - {project}"));
                println!("\nProgress overview:");
                print!("{}", charts::render_overview(&summaries, width));

                println!("\nStatus distribution:");
                print!("{}", charts::render_breakdown(&breakdown, width));

                println!("\nKPI summary:");
                print!("{}", charts::render_summary_table(&summaries));

                println!(
                    "\nRun `kpitracker dashboard --project \"{}\" --kpi <name>` for a detailed view.",
                    project
                );
            }
        }
    }

    Ok(())
}
