//! Terminal chart rendering for the dashboard views.
//!
//! Bars are scaled to 0..100% of target; over-achieved KPIs cap the bar at
//! full width and let the percentage text carry the excess.

use crate::models::status::Status;
use crate::models::summary::{KpiDetail, KpiSummary, StatusBreakdown};
use crate::utils::colors::{GREY, RESET};
use crate::utils::formatting::{fmt_count, fmt_number, fmt_pct, pad_left, pad_right};
use crate::utils::table::{Column, Table};

const BAR_FULL: char = '█';
const BAR_EMPTY: char = '░';

/// A `width`-cell bar filled to `pct` percent (clamped to 0..100).
fn bar(pct: f64, width: usize) -> String {
    let clamped = pct.clamp(0.0, 100.0);
    let filled = ((clamped / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);

    let mut out = String::with_capacity(width);
    for _ in 0..filled {
        out.push(BAR_FULL);
    }
    for _ in filled..width {
        out.push(BAR_EMPTY);
    }
    out
}

/// Overview chart: one colored progress bar per KPI, plus a 100% target
/// mark at the right edge.
pub fn render_overview(summaries: &[KpiSummary], width: usize) -> String {
    let name_w = summaries
        .iter()
        .map(|s| s.kpi.len())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut out = String::new();
    for s in summaries {
        let color = s.status.color();
        out.push_str(&format!(
            "{} {}{}{}┊ {} {} {}\n",
            pad_right(&s.kpi, name_w),
            color,
            bar(s.progress_pct, width),
            RESET,
            pad_left(&fmt_pct(s.progress_pct), 7),
            s.status.icon(),
            s.status,
        ));
    }
    out.push_str(&format!(
        "{} {}{}┊ = target (100%){}\n",
        pad_right("", name_w),
        GREY,
        " ".repeat(width),
        RESET,
    ));
    out
}

/// Summary table: KPI, Target, Current, Progress %, Status.
pub fn render_summary_table(summaries: &[KpiSummary]) -> String {
    let mut table = Table::new(vec![
        Column::new("KPI", 8),
        Column::new("Target", 6),
        Column::new("Current", 7),
        Column::new("Progress", 8),
        Column::new("Status", 11),
    ]);

    for s in summaries {
        table.add_row(vec![
            s.kpi.clone(),
            fmt_number(s.target),
            fmt_number(s.current_value),
            fmt_pct(s.progress_pct),
            s.status.to_string(),
        ]);
    }

    table.render()
}

/// Status distribution: share bar per status with counts (the pie chart,
/// flattened for a terminal).
pub fn render_breakdown(breakdown: &StatusBreakdown, width: usize) -> String {
    if breakdown.total == 0 {
        return String::new();
    }

    let label_w = Status::all()
        .iter()
        .map(|s| s.as_str().len())
        .max()
        .unwrap_or(11);

    let mut out = String::new();
    for (status, count) in &breakdown.counts {
        let share = *count as f64 / breakdown.total as f64 * 100.0;
        out.push_str(&format!(
            "{} {} {}{}{} {} ({})\n",
            status.icon(),
            pad_right(status.as_str(), label_w),
            status.color(),
            bar(share, width),
            RESET,
            pad_left(&fmt_pct(share), 6),
            count,
        ));
    }
    out
}

/// Gauge line for the detail view: percent-to-target with the status label.
pub fn render_gauge(detail: &KpiDetail, width: usize) -> String {
    format!(
        "Progress {}{}{}┊ {} - {} {}\n",
        detail.status.color(),
        bar(detail.progress_pct, width),
        RESET,
        fmt_pct(detail.progress_pct),
        detail.status.icon(),
        detail.status,
    )
}

/// Current vs target bars for the detail view.
pub fn render_current_vs_target(detail: &KpiDetail, width: usize) -> String {
    let target = detail.latest.target;
    let current = detail.latest.current_value;
    let current_pct = if target > 0.0 {
        current / target * 100.0
    } else {
        0.0
    };

    let mut out = String::new();
    out.push_str(&format!(
        "Current {}{}{}┊ {}\n",
        detail.status.color(),
        bar(current_pct, width),
        RESET,
        fmt_number(current),
    ));
    out.push_str(&format!(
        "Target  {}{}{}┊ {}\n",
        GREY,
        bar(100.0, width),
        RESET,
        fmt_number(target),
    ));
    out
}

/// Progress over time: one row per observation, oldest first.
pub fn render_history(detail: &KpiDetail, width: usize) -> String {
    let target = detail.latest.target;

    let mut out = String::new();
    for rec in &detail.history {
        let pct = if target > 0.0 {
            rec.current_value / target * 100.0
        } else {
            0.0
        };
        out.push_str(&format!(
            "{} {}{}{}┊ {}\n",
            rec.achievement_date.format("%Y-%m-%d"),
            detail.status.color(),
            bar(pct, width),
            RESET,
            fmt_number(rec.current_value),
        ));
    }
    out
}

/// Gender distribution of the latest observation, when recorded.
pub fn render_gender(detail: &KpiDetail, width: usize) -> Option<String> {
    let (male, female) = detail.gender?;
    let total = (male + female) as f64;
    if total == 0.0 {
        return None;
    }

    let male_share = male as f64 / total * 100.0;
    let female_share = female as f64 / total * 100.0;

    let mut out = String::new();
    out.push_str(&format!(
        "Male    {} {} ({})\n",
        bar(male_share, width),
        pad_left(&fmt_pct(male_share), 6),
        fmt_count(Some(male)),
    ));
    out.push_str(&format!(
        "Female  {} {} ({})\n",
        bar(female_share, width),
        pad_left(&fmt_pct(female_share), 6),
        fmt_count(Some(female)),
    ));
    Some(out)
}
