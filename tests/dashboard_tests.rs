use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_data, kpit, setup_data_dir};

// Dataset from init_data, classified as of 2025-06-15:
// - Trainings: latest current 55 of target 100, window 2025-01-01..2025-12-31
//   -> expected ~45.3, ratio ~1.21 -> On Track
// - Workshops: current 10 of target 10 -> Achieved

#[test]
fn test_overview_shows_statuses() {
    let data_dir = setup_data_dir("dash_overview");
    init_data(&data_dir);

    kpit()
        .args([
            "--data-dir",
            &data_dir,
            "dashboard",
            "--project",
            "Project Alpha",
            "--as-of",
            "2025-06-15",
        ])
        .assert()
        .success()
        .stdout(contains("KPI dashboard"))
        .stdout(contains("Trainings"))
        .stdout(contains("On Track"))
        .stdout(contains("Workshops"))
        .stdout(contains("Achieved"));
}

#[test]
fn test_overview_uses_latest_record_per_kpi() {
    let data_dir = setup_data_dir("dash_latest");
    init_data(&data_dir);

    // Trainings has observations at 40 and 55: the summary must show 55
    kpit()
        .args([
            "--data-dir",
            &data_dir,
            "dashboard",
            "--project",
            "Project Alpha",
            "--as-of",
            "2025-06-15",
        ])
        .assert()
        .success()
        .stdout(contains("55"))
        .stdout(contains("55.0%"));
}

#[test]
fn test_status_distribution_counts() {
    let data_dir = setup_data_dir("dash_distribution");
    init_data(&data_dir);

    kpit()
        .args([
            "--data-dir",
            &data_dir,
            "dashboard",
            "--project",
            "Project Alpha",
            "--as-of",
            "2025-06-15",
        ])
        .assert()
        .success()
        .stdout(contains("Status distribution"))
        .stdout(contains("50.0%").or(contains("(1)")));
}

#[test]
fn test_detail_view_renders_gauge_and_history() {
    let data_dir = setup_data_dir("dash_detail");
    init_data(&data_dir);

    kpit()
        .args([
            "--data-dir",
            &data_dir,
            "dashboard",
            "--project",
            "Project Alpha",
            "--kpi",
            "Trainings",
            "--as-of",
            "2025-06-15",
        ])
        .assert()
        .success()
        .stdout(contains("Detailed view: Trainings"))
        .stdout(contains("Progress"))
        .stdout(contains("Target"))
        .stdout(contains("Progress over time"))
        .stdout(contains("2025-03-01"))
        .stdout(contains("2025-06-01"));
}

#[test]
fn test_detail_view_shows_gender_breakdown() {
    let data_dir = setup_data_dir("dash_gender");
    init_data(&data_dir);

    kpit()
        .args([
            "--data-dir",
            &data_dir,
            "dashboard",
            "--project",
            "Project Alpha",
            "--kpi",
            "Workshops",
            "--as-of",
            "2025-06-15",
        ])
        .assert()
        .success()
        .stdout(contains("Gender distribution"))
        .stdout(contains("Male"))
        .stdout(contains("Female"));
}

#[test]
fn test_detail_view_unknown_kpi_fails() {
    let data_dir = setup_data_dir("dash_unknown_kpi");
    init_data(&data_dir);

    kpit()
        .args([
            "--data-dir",
            &data_dir,
            "dashboard",
            "--project",
            "Project Alpha",
            "--kpi",
            "Nope",
        ])
        .assert()
        .failure();
}

#[test]
fn test_dashboard_without_data_is_friendly() {
    let data_dir = setup_data_dir("dash_empty");

    kpit()
        .args([
            "--data-dir",
            &data_dir,
            "dashboard",
            "--project",
            "Project Alpha",
        ])
        .assert()
        .success()
        .stdout(contains("No data available"));
}

#[test]
fn test_future_window_classifies_not_started() {
    let data_dir = setup_data_dir("dash_not_started");

    kpit()
        .args([
            "--data-dir",
            &data_dir,
            "add",
            "--project",
            "Project Gamma",
            "--kpi",
            "Pilots",
            "--wp",
            "WP9",
            "--target",
            "5",
            "--current",
            "0",
            "--start",
            "2030-01-01",
            "--end",
            "2030-12-31",
        ])
        .assert()
        .success();

    kpit()
        .args([
            "--data-dir",
            &data_dir,
            "dashboard",
            "--project",
            "Project Gamma",
            "--as-of",
            "2025-06-15",
        ])
        .assert()
        .success()
        .stdout(contains("Not Started"));
}
