use predicates::str::contains;
use std::env;
use std::fs;
use std::path::PathBuf;

mod common;
use common::{init_data, kpit, setup_data_dir};

/// Create an isolated HOME with a config file holding project passwords
fn setup_home_with_passwords(name: &str, data_dir: &str) -> String {
    let mut home: PathBuf = env::temp_dir();
    home.push(format!("{}_kpitracker_home", name));
    fs::remove_dir_all(&home).ok();

    let conf_dir = home.join(".kpitracker");
    fs::create_dir_all(&conf_dir).expect("create config dir");

    let yaml = format!(
        "data_dir: {data_dir}\n\
         backend: csv\n\
         rest_endpoint: ''\n\
         rest_api_key: ''\n\
         project_passwords:\n  Project Alpha: alpha123\n\
         chart_width: 40\n"
    );
    fs::write(conf_dir.join("kpitracker.conf"), yaml).expect("write config");

    home.to_string_lossy().to_string()
}

#[test]
fn test_init_creates_workspace() {
    let data_dir = setup_data_dir("init");

    kpit()
        .args(["--data-dir", &data_dir, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Initializing kpitracker"));

    assert!(PathBuf::from(&data_dir).exists());
}

#[test]
fn test_add_then_list_shows_record() {
    let data_dir = setup_data_dir("add_list");
    init_data(&data_dir);

    kpit()
        .args(["--data-dir", &data_dir, "list", "--project", "Project Alpha"])
        .assert()
        .success()
        .stdout(contains("Trainings"))
        .stdout(contains("Workshops"))
        .stdout(contains("55"))
        .stdout(contains("3 record(s)"));
}

#[test]
fn test_add_rejects_empty_required_field() {
    let data_dir = setup_data_dir("add_empty_kpi");

    kpit()
        .args([
            "--data-dir",
            &data_dir,
            "add",
            "--project",
            "Project Alpha",
            "--kpi",
            "",
            "--wp",
            "WP1",
            "--target",
            "100",
            "--current",
            "10",
            "--start",
            "2025-01-01",
            "--end",
            "2025-12-31",
        ])
        .assert()
        .failure()
        .stderr(contains("Missing required field"));
}

#[test]
fn test_add_rejects_malformed_date() {
    let data_dir = setup_data_dir("add_bad_date");

    kpit()
        .args([
            "--data-dir",
            &data_dir,
            "add",
            "--project",
            "Project Alpha",
            "--kpi",
            "Trainings",
            "--wp",
            "WP1",
            "--target",
            "100",
            "--current",
            "10",
            "--start",
            "01/01/2025",
            "--end",
            "2025-12-31",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_edit_updates_single_field() {
    let data_dir = setup_data_dir("edit_field");
    init_data(&data_dir);

    kpit()
        .args([
            "--data-dir",
            &data_dir,
            "edit",
            "--project",
            "Project Alpha",
            "--id",
            "1",
            "--current",
            "70",
        ])
        .assert()
        .success()
        .stdout(contains("Record 1 updated"));

    kpit()
        .args(["--data-dir", &data_dir, "list", "--project", "Project Alpha"])
        .assert()
        .success()
        .stdout(contains("70"));
}

#[test]
fn test_edit_unknown_id_fails() {
    let data_dir = setup_data_dir("edit_unknown");
    init_data(&data_dir);

    kpit()
        .args([
            "--data-dir",
            &data_dir,
            "edit",
            "--project",
            "Project Alpha",
            "--id",
            "99",
            "--current",
            "70",
        ])
        .assert()
        .failure()
        .stderr(contains("No record with id 99"));
}

#[test]
fn test_edit_without_fields_warns() {
    let data_dir = setup_data_dir("edit_nothing");
    init_data(&data_dir);

    kpit()
        .args([
            "--data-dir",
            &data_dir,
            "edit",
            "--project",
            "Project Alpha",
            "--id",
            "0",
        ])
        .assert()
        .success()
        .stdout(contains("Nothing to update"));
}

#[test]
fn test_projects_lists_known_projects() {
    let data_dir = setup_data_dir("projects");
    init_data(&data_dir);

    kpit()
        .args(["--data-dir", &data_dir, "projects"])
        .assert()
        .success()
        .stdout(contains("Project Alpha"));
}

#[test]
fn test_audit_log_tracks_writes() {
    let data_dir = setup_data_dir("audit");
    init_data(&data_dir);

    kpit()
        .args(["--data-dir", &data_dir, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("add"))
        .stdout(contains("Project Alpha/Trainings"));
}

// ---------------------------------------------------------------------------
// Authentication gate
// ---------------------------------------------------------------------------

#[test]
fn test_add_with_wrong_password_fails() {
    let data_dir = setup_data_dir("auth_wrong");
    let home = setup_home_with_passwords("auth_wrong", &data_dir);

    kpit()
        .env("HOME", &home)
        .args([
            "add",
            "--project",
            "Project Alpha",
            "--kpi",
            "Trainings",
            "--wp",
            "WP1",
            "--target",
            "100",
            "--current",
            "10",
            "--start",
            "2025-01-01",
            "--end",
            "2025-12-31",
            "--password",
            "nope",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid password"));
}

#[test]
fn test_add_with_correct_password_succeeds() {
    let data_dir = setup_data_dir("auth_right");
    let home = setup_home_with_passwords("auth_right", &data_dir);

    kpit()
        .env("HOME", &home)
        .args([
            "add",
            "--project",
            "Project Alpha",
            "--kpi",
            "Trainings",
            "--wp",
            "WP1",
            "--target",
            "100",
            "--current",
            "10",
            "--start",
            "2025-01-01",
            "--end",
            "2025-12-31",
            "--password",
            "alpha123",
        ])
        .assert()
        .success()
        .stdout(contains("Authenticated for Project Alpha"))
        .stdout(contains("KPI data saved"));
}

#[test]
fn test_password_prompt_reads_stdin() {
    let data_dir = setup_data_dir("auth_prompt");
    let home = setup_home_with_passwords("auth_prompt", &data_dir);

    kpit()
        .env("HOME", &home)
        .args([
            "add",
            "--project",
            "Project Alpha",
            "--kpi",
            "Trainings",
            "--wp",
            "WP1",
            "--target",
            "100",
            "--current",
            "10",
            "--start",
            "2025-01-01",
            "--end",
            "2025-12-31",
        ])
        .write_stdin("alpha123\n")
        .assert()
        .success()
        .stdout(contains("KPI data saved"));
}

#[test]
fn test_project_without_password_is_open() {
    let data_dir = setup_data_dir("auth_open");
    let home = setup_home_with_passwords("auth_open", &data_dir);

    // "Project Beta" has no configured password: edits pass the gate
    kpit()
        .env("HOME", &home)
        .args([
            "add",
            "--project",
            "Project Beta",
            "--kpi",
            "Surveys",
            "--wp",
            "WP3",
            "--target",
            "20",
            "--current",
            "4",
            "--start",
            "2025-01-01",
            "--end",
            "2025-12-31",
        ])
        .assert()
        .success()
        .stdout(contains("KPI data saved"));
}
