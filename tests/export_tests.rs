mod common;
use common::{init_data, kpit, setup_data_dir, temp_out};
use std::fs;

#[test]
fn test_export_csv_all_projects() {
    let data_dir = setup_data_dir("export_csv_all");
    init_data(&data_dir);

    let out = temp_out("export_csv_all", "csv");

    kpit()
        .args([
            "--data-dir", &data_dir, "export", "--format", "csv", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("Trainings"));
    assert!(content.contains("Workshops"));
    assert!(content.contains("work_package"));
}

#[test]
fn test_export_json_single_project() {
    let data_dir = setup_data_dir("export_json_project");
    init_data(&data_dir);

    let out = temp_out("export_json_project", "json");

    kpit()
        .args([
            "--data-dir",
            &data_dir,
            "export",
            "--format",
            "json",
            "--project",
            "Project Alpha",
            "--file",
            &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("\"kpi\": \"Trainings\""));
    assert!(content.contains("\"project\": \"Project Alpha\""));
}

#[test]
fn test_export_xlsx_creates_workbook() {
    let data_dir = setup_data_dir("export_xlsx");
    init_data(&data_dir);

    let out = temp_out("export_xlsx", "xlsx");

    kpit()
        .args([
            "--data-dir", &data_dir, "export", "--format", "xlsx", "--file", &out,
        ])
        .assert()
        .success();

    let meta = fs::metadata(&out).expect("exported xlsx exists");
    assert!(meta.len() > 0);
}

#[test]
fn test_export_rejects_relative_path() {
    let data_dir = setup_data_dir("export_relative");
    init_data(&data_dir);

    kpit()
        .args([
            "--data-dir",
            &data_dir,
            "export",
            "--format",
            "csv",
            "--file",
            "relative_out.csv",
        ])
        .assert()
        .failure();
}

#[test]
fn test_export_force_overwrites_existing_file() {
    let data_dir = setup_data_dir("export_force");
    init_data(&data_dir);

    let out = temp_out("export_force", "csv");
    fs::write(&out, "stale").expect("seed existing file");

    kpit()
        .args([
            "--data-dir", &data_dir, "export", "--format", "csv", "--file", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("Trainings"));
}

#[test]
fn test_backup_compressed() {
    let data_dir = setup_data_dir("backup_zip");
    init_data(&data_dir);

    let out = temp_out("backup_zip", "zip");

    kpit()
        .args([
            "--data-dir", &data_dir, "backup", "--file", &out, "--compress",
        ])
        .assert()
        .success();

    let meta = fs::metadata(&out).expect("backup archive exists");
    assert!(meta.len() > 0);
}
