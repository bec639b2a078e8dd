#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn kpit() -> Command {
    cargo_bin_cmd!("kpitracker")
}

/// Create a unique test data dir inside the system temp dir and remove any
/// existing content
pub fn setup_data_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_kpitracker_data", name));
    let data_dir = path.to_string_lossy().to_string();
    fs::remove_dir_all(&data_dir).ok();
    data_dir
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Add a small dataset useful for many tests (two KPIs, one of them with
/// two observations)
pub fn init_data(data_dir: &str) {
    kpit()
        .args([
            "--data-dir",
            data_dir,
            "--test",
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
            "40",
            "--achieved",
            "2025-03-01",
            "--start",
            "2025-01-01",
            "--end",
            "2025-12-31",
        ])
        .assert()
        .success();

    kpit()
        .args([
            "--data-dir",
            data_dir,
            "--test",
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
            "55",
            "--achieved",
            "2025-06-01",
            "--start",
            "2025-01-01",
            "--end",
            "2025-12-31",
        ])
        .assert()
        .success();

    kpit()
        .args([
            "--data-dir",
            data_dir,
            "--test",
            "add",
            "--project",
            "Project Alpha",
            "--kpi",
            "Workshops",
            "--wp",
            "WP2",
            "--target",
            "10",
            "--current",
            "10",
            "--achieved",
            "2025-05-20",
            "--male",
            "12",
            "--female",
            "18",
            "--start",
            "2025-01-01",
            "--end",
            "2025-06-30",
        ])
        .assert()
        .success();
}
