//! Store contract tests against the CSV backend, plus the latest-per-KPI
//! query rules.

use chrono::NaiveDate;
use kpitracker::core::query::{kpi_names, latest_per_kpi};
use kpitracker::models::record::{KpiRecord, RecordDraft, RecordPatch};
use kpitracker::store::{CsvStore, KpiStore};
use std::env;
use std::fs;
use std::path::PathBuf;

fn temp_data_dir(name: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("{}_kpitracker_store", name));
    fs::remove_dir_all(&path).ok();
    path
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid date")
}

fn sample_draft() -> RecordDraft {
    RecordDraft {
        kpi: "Trainings".into(),
        work_package: "WP1".into(),
        target: 100.0,
        current_value: 40.0,
        achievement_date: d(2025, 3, 1),
        male_count: Some(12),
        female_count: Some(18),
        comments: "first quarter".into(),
        start_date: d(2025, 1, 1),
        end_date: d(2025, 12, 31),
    }
}

#[test]
fn append_then_load_round_trips() {
    let mut store = CsvStore::new(temp_data_dir("round_trip"));
    let draft = sample_draft();

    let stored = store.append("Project Alpha", &draft).expect("append");
    assert_eq!(stored.id, 0);

    let records = store.load("Project Alpha").expect("load");
    assert_eq!(records.len(), 1);

    let rec = &records[0];
    assert_eq!(rec.project, "Project Alpha");
    assert_eq!(rec.kpi, draft.kpi);
    assert_eq!(rec.work_package, draft.work_package);
    assert_eq!(rec.target, draft.target);
    assert_eq!(rec.current_value, draft.current_value);
    assert_eq!(rec.achievement_date, draft.achievement_date);
    assert_eq!(rec.male_count, draft.male_count);
    assert_eq!(rec.female_count, draft.female_count);
    assert_eq!(rec.comments, draft.comments);
    assert_eq!(rec.start_date, draft.start_date);
    assert_eq!(rec.end_date, draft.end_date);
    // Timestamp and id are store-assigned
    assert_eq!(rec.created_at, stored.created_at);
}

#[test]
fn append_assigns_sequential_row_ids() {
    let mut store = CsvStore::new(temp_data_dir("sequential_ids"));

    let first = store.append("Project Alpha", &sample_draft()).expect("append");
    let second = store.append("Project Alpha", &sample_draft()).expect("append");

    assert_eq!(first.id, 0);
    assert_eq!(second.id, 1);
}

#[test]
fn update_changes_only_supplied_fields() {
    let mut store = CsvStore::new(temp_data_dir("partial_update"));
    store.append("Project Alpha", &sample_draft()).expect("append");

    let before = store.load("Project Alpha").expect("load")[0].clone();

    let patch = RecordPatch {
        current_value: Some(65.0),
        comments: Some("mid-year review".into()),
        ..Default::default()
    };

    let updated = store.update("Project Alpha", 0, &patch).expect("update");

    // Supplied fields rewritten
    assert_eq!(updated.current_value, 65.0);
    assert_eq!(updated.comments, "mid-year review");

    // Everything else untouched
    assert_eq!(updated.kpi, before.kpi);
    assert_eq!(updated.work_package, before.work_package);
    assert_eq!(updated.target, before.target);
    assert_eq!(updated.achievement_date, before.achievement_date);
    assert_eq!(updated.male_count, before.male_count);
    assert_eq!(updated.female_count, before.female_count);
    assert_eq!(updated.start_date, before.start_date);
    assert_eq!(updated.end_date, before.end_date);

    // Timestamp refreshed (never moves backwards)
    assert!(updated.created_at >= before.created_at);

    // And the rewrite is persisted
    let reloaded = store.load("Project Alpha").expect("load")[0].clone();
    assert_eq!(reloaded.current_value, 65.0);
    assert_eq!(reloaded.comments, "mid-year review");
}

#[test]
fn update_unknown_id_fails() {
    let mut store = CsvStore::new(temp_data_dir("unknown_id"));
    store.append("Project Alpha", &sample_draft()).expect("append");

    let patch = RecordPatch {
        current_value: Some(1.0),
        ..Default::default()
    };

    assert!(store.update("Project Alpha", 7, &patch).is_err());
    assert!(store.update("Project Alpha", -1, &patch).is_err());
}

#[test]
fn list_projects_restores_display_names() {
    let mut store = CsvStore::new(temp_data_dir("list_projects"));

    store.append("Project Alpha", &sample_draft()).expect("append");
    store.append("Project Beta", &sample_draft()).expect("append");

    let projects = store.list_projects().expect("list");
    assert_eq!(projects, vec!["Project Alpha", "Project Beta"]);
}

#[test]
fn load_all_unions_every_project() {
    let mut store = CsvStore::new(temp_data_dir("load_all"));

    store.append("Project Alpha", &sample_draft()).expect("append");
    store.append("Project Beta", &sample_draft()).expect("append");
    store.append("Project Beta", &sample_draft()).expect("append");

    let all = store.load_all().expect("load_all");
    assert_eq!(all.len(), 3);
    assert_eq!(all.iter().filter(|r| r.project == "Project Beta").count(), 2);
}

#[test]
fn load_missing_project_is_empty_not_error() {
    let store = CsvStore::new(temp_data_dir("missing_project"));
    let records = store.load("Nowhere").expect("load");
    assert!(records.is_empty());
}

// ---------------------------------------------------------------------------
// latest_per_kpi
// ---------------------------------------------------------------------------

fn record(kpi: &str, current: f64, ts: &str) -> KpiRecord {
    KpiRecord {
        id: 0,
        project: "Project Alpha".into(),
        kpi: kpi.into(),
        work_package: "WP1".into(),
        target: 100.0,
        current_value: current,
        achievement_date: d(2025, 3, 1),
        male_count: None,
        female_count: None,
        comments: String::new(),
        start_date: d(2025, 1, 1),
        end_date: d(2025, 12, 31),
        created_at: chrono::NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S")
            .expect("valid timestamp"),
    }
}

#[test]
fn latest_per_kpi_picks_newest_timestamp() {
    let records = vec![
        record("Trainings", 40.0, "2025-03-01 10:00:00"),
        record("Workshops", 5.0, "2025-03-02 09:00:00"),
        record("Trainings", 55.0, "2025-06-01 10:00:00"),
    ];

    let latest = latest_per_kpi(&records);
    assert_eq!(latest.len(), 2);
    assert_eq!(latest[0].kpi, "Trainings");
    assert_eq!(latest[0].current_value, 55.0);
    assert_eq!(latest[1].kpi, "Workshops");
}

#[test]
fn latest_per_kpi_breaks_timestamp_ties_by_store_order() {
    let records = vec![
        record("Trainings", 40.0, "2025-06-01 10:00:00"),
        record("Trainings", 55.0, "2025-06-01 10:00:00"),
    ];

    let latest = latest_per_kpi(&records);
    assert_eq!(latest.len(), 1);
    // Later store row wins the tie
    assert_eq!(latest[0].current_value, 55.0);
}

#[test]
fn kpi_names_keep_first_seen_order() {
    let records = vec![
        record("Workshops", 1.0, "2025-03-01 10:00:00"),
        record("Trainings", 1.0, "2025-03-02 10:00:00"),
        record("Workshops", 2.0, "2025-03-03 10:00:00"),
    ];

    assert_eq!(kpi_names(&records), vec!["Workshops", "Trainings"]);
}
