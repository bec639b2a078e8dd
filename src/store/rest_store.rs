//! Hosted-table record store.
//!
//! Talks to a PostgREST-style endpoint (endpoint + API key) holding one
//! relational table with the lower-case column set `project, kpi,
//! work_package, target, current_value, achievement_date, male_count,
//! female_count, comments, start_date, end_date, created_at, id`, where
//! `id` is the store-assigned surrogate key used for updates.
//!
//! The client is blocking: the whole application is one synchronous pass
//! per user interaction, so there is nothing to overlap with.

use crate::errors::{AppError, AppResult};
use crate::models::record::{KpiRecord, RecordDraft, RecordPatch};
use crate::store::KpiStore;
use crate::utils::date;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct RestStore {
    client: reqwest::blocking::Client,
    endpoint: String,
    api_key: String,
}

#[derive(Serialize)]
struct WireInsert<'a> {
    project: &'a str,
    kpi: &'a str,
    work_package: &'a str,
    target: f64,
    current_value: f64,
    achievement_date: String,
    male_count: Option<u32>,
    female_count: Option<u32>,
    comments: &'a str,
    start_date: String,
    end_date: String,
    created_at: String,
}

#[derive(Debug, Deserialize)]
struct WireRow {
    id: i64,
    project: String,
    kpi: String,
    work_package: String,
    target: Option<f64>,
    current_value: Option<f64>,
    achievement_date: Option<String>,
    male_count: Option<u32>,
    female_count: Option<u32>,
    comments: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
    created_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireProject {
    project: String,
}

impl RestStore {
    pub fn new(endpoint: String, api_key: String) -> AppResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn request(&self, req: reqwest::blocking::RequestBuilder) -> reqwest::blocking::RequestBuilder {
        req.header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", &self.api_key))
    }

    fn check(resp: reqwest::blocking::Response) -> AppResult<reqwest::blocking::Response> {
        let status = resp.status();
        if status.is_success() {
            Ok(resp)
        } else {
            let body = resp.text().unwrap_or_default();
            Err(AppError::Storage(format!(
                "hosted table returned HTTP {status}: {}",
                body.chars().take(200).collect::<String>()
            )))
        }
    }
}

impl KpiStore for RestStore {
    fn append(&mut self, project: &str, draft: &RecordDraft) -> AppResult<KpiRecord> {
        let body = WireInsert {
            project,
            kpi: &draft.kpi,
            work_package: &draft.work_package,
            target: draft.target,
            current_value: draft.current_value,
            achievement_date: date::format_date(draft.achievement_date),
            male_count: draft.male_count,
            female_count: draft.female_count,
            comments: &draft.comments,
            start_date: date::format_date(draft.start_date),
            end_date: date::format_date(draft.end_date),
            created_at: date::format_timestamp(date::now()),
        };

        let resp = self
            .request(self.client.post(&self.endpoint))
            .header("Prefer", "return=representation")
            .json(&body)
            .send()?;

        let rows: Vec<WireRow> = Self::check(resp)?.json()?;
        rows.first()
            .map(record_from_wire)
            .ok_or_else(|| AppError::Storage("insert returned no representation".into()))
    }

    fn load(&self, project: &str) -> AppResult<Vec<KpiRecord>> {
        let resp = self
            .request(self.client.get(&self.endpoint))
            .query(&[
                ("project", format!("eq.{project}")),
                ("order", "id.asc".to_string()),
            ])
            .send()?;

        let rows: Vec<WireRow> = Self::check(resp)?.json()?;
        Ok(rows.iter().map(record_from_wire).collect())
    }

    fn load_all(&self) -> AppResult<Vec<KpiRecord>> {
        let resp = self
            .request(self.client.get(&self.endpoint))
            .query(&[("order", "id.asc")])
            .send()?;

        let rows: Vec<WireRow> = Self::check(resp)?.json()?;
        Ok(rows.iter().map(record_from_wire).collect())
    }

    fn update(&mut self, project: &str, id: i64, patch: &RecordPatch) -> AppResult<KpiRecord> {
        let mut body = serde_json::Map::new();
        if let Some(wp) = &patch.work_package {
            body.insert("work_package".into(), wp.clone().into());
        }
        if let Some(t) = patch.target {
            body.insert("target".into(), t.into());
        }
        if let Some(c) = patch.current_value {
            body.insert("current_value".into(), c.into());
        }
        if let Some(d) = patch.achievement_date {
            body.insert("achievement_date".into(), date::format_date(d).into());
        }
        if let Some(m) = patch.male_count {
            body.insert("male_count".into(), m.into());
        }
        if let Some(f) = patch.female_count {
            body.insert("female_count".into(), f.into());
        }
        if let Some(c) = &patch.comments {
            body.insert("comments".into(), c.clone().into());
        }
        if let Some(d) = patch.start_date {
            body.insert("start_date".into(), date::format_date(d).into());
        }
        if let Some(d) = patch.end_date {
            body.insert("end_date".into(), date::format_date(d).into());
        }
        // Every update refreshes the timestamp
        body.insert(
            "created_at".into(),
            date::format_timestamp(date::now()).into(),
        );

        let resp = self
            .request(self.client.patch(&self.endpoint))
            .query(&[
                ("id", format!("eq.{id}")),
                ("project", format!("eq.{project}")),
            ])
            .header("Prefer", "return=representation")
            .json(&serde_json::Value::Object(body))
            .send()?;

        let rows: Vec<WireRow> = Self::check(resp)?.json()?;
        rows.first()
            .map(record_from_wire)
            .ok_or_else(|| AppError::RecordNotFound {
                project: project.to_string(),
                id,
            })
    }

    fn list_projects(&self) -> AppResult<Vec<String>> {
        let resp = self
            .request(self.client.get(&self.endpoint))
            .query(&[("select", "project"), ("order", "project.asc")])
            .send()?;

        let rows: Vec<WireProject> = Self::check(resp)?.json()?;

        let mut projects: Vec<String> = Vec::new();
        for row in rows {
            if !projects.contains(&row.project) {
                projects.push(row.project);
            }
        }
        Ok(projects)
    }
}

fn record_from_wire(row: &WireRow) -> KpiRecord {
    let today = date::today();
    let fallback_ts = today.and_hms_opt(0, 0, 0).unwrap_or_default();

    KpiRecord {
        id: row.id,
        project: row.project.clone(),
        kpi: row.kpi.clone(),
        work_package: row.work_package.clone(),
        target: row.target.unwrap_or(0.0),
        current_value: row.current_value.unwrap_or(0.0),
        achievement_date: date::parse_date_or(row.achievement_date.as_deref().unwrap_or(""), today),
        male_count: row.male_count,
        female_count: row.female_count,
        comments: row.comments.clone().unwrap_or_default(),
        start_date: date::parse_date_or(row.start_date.as_deref().unwrap_or(""), today),
        end_date: date::parse_date_or(row.end_date.as_deref().unwrap_or(""), today),
        created_at: date::parse_timestamp_or(
            row.created_at.as_deref().unwrap_or(""),
            fallback_ts,
        ),
    }
}
