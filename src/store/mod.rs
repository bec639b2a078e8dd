//! Record persistence behind one interface.
//!
//! Two interchangeable backends are selected at startup from the config;
//! nothing outside this module depends on which one is active. Any I/O,
//! network or schema failure is converted into `AppError` at this boundary
//! and surfaced to the user; there is no automatic retry.

pub mod csv_store;
pub mod rest_store;

pub use csv_store::CsvStore;
pub use rest_store::RestStore;

use crate::config::{Backend, Config};
use crate::errors::{AppError, AppResult};
use crate::models::record::{KpiRecord, RecordDraft, RecordPatch};
use crate::utils::path::expand_tilde;

pub trait KpiStore {
    /// Assign a timestamp and identifier, write the record, return it
    /// as stored.
    fn append(&mut self, project: &str, draft: &RecordDraft) -> AppResult<KpiRecord>;

    /// All records for one project, in store order.
    fn load(&self, project: &str) -> AppResult<Vec<KpiRecord>>;

    /// Union of records across all projects.
    fn load_all(&self) -> AppResult<Vec<KpiRecord>>;

    /// Rewrite only the supplied fields on the record matching `id`,
    /// refreshing its timestamp. Fails if the identifier does not exist
    /// or belongs to a different project.
    fn update(&mut self, project: &str, id: i64, patch: &RecordPatch) -> AppResult<KpiRecord>;

    /// Distinct project names known to the store.
    fn list_projects(&self) -> AppResult<Vec<String>>;
}

/// Open the backend configured at startup.
pub fn open_store(cfg: &Config) -> AppResult<Box<dyn KpiStore>> {
    match cfg.backend {
        Backend::Csv => Ok(Box::new(CsvStore::new(expand_tilde(&cfg.data_dir)))),
        Backend::Rest => {
            if cfg.rest_endpoint.trim().is_empty() {
                return Err(AppError::Config(
                    "backend is 'rest' but rest_endpoint is not configured".into(),
                ));
            }
            Ok(Box::new(RestStore::new(
                cfg.rest_endpoint.clone(),
                cfg.rest_api_key.clone(),
            )?))
        }
    }
}
