// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::RecordExport;
use crate::export::xlsx::export_xlsx;
use crate::store::KpiStore;
use crate::ui::messages::warning;
use crate::utils::path::is_absolute;
use std::io;
use std::path::Path;

/// High-level export flow: load, flatten, dispatch on format.
pub struct ExportLogic;

impl ExportLogic {
    /// Export one project's records, or every project's when `project`
    /// is `None`.
    ///
    /// - `file`: absolute path of the output file
    /// - `force`: overwrite without asking
    pub fn export(
        store: &dyn KpiStore,
        project: Option<&str>,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !is_absolute(file) {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let records = match project {
            Some(p) => store.load(p)?,
            None => store.load_all()?,
        };

        if records.is_empty() {
            warning("No records found for the selected project. Nothing to export.");
            return Ok(());
        }

        let flat: Vec<RecordExport> = records.iter().map(RecordExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&flat, path)?,
            ExportFormat::Json => export_json(&flat, path)?,
            ExportFormat::Xlsx => export_xlsx(&flat, path)?,
        }

        Ok(())
    }
}
