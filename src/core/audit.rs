//! Append-only operations trail.
//!
//! Every successful write operation leaves a line in an audit CSV inside the
//! data directory; `log --print` renders it.

use crate::errors::AppResult;
use ansi_term::Colour;
use chrono::Local;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

pub const AUDIT_FILE: &str = "audit_log.csv";

pub fn audit_file(data_dir: &Path) -> PathBuf {
    data_dir.join(AUDIT_FILE)
}

/// Append one audit line (timestamp, operation, target, message).
/// Best-effort callers may ignore the result; the write itself must not
/// take the original operation down.
pub fn audit(data_dir: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    std::fs::create_dir_all(data_dir)?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(audit_file(data_dir))?;

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    let now = Local::now().to_rfc3339();
    wtr.write_record([now.as_str(), operation, target, message])?;
    wtr.flush()?;

    Ok(())
}

fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

/// ANSI color per operation kind.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "edit" => Colour::Yellow,
        "export" => Colour::Cyan,
        "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(data_dir: &Path) -> AppResult<()> {
        let path = audit_file(data_dir);

        if !path.exists() {
            println!("No audit entries yet.");
            return Ok(());
        }

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&path)?;

        let mut entries: Vec<(usize, String, String, String, String)> = Vec::new();
        for (idx, row) in rdr.records().enumerate() {
            let row = row?;
            let raw_date = row.get(0).unwrap_or("").to_string();
            let operation = row.get(1).unwrap_or("").to_string();
            let target = row.get(2).unwrap_or("").to_string();
            let message = row.get(3).unwrap_or("").to_string();

            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            // Single op+target column
            let op_target = if target.is_empty() {
                operation.clone()
            } else {
                format!("{operation} ({target})")
            };

            entries.push((idx + 1, date, operation, op_target, message));
        }

        if entries.is_empty() {
            println!("No audit entries yet.");
            return Ok(());
        }

        // Max width capped at 60
        let raw_max = entries
            .iter()
            .map(|(_, _, _, op_target, _)| op_target.len())
            .max()
            .unwrap_or(10);
        let op_w = raw_max.min(60);

        let id_w = entries
            .iter()
            .map(|(id, _, _, _, _)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries
            .iter()
            .map(|(_, date, _, _, _)| date.len())
            .max()
            .unwrap_or(10);

        println!("📜 Audit log:\n");

        for (id, date, operation_raw, op_target, message) in entries {
            let color = color_for_operation(&operation_raw);

            let (op, rest) = if let Some((op_part, rest)) = op_target.split_once(' ') {
                (op_part.to_string(), Some(rest.to_string()))
            } else {
                (op_target.clone(), None)
            };

            let mut colored = color.paint(op).to_string();
            if let Some(r) = rest {
                colored.push(' ');
                colored.push_str(&r);
            }

            // Truncate to 60 visible chars, ANSI excluded from the count
            let visible = strip_ansi(&colored);
            let truncated_visible = if visible.len() > 60 {
                let mut s = visible.chars().take(57).collect::<String>();
                s.push_str("...");
                s
            } else {
                visible.clone()
            };

            // Re-color only the leading operation word
            let recolored = {
                if let Some((op_word, rest)) = truncated_visible.split_once(' ') {
                    format!("{} {}", color.paint(op_word), rest)
                } else {
                    color.paint(truncated_visible.as_str()).to_string()
                }
            };

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&recolored).len()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                recolored,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
