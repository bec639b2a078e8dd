//! Project unlock gate.
//!
//! A single shared password per project, compared in plain text against the
//! config mapping. Unlock state lives in an explicit per-session context
//! object and dies with the process. This deters casual edits; it is not a
//! security boundary.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use std::collections::HashSet;
use std::io::{self, Write};

#[derive(Debug, Default)]
pub struct Session {
    unlocked: HashSet<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Is the project already unlocked in this session?
    pub fn authenticate(&self, project: &str) -> bool {
        self.unlocked.contains(project)
    }

    /// Compare `password` against the configured mapping; on match the
    /// project stays unlocked for the rest of the session.
    pub fn login(&mut self, cfg: &Config, project: &str, password: &str) -> bool {
        match cfg.project_passwords.get(project) {
            Some(expected) if expected == password => {
                self.unlocked.insert(project.to_string());
                true
            }
            _ => false,
        }
    }

    /// Gate used by the write commands.
    ///
    /// A project with no configured password is open. Otherwise the supplied
    /// `--password` value is tried first, then an interactive prompt.
    pub fn unlock(
        &mut self,
        cfg: &Config,
        project: &str,
        password: Option<&str>,
    ) -> AppResult<()> {
        if self.authenticate(project) || !cfg.project_passwords.contains_key(project) {
            return Ok(());
        }

        let supplied = match password {
            Some(p) => p.to_string(),
            None => prompt_password(project)?,
        };

        if self.login(cfg, project, &supplied) {
            success(format!("Authenticated for {project}."));
            Ok(())
        } else {
            Err(AppError::InvalidPassword(project.to_string()))
        }
    }
}

fn prompt_password(project: &str) -> AppResult<String> {
    print!("🔑 Password for '{project}': ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer).map_err(AppError::from)?;
    Ok(answer.trim_end_matches(['\r', '\n']).to_string())
}
