use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Which record store implementation to open at startup.
/// All core logic goes through the `KpiStore` trait and never depends on
/// which backend is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// One delimited table per project under `data_dir`.
    Csv,
    /// Hosted relational table reachable over HTTP (endpoint + key).
    Rest,
}

fn default_backend() -> Backend {
    Backend::Csv
}

fn default_chart_width() -> usize {
    40
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the per-project CSV tables and the audit log.
    pub data_dir: String,
    #[serde(default = "default_backend")]
    pub backend: Backend,
    /// Base URL of the hosted records table (REST backend only).
    #[serde(default)]
    pub rest_endpoint: String,
    /// API key sent with every request (REST backend only).
    #[serde(default)]
    pub rest_api_key: String,
    /// Shared password per project. A project without an entry here is
    /// open for editing; the gate only deters casual edits, it is not a
    /// security boundary.
    #[serde(default)]
    pub project_passwords: BTreeMap<String, String>,
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: Self::data_dir_default().to_string_lossy().to_string(),
            backend: default_backend(),
            rest_endpoint: String::new(),
            rest_api_key: String::new(),
            project_passwords: BTreeMap::new(),
            chart_width: default_chart_width(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("kpitracker")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".kpitracker")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("kpitracker.conf")
    }

    /// Default location of the per-project CSV tables
    pub fn data_dir_default() -> PathBuf {
        Self::config_dir().join("kpi_data")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Initialize configuration file and data directory
    pub fn init_all(custom_data_dir: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Data dir: user provided or default
        let data_dir = if let Some(name) = custom_data_dir {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::data_dir_default()
        };

        let config = Config {
            data_dir: data_dir.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        fs::create_dir_all(&data_dir)?;
        println!("✅ Data dir:    {:?}", data_dir);

        Ok(())
    }

    /// Missing or suspicious fields, reported by `config --check`.
    pub fn check(&self) -> Vec<String> {
        let mut findings = Vec::new();

        if self.data_dir.trim().is_empty() {
            findings.push("data_dir is empty".to_string());
        }
        if self.backend == Backend::Rest {
            if self.rest_endpoint.trim().is_empty() {
                findings.push("backend is 'rest' but rest_endpoint is empty".to_string());
            }
            if self.rest_api_key.trim().is_empty() {
                findings.push("backend is 'rest' but rest_api_key is empty".to_string());
            }
        }
        if self.project_passwords.is_empty() {
            findings.push(
                "no project passwords configured: every project is open for editing".to_string(),
            );
        }
        if self.chart_width < 10 {
            findings.push("chart_width below 10 makes bars unreadable".to_string());
        }

        findings
    }
}
