use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_time_zone;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate; // use submodule at src/config/migrate.rs

/// Default civil time zone for all clock arithmetic and rendering.
pub const DEFAULT_TIMEZONE: &str = "Europe/London";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_owner_id")]
    pub owner_id: String,
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u64,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}
fn default_owner_id() -> String {
    env::var("USER")
        .or_else(|_| env::var("USERNAME"))
        .unwrap_or_else(|_| "staff".to_string())
}
fn default_refresh_interval() -> u64 {
    1
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            timezone: default_timezone(),
            owner_id: default_owner_id(),
            refresh_interval_secs: default_refresh_interval(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("timeledger")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".timeledger")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("timeledger.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("timeledger.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)
    }

    /// Parsed civil time zone for clock math and rendering.
    pub fn time_zone(&self) -> AppResult<Tz> {
        parse_time_zone(&self.timezone)
    }

    /// Initialize configuration directory and file, and return the database path.
    ///
    /// `cfg` is the resolved configuration (file values plus command-line
    /// overrides); that is what gets saved. In test mode nothing is written
    /// to the config file.
    pub fn init_all(cfg: &Config, is_test: bool) -> AppResult<PathBuf> {
        // refuse to persist a zone nothing else could use
        cfg.time_zone()?;

        let db_path = PathBuf::from(&cfg.database);

        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            cfg.save_to(&Self::config_file())?;
            println!("✅ Config file: {}", Self::config_file().display());
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(db_path)
    }
}
