//! Configuration file upgrades.
//!
//! Older config files may lack keys added later (`timezone`, `owner_id`,
//! `refresh_interval_secs`, ...). Loading still works thanks to serde
//! defaults, but `config --check` reports them and `config --migrate`
//! writes them back so the file documents the values actually in use.

use super::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let yaml: Value = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;

    match yaml {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{}: expected a YAML mapping",
            path.display()
        ))),
    }
}

fn default_mapping() -> AppResult<Mapping> {
    match serde_yaml::to_value(Config::default()) {
        Ok(Value::Mapping(map)) => Ok(map),
        _ => Err(AppError::Config("cannot serialize default config".into())),
    }
}

/// Keys present in the default configuration but missing from the file.
pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let current = read_mapping(path)?;
    let defaults = default_mapping()?;

    Ok(defaults
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add every missing key with its default value. Existing values are never
/// touched. Returns the keys that were added.
pub fn migrate_config_file(path: &Path) -> AppResult<Vec<String>> {
    let mut current = read_mapping(path)?;
    let defaults = default_mapping()?;
    let mut added = Vec::new();

    for (key, value) in defaults {
        if !current.contains_key(&key) {
            if let Some(k) = key.as_str() {
                added.push(k.to_string());
            }
            current.insert(key, value);
        }
    }

    if added.is_empty() {
        info("Configuration file is up to date.");
        return Ok(added);
    }

    let serialized =
        serde_yaml::to_string(&Value::Mapping(current)).map_err(|_| AppError::ConfigSave)?;
    fs::write(path, serialized).map_err(|_| AppError::ConfigSave)?;

    tracing::info!(path = %path.display(), keys = ?added, "config migrated");
    success(format!("Added missing configuration keys: {}", added.join(", ")));

    Ok(added)
}
