//! Config file upgrades: detect keys missing from an older file and
//! rewrite it with defaults filled in.

use super::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys every current config file carries.
pub const KNOWN_KEYS: [&str; 4] = ["database", "default_user", "separator_char", "date_format"];

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path)?;
    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
    }
}

/// Known keys absent from the file at `path`.
pub fn missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let map = read_mapping(path)?;
    Ok(KNOWN_KEYS
        .iter()
        .filter(|k| !map.contains_key(**k))
        .map(|k| k.to_string())
        .collect())
}

/// Keys in the file that this version does not understand.
pub fn unknown_fields(path: &Path) -> AppResult<Vec<String>> {
    let map = read_mapping(path)?;
    Ok(map
        .keys()
        .filter_map(Value::as_str)
        .filter(|k| !KNOWN_KEYS.contains(k))
        .map(str::to_string)
        .collect())
}

/// Print the result of a config check.
pub fn check_config_file(path: &Path) -> AppResult<()> {
    if !path.exists() {
        warning(format!(
            "No configuration file at {} (defaults in use). Run `habitlog init`.",
            path.display()
        ));
        return Ok(());
    }

    let missing = missing_fields(path)?;
    let unknown = unknown_fields(path)?;

    if missing.is_empty() && unknown.is_empty() {
        success("Configuration file is complete.");
        return Ok(());
    }
    if !missing.is_empty() {
        warning(format!("Missing fields: {}", missing.join(", ")));
        info("Run `habitlog config --migrate` to add them with default values.");
    }
    if !unknown.is_empty() {
        warning(format!("Unknown fields (ignored): {}", unknown.join(", ")));
    }
    Ok(())
}

/// Rewrite the file with every missing key set to its default.
/// Returns false when nothing had to change.
pub fn migrate_config_file(path: &Path) -> AppResult<bool> {
    if !path.exists() {
        return Err(AppError::Config(format!(
            "configuration file not found: {}",
            path.display()
        )));
    }

    let missing = missing_fields(path)?;
    let unknown = unknown_fields(path)?;
    if missing.is_empty() && unknown.is_empty() {
        return Ok(false);
    }

    // serde defaults fill the gaps, unknown keys are dropped
    let cfg = Config::load_from(path)?;
    cfg.save_to(path)?;

    for key in &missing {
        info(format!("Added '{}' with its default value", key));
    }
    for key in &unknown {
        info(format!("Removed unknown key '{}'", key));
    }
    Ok(true)
}
