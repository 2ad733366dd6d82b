use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_user")]
    pub default_user: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_user() -> String {
    env::var("USER")
        .or_else(|_| env::var("USERNAME"))
        .ok()
        .filter(|u| !u.trim().is_empty())
        .unwrap_or_else(|| "me".to_string())
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            default_user: default_user(),
            separator_char: default_separator_char(),
            date_format: default_date_format(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("habitlog")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".habitlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("habitlog.conf")
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("habitlog.sqlite")
    }

    /// First character of `separator_char`, `-` when empty.
    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }

    /// Parse a config file as written on disk, without path expansion.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        let mut cfg = if path.exists() {
            Self::load_from(&path)?
        } else {
            Self::default()
        };

        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// Resolve a `--db` value: `~` is expanded, relative names live in the
    /// config directory.
    pub fn resolve_db_path(name: &str) -> PathBuf {
        let p = expand_tilde(name);
        if p.is_absolute() {
            p
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Create the config directory, the config file (unless `is_test`) and
    /// an empty database file. Returns the database path.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<String> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = match custom_db {
            Some(name) => Self::resolve_db_path(name),
            None => Self::database_file(),
        };

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            config.save_to(&Self::config_file())?;
            println!("✅ Config file: {}", Self::config_file().display());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(config.database)
    }
}
