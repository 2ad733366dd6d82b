use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, info, success, warning};
use crate::utils::archive::zip_single_file;
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database to `dest_file`, optionally replacing the copy with
    /// a zip archive. Returns the path written, or None if the user declined
    /// to overwrite an existing file.
    pub fn backup(cfg: &Config, dest_file: &str, compress: bool) -> AppResult<Option<PathBuf>> {
        let src = Path::new(&cfg.database);
        let dest = Path::new(dest_file);

        if !src.exists() {
            return Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )));
        }

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let final_path = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };

        if final_path.exists()
            && !confirm(format!(
                "The file '{}' already exists. Overwrite?",
                final_path.display()
            ))
        {
            info("Backup cancelled.");
            return Ok(None);
        }

        if compress {
            let entry = src
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| "habitlog.sqlite".to_string());
            zip_single_file(src, &final_path, &entry)?;
        } else {
            fs::copy(src, &final_path)?;
        }

        success(format!("Backup created: {}", final_path.display()));

        if let Ok(conn) = Connection::open(src)
            && let Err(e) = crate::db::log::record(
                &conn,
                "backup",
                &final_path.to_string_lossy(),
                if compress {
                    "Backup created and compressed"
                } else {
                    "Backup created"
                },
            )
        {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok(Some(final_path))
    }
}
