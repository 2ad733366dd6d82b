mod csv;
mod fs_utils;
mod json;
mod model;

pub(crate) use fs_utils::ensure_writable;
pub use model::HabitExport;

use crate::errors::AppResult;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Helper comune per messaggi di completamento export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn write(&self, path: &Path, rows: &[HabitExport]) -> AppResult<()> {
        match self {
            ExportFormat::Csv => csv::write_csv(path, rows),
            ExportFormat::Json => json::write_json(path, rows),
        }
    }
}
