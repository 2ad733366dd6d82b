use crate::core::habit::HabitLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::{ExportFormat, HabitExport, ensure_writable, notify_export_success};
use crate::ui::messages::{info, warning};
use std::fs;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the habits of `owner` to `file`. Returns the number of rows.
    pub fn export(
        pool: &mut DbPool,
        owner: &str,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let habits = HabitLogic::list(pool, owner)?;
        if habits.is_empty() {
            info(format!("No habits for {} — writing an empty file.", owner));
        }

        let rows: Vec<HabitExport> = habits.iter().map(HabitExport::from).collect();
        format.write(path, &rows)?;

        notify_export_success(&format.as_str().to_uppercase(), path);

        if let Err(e) = crate::db::log::record(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!("Exported {} habit(s) of {} as {}", rows.len(), owner, format.as_str()),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok(rows.len())
    }
}
