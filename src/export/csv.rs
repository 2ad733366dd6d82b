use super::HabitExport;
use crate::errors::AppResult;
use ::csv::Writer;
use std::path::Path;

/// Header row comes from the serde field names of `HabitExport`.
pub fn write_csv(path: &Path, rows: &[HabitExport]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}
