//! Zip helpers shared by `backup` and the pre-migration safety copy.

use crate::errors::AppResult;
use std::fs::File;
use std::io;
use std::path::Path;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Write `src` into a new archive at `zip_path` as a single deflated entry.
pub fn zip_single_file(src: &Path, zip_path: &Path, entry_name: &str) -> AppResult<()> {
    let file = File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file(entry_name, options).map_err(io::Error::other)?;

    let mut input = File::open(src)?;
    io::copy(&mut input, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    Ok(())
}
