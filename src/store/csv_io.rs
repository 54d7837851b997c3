//! Reading and writing the backing CSV file.

use crate::errors::{AppError, AppResult};
use crate::models::record::{HEADER, Record};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Read every row of `path`, in file order.
pub(crate) fn read_records(path: &Path) -> AppResult<Vec<Record>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;

    let mut records = Vec::new();
    for row in rdr.deserialize() {
        let rec: Record = row?;
        records.push(rec);
    }

    Ok(records)
}

/// Encode header + rows into the exact bytes that end up on disk.
pub(crate) fn encode(records: &[Record]) -> AppResult<Vec<u8>> {
    // Header is written by hand so an empty roster still gets one.
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(Vec::new());

    wtr.write_record(HEADER)?;
    for rec in records {
        wtr.serialize(rec)?;
    }

    wtr.into_inner().map_err(|e| AppError::Io(e.into_error()))
}

/// Replace `path` with header + rows.
///
/// The content goes to a sibling temp file first and is renamed over the
/// target, so readers only ever see a fully written file.
pub(crate) fn write_records(path: &Path, records: &[Record]) -> AppResult<()> {
    let bytes = encode(records)?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let tmp = temp_path(path);
    {
        let mut file = File::create(&tmp)?;
        file.write_all(&bytes)?;
        file.sync_all()?;
    }

    if let Err(e) = fs::rename(&tmp, path) {
        fs::remove_file(&tmp).ok();
        return Err(e.into());
    }

    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
