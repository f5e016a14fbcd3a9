use crate::config::SortConfig;
use crate::error::SortError;
use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime};
use std::fs;
use std::path::{Path, PathBuf};

/// One matched file, with its grouping date derived up front
#[derive(Debug, Clone)]
pub struct FileRecord {
    pub path: PathBuf,
    /// Last-write time in local time
    pub last_write: NaiveDateTime,
    /// Calendar date the file is attributed to after the offset shift
    pub shifted_date: NaiveDate,
}

/// Compute the calendar date a timestamp belongs to once the offset is
/// subtracted. A file written at 04:59 with a 5 hour offset lands on the
/// previous day; one written at exactly 05:00 stays on its own day.
pub fn shifted_date(last_write: NaiveDateTime, offset: Duration) -> NaiveDate {
    (last_write - offset).date()
}

/// Case-insensitive suffix match against the accepted extension list
pub fn matches_extension(file_name: &str, extensions: &[String]) -> bool {
    let lower = file_name.to_lowercase();
    extensions
        .iter()
        .any(|ext| lower.ends_with(&ext.to_lowercase()))
}

/// Enumerate the directory's direct file entries (non-recursive), keep the
/// ones matching the accepted extensions, and derive a [`FileRecord`] for
/// each.
pub fn scan(dir: &Path, config: &SortConfig) -> Result<Vec<FileRecord>, SortError> {
    let entries = fs::read_dir(dir).map_err(|source| SortError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut records = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| SortError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            // Non-UTF-8 names can never match the extension list
            continue;
        };
        if !matches_extension(name, &config.extensions) {
            continue;
        }

        let path = entry.path();
        let metadata = entry.metadata().map_err(|source| SortError::Metadata {
            path: path.clone(),
            source,
        })?;
        if !metadata.is_file() {
            continue;
        }

        let modified = metadata.modified().map_err(|source| SortError::Metadata {
            path: path.clone(),
            source,
        })?;
        let last_write = DateTime::<Local>::from(modified).naive_local();

        records.push(FileRecord {
            shifted_date: shifted_date(last_write, config.offset),
            last_write,
            path,
        });
    }

    Ok(records)
}

#[cfg(test)]
mod tests;
