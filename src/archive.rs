use anyhow::{Context, Result};
use chrono::{Datelike, Timelike};
use std::fs::{self, File};
use std::io;
use std::path::Path;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Build `<dir>.zip` from every file currently inside `dir`, each stored
/// under the entry path `<folder_name>/<filename>`, deflated at the best
/// compression level. An existing zip at `zip_path` is replaced.
///
/// Returns the size in bytes of the finished archive.
pub fn zip_group_dir(dir: &Path, folder_name: &str, zip_path: &Path) -> Result<u64> {
    if zip_path.exists() {
        fs::remove_file(zip_path)
            .context(format!("Failed to delete old archive: {}", zip_path.display()))?;
    }

    let file = File::create(zip_path)
        .context(format!("Failed to create archive file: {}", zip_path.display()))?;
    let mut zip = ZipWriter::new(file);

    // Stamp entries with the current local time
    let now = chrono::Local::now();
    let options: FileOptions<'_, ()> = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(9))
        .unix_permissions(0o644)
        .last_modified_time(
            zip::DateTime::from_date_and_time(
                now.year() as u16,
                now.month() as u8,
                now.day() as u8,
                now.hour() as u8,
                now.minute() as u8,
                now.second() as u8,
            )
            .unwrap_or_default(),
        );

    // Archive whatever is in the directory now, moved this run or not
    let entries = fs::read_dir(dir)
        .context(format!("Failed to read group directory: {}", dir.display()))?;
    for entry in entries {
        let entry = entry.context("Failed to read group directory entry")?;
        if !entry
            .file_type()
            .context("Failed to read entry file type")?
            .is_file()
        {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        zip.start_file(format!("{folder_name}/{name}"), options)
            .context(format!("Failed to start archive entry: {name}"))?;

        let mut src = File::open(entry.path())
            .context(format!("Failed to open file for archiving: {name}"))?;
        io::copy(&mut src, &mut zip)
            .context(format!("Failed to write archive entry: {name}"))?;
    }

    zip.finish().context("Failed to finalize archive")?;

    let zip_size = fs::metadata(zip_path)
        .context(format!("Failed to stat archive: {}", zip_path.display()))?
        .len();
    Ok(zip_size)
}
