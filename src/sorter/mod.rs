use crate::archive;
use crate::config::SortConfig;
use crate::error::SortError;
use crate::grouper::{group_by_date, Group};
use crate::scanner::scan;
use chrono::NaiveDate;
use rayon::prelude::*;
use std::fs;
use std::path::Path;

/// What happened to one group
#[derive(Debug)]
pub struct GroupOutcome {
    pub date: NaiveDate,
    pub file_count: usize,
    pub total_bytes: u64,
    /// Size of the created archive, `None` when the threshold skipped it
    pub zip_bytes: Option<u64>,
}

/// Aggregate result of a full run
#[derive(Debug)]
pub struct RunSummary {
    pub groups: Vec<GroupOutcome>,
}

impl RunSummary {
    pub fn files_total(&self) -> usize {
        self.groups.iter().map(|g| g.file_count).sum()
    }

    pub fn archives_created(&self) -> usize {
        self.groups.iter().filter(|g| g.zip_bytes.is_some()).count()
    }
}

/// Scan `dir`, partition the matched files by shifted date, and process
/// every group in parallel. Each group owns its own destination directory,
/// so the workers share nothing but the console.
pub fn run(dir: &Path, config: &SortConfig) -> Result<RunSummary, SortError> {
    let records = scan(dir, config)?;
    let groups = group_by_date(records);

    let groups = groups
        .into_par_iter()
        .map(|group| process_group(&group, config))
        .collect::<Result<Vec<_>, SortError>>()?;

    Ok(RunSummary { groups })
}

/// Run the five-step pipeline for one group: create the dated directory,
/// move the files in (skipping names already present), total up the sizes
/// at the destination, then zip the directory if the total is under the
/// threshold.
pub fn process_group(group: &Group, config: &SortConfig) -> Result<GroupOutcome, SortError> {
    let folder_name = group.folder_name();

    // Destination sits next to the group's files
    let parent = group
        .files
        .first()
        .and_then(|f| f.path.parent())
        .unwrap_or_else(|| Path::new("."));
    let dst_dir = parent.join(&folder_name);

    fs::create_dir_all(&dst_dir).map_err(|source| SortError::CreateDir {
        path: dst_dir.clone(),
        source,
    })?;

    let mut file_count = 0usize;
    let mut total_bytes = 0u64;
    for record in &group.files {
        let Some(file_name) = record.path.file_name() else {
            continue;
        };
        let dst = dst_dir.join(file_name);

        // Never overwrite: a name already at the destination leaves the
        // source file where it is
        if !dst.exists() {
            fs::rename(&record.path, &dst).map_err(|source| SortError::MoveFailed {
                from: record.path.clone(),
                to: dst.clone(),
                source,
            })?;
        }

        file_count += 1;
        // Size is read from whatever actually sits at the destination
        total_bytes += fs::metadata(&dst)
            .map_err(|source| SortError::Metadata {
                path: dst.clone(),
                source,
            })?
            .len();
    }

    let zip_path = parent.join(format!("{folder_name}.zip"));
    let zip_bytes = if total_bytes < config.zip_threshold {
        println!(
            "[{folder_name}] Create Zip archive: {} ({file_count} files: {:.3} MB) ...",
            zip_path.display(),
            total_bytes as f64 / 1024.0 / 1024.0
        );

        let zip_size = archive::zip_group_dir(&dst_dir, &folder_name, &zip_path).map_err(
            |source| SortError::ArchiveFailed {
                path: zip_path.clone(),
                message: format!("{source:#}"),
            },
        )?;

        let deflated = if total_bytes > 0 {
            (1.0 - zip_size as f64 / total_bytes as f64) * 100.0
        } else {
            0.0
        };
        println!(
            "[{folder_name}] Create Zip file done!: {} ({:.3} MB, Deflated {deflated:.2} %)",
            zip_path.display(),
            zip_size as f64 / 1024.0 / 1024.0
        );
        Some(zip_size)
    } else {
        println!(
            "[{folder_name}] Ignore to create Zip archive: {} ({file_count} files: {:.3} MB)",
            zip_path.display(),
            total_bytes as f64 / 1024.0 / 1024.0
        );
        None
    };

    Ok(GroupOutcome {
        date: group.date,
        file_count,
        total_bytes,
        zip_bytes,
    })
}
