use chrono::Duration;

/// Hours subtracted from a file's last-write time before taking the date,
/// so that files written before this hour count toward the previous day.
/// A 5 hour offset treats 2020-11-01 05:00:00 through 2020-11-02 04:59:59
/// as 2020-11-01.
pub const DEFAULT_OFFSET_HOURS: i64 = 5;

/// File extensions picked up by the scanner (case-insensitive suffix match).
pub const DEFAULT_EXTENSIONS: &[&str] = &[".png", ".jpg", ".snip"];

/// PNG and JPEG data barely deflates, so a group is only worth archiving
/// when its total size stays under this limit (2 GiB).
pub const DEFAULT_ZIP_THRESHOLD: u64 = 2 * 1024 * 1024 * 1024;

/// Configuration for one sorting run
pub struct SortConfig {
    /// Duration subtracted from last-write times before grouping by date
    pub offset: Duration,
    /// Accepted filename suffixes, matched case-insensitively
    pub extensions: Vec<String>,
    /// Maximum total group size (bytes) for zip creation
    pub zip_threshold: u64,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            offset: Duration::hours(DEFAULT_OFFSET_HOURS),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            zip_threshold: DEFAULT_ZIP_THRESHOLD,
        }
    }
}
