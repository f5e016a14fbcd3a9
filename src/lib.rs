// Public API exports
pub mod archive;
pub mod config;
pub mod error;
pub mod grouper;
pub mod scanner;
pub mod sorter;

// Re-export main types for convenience
pub use config::{SortConfig, DEFAULT_EXTENSIONS, DEFAULT_OFFSET_HOURS, DEFAULT_ZIP_THRESHOLD};
pub use error::SortError;
pub use grouper::{group_by_date, Group};
pub use scanner::{scan, shifted_date, FileRecord};
pub use sorter::{run, GroupOutcome, RunSummary};
