use crate::scanner::FileRecord;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// All files sharing one shifted date, bound for one `yyyyMMdd` directory
#[derive(Debug)]
pub struct Group {
    pub date: NaiveDate,
    /// Files in scan order
    pub files: Vec<FileRecord>,
}

impl Group {
    /// Directory (and zip stem) name for this group
    pub fn folder_name(&self) -> String {
        self.date.format("%Y%m%d").to_string()
    }
}

/// Partition records into one group per distinct shifted date, in a single
/// pass. Scan order is preserved within each group.
pub fn group_by_date(records: Vec<FileRecord>) -> Vec<Group> {
    let mut by_date: BTreeMap<NaiveDate, Vec<FileRecord>> = BTreeMap::new();
    for record in records {
        by_date.entry(record.shifted_date).or_default().push(record);
    }

    by_date
        .into_iter()
        .map(|(date, files)| Group { date, files })
        .collect()
}
