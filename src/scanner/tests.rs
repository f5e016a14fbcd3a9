use super::*;
use chrono::NaiveDate;
use std::fs::File;

fn dt(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, s)
        .unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_shifted_date_before_offset_maps_to_previous_day() {
    let offset = Duration::hours(5);
    assert_eq!(
        shifted_date(dt(2020, 11, 1, 4, 0, 0), offset),
        date(2020, 10, 31)
    );
}

#[test]
fn test_shifted_date_at_offset_boundary() {
    let offset = Duration::hours(5);

    // Exactly at the offset time: stays on its own date
    assert_eq!(
        shifted_date(dt(2020, 11, 1, 5, 0, 0), offset),
        date(2020, 11, 1)
    );
    // One second before: previous date
    assert_eq!(
        shifted_date(dt(2020, 11, 1, 4, 59, 59), offset),
        date(2020, 10, 31)
    );
}

#[test]
fn test_shifted_date_after_offset() {
    let offset = Duration::hours(5);
    assert_eq!(
        shifted_date(dt(2020, 11, 1, 6, 0, 0), offset),
        date(2020, 11, 1)
    );
    assert_eq!(
        shifted_date(dt(2020, 11, 1, 23, 59, 59), offset),
        date(2020, 11, 1)
    );
}

#[test]
fn test_shifted_date_crosses_month_boundary() {
    let offset = Duration::hours(5);
    assert_eq!(
        shifted_date(dt(2021, 1, 1, 0, 30, 0), offset),
        date(2020, 12, 31)
    );
}

#[test]
fn test_extension_match_is_case_insensitive() {
    let exts: Vec<String> = vec![".png".into(), ".jpg".into(), ".snip".into()];

    assert!(matches_extension("photo.JPG", &exts));
    assert!(matches_extension("shot.png", &exts));
    assert!(matches_extension("Clip.Snip", &exts));
    assert!(!matches_extension("notes.txt", &exts));
    assert!(!matches_extension("archive.zip", &exts));
    // Suffix match, not extension parsing: "jpg" without the dot is no match
    assert!(!matches_extension("jpg", &exts));
}

#[test]
fn test_scan_filters_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    File::create(dir.path().join("a.png")).unwrap();
    File::create(dir.path().join("b.JPG")).unwrap();
    File::create(dir.path().join("notes.txt")).unwrap();

    let config = SortConfig::default();
    let records = scan(dir.path(), &config).unwrap();

    let mut names: Vec<String> = records
        .iter()
        .map(|r| r.path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["a.png", "b.JPG"]);
}

#[test]
fn test_scan_skips_directories() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("folder.png")).unwrap();
    File::create(dir.path().join("real.png")).unwrap();

    let config = SortConfig::default();
    let records = scan(dir.path(), &config).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(
        records[0].path.file_name().unwrap().to_string_lossy(),
        "real.png"
    );
}

#[test]
fn test_scan_is_not_recursive() {
    let dir = tempfile::tempdir().unwrap();
    let sub = dir.path().join("20201031");
    std::fs::create_dir(&sub).unwrap();
    File::create(sub.join("nested.png")).unwrap();

    let config = SortConfig::default();
    let records = scan(dir.path(), &config).unwrap();

    assert!(records.is_empty());
}
