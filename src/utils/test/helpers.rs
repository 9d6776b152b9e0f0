//! Test helper functions

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::{CareGapError, Result};
use crate::models::{PatientRecord, Sex};

/// Build a date, panicking on an invalid calendar day
///
/// # Panics
/// Panics if the year, month and day do not form a valid date.
#[must_use]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("invalid test date {year}-{month}-{day}"))
}

/// A raw patient record with the fields most tests care about
#[must_use]
pub fn patient_record(id: Option<&str>, age: Option<i32>, sex: Option<&str>) -> PatientRecord {
    PatientRecord {
        patient_id: id.map(str::to_string),
        first_name: Some("Test".to_string()),
        last_name: id.map(|id| format!("Patient {id}")),
        age,
        sex: sex.and_then(Sex::from_code),
        phone: Some("555-123-4567".to_string()),
        email: Some("test@example.com".to_string()),
        primary_diagnosis: None,
    }
}

/// Write a hand-made CSV table (header plus rows) into `dir`
pub fn write_text_table(dir: &Path, table: &str, lines: &[&str]) -> Result<PathBuf> {
    let path = dir.join(format!("{table}.csv"));
    let mut contents = lines.join("\n");
    contents.push('\n');
    std::fs::write(&path, contents)
        .map_err(|e| CareGapError::file_with_source(&path, "Failed to write test table", e))?;
    Ok(path)
}
