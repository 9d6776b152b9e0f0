//! Roster cleaning
//!
//! Removes duplicate patients (first occurrence wins) and normalizes text
//! fields so that blank values are treated as missing.

use crate::models::PatientRecord;
use crate::utils::contact::format_phone_number;
use log::info;
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::fmt;

/// What cleaning changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CleaningReport {
    pub original_count: usize,
    pub cleaned_count: usize,
    pub duplicates_removed: usize,
}

impl fmt::Display for CleaningReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Removed {} duplicate patient records ({} -> {})",
            self.duplicates_removed, self.original_count, self.cleaned_count
        )
    }
}

/// Deduplicate by `patient_id` and normalize text fields
///
/// Records without an identifier share one key, so only the first of them is
/// kept.
#[must_use]
pub fn clean_patients(records: Vec<PatientRecord>) -> (Vec<PatientRecord>, CleaningReport) {
    let original_count = records.len();
    let mut seen: FxHashSet<Option<String>> = FxHashSet::default();

    let cleaned: Vec<PatientRecord> = records
        .into_iter()
        .map(normalize_record)
        .filter(|record| seen.insert(record.patient_id.clone()))
        .collect();

    let report = CleaningReport {
        original_count,
        cleaned_count: cleaned.len(),
        duplicates_removed: original_count - cleaned.len(),
    };
    info!("{report}");

    (cleaned, report)
}

fn normalize_record(record: PatientRecord) -> PatientRecord {
    PatientRecord {
        patient_id: normalize_text(record.patient_id),
        first_name: normalize_text(record.first_name),
        last_name: normalize_text(record.last_name),
        phone: normalize_text(record.phone).map(standardize_phone),
        email: normalize_text(record.email),
        primary_diagnosis: normalize_text(record.primary_diagnosis),
        ..record
    }
}

/// Phone numbers that parse are rewritten as `(XXX) XXX-XXXX`; others are kept
fn standardize_phone(phone: String) -> String {
    format_phone_number(&phone).unwrap_or(phone)
}

/// Trim a value; blank becomes `None`
#[must_use]
pub fn normalize_text(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == v.len() {
            Some(v)
        } else {
            Some(trimmed.to_string())
        }
    })
}
