//! Data quality validation for the patient roster
//!
//! Checks run independently and report counts; they never block the analysis.

use crate::models::PatientRecord;
use crate::utils::contact::validate_email;
use log::{info, warn};
use serde::Serialize;
use std::fmt;

/// Valid age range, inclusive
pub const MIN_VALID_AGE: i32 = 0;
pub const MAX_VALID_AGE: i32 = 120;

/// The kind of defect a quality check looks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QualityIssueKind {
    MissingPatientId,
    InvalidAge,
    InvalidSex,
    MissingPhone,
    MissingEmail,
    MalformedEmail,
}

/// A defect found in the roster together with the number of affected rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QualityIssue {
    pub kind: QualityIssueKind,
    pub count: usize,
}

impl fmt::Display for QualityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.count;
        match self.kind {
            QualityIssueKind::MissingPatientId => {
                write!(f, "{count} patients have missing patient IDs")
            }
            QualityIssueKind::InvalidAge => write!(
                f,
                "{count} patients have invalid ages (outside {MIN_VALID_AGE}-{MAX_VALID_AGE})"
            ),
            QualityIssueKind::InvalidSex => {
                write!(f, "{count} patients have invalid gender codes (not M or F)")
            }
            QualityIssueKind::MissingPhone => {
                write!(f, "{count} patients have missing phone numbers")
            }
            QualityIssueKind::MissingEmail => {
                write!(f, "{count} patients have missing email addresses")
            }
            QualityIssueKind::MalformedEmail => {
                write!(f, "{count} patients have malformed email addresses")
            }
        }
    }
}

/// Run every quality check over the roster
///
/// Issues are returned in a fixed order; checks with no defects add nothing.
#[must_use]
pub fn validate_patients(records: &[PatientRecord]) -> Vec<QualityIssue> {
    let checks: [(QualityIssueKind, fn(&PatientRecord) -> bool); 6] = [
        (QualityIssueKind::MissingPatientId, |r| r.patient_id.is_none()),
        (QualityIssueKind::InvalidAge, |r| {
            r.age
                .is_some_and(|age| !(MIN_VALID_AGE..=MAX_VALID_AGE).contains(&age))
        }),
        (QualityIssueKind::InvalidSex, |r| {
            r.sex.as_ref().is_none_or(|sex| !sex.is_canonical())
        }),
        (QualityIssueKind::MissingPhone, |r| r.phone.is_none()),
        (QualityIssueKind::MissingEmail, |r| r.email.is_none()),
        (QualityIssueKind::MalformedEmail, |r| {
            r.email.as_deref().is_some_and(|email| !validate_email(email))
        }),
    ];

    let issues: Vec<QualityIssue> = checks
        .iter()
        .filter_map(|(kind, is_defect)| {
            let count = records.iter().filter(|r| is_defect(r)).count();
            (count > 0).then_some(QualityIssue { kind: *kind, count })
        })
        .collect();

    if issues.is_empty() {
        info!("No data quality issues found in {} patient records", records.len());
    } else {
        for issue in &issues {
            warn!("Data quality: {issue}");
        }
    }

    issues
}
