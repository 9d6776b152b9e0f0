//! Screening-due records
//!
//! One row per patient with the next-due date of each tracked preventive
//! service. Any date may be missing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Column suffix that marks a due-date column in the screening table
pub const DUE_COLUMN_SUFFIX: &str = "_due";

/// Due dates for a single patient
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningRecord {
    pub patient_id: String,
    pub mammogram_due: Option<NaiveDate>,
    pub colonoscopy_due: Option<NaiveDate>,
    pub flu_shot_due: Option<NaiveDate>,
}

impl ScreeningRecord {
    #[must_use]
    pub fn new(patient_id: impl Into<String>) -> Self {
        Self {
            patient_id: patient_id.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub const fn with_mammogram_due(mut self, date: Option<NaiveDate>) -> Self {
        self.mammogram_due = date;
        self
    }

    #[must_use]
    pub const fn with_colonoscopy_due(mut self, date: Option<NaiveDate>) -> Self {
        self.colonoscopy_due = date;
        self
    }

    #[must_use]
    pub const fn with_flu_shot_due(mut self, date: Option<NaiveDate>) -> Self {
        self.flu_shot_due = date;
        self
    }

    /// Number of tracked due dates that are missing
    #[must_use]
    pub fn missing_due_dates(&self) -> usize {
        [self.mammogram_due, self.colonoscopy_due, self.flu_shot_due]
            .iter()
            .filter(|date| date.is_none())
            .count()
    }
}
