//! Visit records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single clinic visit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitRecord {
    pub patient_id: String,
    pub visit_date: Option<NaiveDate>,
    pub next_appointment: Option<NaiveDate>,
}

impl VisitRecord {
    #[must_use]
    pub fn new(patient_id: impl Into<String>, visit_date: Option<NaiveDate>) -> Self {
        Self {
            patient_id: patient_id.into(),
            visit_date,
            next_appointment: None,
        }
    }
}

/// A laboratory result; loaded for exploration only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabResult {
    pub patient_id: String,
    pub test_name: Option<String>,
    pub value: Option<String>,
    pub result_date: Option<NaiveDate>,
}
