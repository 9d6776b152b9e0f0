//! Patient entity model
//!
//! Patients arrive from the roster as [`PatientRecord`]s, whose identifier may
//! be missing. Only records with an identifier are promoted to [`Patient`],
//! the type the care gap engine works on.

use crate::models::types::Sex;
use serde::{Deserialize, Serialize};

/// A roster row as loaded, before identity is enforced
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub patient_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
    pub sex: Option<Sex>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub primary_diagnosis: Option<String>,
}

impl PatientRecord {
    /// Promote this record to a [`Patient`]
    ///
    /// Returns `None` when the identifier is missing.
    #[must_use]
    pub fn into_patient(self) -> Option<Patient> {
        let patient_id = self.patient_id?;
        Some(Patient {
            patient_id,
            first_name: self.first_name,
            last_name: self.last_name,
            age: self.age,
            sex: self.sex,
            phone: self.phone,
            email: self.email,
            primary_diagnosis: self.primary_diagnosis,
        })
    }
}

/// A patient with a known identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub patient_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
    pub sex: Option<Sex>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub primary_diagnosis: Option<String>,
}

impl Patient {
    /// Create a patient with only an identifier, age and sex set
    #[must_use]
    pub fn new(patient_id: impl Into<String>, age: Option<i32>, sex: Option<Sex>) -> Self {
        Self {
            patient_id: patient_id.into(),
            first_name: None,
            last_name: None,
            age,
            sex,
            phone: None,
            email: None,
            primary_diagnosis: None,
        }
    }

    /// Set first and last name
    #[must_use]
    pub fn with_name(mut self, first_name: &str, last_name: &str) -> Self {
        self.first_name = Some(first_name.to_string());
        self.last_name = Some(last_name.to_string());
        self
    }

    /// Set contact details
    #[must_use]
    pub fn with_contact(mut self, phone: Option<&str>, email: Option<&str>) -> Self {
        self.phone = phone.map(str::to_string);
        self.email = email.map(str::to_string);
        self
    }

    /// Display name as `"{first} {last}"`, skipping missing parts
    #[must_use]
    pub fn display_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[must_use]
    pub fn is_female(&self) -> bool {
        self.sex == Some(Sex::Female)
    }

    /// Whether the patient's age is known and at least `years`
    #[must_use]
    pub fn is_at_least(&self, years: i32) -> bool {
        self.age.is_some_and(|age| age >= years)
    }
}
