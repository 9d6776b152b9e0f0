//! Care gap findings
//!
//! A [`GapFinding`] is produced for every patient with at least one unmet
//! preventive care rule and is never modified afterwards.

use crate::models::patient::Patient;
use crate::models::types::{GapType, PriorityTier, Sex};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Ordered gap list for one patient; never more than four entries
pub type GapList = SmallVec<[GapType; 4]>;

/// Unmet preventive care for a single patient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapFinding {
    pub patient_id: String,
    pub name: String,
    pub age: Option<i32>,
    pub sex: Option<Sex>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub gaps: GapList,
    pub score: u32,
    pub priority: PriorityTier,
}

impl GapFinding {
    /// Build a finding from a patient and its evaluated gaps
    #[must_use]
    pub fn new(patient: &Patient, gaps: GapList, score: u32, priority: PriorityTier) -> Self {
        Self {
            patient_id: patient.patient_id.clone(),
            name: patient.display_name(),
            age: patient.age,
            sex: patient.sex.clone(),
            phone: patient.phone.clone(),
            email: patient.email.clone(),
            gaps,
            score,
            priority,
        }
    }

    /// Gap labels in evaluation order
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.gaps.iter().map(|gap| gap.label())
    }

    /// Labels joined with `", "` as written to the export
    #[must_use]
    pub fn joined_labels(&self) -> String {
        self.labels().join(", ")
    }

    #[must_use]
    pub fn has_gap(&self, gap: GapType) -> bool {
        self.gaps.contains(&gap)
    }
}
