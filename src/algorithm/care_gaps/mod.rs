//! Care gap identification and prioritization
//!
//! This module runs the preventive care rules over every patient in a
//! [`CareDataset`], scores the unmet rules and collects one [`GapFinding`]
//! per patient with at least one gap.

pub mod aggregate;
pub mod priority;
pub mod rules;

use crate::collections::CareDataset;
use crate::models::{GapFinding, Patient};
use chrono::NaiveDate;
use log::info;
use priority::ScoringPolicy;
use rayon::prelude::*;
use std::fmt;

pub use aggregate::{GapCounts, GapSummary, PriorityCounts, aggregate};
pub use priority::prioritize;
pub use rules::evaluate_patient;

/// Configuration for care gap analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GapAnalysisConfig {
    /// The date the analysis is run "as of"
    pub reference_date: NaiveDate,
    /// How the age bonus contributes to the priority score
    pub scoring_policy: ScoringPolicy,
}

impl GapAnalysisConfig {
    #[must_use]
    pub fn new(reference_date: NaiveDate) -> Self {
        Self {
            reference_date,
            scoring_policy: ScoringPolicy::default(),
        }
    }

    #[must_use]
    pub const fn with_scoring_policy(mut self, scoring_policy: ScoringPolicy) -> Self {
        self.scoring_policy = scoring_policy;
        self
    }
}

impl fmt::Display for GapAnalysisConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reference date {}, {}",
            self.reference_date, self.scoring_policy
        )
    }
}

/// Evaluate and score a single patient
///
/// Returns `None` when the patient has no gaps.
#[must_use]
pub fn assess_patient(
    patient: &Patient,
    dataset: &CareDataset,
    config: &GapAnalysisConfig,
) -> Option<GapFinding> {
    let gaps = evaluate_patient(
        patient,
        dataset.screening_for(&patient.patient_id),
        dataset.visit_dates_for(&patient.patient_id),
        config.reference_date,
    );

    if gaps.is_empty() {
        return None;
    }

    let (score, tier) = prioritize(&gaps, patient.age, config.scoring_policy);
    Some(GapFinding::new(patient, gaps, score, tier))
}

/// Identify care gaps for every patient, in roster order
#[must_use]
pub fn identify_care_gaps(dataset: &CareDataset, config: &GapAnalysisConfig) -> Vec<GapFinding> {
    let findings: Vec<GapFinding> = dataset
        .patients()
        .iter()
        .filter_map(|patient| assess_patient(patient, dataset, config))
        .collect();

    info!(
        "Found {} of {} patients with care gaps ({config})",
        findings.len(),
        dataset.patient_count()
    );
    findings
}

/// Parallel variant of [`identify_care_gaps`]
///
/// Patients are evaluated on the rayon pool; the result keeps roster order and
/// is identical to the sequential one.
#[must_use]
pub fn identify_care_gaps_parallel(
    dataset: &CareDataset,
    config: &GapAnalysisConfig,
) -> Vec<GapFinding> {
    let findings: Vec<GapFinding> = dataset
        .patients()
        .par_iter()
        .filter_map(|patient| assess_patient(patient, dataset, config))
        .collect();

    info!(
        "Found {} of {} patients with care gaps using {} threads ({config})",
        findings.len(),
        dataset.patient_count(),
        rayon::current_num_threads()
    );
    findings
}
