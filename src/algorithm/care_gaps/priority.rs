//! Priority scoring for care gap findings
//!
//! Each gap label is weighted by its wording: "overdue" gaps count 2,
//! "needed" gaps count 1. Patients aged 65 or older receive an age bonus.
//! The resulting score maps to a [`PriorityTier`].

use crate::models::{GapType, PriorityTier};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label marker for an overdue service
pub const OVERDUE_MARKER: &str = "overdue";

/// Label marker for a needed service
pub const NEEDED_MARKER: &str = "needed";

/// Age from which the age bonus applies
pub const SENIOR_AGE: i32 = 65;

/// How the age bonus is applied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoringPolicy {
    /// One bonus point for every gap label (historical behaviour)
    #[default]
    AgeBonusPerGap,
    /// One bonus point per patient, regardless of the number of gaps
    AgeBonusPerPatient,
}

impl fmt::Display for ScoringPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AgeBonusPerGap => write!(f, "age bonus per gap"),
            Self::AgeBonusPerPatient => write!(f, "age bonus per patient"),
        }
    }
}

/// Base weight of a label from its wording (case-insensitive)
#[must_use]
pub fn label_weight(label: &str) -> u32 {
    let label = label.to_lowercase();
    if label.contains(OVERDUE_MARKER) {
        2
    } else if label.contains(NEEDED_MARKER) {
        1
    } else {
        0
    }
}

/// Score a sequence of gap labels for a patient of the given age
#[must_use]
pub fn score_labels<'a, I>(labels: I, age: Option<i32>, policy: ScoringPolicy) -> u32
where
    I: IntoIterator<Item = &'a str>,
{
    let senior = age.is_some_and(|age| age >= SENIOR_AGE);
    let mut score = 0;
    let mut label_count = 0;

    for label in labels {
        score += label_weight(label);
        label_count += 1;
        if senior && policy == ScoringPolicy::AgeBonusPerGap {
            score += 1;
        }
    }

    if senior && policy == ScoringPolicy::AgeBonusPerPatient && label_count > 0 {
        score += 1;
    }

    score
}

/// Score evaluated gaps
#[must_use]
pub fn score_gaps(gaps: &[GapType], age: Option<i32>, policy: ScoringPolicy) -> u32 {
    score_labels(gaps.iter().map(|gap| gap.label()), age, policy)
}

/// Score and tier for evaluated gaps
#[must_use]
pub fn prioritize(gaps: &[GapType], age: Option<i32>, policy: ScoringPolicy) -> (u32, PriorityTier) {
    let score = score_gaps(gaps, age, policy);
    (score, PriorityTier::from_score(score))
}
