//! Shared value types for care gap models

use serde::{Deserialize, Serialize};
use std::fmt;

/// Administrative sex as recorded on the patient roster
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    /// Canonical code `F`
    Female,
    /// Canonical code `M`
    Male,
    /// Any other non-empty code, kept upper-cased for reporting
    Unrecognized(String),
}

impl Sex {
    /// Canonicalize a raw sex code (trimmed and upper-cased)
    ///
    /// Returns `None` for empty input.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_uppercase();
        match code.as_str() {
            "" => None,
            "F" => Some(Self::Female),
            "M" => Some(Self::Male),
            _ => Some(Self::Unrecognized(code)),
        }
    }

    /// The code written to reports
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Female => "F",
            Self::Male => "M",
            Self::Unrecognized(code) => code,
        }
    }

    /// Whether this is one of the two canonical codes
    #[must_use]
    pub const fn is_canonical(&self) -> bool {
        matches!(self, Self::Female | Self::Male)
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The closed set of preventive care gaps
///
/// Declaration order is the evaluation and output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GapType {
    /// Women 40+ without a current mammogram
    MammogramOverdue,
    /// Anyone 50+ without a current colonoscopy
    ColonoscopyOverdue,
    /// No visit within the last 365 days
    AnnualVisitOverdue,
    /// Flu shot due date passed or unknown
    FluShotNeeded,
}

impl GapType {
    /// All gap types in evaluation order
    pub const ALL: [Self; 4] = [
        Self::MammogramOverdue,
        Self::ColonoscopyOverdue,
        Self::AnnualVisitOverdue,
        Self::FluShotNeeded,
    ];

    /// Human-readable label used in reports and exports
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MammogramOverdue => "Mammogram overdue",
            Self::ColonoscopyOverdue => "Colonoscopy overdue",
            Self::AnnualVisitOverdue => "Annual visit overdue",
            Self::FluShotNeeded => "Flu shot needed",
        }
    }

    /// Look up a gap type by its label
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|gap| gap.label() == label)
    }
}

impl fmt::Display for GapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Follow-up priority derived from a gap score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PriorityTier {
    High,
    Medium,
    Low,
}

impl PriorityTier {
    /// All tiers, highest first
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    /// Map a numeric score to a tier
    #[must_use]
    pub const fn from_score(score: u32) -> Self {
        if score >= 3 {
            Self::High
        } else if score >= 2 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for PriorityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
