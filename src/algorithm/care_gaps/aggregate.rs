//! Aggregate views over care gap findings
//!
//! A single pass over the findings produces the [`GapSummary`] consumed by the
//! text report, the chart and the JSON export.

use crate::models::{GapFinding, GapType, PriorityTier};
use serde::{Serialize, Serializer};
use serde::ser::SerializeMap;

/// Number of patients per priority tier; every tier is always present
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriorityCounts {
    high: usize,
    medium: usize,
    low: usize,
}

impl PriorityCounts {
    #[must_use]
    pub const fn get(&self, tier: PriorityTier) -> usize {
        match tier {
            PriorityTier::High => self.high,
            PriorityTier::Medium => self.medium,
            PriorityTier::Low => self.low,
        }
    }

    fn increment(&mut self, tier: PriorityTier) {
        match tier {
            PriorityTier::High => self.high += 1,
            PriorityTier::Medium => self.medium += 1,
            PriorityTier::Low => self.low += 1,
        }
    }

    /// Tier counts in High, Medium, Low order
    pub fn iter(&self) -> impl Iterator<Item = (PriorityTier, usize)> + '_ {
        PriorityTier::ALL.into_iter().map(|tier| (tier, self.get(tier)))
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.high + self.medium + self.low
    }
}

impl Serialize for PriorityCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(PriorityTier::ALL.len()))?;
        for (tier, count) in self.iter() {
            map.serialize_entry(tier.as_str(), &count)?;
        }
        map.end()
    }
}

/// Number of patients per gap type, ordered by first occurrence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GapCounts {
    entries: Vec<(GapType, usize)>,
}

impl GapCounts {
    fn increment(&mut self, gap: GapType) {
        if let Some((_, count)) = self.entries.iter_mut().find(|(g, _)| *g == gap) {
            *count += 1;
        } else {
            self.entries.push((gap, 1));
        }
    }

    /// Count for a gap type; zero when no patient has it
    #[must_use]
    pub fn get(&self, gap: GapType) -> usize {
        self.entries
            .iter()
            .find(|(g, _)| *g == gap)
            .map_or(0, |(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (GapType, usize)> + '_ {
        self.entries.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Largest single count, used to scale charts
    #[must_use]
    pub fn max_count(&self) -> usize {
        self.entries.iter().map(|(_, count)| *count).max().unwrap_or(0)
    }
}

impl Serialize for GapCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (gap, count) in &self.entries {
            map.serialize_entry(gap.label(), count)?;
        }
        map.end()
    }
}

/// Aggregate counts for one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GapSummary {
    pub total_patients: usize,
    pub patients_with_gaps: usize,
    pub gap_counts: GapCounts,
    pub priority_counts: PriorityCounts,
}

impl GapSummary {
    /// Share of patients with at least one gap, in percent
    #[must_use]
    pub fn gap_percentage(&self) -> f64 {
        if self.total_patients == 0 {
            0.0
        } else {
            self.patients_with_gaps as f64 / self.total_patients as f64 * 100.0
        }
    }
}

/// Count gap types and priority tiers across all findings
///
/// `total_patients` is the size of the analysed roster and is carried through
/// for percentage reporting.
#[must_use]
pub fn aggregate(findings: &[GapFinding], total_patients: usize) -> GapSummary {
    let mut gap_counts = GapCounts::default();
    let mut priority_counts = PriorityCounts::default();

    for finding in findings {
        for gap in &finding.gaps {
            gap_counts.increment(*gap);
        }
        priority_counts.increment(finding.priority);
    }

    GapSummary {
        total_patients,
        patients_with_gaps: findings.len(),
        gap_counts,
        priority_counts,
    }
}
