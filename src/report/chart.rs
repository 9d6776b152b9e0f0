//! Text bar chart of care gap counts

use crate::algorithm::care_gaps::GapCounts;
use std::fmt;

/// Character used to draw bars
pub const BAR_CHAR: char = '█';

/// Horizontal bar chart, one row per gap type
///
/// The longest bar is `width` characters; any non-zero count gets at least
/// one character.
#[derive(Debug, Clone, Copy)]
pub struct GapChart<'a> {
    pub counts: &'a GapCounts,
    pub width: usize,
}

/// Render the gap chart as text
#[must_use]
pub fn render_gap_chart(counts: &GapCounts, width: usize) -> String {
    GapChart { counts, width }.to_string()
}

impl fmt::Display for GapChart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.counts.is_empty() {
            return writeln!(f, "No care gaps found - no visualization needed.");
        }

        let label_width = self
            .counts
            .iter()
            .map(|(gap, _)| gap.label().chars().count())
            .max()
            .unwrap_or(0);
        let max_count = self.counts.max_count().max(1);

        writeln!(f, "Care Gaps by Type")?;
        for (gap, count) in self.counts.iter() {
            let bar_len = (count * self.width).div_ceil(max_count);
            let bar: String = std::iter::repeat_n(BAR_CHAR, bar_len).collect();
            writeln!(f, "{:<label_width$} | {bar} {count}", gap.label())?;
        }
        Ok(())
    }
}
