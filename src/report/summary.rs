//! Text summary report

use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;

use crate::algorithm::care_gaps::GapSummary;
use crate::algorithm::quality::QualityIssue;
use crate::models::GapFinding;
use crate::utils::logging::console::{REPORT_WIDTH, banner};

/// Run details printed in the report header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportContext {
    pub generated_at: NaiveDateTime,
    pub reference_date: NaiveDate,
    /// Tracked due dates missing across all screening records
    pub missing_due_dates: usize,
}

/// The care gap summary report, rendered through `Display`
#[derive(Debug, Clone, Copy)]
pub struct SummaryReport<'a> {
    pub summary: &'a GapSummary,
    pub findings: &'a [GapFinding],
    pub issues: &'a [QualityIssue],
    pub context: &'a ReportContext,
}

/// Render the care gap summary report
#[must_use]
pub fn render_summary(
    summary: &GapSummary,
    findings: &[GapFinding],
    issues: &[QualityIssue],
    context: &ReportContext,
) -> String {
    SummaryReport {
        summary,
        findings,
        issues,
        context,
    }
    .to_string()
}

impl fmt::Display for SummaryReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            summary,
            findings,
            issues,
            context,
        } = *self;

        writeln!(f, "{}", banner("CARE GAP SUMMARY REPORT", REPORT_WIDTH))?;
        writeln!(
            f,
            "Generated on: {}",
            context.generated_at.format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(f, "Reference date: {}", context.reference_date)?;
        writeln!(f)?;

        writeln!(f, "Total patients: {}", summary.total_patients)?;
        writeln!(f, "Patients with care gaps: {}", summary.patients_with_gaps)?;
        writeln!(f, "Percentage with care gaps: {:.1}%", summary.gap_percentage())?;

        writeln!(f, "\nCare Gap Breakdown:")?;
        if summary.gap_counts.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for (gap, count) in summary.gap_counts.iter() {
            writeln!(f, "  {gap}: {count}")?;
        }

        writeln!(f, "\nPriority Breakdown:")?;
        for (tier, count) in summary.priority_counts.iter() {
            writeln!(f, "  {tier}: {count}")?;
        }

        writeln!(f, "\nData Quality Issues:")?;
        if issues.is_empty() {
            writeln!(f, "  No data quality issues found")?;
        }
        for issue in issues {
            writeln!(f, "  - {issue}")?;
        }
        if context.missing_due_dates > 0 {
            writeln!(
                f,
                "  - {} screening due dates are missing and were treated as overdue",
                context.missing_due_dates
            )?;
        }

        writeln!(f, "\nPatients Requiring Follow-up:")?;
        writeln!(f, "{}", "-".repeat(40))?;
        if findings.is_empty() {
            writeln!(f, "  None")?;
        }
        for finding in findings {
            let age = finding
                .age
                .map_or_else(|| "age unknown".to_string(), |age| format!("age {age}"));
            writeln!(
                f,
                "  {}: {} ({}) - {} - {}",
                finding.patient_id,
                finding.name,
                age,
                finding.priority,
                finding.joined_labels()
            )?;
        }
        Ok(())
    }
}
