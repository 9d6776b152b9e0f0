//! Writing results for clinic staff
//!
//! Findings are converted to a record batch with `serde_arrow` and written as
//! CSV; the summary and chart are plain text; the aggregate counts are also
//! written as JSON for downstream tooling.

use std::path::{Path, PathBuf};

use arrow::csv::WriterBuilder;
use arrow_schema::FieldRef;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_arrow::schema::{SchemaLike, TracingOptions};

use crate::algorithm::care_gaps::GapSummary;
use crate::algorithm::cleaning::CleaningReport;
use crate::algorithm::quality::QualityIssue;
use crate::error::util::{ensure_directory, safe_create_file};
use crate::error::{CareGapError, Result};
use crate::models::GapFinding;
use crate::utils::logging::log_file_written;

pub const REPORT_CSV: &str = "care_gaps_report.csv";
pub const SUMMARY_TXT: &str = "care_gap_summary.txt";
pub const CHART_TXT: &str = "care_gaps_chart.txt";
pub const SUMMARY_JSON: &str = "care_gap_summary.json";

/// One row of the care gap report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub patient_id: String,
    pub name: String,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub gap_types: String,
    pub priority: String,
}

impl From<&GapFinding> for ReportRow {
    fn from(finding: &GapFinding) -> Self {
        Self {
            patient_id: finding.patient_id.clone(),
            name: finding.name.clone(),
            age: finding.age,
            gender: finding.sex.as_ref().map(|sex| sex.code().to_string()),
            phone: finding.phone.clone(),
            email: finding.email.clone(),
            gap_types: finding.joined_labels(),
            priority: finding.priority.to_string(),
        }
    }
}

/// JSON document with the run's aggregate results
#[derive(Debug, Serialize)]
pub struct SummaryDocument<'a> {
    pub generated_at: String,
    pub reference_date: NaiveDate,
    pub cleaning: &'a CleaningReport,
    pub summary: &'a GapSummary,
    pub gap_percentage: f64,
    pub quality_issues: Vec<String>,
}

/// Paths of the files written by [`export_results`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFiles {
    pub report_csv: PathBuf,
    pub summary_txt: PathBuf,
    pub chart_txt: PathBuf,
    pub summary_json: PathBuf,
}

/// Everything [`export_results`] writes
#[derive(Debug)]
pub struct ExportBundle<'a> {
    pub findings: &'a [GapFinding],
    pub summary: &'a GapSummary,
    pub cleaning: &'a CleaningReport,
    pub issues: &'a [QualityIssue],
    pub summary_text: &'a str,
    pub chart_text: &'a str,
    pub generated_at: String,
    pub reference_date: NaiveDate,
}

/// Write the report CSV, summary text, chart and JSON summary
pub fn export_results(output_dir: &Path, bundle: &ExportBundle<'_>) -> Result<ExportedFiles> {
    ensure_directory(output_dir, "exporting results")?;

    let files = ExportedFiles {
        report_csv: output_dir.join(REPORT_CSV),
        summary_txt: output_dir.join(SUMMARY_TXT),
        chart_txt: output_dir.join(CHART_TXT),
        summary_json: output_dir.join(SUMMARY_JSON),
    };

    let rows: Vec<ReportRow> = bundle.findings.iter().map(ReportRow::from).collect();
    write_csv_rows(&files.report_csv, &rows)?;

    write_text(&files.summary_txt, bundle.summary_text)?;
    write_text(&files.chart_txt, bundle.chart_text)?;

    let document = SummaryDocument {
        generated_at: bundle.generated_at.clone(),
        reference_date: bundle.reference_date,
        cleaning: bundle.cleaning,
        summary: bundle.summary,
        gap_percentage: bundle.summary.gap_percentage(),
        quality_issues: bundle.issues.iter().map(ToString::to_string).collect(),
    };
    let json_file = safe_create_file(&files.summary_json, "writing JSON summary")?;
    serde_json::to_writer_pretty(json_file, &document)?;

    Ok(files)
}

/// Write serializable rows as a CSV file with a header
///
/// The column layout is traced from the row type, so an empty slice still
/// produces a header line.
pub fn write_csv_rows<T>(path: &Path, rows: &[T]) -> Result<()>
where
    T: Serialize + for<'de> Deserialize<'de>,
{
    let fields = Vec::<FieldRef>::from_type::<T>(TracingOptions::default())?;
    let batch = serde_arrow::to_record_batch(&fields, &rows)?;

    let file = safe_create_file(path, "writing CSV")?;
    let mut writer = WriterBuilder::new().with_header(true).build(file);
    writer.write(&batch)?;

    log_file_written(path, rows.len());
    Ok(())
}

fn write_text(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents)
        .map_err(|e| CareGapError::file_with_source(path, "Failed to write report", e))
}
