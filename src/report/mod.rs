//! Reporting on care gap results
//!
//! Text summary, text bar chart, and file export. All three consume the same
//! [`GapSummary`](crate::algorithm::care_gaps::GapSummary) produced once per
//! run.

pub mod chart;
pub mod export;
pub mod summary;

pub use chart::{GapChart, render_gap_chart};
pub use export::{ExportBundle, ExportedFiles, export_results, write_csv_rows};
pub use summary::{ReportContext, SummaryReport, render_summary};
