//! The end-to-end care gap analysis
//!
//! Runs load, exploration, cleaning, validation, gap identification,
//! aggregation, reporting and export in order, printing each stage to the
//! console as it completes.

use chrono::Local;
use log::info;

use crate::algorithm::care_gaps::{
    GapSummary, aggregate, identify_care_gaps, identify_care_gaps_parallel,
};
use crate::algorithm::cleaning::{CleaningReport, clean_patients};
use crate::algorithm::quality::{QualityIssue, validate_patients};
use crate::algorithm::statistics::DatasetOverview;
use crate::collections::CareDataset;
use crate::config::PipelineConfig;
use crate::error::{CareGapError, Result};
use crate::loader::load_clinic_data;
use crate::models::{GapFinding, ScreeningRecord};
use crate::report::{
    ExportBundle, ExportedFiles, ReportContext, export_results, render_gap_chart, render_summary,
};
use crate::utils::logging::console::print_section;
use crate::utils::logging::progress::{finish_stage, stage_spinner};

/// Everything a pipeline run produced
#[derive(Debug)]
pub struct PipelineOutcome {
    pub overview: DatasetOverview,
    pub cleaning: CleaningReport,
    pub issues: Vec<QualityIssue>,
    pub findings: Vec<GapFinding>,
    pub summary: GapSummary,
    pub files: ExportedFiles,
}

/// Run the full analysis described by `config`
pub fn run_full_analysis(config: &PipelineConfig) -> Result<PipelineOutcome> {
    config.validate()?;
    info!("Starting care gap analysis\n{config}");

    print_section("LOADING DATA");
    let spinner = stage_spinner("Reading clinic tables");
    let loaded = load_clinic_data(config);
    finish_stage(&spinner);
    let data = loaded?;
    println!("Data loaded from {}", config.data_dir.display());

    print_section("DATA EXPLORATION");
    let overview = DatasetOverview::new(
        &data.patients,
        data.patient_columns,
        data.visits.len(),
        data.screenings.len(),
        data.lab_results.len(),
    );
    println!("{overview}");

    print_section("DATA CLEANING");
    let (patients, cleaning) = clean_patients(data.patients);
    println!("{cleaning}");

    print_section("DATA QUALITY VALIDATION");
    let issues = validate_patients(&patients);
    if issues.is_empty() {
        println!("No data quality issues found");
    }
    for issue in &issues {
        println!("  - {issue}");
    }

    print_section("IDENTIFYING CARE GAPS");
    let total_patients = patients.len();
    let dataset = CareDataset::new(patients, data.screenings, data.visits);
    let analysis = config.gap_analysis();

    let pool = if config.parallel {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.num_threads)
            .build()
            .map_err(|e| CareGapError::InvalidConfig(format!("thread pool: {e}")))?;
        Some(pool)
    } else {
        None
    };

    let spinner = stage_spinner("Evaluating care gap rules");
    let findings = match &pool {
        Some(pool) => pool.install(|| identify_care_gaps_parallel(&dataset, &analysis)),
        None => identify_care_gaps(&dataset, &analysis),
    };
    finish_stage(&spinner);
    println!("Found {} patients with care gaps", findings.len());

    let summary = aggregate(&findings, total_patients);
    let missing_due_dates: usize = dataset
        .screenings()
        .map(ScreeningRecord::missing_due_dates)
        .sum();

    print_section("GENERATING SUMMARY REPORT");
    let generated_at = Local::now().naive_local();
    let context = ReportContext {
        generated_at,
        reference_date: config.reference_date,
        missing_due_dates,
    };
    let summary_text = render_summary(&summary, &findings, &issues, &context);
    println!("{summary_text}");

    print_section("CREATING VISUALIZATION");
    let chart_text = render_gap_chart(&summary.gap_counts, config.chart_width);
    println!("{chart_text}");

    print_section("EXPORTING RESULTS");
    let bundle = ExportBundle {
        findings: &findings,
        summary: &summary,
        cleaning: &cleaning,
        issues: &issues,
        summary_text: &summary_text,
        chart_text: &chart_text,
        generated_at: generated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        reference_date: config.reference_date,
    };
    let files = export_results(&config.output_dir, &bundle)?;
    for path in [
        &files.report_csv,
        &files.summary_txt,
        &files.chart_txt,
        &files.summary_json,
    ] {
        println!("  {}", path.display());
    }

    print_section("ANALYSIS COMPLETE");
    info!(
        "{} of {} patients need follow-up",
        summary.patients_with_gaps, summary.total_patients
    );

    Ok(PipelineOutcome {
        overview,
        cleaning,
        issues,
        findings,
        summary,
        files,
    })
}
