//! End-to-end runs of the care gap pipeline over synthetic data

use std::fs;

use care_gaps::algorithm::care_gaps::{identify_care_gaps, identify_care_gaps_parallel};
use care_gaps::algorithm::cleaning::clean_patients;
use care_gaps::report::export::REPORT_CSV;
use care_gaps::utils::test::SyntheticClinic;
use care_gaps::{CareDataset, load_clinic_data, read_table, run_full_analysis};
use tempfile::TempDir;

use crate::utils::{analysis_config, pipeline_config, today, write_text_table};

#[test]
fn test_full_analysis_on_synthetic_clinic() {
    let data_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();
    SyntheticClinic::generate(60, today(), 42)
        .write_csv(data_dir.path())
        .unwrap();

    let config = pipeline_config(data_dir.path(), output_dir.path());
    let outcome = run_full_analysis(&config).unwrap();

    assert_eq!(outcome.overview.patient_count, 62);
    assert_eq!(outcome.cleaning.duplicates_removed, 2);
    assert_eq!(outcome.summary.total_patients, 60);
    assert_eq!(outcome.summary.patients_with_gaps, outcome.findings.len());
    assert_eq!(
        outcome.summary.priority_counts.total(),
        outcome.findings.len()
    );
    assert!(outcome.findings.iter().all(|f| !f.gaps.is_empty()));

    for path in [
        &outcome.files.report_csv,
        &outcome.files.summary_txt,
        &outcome.files.chart_txt,
        &outcome.files.summary_json,
    ] {
        assert!(path.exists(), "missing {}", path.display());
    }

    let report = fs::read_to_string(&outcome.files.report_csv).unwrap();
    let header = report.lines().next().unwrap();
    assert_eq!(
        header,
        "patient_id,name,age,gender,phone,email,gap_types,priority"
    );

    let rows: usize = read_table(&outcome.files.report_csv, 1024)
        .unwrap()
        .iter()
        .map(arrow::record_batch::RecordBatch::num_rows)
        .sum();
    assert_eq!(rows, outcome.findings.len());

    let summary = fs::read_to_string(&outcome.files.summary_txt).unwrap();
    assert!(summary.contains("CARE GAP SUMMARY REPORT"));
    assert!(summary.contains("Total patients: 60"));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&outcome.files.summary_json).unwrap()).unwrap();
    assert_eq!(json["summary"]["total_patients"], 60);
    assert_eq!(json["cleaning"]["duplicates_removed"], 2);
}

#[test]
fn test_parallel_matches_sequential() {
    let data_dir = TempDir::new().unwrap();
    SyntheticClinic::generate(200, today(), 7)
        .write_csv(data_dir.path())
        .unwrap();

    let config = pipeline_config(data_dir.path(), data_dir.path());
    let data = load_clinic_data(&config).unwrap();
    let (patients, _) = clean_patients(data.patients);
    let dataset = CareDataset::new(patients, data.screenings, data.visits);

    let sequential = identify_care_gaps(&dataset, &analysis_config());
    let parallel = identify_care_gaps_parallel(&dataset, &analysis_config());
    assert_eq!(sequential, parallel);
}

#[test]
fn test_parallel_pipeline_run() {
    let data_dir = TempDir::new().unwrap();
    let sequential_out = TempDir::new().unwrap();
    let parallel_out = TempDir::new().unwrap();
    SyntheticClinic::generate(40, today(), 3)
        .write_csv(data_dir.path())
        .unwrap();

    let sequential =
        run_full_analysis(&pipeline_config(data_dir.path(), sequential_out.path())).unwrap();
    let mut config = pipeline_config(data_dir.path(), parallel_out.path()).with_parallel(true);
    config.num_threads = 2;
    let parallel = run_full_analysis(&config).unwrap();

    assert_eq!(sequential.findings, parallel.findings);
    assert_eq!(sequential.summary, parallel.summary);
    assert_eq!(
        fs::read_to_string(sequential_out.path().join(REPORT_CSV)).unwrap(),
        fs::read_to_string(parallel_out.path().join(REPORT_CSV)).unwrap()
    );
}

#[test]
fn test_clinic_without_gaps() {
    let data_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();
    let dir = data_dir.path();
    write_text_table(dir, "patients", &["patient_id,age,gender", "P001,30,M"]).unwrap();
    write_text_table(dir, "visits", &["patient_id,visit_date", "P001,2024-12-01"]).unwrap();
    write_text_table(
        dir,
        "screening_due",
        &[
            "patient_id,mammogram_due,colonoscopy_due,flu_shot_due",
            "P001,,,2025-09-01",
        ],
    )
    .unwrap();
    write_text_table(dir, "lab_results", &["patient_id,test_name"]).unwrap();

    let outcome = run_full_analysis(&pipeline_config(dir, output_dir.path())).unwrap();

    assert!(outcome.findings.is_empty());
    assert_eq!(outcome.summary.patients_with_gaps, 0);
    assert!(outcome.summary.gap_counts.is_empty());

    let chart = fs::read_to_string(&outcome.files.chart_txt).unwrap();
    assert!(chart.starts_with("No care gaps found"));

    let report = fs::read_to_string(&outcome.files.report_csv).unwrap();
    assert_eq!(report.lines().count(), 1);
}
