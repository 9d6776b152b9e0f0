use std::path::Path;

use care_gaps::algorithm::care_gaps::GapAnalysisConfig;
use care_gaps::models::{GapFinding, Patient, ScreeningRecord, Sex, VisitRecord};
use care_gaps::{CareDataset, PipelineConfig};
use chrono::NaiveDate;

pub use care_gaps::utils::test::{date, patient_record, write_text_table};

/// Reference date used across the tests
#[must_use]
pub fn today() -> NaiveDate {
    date(2025, 1, 15)
}

/// Analysis configuration as of [`today`]
#[must_use]
pub fn analysis_config() -> GapAnalysisConfig {
    GapAnalysisConfig::new(today())
}

/// Pipeline configuration reading from `data_dir` and writing to `output_dir`
#[must_use]
pub fn pipeline_config(data_dir: &Path, output_dir: &Path) -> PipelineConfig {
    PipelineConfig::default()
        .with_data_dir(data_dir)
        .with_output_dir(output_dir)
        .with_reference_date(today())
}

/// A patient parsed from a sex code
#[must_use]
pub fn patient(id: &str, age: Option<i32>, sex: &str) -> Patient {
    Patient::new(id, age, Sex::from_code(sex)).with_name("Test", id)
}

/// A screening record with every due date set to `due`
#[must_use]
pub fn screening_all_due(id: &str, due: Option<NaiveDate>) -> ScreeningRecord {
    ScreeningRecord::new(id)
        .with_mammogram_due(due)
        .with_colonoscopy_due(due)
        .with_flu_shot_due(due)
}

/// Build a one-patient dataset
#[must_use]
pub fn single_patient_dataset(
    patient: &Patient,
    screening: Option<ScreeningRecord>,
    visit_dates: &[NaiveDate],
) -> CareDataset {
    let record = care_gaps::PatientRecord {
        patient_id: Some(patient.patient_id.clone()),
        first_name: patient.first_name.clone(),
        last_name: patient.last_name.clone(),
        age: patient.age,
        sex: patient.sex.clone(),
        phone: patient.phone.clone(),
        email: patient.email.clone(),
        primary_diagnosis: patient.primary_diagnosis.clone(),
    };
    let visits = visit_dates
        .iter()
        .map(|d| VisitRecord::new(patient.patient_id.clone(), Some(*d)))
        .collect();
    CareDataset::new(vec![record], screening.into_iter().collect(), visits)
}

/// Labels of a finding in evaluation order
#[must_use]
pub fn labels(finding: &GapFinding) -> Vec<&'static str> {
    finding.labels().collect()
}
