//! Loading the clinic extracts into domain models
//!
//! Four tables are read from the data directory: `patients`, `visits`,
//! `screening_due` and `lab_results`, each as `.csv` or `.parquet`.
//! `patient_id` is required in every table, as are the columns the care gap
//! rules read (age, sex, the tracked due dates and visit dates). Contact and
//! descriptive columns are optional and read as missing when absent.

use std::path::Path;

use arrow::record_batch::RecordBatch;
use log::{debug, info, warn};

use crate::config::PipelineConfig;
use crate::error::util::validate_directory;
use crate::error::{CareGapError, Result};
use crate::models::screening::DUE_COLUMN_SUFFIX;
use crate::models::{LabResult, PatientRecord, ScreeningRecord, Sex, VisitRecord};
use crate::reader::{find_table_file, read_table};
use crate::utils::arrow::array_utils::{find_column_index, normalize_column_name};
use crate::utils::arrow::{column_names, extract_dates, extract_ints, extract_strings};
use crate::utils::dates::DateFormatConfig;

/// Table names as found in the data directory
pub const PATIENTS_TABLE: &str = "patients";
pub const VISITS_TABLE: &str = "visits";
pub const SCREENINGS_TABLE: &str = "screening_due";
pub const LAB_RESULTS_TABLE: &str = "lab_results";

/// Identifier column shared by all tables
pub const PATIENT_ID_COLUMN: &str = "patient_id";

/// Columns the care gap rules read
pub const AGE_COLUMN: &str = "age";
pub const VISIT_DATE_COLUMN: &str = "visit_date";
pub const MAMMOGRAM_DUE_COLUMN: &str = "mammogram_due";
pub const COLONOSCOPY_DUE_COLUMN: &str = "colonoscopy_due";
pub const FLU_SHOT_DUE_COLUMN: &str = "flu_shot_due";

/// Accepted names for the sex column, in lookup order
pub const SEX_COLUMNS: [&str; 2] = ["gender", "sex"];

/// All four loaded tables
#[derive(Debug, Clone, Default)]
pub struct ClinicData {
    pub patients: Vec<PatientRecord>,
    /// Column names of the patient table as found in the file
    pub patient_columns: Vec<String>,
    pub visits: Vec<VisitRecord>,
    pub screenings: Vec<ScreeningRecord>,
    pub lab_results: Vec<LabResult>,
}

/// Load all four tables from the configured data directory
pub fn load_clinic_data(config: &PipelineConfig) -> Result<ClinicData> {
    let dir = config.data_dir.as_path();
    validate_directory(dir, "loading clinic data")?;

    let (patients, patient_columns) = load_patients(&table_path(dir, PATIENTS_TABLE)?, config)?;
    let visits = load_visits(&table_path(dir, VISITS_TABLE)?, config)?;
    let screenings = load_screenings(&table_path(dir, SCREENINGS_TABLE)?, config)?;
    let lab_results = load_lab_results(&table_path(dir, LAB_RESULTS_TABLE)?, config)?;

    info!(
        "Loaded {} patients, {} visits, {} screening records, {} lab results",
        patients.len(),
        visits.len(),
        screenings.len(),
        lab_results.len()
    );

    Ok(ClinicData {
        patients,
        patient_columns,
        visits,
        screenings,
        lab_results,
    })
}

fn table_path(dir: &Path, table: &str) -> Result<std::path::PathBuf> {
    find_table_file(dir, table).ok_or_else(|| {
        CareGapError::file(
            dir.join(format!("{table}.csv")),
            format!("No {table}.csv or {table}.parquet found"),
        )
    })
}

/// Load the patient roster
///
/// Sex codes are canonicalized and ages parsed; unparseable values become
/// missing. Returns the records and the column names found in the file.
pub fn load_patients(
    path: &Path,
    config: &PipelineConfig,
) -> Result<(Vec<PatientRecord>, Vec<String>)> {
    let batches = read_table(path, config.batch_size)?;
    let columns = batches.first().map(column_names).unwrap_or_default();

    let mut patients = Vec::new();
    for batch in &batches {
        patients.extend(patients_from_batch(batch)?);
    }

    Ok((patients, columns))
}

/// Convert one record batch of the patient table
pub fn patients_from_batch(batch: &RecordBatch) -> Result<Vec<PatientRecord>> {
    let table = PATIENTS_TABLE;
    let ids = extract_strings(batch, table, PATIENT_ID_COLUMN, true)?;
    let first_names = extract_strings(batch, table, "first_name", false)?;
    let last_names = extract_strings(batch, table, "last_name", false)?;
    let ages = extract_ints(batch, table, AGE_COLUMN, true)?;
    let sexes = extract_sex_codes(batch)?;
    let phones = extract_strings(batch, table, "phone", false)?;
    let emails = extract_strings(batch, table, "email", false)?;
    let diagnoses = extract_strings(batch, table, "primary_diagnosis", false)?;

    let records = itertools::izip!(
        ids,
        first_names,
        last_names,
        ages,
        sexes,
        phones,
        emails,
        diagnoses
    )
    .map(
        |(patient_id, first_name, last_name, age, sex, phone, email, primary_diagnosis)| {
            PatientRecord {
                patient_id,
                first_name,
                last_name,
                age,
                sex,
                phone,
                email,
                primary_diagnosis,
            }
        },
    )
    .collect();

    Ok(records)
}

/// Sex is recorded as `gender` in clinic extracts; `sex` is accepted too
fn extract_sex_codes(batch: &RecordBatch) -> Result<Vec<Option<Sex>>> {
    let column = SEX_COLUMNS
        .into_iter()
        .find(|name| find_column_index(batch, name).is_some())
        .ok_or_else(|| CareGapError::column_not_found(PATIENTS_TABLE, SEX_COLUMNS[0]))?;

    Ok(extract_strings(batch, PATIENTS_TABLE, column, true)?
        .into_iter()
        .map(|code| code.as_deref().and_then(Sex::from_code))
        .collect())
}

/// Load the visit history
pub fn load_visits(path: &Path, config: &PipelineConfig) -> Result<Vec<VisitRecord>> {
    let batches = read_table(path, config.batch_size)?;
    let mut visits = Vec::new();
    for batch in &batches {
        visits.extend(visits_from_batch(batch, &config.date_format_config)?);
    }
    Ok(visits)
}

/// Convert one record batch of the visit table
pub fn visits_from_batch(
    batch: &RecordBatch,
    date_config: &DateFormatConfig,
) -> Result<Vec<VisitRecord>> {
    let table = VISITS_TABLE;
    let ids = extract_strings(batch, table, PATIENT_ID_COLUMN, true)?;
    let visit_dates = extract_dates(batch, table, VISIT_DATE_COLUMN, true, date_config)?;
    let next_appointments = extract_dates(batch, table, "next_appointment", false, date_config)?;

    Ok(keyed_rows(table, ids)
        .map(|(row, patient_id)| VisitRecord {
            patient_id,
            visit_date: visit_dates[row],
            next_appointment: next_appointments[row],
        })
        .collect())
}

/// Load the screening-due table
pub fn load_screenings(path: &Path, config: &PipelineConfig) -> Result<Vec<ScreeningRecord>> {
    let batches = read_table(path, config.batch_size)?;
    let mut screenings = Vec::new();
    for batch in &batches {
        screenings.extend(screenings_from_batch(batch, &config.date_format_config)?);
    }
    Ok(screenings)
}

/// Convert one record batch of the screening-due table
pub fn screenings_from_batch(
    batch: &RecordBatch,
    date_config: &DateFormatConfig,
) -> Result<Vec<ScreeningRecord>> {
    let table = SCREENINGS_TABLE;
    let tracked = [MAMMOGRAM_DUE_COLUMN, COLONOSCOPY_DUE_COLUMN, FLU_SHOT_DUE_COLUMN];
    for column in column_names(batch) {
        let normalized = normalize_column_name(&column);
        if normalized.ends_with(DUE_COLUMN_SUFFIX) && !tracked.contains(&normalized.as_str()) {
            debug!("Ignoring untracked due-date column '{column}'");
        }
    }

    let ids = extract_strings(batch, table, PATIENT_ID_COLUMN, true)?;
    let mammogram = extract_dates(batch, table, MAMMOGRAM_DUE_COLUMN, true, date_config)?;
    let colonoscopy = extract_dates(batch, table, COLONOSCOPY_DUE_COLUMN, true, date_config)?;
    let flu_shot = extract_dates(batch, table, FLU_SHOT_DUE_COLUMN, true, date_config)?;

    Ok(keyed_rows(table, ids)
        .map(|(row, patient_id)| ScreeningRecord {
            patient_id,
            mammogram_due: mammogram[row],
            colonoscopy_due: colonoscopy[row],
            flu_shot_due: flu_shot[row],
        })
        .collect())
}

/// Load lab results
pub fn load_lab_results(path: &Path, config: &PipelineConfig) -> Result<Vec<LabResult>> {
    let batches = read_table(path, config.batch_size)?;
    let mut results = Vec::new();
    for batch in &batches {
        let table = LAB_RESULTS_TABLE;
        let ids = extract_strings(batch, table, PATIENT_ID_COLUMN, true)?;
        let test_names = extract_strings(batch, table, "test_name", false)?;
        let values = extract_strings(batch, table, "result_value", false)?;
        let dates = extract_dates(batch, table, "test_date", false, &config.date_format_config)?;

        results.extend(keyed_rows(table, ids).map(|(row, patient_id)| LabResult {
            patient_id,
            test_name: test_names[row].clone(),
            value: values[row].clone(),
            result_date: dates[row],
        }));
    }
    Ok(results)
}

/// Rows with an identifier, paired with their row index
///
/// Rows without one cannot be joined to a patient and are dropped with a
/// warning.
fn keyed_rows(
    table: &str,
    ids: Vec<Option<String>>,
) -> impl Iterator<Item = (usize, String)> {
    let missing = ids.iter().filter(|id| id.is_none()).count();
    if missing > 0 {
        warn!("Skipping {missing} rows without {PATIENT_ID_COLUMN} in {table} table");
    }

    ids.into_iter()
        .enumerate()
        .filter_map(|(row, id)| id.map(|id| (row, id)))
}
