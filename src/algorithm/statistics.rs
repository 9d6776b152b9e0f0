//! Dataset exploration statistics
//!
//! Record counts, patient column names, a few sample rows and a summary of the
//! age distribution, printed before cleaning so the raw extract can be judged.

use crate::models::PatientRecord;
use serde::Serialize;
use std::fmt;

/// Number of sample patients shown in the overview
pub const SAMPLE_ROWS: usize = 3;

/// Descriptive statistics of patient ages
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AgeStatistics {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation; `NaN` with fewer than two values
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

impl AgeStatistics {
    /// Compute statistics over the known ages; `None` when there are none
    #[must_use]
    pub fn from_ages(ages: impl IntoIterator<Item = i32>) -> Option<Self> {
        let mut values: Vec<f64> = ages.into_iter().map(f64::from).collect();
        if values.is_empty() {
            return None;
        }
        values.sort_by(f64::total_cmp);

        let count = values.len();
        let mean = values.iter().sum::<f64>() / count as f64;
        let std = if count > 1 {
            let variance =
                values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count - 1) as f64;
            variance.sqrt()
        } else {
            f64::NAN
        };

        Some(Self {
            count,
            mean,
            std,
            min: values[0],
            q25: quantile(&values, 0.25),
            median: quantile(&values, 0.5),
            q75: quantile(&values, 0.75),
            max: values[count - 1],
        })
    }
}

impl fmt::Display for AgeStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  count  {:>8}", self.count)?;
        writeln!(f, "  mean   {:>8.2}", self.mean)?;
        writeln!(f, "  std    {:>8.2}", self.std)?;
        writeln!(f, "  min    {:>8.2}", self.min)?;
        writeln!(f, "  25%    {:>8.2}", self.q25)?;
        writeln!(f, "  50%    {:>8.2}", self.median)?;
        writeln!(f, "  75%    {:>8.2}", self.q75)?;
        write!(f, "  max    {:>8.2}", self.max)
    }
}

/// Linear-interpolated quantile of sorted, non-empty values
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}

/// Overview of the four loaded tables
#[derive(Debug, Clone, Serialize)]
pub struct DatasetOverview {
    pub patient_count: usize,
    pub visit_count: usize,
    pub screening_count: usize,
    pub lab_result_count: usize,
    pub patient_columns: Vec<String>,
    pub sample_patients: Vec<PatientRecord>,
    pub age_statistics: Option<AgeStatistics>,
}

impl DatasetOverview {
    #[must_use]
    pub fn new(
        patients: &[PatientRecord],
        patient_columns: Vec<String>,
        visit_count: usize,
        screening_count: usize,
        lab_result_count: usize,
    ) -> Self {
        Self {
            patient_count: patients.len(),
            visit_count,
            screening_count,
            lab_result_count,
            patient_columns,
            sample_patients: patients.iter().take(SAMPLE_ROWS).cloned().collect(),
            age_statistics: AgeStatistics::from_ages(patients.iter().filter_map(|p| p.age)),
        }
    }
}

impl fmt::Display for DatasetOverview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of patients: {}", self.patient_count)?;
        writeln!(f, "Number of visits: {}", self.visit_count)?;
        writeln!(f, "Number of screening records: {}", self.screening_count)?;
        writeln!(f, "Number of lab results: {}", self.lab_result_count)?;

        writeln!(f, "\nPatients Dataset:")?;
        for patient in &self.sample_patients {
            writeln!(
                f,
                "  {} | {} {} | age {} | {} | {} | {}",
                patient.patient_id.as_deref().unwrap_or("<missing>"),
                patient.first_name.as_deref().unwrap_or(""),
                patient.last_name.as_deref().unwrap_or(""),
                patient.age.map_or_else(|| "?".to_string(), |a| a.to_string()),
                patient.sex.as_ref().map_or("?", |s| s.code()),
                patient.phone.as_deref().unwrap_or("-"),
                patient.email.as_deref().unwrap_or("-"),
            )?;
        }

        writeln!(f, "\nColumn names in patients dataset:")?;
        writeln!(f, "  {}", self.patient_columns.join(", "))?;

        writeln!(f, "\nPatient age statistics:")?;
        match &self.age_statistics {
            Some(stats) => write!(f, "{stats}"),
            None => write!(f, "  no ages recorded"),
        }
    }
}
