//! The joined dataset the care gap engine runs over

use crate::models::{Patient, PatientRecord, ScreeningRecord, VisitRecord};
use chrono::NaiveDate;
use log::{debug, warn};
use rustc_hash::FxHashMap;

/// Patients with their screening record and visit dates indexed by identifier
#[derive(Debug, Default, Clone)]
pub struct CareDataset {
    patients: Vec<Patient>,
    screenings: FxHashMap<String, ScreeningRecord>,
    visit_dates: FxHashMap<String, Vec<Option<NaiveDate>>>,
    excluded_records: usize,
    visit_count: usize,
}

impl CareDataset {
    /// Build the dataset from cleaned patient records, screenings and visits
    ///
    /// Patient records without an identifier cannot be joined and are left
    /// out; they remain visible to the quality validator. Screening rows carry
    /// no timestamp of their own, so file order decides which is most recent:
    /// when a patient has more than one row the last one wins, even if an
    /// earlier row has later due dates.
    #[must_use]
    pub fn new(
        records: Vec<PatientRecord>,
        screenings: Vec<ScreeningRecord>,
        visits: Vec<VisitRecord>,
    ) -> Self {
        let total_records = records.len();
        let patients: Vec<Patient> = records
            .into_iter()
            .filter_map(PatientRecord::into_patient)
            .collect();
        let excluded_records = total_records - patients.len();
        if excluded_records > 0 {
            warn!("Excluding {excluded_records} patient records without patient_id from gap analysis");
        }

        let screening_rows = screenings.len();
        let mut screening_index = FxHashMap::default();
        for screening in screenings {
            screening_index.insert(screening.patient_id.clone(), screening);
        }
        let duplicate_screenings = screening_rows - screening_index.len();
        if duplicate_screenings > 0 {
            warn!("{duplicate_screenings} duplicate screening rows replaced by later rows for the same patient");
        }

        let visit_count = visits.len();
        let mut visit_dates: FxHashMap<String, Vec<Option<NaiveDate>>> = FxHashMap::default();
        for visit in visits {
            visit_dates
                .entry(visit.patient_id)
                .or_default()
                .push(visit.visit_date);
        }

        debug!(
            "Indexed {} patients, {} screening records, {} visits for {} patients",
            patients.len(),
            screening_index.len(),
            visit_count,
            visit_dates.len()
        );

        Self {
            patients,
            screenings: screening_index,
            visit_dates,
            excluded_records,
            visit_count,
        }
    }

    /// Patients eligible for gap analysis, in roster order
    #[must_use]
    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    /// Screening-due record for a patient, if one exists
    #[must_use]
    pub fn screening_for(&self, patient_id: &str) -> Option<&ScreeningRecord> {
        self.screenings.get(patient_id)
    }

    /// All recorded visit dates for a patient (undated visits are `None`)
    #[must_use]
    pub fn visit_dates_for(&self, patient_id: &str) -> &[Option<NaiveDate>] {
        self.visit_dates
            .get(patient_id)
            .map_or(&[], Vec::as_slice)
    }

    /// Iterate over screening records
    pub fn screenings(&self) -> impl Iterator<Item = &ScreeningRecord> {
        self.screenings.values()
    }

    #[must_use]
    pub fn patient_count(&self) -> usize {
        self.patients.len()
    }

    #[must_use]
    pub const fn visit_count(&self) -> usize {
        self.visit_count
    }

    #[must_use]
    pub fn screening_count(&self) -> usize {
        self.screenings.len()
    }

    /// Records dropped because they had no identifier
    #[must_use]
    pub const fn excluded_records(&self) -> usize {
        self.excluded_records
    }
}
