//! Test utilities
//!
//! Synthetic clinic extracts and small builders shared by unit and
//! integration tests. The CLI `generate` command also uses the fixtures.

pub mod helpers;

pub use fixtures::{LabRow, PatientRow, ScreeningRow, SyntheticClinic, VisitRow};
pub use helpers::{date, patient_record, write_text_table};
