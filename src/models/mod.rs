//! Domain models for the care gap pipeline
//!
//! Patients, their screening-due dates and visits as loaded from the clinic
//! extracts, plus the findings produced by the care gap engine.

pub mod finding;
pub mod patient;
pub mod screening;
pub mod types;
pub mod visit;

// Re-export commonly used types
pub use finding::{GapFinding, GapList};
pub use patient::{Patient, PatientRecord};
pub use screening::ScreeningRecord;
pub use types::{GapType, PriorityTier, Sex};
pub use visit::{LabResult, VisitRecord};
