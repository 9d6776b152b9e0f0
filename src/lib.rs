//! A Rust library for identifying preventive care gaps in clinic extracts,
//! prioritizing patients for outreach and reporting the results.

pub mod algorithm;
pub mod collections;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod pipeline;
pub mod reader;
pub mod report;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::PipelineConfig;
pub use error::{CareGapError, Result};
pub use models::{GapFinding, GapType, Patient, PatientRecord, PriorityTier, ScreeningRecord, Sex};

// Care gap engine
pub use algorithm::care_gaps::priority::ScoringPolicy;
pub use algorithm::care_gaps::{
    GapAnalysisConfig, GapSummary, aggregate, identify_care_gaps, identify_care_gaps_parallel,
};
pub use collections::CareDataset;

// Loading and reporting
pub use loader::{ClinicData, load_clinic_data};
pub use pipeline::{PipelineOutcome, run_full_analysis};
pub use reader::{DEFAULT_BATCH_SIZE, read_table};
