//! Keyed collections over the loaded clinic extracts
//!
//! The care gap engine visits every patient once; the screening and visit
//! tables are indexed by patient identifier for constant-time lookup.

pub mod dataset;

pub use dataset::CareDataset;
