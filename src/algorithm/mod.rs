//! Algorithm implementations for the care gap pipeline
//!
//! Cleaning and validation of the roster, dataset exploration, and the care
//! gap engine itself.

pub mod care_gaps;
pub mod cleaning;
pub mod quality;
pub mod statistics;
