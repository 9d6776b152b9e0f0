//! Arrow data handling utilities
//!
//! Column lookup, casting and typed extraction from record batches.

pub mod array_utils;
pub mod extractors;

// Re-export commonly used functions for convenience
pub use array_utils::{column_names, get_column};
pub use extractors::{extract_dates, extract_ints, extract_strings};
