//! Utilities for working with Arrow arrays.
//!
//! Input tables arrive either from CSV (all `Utf8`) or Parquet (typed), so
//! columns are looked up case-insensitively and cast to the type the caller
//! expects.

use arrow::array::{Array, ArrayRef};
use arrow::compute::kernels::cast::cast;
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use log::{debug, warn};

use crate::error::{CareGapError, Result};

/// Normalize a column name for matching (`" Patient_ID "` -> `"patient_id"`)
#[must_use]
pub fn normalize_column_name(name: &str) -> String {
    name.trim().to_lowercase().replace([' ', '-'], "_")
}

/// Find the index of a column by normalized name
#[must_use]
pub fn find_column_index(batch: &RecordBatch, column_name: &str) -> Option<usize> {
    let wanted = normalize_column_name(column_name);
    batch
        .schema()
        .fields()
        .iter()
        .position(|field| normalize_column_name(field.name()) == wanted)
}

/// Get a column from a record batch, cast to `expected_type` when needed
///
/// # Arguments
///
/// * `batch` - The record batch containing the column
/// * `table` - Table name used in error messages
/// * `column_name` - The name of the column to extract
/// * `expected_type` - The data type the caller reads
/// * `required` - Whether a missing column is an error
///
/// # Returns
///
/// * `Ok(Some(ArrayRef))` - The column array (converted if necessary)
/// * `Ok(None)` - If the column is not found and `required` is false
pub fn get_column(
    batch: &RecordBatch,
    table: &str,
    column_name: &str,
    expected_type: &DataType,
    required: bool,
) -> Result<Option<ArrayRef>> {
    let Some(idx) = find_column_index(batch, column_name) else {
        if required {
            return Err(CareGapError::column_not_found(table, column_name));
        }
        warn!("Column '{column_name}' not found in {table} table");
        return Ok(None);
    };

    let column = batch.column(idx);
    let actual_type = column.data_type();

    if actual_type == expected_type {
        return Ok(Some(column.clone()));
    }

    debug!("Converting column '{column_name}' from {actual_type:?} to {expected_type:?}");
    Ok(Some(cast(column, expected_type)?))
}

/// Downcast a column to a specific array type with clear error messages
pub fn downcast_array<'a, A: Array + 'static>(
    array: &'a ArrayRef,
    column_name: &str,
    expected_type_name: &str,
) -> Result<&'a A> {
    array
        .as_any()
        .downcast_ref::<A>()
        .ok_or_else(|| CareGapError::InvalidDataType {
            column: column_name.to_string(),
            expected: expected_type_name.to_string(),
        })
}

/// Column names of a batch in schema order
#[must_use]
pub fn column_names(batch: &RecordBatch) -> Vec<String> {
    batch
        .schema()
        .fields()
        .iter()
        .map(|field| field.name().clone())
        .collect()
}
