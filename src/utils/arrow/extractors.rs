//! Field extraction utilities for Arrow record batches
//!
//! Every input column is read as text and parsed here, so CSV and Parquet
//! inputs go through the same coercion: blank or unparseable values become
//! `None` instead of failing the load.

use crate::error::Result;
use crate::utils::arrow::array_utils::{downcast_array, get_column};
use crate::utils::dates::{DateFormatConfig, parse_date_string};
use arrow::array::{Array, StringArray};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use chrono::NaiveDate;

/// Extract a whole column as optional strings
///
/// # Returns
///
/// * `Ok(values)` - One entry per row; empty strings are `None`
/// * `Ok(all None)` - If the column is absent and not required
/// * `Err` - If the column is absent and required, or cannot be cast
pub fn extract_strings(
    batch: &RecordBatch,
    table: &str,
    column_name: &str,
    required: bool,
) -> Result<Vec<Option<String>>> {
    let Some(array) = get_column(batch, table, column_name, &DataType::Utf8, required)? else {
        return Ok(vec![None; batch.num_rows()]);
    };

    let string_array = downcast_array::<StringArray>(&array, column_name, "Utf8")?;
    Ok((0..string_array.len())
        .map(|row| {
            if string_array.is_null(row) {
                return None;
            }
            let value = string_array.value(row).trim();
            (!value.is_empty()).then(|| value.to_string())
        })
        .collect())
}

/// Extract a column of integers, tolerating values such as `"42.0"`
pub fn extract_ints(
    batch: &RecordBatch,
    table: &str,
    column_name: &str,
    required: bool,
) -> Result<Vec<Option<i32>>> {
    Ok(extract_strings(batch, table, column_name, required)?
        .into_iter()
        .map(|value| value.as_deref().and_then(parse_int))
        .collect())
}

/// Extract a column of dates using the configured formats
pub fn extract_dates(
    batch: &RecordBatch,
    table: &str,
    column_name: &str,
    required: bool,
    config: &DateFormatConfig,
) -> Result<Vec<Option<NaiveDate>>> {
    Ok(extract_strings(batch, table, column_name, required)?
        .into_iter()
        .map(|value| value.as_deref().and_then(|s| parse_date_string(s, config)))
        .collect())
}

/// Parse an integer, accepting a float representation with no fraction
#[must_use]
pub fn parse_int(value: &str) -> Option<i32> {
    let value = value.trim();
    if let Ok(parsed) = value.parse::<i32>() {
        return Some(parsed);
    }

    let float = value.parse::<f64>().ok()?;
    if float.fract() == 0.0 && float >= f64::from(i32::MIN) && float <= f64::from(i32::MAX) {
        Some(float as i32)
    } else {
        None
    }
}
