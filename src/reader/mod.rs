//! Reading input tables into Arrow record batches
//!
//! CSV extracts are read with an all-`Utf8` schema taken from the header
//! row, leaving type coercion to the loader. Parquet files are read with
//! their own schema.

use std::io::{Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use arrow::csv::ReaderBuilder;
use arrow::csv::reader::Format;
use arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::error::util::safe_open_file;
use crate::error::{CareGapError, Result};
use crate::utils::logging::{log_table_read, log_table_start};

/// Default batch size for reading tables
pub const DEFAULT_BATCH_SIZE: usize = 8192;

/// File formats understood by the reader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    Parquet,
}

impl TableFormat {
    /// Extensions tried, in order, when looking up a table by name
    pub const ALL: [Self; 2] = [Self::Csv, Self::Parquet];

    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Parquet => "parquet",
        }
    }

    /// Detect the format from a path's extension
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|format| format.extension() == extension)
    }
}

/// Locate `{name}.csv` or `{name}.parquet` in a directory
#[must_use]
pub fn find_table_file(dir: &Path, name: &str) -> Option<PathBuf> {
    TableFormat::ALL
        .into_iter()
        .map(|format| dir.join(format!("{name}.{}", format.extension())))
        .find(|path| path.is_file())
}

/// Read a table file into record batches
pub fn read_table(path: &Path, batch_size: usize) -> Result<Vec<RecordBatch>> {
    let start = Instant::now();
    log_table_start(path);

    let batches = match TableFormat::from_path(path) {
        Some(TableFormat::Csv) => read_csv(path, batch_size)?,
        Some(TableFormat::Parquet) => read_parquet(path, batch_size)?,
        None => return Err(CareGapError::UnsupportedFormat(path.to_path_buf())),
    };

    let rows = batches.iter().map(RecordBatch::num_rows).sum();
    log_table_read(path, rows, Some(start.elapsed()));
    Ok(batches)
}

/// Read a CSV file with every column typed as nullable `Utf8`
///
/// A file with a header but no rows yields one empty batch, so callers can
/// still check its columns.
pub fn read_csv(path: &Path, batch_size: usize) -> Result<Vec<RecordBatch>> {
    let mut file = safe_open_file(path, "reading CSV table")?;

    let format = Format::default().with_header(true);
    let (header, _) = format.infer_schema(&mut file, Some(0))?;
    if header.fields().is_empty() {
        return Err(CareGapError::file(path, "CSV file has no header row"));
    }

    let schema = Arc::new(Schema::new(
        header
            .fields()
            .iter()
            .map(|field| Field::new(field.name(), DataType::Utf8, true))
            .collect::<Vec<_>>(),
    ));

    file.seek(SeekFrom::Start(0))?;
    let reader = ReaderBuilder::new(schema.clone())
        .with_format(format)
        .with_batch_size(batch_size)
        .build(file)?;

    let batches = reader.collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(or_empty_batch(batches, schema))
}

/// Read a Parquet file
pub fn read_parquet(path: &Path, batch_size: usize) -> Result<Vec<RecordBatch>> {
    let file = safe_open_file(path, "reading parquet table")?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?.with_batch_size(batch_size);
    let schema = builder.schema().clone();
    let reader = builder.build()?;

    let batches = reader.collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(or_empty_batch(batches, schema))
}

fn or_empty_batch(batches: Vec<RecordBatch>, schema: SchemaRef) -> Vec<RecordBatch> {
    if batches.is_empty() {
        vec![RecordBatch::new_empty(schema)]
    } else {
        batches
    }
}
