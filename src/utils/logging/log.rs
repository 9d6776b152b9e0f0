//! Logging helpers for table and report files
//!
//! Keeps the wording of file-level log lines uniform across the reader and
//! the exporters.

use std::path::Path;
use std::time::Duration;

use log::{info, warn};

/// A table is about to be read
pub fn log_table_start(path: &Path) {
    info!("Reading table {}", path.display());
}

/// A table was read; `elapsed` is included when measured
pub fn log_table_read(path: &Path, rows: usize, elapsed: Option<Duration>) {
    match elapsed {
        Some(elapsed) => info!("Read {rows} rows from {} in {elapsed:?}", path.display()),
        None => info!("Read {rows} rows from {}", path.display()),
    }
    if rows == 0 {
        warn!("Table {} has no rows", path.display());
    }
}

/// A report file was written
pub fn log_file_written(path: &Path, rows: usize) {
    info!("Wrote {rows} rows to {}", path.display());
}
