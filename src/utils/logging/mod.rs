//! Utilities for logging, console output and progress tracking

pub mod console;
pub mod log;
pub mod progress;

pub use self::log::{log_file_written, log_table_read, log_table_start};
pub use progress::{finish_stage, stage_spinner};
