//! Utility functions for error handling
//!
//! Filesystem helpers that attach the offending path and a purpose to IO
//! failures, so pipeline errors point at the file that caused them.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{CareGapError, Result};

/// Safely open a file with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.exists() {
        return Err(CareGapError::file(
            path,
            format!("File not found (needed for: {purpose})"),
        ));
    }

    if !path.is_file() {
        return Err(CareGapError::file(
            path,
            format!("Path is not a file (expected a file for: {purpose})"),
        ));
    }

    fs::File::open(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => "Permission denied - check file permissions".to_string(),
            _ => format!("Failed to open file for: {purpose}"),
        };
        CareGapError::file_with_source(path, context, e)
    })
}

/// Check that a directory exists and is readable
pub fn validate_directory(path: &Path, purpose: &str) -> Result<()> {
    if !path.exists() {
        return Err(CareGapError::file(
            path,
            format!("Directory not found (needed for: {purpose})"),
        ));
    }

    if !path.is_dir() {
        return Err(CareGapError::file(
            path,
            format!("Path is not a directory (expected a directory for: {purpose})"),
        ));
    }

    fs::read_dir(path).map(|_| ()).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => {
                "Permission denied - check directory permissions".to_string()
            }
            _ => format!("Failed to access directory for: {purpose}"),
        };
        CareGapError::file_with_source(path, context, e)
    })
}

/// Create a directory (and parents) if it does not exist yet
pub fn ensure_directory(path: &Path, purpose: &str) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }

    fs::create_dir_all(path).map_err(|e| {
        CareGapError::file_with_source(path, format!("Failed to create directory for: {purpose}"), e)
    })
}

/// Create (or truncate) a file for writing
pub fn safe_create_file(path: &Path, purpose: &str) -> Result<fs::File> {
    fs::File::create(path).map_err(|e| {
        CareGapError::file_with_source(path, format!("Failed to create file for: {purpose}"), e)
    })
}
