//! Utility functions for error handling
//!
//! Checks run before handing a path to the spreadsheet reader, so that a
//! missing source is reported as an IO error with a clear reason instead of
//! a generic workbook parse failure.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{FlowError, Result};

/// Check that a source file exists and can be opened
///
/// # Arguments
/// * `path` - The path to the file
/// * `purpose` - Why the file is needed (for error context)
pub fn ensure_readable_file(path: &Path, purpose: &str) -> Result<()> {
    if !path.exists() {
        return Err(FlowError::io(
            path,
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("File not found, needed for: {purpose}"),
            ),
        ));
    }

    if !path.is_file() {
        return Err(FlowError::io(
            path,
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Path is not a file, expected a file for: {purpose}"),
            ),
        ));
    }

    match fs::File::open(path) {
        Ok(_) => Ok(()),
        Err(e) => {
            let reason = match e.kind() {
                io::ErrorKind::PermissionDenied => {
                    "Permission denied - check file permissions".to_string()
                }
                _ => format!("Failed to open file for: {purpose}"),
            };
            Err(FlowError::io(path, io::Error::new(e.kind(), reason)))
        }
    }
}

/// Create the parent directory of an output file if it does not exist
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            fs::create_dir_all(parent).map_err(|e| FlowError::io(parent, e))
        }
        _ => Ok(()),
    }
}
