//! Error types for countbylib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading and aggregating a dataset
#[derive(Error, Debug)]
pub enum CountbyError {
    /// Source file does not exist
    #[error("file not found: {0}")]
    SourceNotFound(PathBuf),

    /// Source file has no header row (zero-byte or headerless)
    #[error("file '{0}' is empty")]
    SourceEmpty(PathBuf),

    /// Source file could not be parsed as CSV
    #[error("file '{path}' could not be parsed as CSV: {message}")]
    SourceFormat { path: PathBuf, message: String },

    /// A required column is absent from the dataset
    #[error("required column '{column}' is missing from the dataset")]
    MissingColumn { column: String },

    /// Region master file exists but is not a usable country/region table
    #[error("region map '{path}' could not be parsed: {message}")]
    RegionMapFormat { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
