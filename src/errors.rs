//! Error types for the dltracker application.
//!
//! This module defines custom error types that categorize different failures
//! that can occur while managing notes and assignments.

use std::{fmt, io, path::PathBuf};

use thiserror::Error;

/// The main error type for the dltracker application.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Errors related to file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Errors related to serialization/deserialization operations.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Directory creation or access failed.
    #[error("Failed to create or access directory: {path}")]
    DirectoryError { path: PathBuf },

    /// A creation input failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A date string could not be parsed.
    #[error("Invalid date '{value}': expected {expected}")]
    DateParse { value: String, expected: String },
}

/// A single rejected field in a creation input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Name of the offending field.
    pub field: &'static str,
    /// Human-readable reason the value was rejected.
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// All field errors collected while validating one creation input.
///
/// Validation runs over the whole input before failing, so callers can
/// report every problem at once instead of one per attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation failed: ")?;
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", err.field, err.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}
