//! Validation error types

use std::fmt;

/// Validation error for request parameters
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Value is not a `YYYY-MM-DD` calendar date
    InvalidDate { field: &'static str, value: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::InvalidDate { field, value } => {
                write!(f, "{}: '{}' is not a valid YYYY-MM-DD date", field, value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
