//! Error types shared by the date-code generators, parsers and the country
//! resolver.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DateCodeError>;

/// Errors reported by the codec. Every validation failure is terminal for
/// the operation that raised it; nothing is clamped or coerced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateCodeError {
    #[error("{field} is required and cannot be empty")]
    InvalidArgument { field: &'static str },

    #[error("invalid date code '{value}': expected {expected}")]
    InvalidFormat { value: String, expected: &'static str },

    #[error("{field} {value} is outside the valid range {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    #[error("unknown factory location code: {code}")]
    NotFound { code: String },
}

pub(crate) fn check_range(field: &'static str, value: u32, min: u32, max: u32) -> Result<()> {
    if value < min || value > max {
        return Err(DateCodeError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}
