//! Shared factory-location-code validation.

use crate::error::{DateCodeError, Result};

/// Validates a factory location code and returns it uppercased.
///
/// A valid code is exactly two ASCII letters. Whether the code names a known
/// factory is the resolver's concern, not checked here.
pub fn normalize_location_code(code: &str) -> Result<String> {
    if code.is_empty() {
        return Err(DateCodeError::InvalidArgument {
            field: "factory location code",
        });
    }

    if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(DateCodeError::InvalidFormat {
            value: code.to_string(),
            expected: "a two-letter factory location code",
        });
    }

    Ok(code.to_ascii_uppercase())
}
