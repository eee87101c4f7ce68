//! Reusable field validators
//!
//! Each validator is built once with its bounds and then applied to a named
//! field, so the resulting error always carries the offending field name.

use std::fmt::Display;

use super::ValidationError;

/// Validator: value must be present
pub fn required<T>(field: &'static str, value: Option<&T>) -> Result<(), ValidationError> {
    match value {
        Some(_) => Ok(()),
        None => Err(ValidationError::MissingField { field }),
    }
}

/// Validator: string length (in characters) must be within range
pub fn string_length(
    min: usize,
    max: usize,
) -> impl Fn(&'static str, &str) -> Result<(), ValidationError> + Send + Sync + Clone {
    move |field: &'static str, value: &str| {
        let len = value.chars().count();
        if len < min || len > max {
            Err(ValidationError::OutOfRange {
                field,
                message: format!(
                    "length must be between {} and {} characters (got {})",
                    min, max, len
                ),
            })
        } else {
            Ok(())
        }
    }
}

/// Validator: value must lie within the inclusive range `[min, max]`; NaN is rejected
pub fn in_range<T>(
    min: T,
    max: T,
) -> impl Fn(&'static str, T) -> Result<(), ValidationError> + Send + Sync + Clone
where
    T: PartialOrd + Display + Copy + Send + Sync,
{
    move |field: &'static str, value: T| {
        if value >= min && value <= max {
            Ok(())
        } else {
            Err(ValidationError::OutOfRange {
                field,
                message: format!("must be between {} and {} (got {})", min, max, value),
            })
        }
    }
}
