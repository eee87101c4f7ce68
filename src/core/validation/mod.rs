//! Field-level validation of ship payloads
//!
//! Creation requires the mandatory fields and checks every bound; an edit
//! checks only the fields it carries.

pub mod validators;

use chrono::Datelike;
use thiserror::Error;

use crate::core::ship::ShipPayload;
use validators::{in_range, required, string_length};

pub const NAME_MAX_LENGTH: usize = 50;
pub const PLANET_MAX_LENGTH: usize = 50;
pub const MIN_CREW_SIZE: i32 = 1;
pub const MAX_CREW_SIZE: i32 = 9999;
pub const MIN_SPEED: f64 = 0.01;
pub const MAX_SPEED: f64 = 0.99;
pub const MIN_PRODUCTION_YEAR: i32 = 2800;
pub const MAX_PRODUCTION_YEAR: i32 = 3019;

/// A payload field that broke its constraint
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A mandatory creation field was absent
    #[error("missing required field '{field}'")]
    MissingField { field: &'static str },

    /// A present field was outside its bounds
    #[error("invalid '{field}': {message}")]
    OutOfRange {
        field: &'static str,
        message: String,
    },
}

impl ValidationError {
    /// Wire name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingField { field } | ValidationError::OutOfRange { field, .. } => {
                field
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// All mandatory fields must be present
    Create,
    /// Only present fields are checked
    Edit,
}

/// Check `payload` for `mode`, reporting the first offending field
pub fn validate(payload: &ShipPayload, mode: ValidationMode) -> Result<(), ValidationError> {
    if mode == ValidationMode::Create {
        required("name", payload.name.as_ref())?;
        required("planet", payload.planet.as_ref())?;
        required("shipType", payload.ship_type.as_ref())?;
        required("prodDate", payload.prod_date.as_ref())?;
        required("speed", payload.speed.as_ref())?;
        required("crewSize", payload.crew_size.as_ref())?;
    }

    if let Some(name) = payload.name.as_deref() {
        string_length(1, NAME_MAX_LENGTH)("name", name)?;
    }
    if let Some(planet) = payload.planet.as_deref() {
        string_length(1, PLANET_MAX_LENGTH)("planet", planet)?;
    }
    if let Some(crew_size) = payload.crew_size {
        in_range(MIN_CREW_SIZE, MAX_CREW_SIZE)("crewSize", crew_size)?;
    }
    if let Some(speed) = payload.speed {
        in_range(MIN_SPEED, MAX_SPEED)("speed", speed)?;
    }
    if let Some(prod_date) = payload.prod_date {
        in_range(MIN_PRODUCTION_YEAR, MAX_PRODUCTION_YEAR)("prodDate", prod_date.year())?;
    }

    Ok(())
}
