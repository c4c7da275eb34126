//! User profile attributes.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Gender recorded on a user profile. Stored as upper-case TEXT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Parse a gender name, ignoring case and surrounding whitespace.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name.trim().to_ascii_uppercase().as_str() {
            "MALE" => Ok(Self::Male),
            "FEMALE" => Ok(Self::Female),
            _ => Err(CoreError::Validation(format!(
                "Invalid gender '{name}'. Must be one of: MALE, FEMALE"
            ))),
        }
    }

    /// Database / wire name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Male => "MALE",
            Self::Female => "FEMALE",
        }
    }
}

impl TryFrom<String> for Gender {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_name(&value)
    }
}

/// Reject a body measurement that is not a positive finite number.
///
/// `None` means "not provided" and is always accepted.
pub fn validate_measurement(field: &str, value: Option<f64>) -> Result<(), CoreError> {
    match value {
        Some(v) if !v.is_finite() || v <= 0.0 => Err(CoreError::Validation(format!(
            "{field} must be a positive number"
        ))),
        _ => Ok(()),
    }
}
