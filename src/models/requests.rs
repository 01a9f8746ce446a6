use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;
use crate::models::domain::FitPreference;

/// Errors raised while interpreting raw user input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("Please enter a valid number for Shoulder Width.")]
    InvalidShoulderWidth { input: String },

    #[error("Measurements out of range: {0}")]
    OutOfRange(String),

    #[error("No size matches the given measurements.")]
    NoMatchingSize,
}

/// Raw measurements as gathered by the input form
///
/// Chest and waist bounds mirror the form's sliders. The engine never checks
/// them; callers that want them enforced run [`SizingRequest::validate_bounds`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SizingRequest {
    #[validate(range(min = 30.0, max = 55.0))]
    #[serde(default = "default_chest")]
    pub chest: f64,
    #[validate(range(min = 25.0, max = 50.0))]
    #[serde(default = "default_waist")]
    pub waist: f64,
    /// Blank means "predict this value"
    #[serde(default)]
    pub shoulder_width: String,
    #[serde(default)]
    pub fit: FitPreference,
}

pub(crate) fn default_chest() -> f64 {
    42.0
}

pub(crate) fn default_waist() -> f64 {
    38.0
}

impl Default for SizingRequest {
    fn default() -> Self {
        Self {
            chest: default_chest(),
            waist: default_waist(),
            shoulder_width: String::new(),
            fit: FitPreference::default(),
        }
    }
}

impl SizingRequest {
    pub fn new(chest: f64, waist: f64) -> Self {
        Self {
            chest,
            waist,
            ..Self::default()
        }
    }

    pub fn with_shoulder_width(mut self, text: impl Into<String>) -> Self {
        self.shoulder_width = text.into();
        self
    }

    pub fn with_fit(mut self, fit: FitPreference) -> Self {
        self.fit = fit;
        self
    }

    /// Check the slider bounds for chest and waist
    pub fn validate_bounds(&self) -> Result<(), InputError> {
        self.validate()
            .map_err(|errors| InputError::OutOfRange(errors.to_string()))
    }

    /// Interpret the shoulder width text; `None` means it should be predicted
    pub fn parsed_shoulder_width(&self) -> Result<Option<f64>, InputError> {
        parse_shoulder_width(&self.shoulder_width)
    }
}

/// Parse optional shoulder width text
///
/// Blank or whitespace-only input yields `Ok(None)`. Anything else must parse
/// as a finite real number after trimming; `nan` and `inf` are rejected.
pub fn parse_shoulder_width(text: &str) -> Result<Option<f64>, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(Some)
        .ok_or_else(|| InputError::InvalidShoulderWidth {
            input: text.to_string(),
        })
}
