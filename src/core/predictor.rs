use serde::{Deserialize, Serialize};

/// Measurements estimated from chest circumference, in inches
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictedMeasurements {
    pub shoulder_width: f64,
    pub sleeve_length: f64,
    pub body_length: f64,
    pub neck: f64,
}

/// Predict shoulder width, sleeve length, body length and neck from chest
///
/// Formulas:
/// shoulder_width = 0.47 * chest * fit
/// sleeve_length  = 0.32 * chest * fit
/// body_length    = (25 + chest / 11) * fit
/// neck           = 0.42 * chest * fit
///
/// No bounds are imposed on `chest`; out-of-range values extrapolate.
#[inline]
pub fn predict(chest: f64, fit_multiplier: f64) -> PredictedMeasurements {
    PredictedMeasurements {
        shoulder_width: 0.47 * chest * fit_multiplier,
        sleeve_length: 0.32 * chest * fit_multiplier,
        body_length: (25.0 + chest / 11.0) * fit_multiplier,
        neck: 0.42 * chest * fit_multiplier,
    }
}

/// [`predict`] with a multiplier of 1.0
#[inline]
pub fn predict_default(chest: f64) -> PredictedMeasurements {
    predict(chest, 1.0)
}
