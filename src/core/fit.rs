use crate::models::FitPreference;

/// Scale a measurement by the fit preference's multiplier
#[inline]
pub fn adjust(value: f64, fit: FitPreference) -> f64 {
    value * fit.multiplier()
}
