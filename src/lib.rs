//! Garment Sizer - clothing size recommender and sewing pattern calculator
//!
//! This library maps body measurements to a standard size label (XS to XXL)
//! by nearest-neighbour search over a size chart, predicts missing
//! measurements from chest circumference, and derives flat-pattern
//! dimensions for sewing.

pub mod config;
pub mod core;
pub mod models;
pub mod report;
pub mod services;

// Re-export commonly used types
pub use crate::core::{adjust, derive_pattern, find_closest_size, predict, SizeChart, SizeMatcher, SizingEngine};
pub use crate::models::{
    BodySample, FitPreference, InputError, MeasurementSet, Measured, PatternMeasurementSet,
    Recommendation, SizeLabel, SizingRequest, Variant, Weighting,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let chart = SizeChart::standard();
        let label = find_closest_size(&chart, &BodySample::new(39.0, 32.5, 21.0), Weighting::Standard);
        assert_eq!(label, Some(SizeLabel::M));
    }
}
