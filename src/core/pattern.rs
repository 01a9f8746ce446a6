use crate::models::{MeasurementSet, PatternMeasurementSet};

/// Convert body measurements into flat-pattern dimensions
///
/// Circumferences become half widths (the front panel of a folded pattern);
/// lengths pass through unchanged.
pub fn derive_pattern(measurements: &MeasurementSet) -> PatternMeasurementSet {
    PatternMeasurementSet {
        chest_width: measurements.chest / 2.0,
        waist_width: measurements.waist / 2.0,
        body_length: measurements.body_length.value(),
        neck_width: measurements.neck.value() / 2.0,
        sleeve_length: measurements.sleeve_length.value(),
    }
}
