use serde::{Deserialize, Serialize};
use crate::models::domain::{
    FitPreference, MeasurementSet, Measured, PatternMeasurementSet, SizeLabel, Variant, Weighting,
};

/// Score of one chart row against a sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeDistance {
    pub label: SizeLabel,
    pub distance: f64,
}

/// Result of one sizing interaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub size: SizeLabel,
    pub variant: Variant,
    pub weighting: Weighting,
    /// Only set when the fit policy was applied
    pub fit: Option<FitPreference>,
    pub measurements: MeasurementSet,
    /// Every chart row's score, in chart order
    pub distances: Vec<SizeDistance>,
    pub pattern: Option<PatternMeasurementSet>,
}

/// One line of the predicted-measurements table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeasurementRow {
    pub measurement: &'static str,
    pub value: f64,
    pub predicted: bool,
}

impl MeasurementRow {
    fn from_measured(measurement: &'static str, measured: Measured) -> Self {
        Self {
            measurement,
            value: measured.value(),
            predicted: measured.is_predicted(),
        }
    }
}

impl Recommendation {
    /// Whether shoulder width was predicted rather than supplied
    pub fn shoulder_width_predicted(&self) -> bool {
        self.measurements.shoulder_width.is_predicted()
    }

    /// Display rows for the measurement table
    ///
    /// Each row carries its own provenance. Sleeve length, body length and
    /// neck are always predicted, so they read "Yes" even when shoulder width
    /// was supplied; the row flags are not copied from the shoulder width.
    pub fn measurement_rows(&self) -> [MeasurementRow; 4] {
        let m = &self.measurements;
        [
            MeasurementRow::from_measured("Shoulder Width", m.shoulder_width),
            MeasurementRow::from_measured("Sleeve Length", m.sleeve_length),
            MeasurementRow::from_measured("Body Length", m.body_length),
            MeasurementRow::from_measured("Neck", m.neck),
        ]
    }
}
