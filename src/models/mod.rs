// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BodySample, FitPreference, MeasurementRange, MeasurementSet, Measured, PatternMeasurementSet,
    SizeLabel, SizeRecord, UnknownVariant, Variant, Weighting,
};
pub use requests::{parse_shoulder_width, InputError, SizingRequest};
pub use responses::{MeasurementRow, Recommendation, SizeDistance};
