use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Standard garment size, ordered from smallest to largest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SizeLabel {
    XS,
    S,
    M,
    L,
    XL,
    XXL,
}

impl SizeLabel {
    pub const ALL: [SizeLabel; 6] = [
        SizeLabel::XS,
        SizeLabel::S,
        SizeLabel::M,
        SizeLabel::L,
        SizeLabel::XL,
        SizeLabel::XXL,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SizeLabel::XS => "XS",
            SizeLabel::S => "S",
            SizeLabel::M => "M",
            SizeLabel::L => "L",
            SizeLabel::XL => "XL",
            SizeLabel::XXL => "XXL",
        }
    }
}

impl fmt::Display for SizeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown enum name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl FromStr for SizeLabel {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SizeLabel::ALL
            .into_iter()
            .find(|label| label.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant {
                kind: "size label",
                value: s.to_string(),
            })
    }
}

/// Inclusive lower/upper bound pair in inches
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRange {
    pub lower: f64,
    pub upper: f64,
}

impl MeasurementRange {
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Arithmetic mean of the two bounds
    #[inline]
    pub fn midpoint(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

/// One row of a size chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeRecord {
    pub label: SizeLabel,
    pub chest: MeasurementRange,
    pub waist: MeasurementRange,
    pub shoulder_width: f64,
    pub sleeve_length: f64,
    pub body_length: f64,
    pub neck: MeasurementRange,
}

/// Measurement triple fed to the size matcher
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodySample {
    pub chest: f64,
    pub waist: f64,
    pub shoulder_width: f64,
}

impl BodySample {
    pub fn new(chest: f64, waist: f64, shoulder_width: f64) -> Self {
        Self {
            chest,
            waist,
            shoulder_width,
        }
    }

    /// True when no component is NaN or infinite
    pub fn is_finite(&self) -> bool {
        self.chest.is_finite() && self.waist.is_finite() && self.shoulder_width.is_finite()
    }
}

/// Distance weighting used when comparing a sample against chart rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum Weighting {
    /// Plain Euclidean distance over chest, waist and shoulder width
    #[default]
    Standard,
    /// Chest deviation counts twice; compared as a squared sum
    ChestWeighted,
}

impl FromStr for Weighting {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "standard" => Ok(Weighting::Standard),
            "chestweighted" => Ok(Weighting::ChestWeighted),
            _ => Err(UnknownVariant {
                kind: "weighting",
                value: s.to_string(),
            }),
        }
    }
}

/// How loosely the garment should fit
///
/// Deserialization goes through [`FromStr`], so config values such as
/// `relaxed` or `WELL_FIT` are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum FitPreference {
    #[default]
    #[serde(rename = "Well-Fit")]
    WellFit,
    #[serde(rename = "Relaxed")]
    Relaxed,
    #[serde(rename = "Oversized")]
    Oversized,
}

impl FitPreference {
    pub const ALL: [FitPreference; 3] = [
        FitPreference::WellFit,
        FitPreference::Relaxed,
        FitPreference::Oversized,
    ];

    /// Multiplier applied to chest and waist
    pub fn multiplier(&self) -> f64 {
        match self {
            FitPreference::WellFit => 1.0,
            FitPreference::Relaxed => 1.05,
            FitPreference::Oversized => 1.1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FitPreference::WellFit => "Well-Fit",
            FitPreference::Relaxed => "Relaxed",
            FitPreference::Oversized => "Oversized",
        }
    }
}

impl fmt::Display for FitPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FitPreference {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "wellfit" => Ok(FitPreference::WellFit),
            "relaxed" => Ok(FitPreference::Relaxed),
            "oversized" => Ok(FitPreference::Oversized),
            _ => Err(UnknownVariant {
                kind: "fit preference",
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Weighting {
    type Error = UnknownVariant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for FitPreference {
    type Error = UnknownVariant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Which calculator the engine behaves as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Size recommendation only, no fit adjustment
    SizeOnly,
    /// Fit-adjusted size recommendation plus sewing pattern dimensions
    #[default]
    SizeAndPattern,
}

impl Variant {
    pub fn default_weighting(&self) -> Weighting {
        match self {
            Variant::SizeOnly => Weighting::Standard,
            Variant::SizeAndPattern => Weighting::ChestWeighted,
        }
    }

    pub fn produces_pattern(&self) -> bool {
        matches!(self, Variant::SizeAndPattern)
    }
}

/// Drop case, spaces, dashes and underscores so "Well-Fit", "well_fit" and
/// "WELL FIT" all compare equal
fn normalize_name(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// A measurement value tagged with where it came from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", content = "value", rename_all = "lowercase")]
pub enum Measured {
    Supplied(f64),
    Predicted(f64),
}

impl Measured {
    #[inline]
    pub fn value(&self) -> f64 {
        match *self {
            Measured::Supplied(v) | Measured::Predicted(v) => v,
        }
    }

    pub fn is_predicted(&self) -> bool {
        matches!(self, Measured::Predicted(_))
    }
}

/// Body measurements for one person, in inches
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasurementSet {
    pub chest: f64,
    pub waist: f64,
    pub shoulder_width: Measured,
    pub sleeve_length: Measured,
    pub body_length: Measured,
    pub neck: Measured,
}

impl MeasurementSet {
    pub fn sample(&self) -> BodySample {
        BodySample::new(self.chest, self.waist, self.shoulder_width.value())
    }
}

/// Flat-pattern dimensions derived from a [`MeasurementSet`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatternMeasurementSet {
    #[serde(rename = "Chest Width")]
    pub chest_width: f64,
    #[serde(rename = "Waist Width")]
    pub waist_width: f64,
    #[serde(rename = "Body Length")]
    pub body_length: f64,
    #[serde(rename = "Neck Width")]
    pub neck_width: f64,
    #[serde(rename = "Sleeve Length")]
    pub sleeve_length: f64,
}
