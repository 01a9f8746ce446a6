use crate::models::{MeasurementRange, SizeLabel, SizeRecord};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when building or loading a size chart
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Size chart has no records")]
    Empty,

    #[error("Inverted {field} range for size {label}: {lower} > {upper}")]
    InvertedRange {
        label: SizeLabel,
        field: &'static str,
        lower: f64,
        upper: f64,
    },

    #[error("Duplicate size label: {0}")]
    DuplicateLabel(SizeLabel),
}

/// Immutable, ordered reference table of garment sizes
///
/// Rows are scanned in the order given, which is also the tie-break order
/// of the size matcher. A chart is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeChart {
    records: Vec<SizeRecord>,
}

/// On-disk layout of an alternate chart
#[derive(Debug, Deserialize)]
struct ChartFile {
    sizes: Vec<SizeRecord>,
}

fn record(
    label: SizeLabel,
    chest: (f64, f64),
    waist: (f64, f64),
    shoulder_width: f64,
    sleeve_length: f64,
    body_length: f64,
    neck: (f64, f64),
) -> SizeRecord {
    SizeRecord {
        label,
        chest: MeasurementRange::new(chest.0, chest.1),
        waist: MeasurementRange::new(waist.0, waist.1),
        shoulder_width,
        sleeve_length,
        body_length,
        neck: MeasurementRange::new(neck.0, neck.1),
    }
}

impl SizeChart {
    /// Build a chart from explicit records, validating them
    pub fn new(records: Vec<SizeRecord>) -> Result<Self, ChartError> {
        if records.is_empty() {
            return Err(ChartError::Empty);
        }

        let mut seen = HashSet::with_capacity(records.len());
        for rec in &records {
            if !seen.insert(rec.label) {
                return Err(ChartError::DuplicateLabel(rec.label));
            }
            for (field, range) in [("chest", rec.chest), ("waist", rec.waist), ("neck", rec.neck)] {
                if range.lower > range.upper {
                    return Err(ChartError::InvertedRange {
                        label: rec.label,
                        field,
                        lower: range.lower,
                        upper: range.upper,
                    });
                }
            }
        }

        Ok(Self { records })
    }

    /// The standard six-row chart (inches)
    pub fn standard() -> Self {
        use SizeLabel::*;

        Self {
            records: vec![
                record(XS, (31.0, 34.0), (26.0, 28.0), 17.5, 8.5, 28.0, (14.0, 14.5)),
                record(S, (35.0, 37.0), (28.0, 30.0), 19.0, 9.0, 29.0, (14.0, 14.5)),
                record(M, (38.0, 40.0), (31.0, 34.0), 21.0, 10.0, 30.0, (15.0, 15.5)),
                record(L, (42.0, 45.0), (35.0, 38.0), 22.5, 10.5, 31.0, (16.0, 16.5)),
                record(XL, (46.0, 48.0), (40.0, 42.0), 24.5, 11.0, 32.0, (17.0, 17.5)),
                record(XXL, (49.0, 52.0), (43.0, 45.0), 26.5, 11.5, 33.0, (18.0, 18.5)),
            ],
        }
    }

    /// Parse a chart from TOML text containing a `[[sizes]]` array
    pub fn from_toml_str(text: &str) -> Result<Self, ChartError> {
        let file: ChartFile = toml::from_str(text)?;
        Self::new(file.sizes)
    }

    /// Load a chart from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ChartError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let chart = Self::from_toml_str(&text)?;
        tracing::debug!(
            "Loaded size chart with {} records from {}",
            chart.len(),
            path.as_ref().display()
        );
        Ok(chart)
    }

    pub fn records(&self) -> &[SizeRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SizeRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a constructed chart
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, label: SizeLabel) -> Option<&SizeRecord> {
        self.records.iter().find(|rec| rec.label == label)
    }
}

impl Default for SizeChart {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> IntoIterator for &'a SizeChart {
    type Item = &'a SizeRecord;
    type IntoIter = std::slice::Iter<'a, SizeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
