//! Plain-text rendering of a sizing result
//!
//! Sections follow the sizing form: recommended size,
//! measurement table with provenance, size chart reference and, for the
//! pattern variant, the sewing pattern dimensions.
//!
//! The "Predicted?" column is per row. A supplied shoulder width reads "No"
//! while the sleeve, body and neck rows, which are always predicted, read
//! "Yes". A form that repeats the shoulder flag on every row shows "No"
//! throughout instead.

use std::fmt;
use crate::core::SizeChart;
use crate::models::{MeasurementRange, Recommendation};

/// Borrowing view that renders a [`Recommendation`] as text
pub struct Report<'a> {
    recommendation: &'a Recommendation,
    chart: &'a SizeChart,
}

impl<'a> Report<'a> {
    pub fn new(recommendation: &'a Recommendation, chart: &'a SizeChart) -> Self {
        Self { recommendation, chart }
    }
}

fn range(r: &MeasurementRange) -> String {
    format!("{}-{}", r.lower, r.upper)
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rec = self.recommendation;

        writeln!(f, "Recommended Size")?;
        writeln!(f, "  Your recommended size is: {}", rec.size)?;
        if let Some(fit) = rec.fit {
            writeln!(f, "  Fit preference: {}", fit)?;
        }
        writeln!(f)?;

        writeln!(f, "Predicted Measurements")?;
        writeln!(f, "  {:<16} {:>16}  {}", "Measurement", "Value (inches)", "Predicted?")?;
        for row in rec.measurement_rows() {
            writeln!(
                f,
                "  {:<16} {:>16.4}  {}",
                row.measurement,
                row.value,
                if row.predicted { "Yes" } else { "No" }
            )?;
        }
        writeln!(f)?;

        writeln!(f, "Size Chart Reference")?;
        writeln!(
            f,
            "  {:<5} {:>8} {:>8} {:>9} {:>8} {:>8} {:>10} {:>10}",
            "Size", "Chest", "Waist", "Shoulder", "Sleeve", "Body", "Neck", "Distance"
        )?;
        for (record, scored) in self.chart.iter().zip(&rec.distances) {
            writeln!(
                f,
                "  {:<5} {:>8} {:>8} {:>9} {:>8} {:>8} {:>10} {:>10.3}",
                record.label.as_str(),
                range(&record.chest),
                range(&record.waist),
                record.shoulder_width,
                record.sleeve_length,
                record.body_length,
                range(&record.neck),
                scored.distance
            )?;
        }

        if let Some(pattern) = &rec.pattern {
            writeln!(f)?;
            writeln!(f, "Sewing Pattern Measurements")?;
            for (name, value) in [
                ("Chest Width", pattern.chest_width),
                ("Waist Width", pattern.waist_width),
                ("Body Length", pattern.body_length),
                ("Neck Width", pattern.neck_width),
                ("Sleeve Length", pattern.sleeve_length),
            ] {
                writeln!(f, "  {:<16} {:>16.4}", name, value)?;
            }
        }

        Ok(())
    }
}
