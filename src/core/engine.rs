use crate::core::{
    chart::SizeChart,
    fit::adjust,
    matcher::SizeMatcher,
    pattern::derive_pattern,
    predictor::predict,
};
use crate::models::{
    InputError, MeasurementSet, Measured, Recommendation, SizingRequest, Variant, Weighting,
};
use std::sync::Arc;

/// Sizing orchestrator shared by both calculators
///
/// # Pipeline
/// 1. Shoulder width text parsing (the only failure point)
/// 2. Fit adjustment of chest and waist (pattern variant only)
/// 3. Measurement prediction
/// 4. Nearest size matching
/// 5. Pattern derivation (pattern variant only)
#[derive(Debug, Clone)]
pub struct SizingEngine {
    matcher: SizeMatcher,
    variant: Variant,
}

impl SizingEngine {
    /// Engine over `chart` using the variant's default weighting
    pub fn new(chart: Arc<SizeChart>, variant: Variant) -> Self {
        Self {
            matcher: SizeMatcher::new(chart, variant.default_weighting()),
            variant,
        }
    }

    /// Size-only calculator over the standard chart
    pub fn size_only() -> Self {
        Self::new(Arc::new(SizeChart::standard()), Variant::SizeOnly)
    }

    /// Size and pattern calculator over the standard chart
    pub fn size_and_pattern() -> Self {
        Self::new(Arc::new(SizeChart::standard()), Variant::SizeAndPattern)
    }

    /// Override the variant's default weighting
    pub fn with_weighting(self, weighting: Weighting) -> Self {
        Self {
            matcher: self.matcher.with_weighting(weighting),
            ..self
        }
    }

    pub fn chart(&self) -> &SizeChart {
        self.matcher.chart()
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn weighting(&self) -> Weighting {
        self.matcher.weighting()
    }

    /// Run one sizing interaction
    ///
    /// An unparseable or non-finite shoulder width aborts before any size or
    /// pattern is computed. Chest and waist are used as given; slider bounds
    /// are the caller's concern, and a NaN or infinite value yields
    /// [`InputError::NoMatchingSize`].
    pub fn recommend(&self, request: &SizingRequest) -> Result<Recommendation, InputError> {
        let supplied_shoulder = request.parsed_shoulder_width()?;

        let (chest, waist, multiplier, fit) = if self.variant.produces_pattern() {
            (
                adjust(request.chest, request.fit),
                adjust(request.waist, request.fit),
                request.fit.multiplier(),
                Some(request.fit),
            )
        } else {
            (request.chest, request.waist, 1.0, None)
        };

        let predicted = predict(chest, multiplier);

        let shoulder_width = match supplied_shoulder {
            Some(value) => Measured::Supplied(value),
            None => Measured::Predicted(predicted.shoulder_width),
        };

        let measurements = MeasurementSet {
            chest,
            waist,
            shoulder_width,
            sleeve_length: Measured::Predicted(predicted.sleeve_length),
            body_length: Measured::Predicted(predicted.body_length),
            neck: Measured::Predicted(predicted.neck),
        };

        let sample = measurements.sample();
        let size = self
            .matcher
            .find_closest(&sample)
            .ok_or(InputError::NoMatchingSize)?;
        let distances = self.matcher.rank(&sample);

        let pattern = self
            .variant
            .produces_pattern()
            .then(|| derive_pattern(&measurements));

        tracing::debug!(
            "Recommended {} for chest={}, waist={}, shoulder_width={} ({:?}, {:?})",
            size,
            chest,
            waist,
            sample.shoulder_width,
            self.variant,
            self.weighting()
        );

        Ok(Recommendation {
            size,
            variant: self.variant,
            weighting: self.weighting(),
            fit,
            measurements,
            distances,
            pattern,
        })
    }
}

impl Default for SizingEngine {
    fn default() -> Self {
        Self::size_and_pattern()
    }
}
