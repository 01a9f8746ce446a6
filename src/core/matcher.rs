use crate::core::{
    chart::SizeChart,
    distance::{score_difference, size_distance},
};
use crate::models::{BodySample, SizeDistance, SizeLabel, SizeRecord, Weighting};
use std::sync::Arc;

/// Find the chart row closest to `sample`
///
/// Rows are scanned in chart order and only a strictly smaller score replaces
/// the current best, so on a tie the earlier (smaller) size wins. Scores that
/// compare equal only because of rounding or overflow are separated by
/// [`score_difference`]. A sample with a NaN or infinite component matches
/// nothing.
pub fn find_closest_size(
    chart: &SizeChart,
    sample: &BodySample,
    weighting: Weighting,
) -> Option<SizeLabel> {
    if !sample.is_finite() {
        tracing::debug!(
            "No size matched non-finite sample chest={}, waist={}, shoulder_width={}",
            sample.chest,
            sample.waist,
            sample.shoulder_width
        );
        return None;
    }

    let (closest, _) = chart.iter().fold(
        (None::<&SizeRecord>, f64::INFINITY),
        |(closest, min_distance), rec| {
            let distance = size_distance(sample, rec, weighting);
            tracing::trace!("{}: distance {}", rec.label, distance);

            let closer = match closest {
                None => true,
                Some(best) => {
                    distance < min_distance
                        || (distance == min_distance
                            && score_difference(sample, rec, best, weighting) < 0.0)
                }
            };
            if closer {
                (Some(rec), distance)
            } else {
                (closest, min_distance)
            }
        },
    );

    closest.map(|rec| rec.label)
}

/// Nearest-neighbour size matcher over an injected chart
#[derive(Debug, Clone)]
pub struct SizeMatcher {
    chart: Arc<SizeChart>,
    weighting: Weighting,
}

impl SizeMatcher {
    pub fn new(chart: Arc<SizeChart>, weighting: Weighting) -> Self {
        Self { chart, weighting }
    }

    /// Matcher over the standard chart with Euclidean weighting
    pub fn with_standard_chart() -> Self {
        Self::new(Arc::new(SizeChart::standard()), Weighting::Standard)
    }

    pub fn with_weighting(self, weighting: Weighting) -> Self {
        Self { weighting, ..self }
    }

    pub fn chart(&self) -> &SizeChart {
        &self.chart
    }

    pub fn weighting(&self) -> Weighting {
        self.weighting
    }

    pub fn find_closest(&self, sample: &BodySample) -> Option<SizeLabel> {
        find_closest_size(&self.chart, sample, self.weighting)
    }

    /// Score every chart row against `sample`, in chart order
    pub fn rank(&self, sample: &BodySample) -> Vec<SizeDistance> {
        self.chart
            .iter()
            .map(|rec| SizeDistance {
                label: rec.label,
                distance: size_distance(sample, rec, self.weighting),
            })
            .collect()
    }
}

impl Default for SizeMatcher {
    fn default() -> Self {
        Self::with_standard_chart()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MeasurementRange;

    fn synthetic_chart() -> SizeChart {
        let rec = |label, chest_mid: f64, waist_mid: f64, shoulder_width| SizeRecord {
            label,
            chest: MeasurementRange::new(chest_mid - 1.0, chest_mid + 1.0),
            waist: MeasurementRange::new(waist_mid - 1.0, waist_mid + 1.0),
            shoulder_width,
            sleeve_length: 10.0,
            body_length: 30.0,
            neck: MeasurementRange::new(15.0, 15.5),
        };

        SizeChart::new(vec![
            rec(SizeLabel::S, 36.0, 30.0, 20.0),
            rec(SizeLabel::M, 40.0, 34.0, 20.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_default_scenario_matches_large() {
        let matcher = SizeMatcher::with_standard_chart();
        let sample = BodySample::new(42.0, 38.0, 0.47 * 42.0);

        assert_eq!(matcher.find_closest(&sample), Some(SizeLabel::L));
    }

    #[test]
    fn test_rank_covers_every_row() {
        let matcher = SizeMatcher::with_standard_chart();
        let sample = BodySample::new(42.0, 38.0, 0.47 * 42.0);
        let ranked = matcher.rank(&sample);

        assert_eq!(ranked.len(), 6);
        let best = ranked
            .iter()
            .min_by(|a, b| a.distance.partial_cmp(&b.distance).unwrap())
            .unwrap();
        assert_eq!(best.label, SizeLabel::L);
    }

    #[test]
    fn test_tie_goes_to_earlier_row() {
        let chart = synthetic_chart();
        // Exactly halfway between S and M on chest and waist
        let sample = BodySample::new(38.0, 32.0, 20.0);

        assert_eq!(find_closest_size(&chart, &sample, Weighting::Standard), Some(SizeLabel::S));
        assert_eq!(find_closest_size(&chart, &sample, Weighting::ChestWeighted), Some(SizeLabel::S));
    }

    #[test]
    fn test_injected_chart_is_used() {
        let matcher = SizeMatcher::new(Arc::new(synthetic_chart()), Weighting::Standard);
        let sample = BodySample::new(52.0, 45.0, 26.5);

        // XXL would win on the standard chart
        assert_eq!(matcher.find_closest(&sample), Some(SizeLabel::M));
    }

    #[test]
    fn test_chest_weighting_changes_selection() {
        let chart = synthetic_chart();
        // Chest favours M, waist favours S by a wider margin
        let sample = BodySample::new(39.0, 30.5, 20.0);

        // standard: S = 9 + 0.25 = 9.25, M = 1 + 12.25 = 13.25
        assert_eq!(find_closest_size(&chart, &sample, Weighting::Standard), Some(SizeLabel::S));
        // chest-weighted: S = 18 + 0.25 = 18.25, M = 2 + 12.25 = 14.25
        assert_eq!(find_closest_size(&chart, &sample, Weighting::ChestWeighted), Some(SizeLabel::M));
    }

    #[test]
    fn test_huge_finite_shoulder_matches_largest_size() {
        let chart = SizeChart::standard();

        // 1e153 rounds every deviation to the same value, 1e200 overflows when squared
        for shoulder in [1.0e153, 1.0e200] {
            let sample = BodySample::new(42.0, 38.0, shoulder);
            for weighting in [Weighting::Standard, Weighting::ChestWeighted] {
                assert_eq!(find_closest_size(&chart, &sample, weighting), Some(SizeLabel::XXL));
            }
        }
        let tiny = BodySample::new(42.0, 38.0, -1.0e200);
        assert_eq!(find_closest_size(&chart, &tiny, Weighting::Standard), Some(SizeLabel::XS));
    }

    #[test]
    fn test_non_finite_sample_matches_nothing() {
        let chart = SizeChart::standard();

        for shoulder in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let sample = BodySample::new(42.0, 38.0, shoulder);
            for weighting in [Weighting::Standard, Weighting::ChestWeighted] {
                assert_eq!(find_closest_size(&chart, &sample, weighting), None);
            }
        }
        let sample = BodySample::new(f64::NAN, 38.0, 20.0);
        assert_eq!(find_closest_size(&chart, &sample, Weighting::Standard), None);
    }
}
