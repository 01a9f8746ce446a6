use crate::models::{BodySample, SizeRecord, Weighting};

/// Weight of the chest term under [`Weighting::ChestWeighted`]
const CHEST_WEIGHT: f64 = 2.0;

/// Weighted sum of squared deviations between a sample and a chart row
///
/// Chest and waist are compared against the row's range midpoints, shoulder
/// width against the row's scalar value.
#[inline]
pub fn weighted_squared_distance(
    sample: &BodySample,
    record: &SizeRecord,
    weighting: Weighting,
) -> f64 {
    let chest_term = (sample.chest - record.chest.midpoint()).powi(2);
    let waist_term = (sample.waist - record.waist.midpoint()).powi(2);
    let shoulder_term = (sample.shoulder_width - record.shoulder_width).powi(2);

    match weighting {
        Weighting::Standard => chest_term + waist_term + shoulder_term,
        Weighting::ChestWeighted => CHEST_WEIGHT * chest_term + waist_term + shoulder_term,
    }
}

/// Score used to rank chart rows; lower is closer
///
/// # Returns
/// Euclidean distance for [`Weighting::Standard`], the raw weighted squared
/// sum for [`Weighting::ChestWeighted`]
#[inline]
pub fn size_distance(sample: &BodySample, record: &SizeRecord, weighting: Weighting) -> f64 {
    let squared = weighted_squared_distance(sample, record, weighting);
    match weighting {
        Weighting::Standard => squared.sqrt(),
        Weighting::ChestWeighted => squared,
    }
}

/// Weighted score of `candidate` minus that of `best`, without squaring
///
/// Each term is expanded as `w * (b - c) * ((x - b) + (x - c))`, which stays
/// finite for deviations whose squares would overflow. Only the sign is
/// meaningful once the squared scores are infinite.
pub fn score_difference(
    sample: &BodySample,
    candidate: &SizeRecord,
    best: &SizeRecord,
    weighting: Weighting,
) -> f64 {
    let chest_weight = match weighting {
        Weighting::Standard => 1.0,
        Weighting::ChestWeighted => CHEST_WEIGHT,
    };
    let term = |weight: f64, x: f64, b: f64, c: f64| weight * (b - c) * ((x - b) + (x - c));

    term(chest_weight, sample.chest, best.chest.midpoint(), candidate.chest.midpoint())
        + term(1.0, sample.waist, best.waist.midpoint(), candidate.waist.midpoint())
        + term(1.0, sample.shoulder_width, best.shoulder_width, candidate.shoulder_width)
}
