// Core algorithm exports
pub mod chart;
pub mod distance;
pub mod engine;
pub mod fit;
pub mod matcher;
pub mod pattern;
pub mod predictor;

pub use chart::{ChartError, SizeChart};
pub use distance::{score_difference, size_distance, weighted_squared_distance};
pub use engine::SizingEngine;
pub use fit::adjust;
pub use matcher::{find_closest_size, SizeMatcher};
pub use pattern::derive_pattern;
pub use predictor::{predict, predict_default, PredictedMeasurements};
