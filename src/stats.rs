//! Per-channel statistics for the supported video datasets.
//!
//! Means and standard deviations were measured on raw 8-bit RGB frames, so
//! they are stored in the 0-255 range and divided by the configured norm
//! value before use.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::TrainError;

/// Divisor mapping raw 8-bit statistics into the input value range.
///
/// 255 corresponds to inputs scaled to [0, 1]; 1 leaves them in [0, 255].
pub const DEFAULT_NORM_VALUE: f64 = 255.0;

const ACTIVITYNET_MEAN: [f64; 3] = [114.7748, 107.7354, 99.4750];
const KINETICS_MEAN: [f64; 3] = [110.63666788, 103.16065604, 96.29023126];
const KINETICS_STD: [f64; 3] = [38.7568578, 37.88248729, 40.02898126];

/// Video dataset with registered channel statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VideoDataset {
    #[default]
    ActivityNet,
    Kinetics,
}

impl VideoDataset {
    /// Lowercase name used in configuration files and log output.
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoDataset::ActivityNet => "activitynet",
            VideoDataset::Kinetics => "kinetics",
        }
    }
}

impl FromStr for VideoDataset {
    type Err = TrainError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "activitynet" => Ok(VideoDataset::ActivityNet),
            "kinetics" => Ok(VideoDataset::Kinetics),
            _ => Err(TrainError::UnknownDataset {
                name: name.to_string(),
            }),
        }
    }
}

impl fmt::Display for VideoDataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// RGB channel means for `dataset`, scaled by `norm_value`.
pub fn channel_mean(dataset: VideoDataset, norm_value: f64) -> [f64; 3] {
    let raw = match dataset {
        VideoDataset::ActivityNet => ACTIVITYNET_MEAN,
        VideoDataset::Kinetics => KINETICS_MEAN,
    };
    raw.map(|value| value / norm_value)
}

/// RGB channel standard deviations, scaled by `norm_value`.
///
/// Only Kinetics deviations were ever measured; they are applied to every
/// dataset.
pub fn channel_std(norm_value: f64) -> [f64; 3] {
    KINETICS_STD.map(|value| value / norm_value)
}
