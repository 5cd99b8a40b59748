//! Per-channel normalization parameter selection.

use crate::config::NormalizationSettings;

/// Per-channel normalization parameters handed to the input pipeline.
///
/// The pipeline subtracts `mean` from each channel, then divides by `std`.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalize {
    mean: [f64; 3],
    std: [f64; 3],
}

impl Normalize {
    /// Creates normalization parameters from explicit channel values.
    pub fn new(mean: [f64; 3], std: [f64; 3]) -> Self {
        Self { mean, std }
    }

    /// Values subtracted from each channel.
    pub fn mean(&self) -> [f64; 3] {
        self.mean
    }

    /// Values each channel is divided by.
    pub fn std(&self) -> [f64; 3] {
        self.std
    }

    /// True when applying these parameters leaves pixels unchanged.
    pub fn is_identity(&self) -> bool {
        self.mean == [0.0; 3] && self.std == [1.0; 3]
    }
}

/// Chooses normalization parameters from the configured switches.
///
/// Note the inherited flag mapping: `mean_norm` set on its own selects the
/// identity transform, while mean subtraction activates when both switches
/// are off. Models in circulation were trained under this mapping, so it
/// stays.
pub fn norm_method(
    settings: &NormalizationSettings,
    mean: [f64; 3],
    std: [f64; 3],
) -> Normalize {
    if settings.mean_norm && !settings.std_norm {
        Normalize::new([0.0; 3], [1.0; 3])
    } else if !settings.std_norm {
        Normalize::new(mean, [1.0; 3])
    } else {
        Normalize::new(mean, std)
    }
}
