//! Spatial crop strategy selection for training clips.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::CropSettings;
use crate::errors::TrainError;

/// Crop strategy names accepted in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CropMode {
    /// Random position at a random scale.
    Random,
    /// One of the four corners or the center, at a random scale.
    #[default]
    Corner,
    /// Center only, at a random scale.
    Center,
}

impl FromStr for CropMode {
    type Err = TrainError;

    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        match mode {
            "random" => Ok(CropMode::Random),
            "corner" => Ok(CropMode::Corner),
            "center" => Ok(CropMode::Center),
            _ => Err(TrainError::UnknownCropMode {
                mode: mode.to_string(),
            }),
        }
    }
}

impl fmt::Display for CropMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CropMode::Random => "random",
            CropMode::Corner => "corner",
            CropMode::Center => "center",
        };
        write!(f, "{}", name)
    }
}

/// Fixed positions a corner crop may sample from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropPosition {
    Center,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl CropPosition {
    /// Every selectable position, center first.
    pub const ALL: [CropPosition; 5] = [
        CropPosition::Center,
        CropPosition::TopLeft,
        CropPosition::TopRight,
        CropPosition::BottomLeft,
        CropPosition::BottomRight,
    ];
}

/// Crop at a random position, choosing one of `scales` per clip.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiScaleRandomCrop {
    scales: Vec<f64>,
    size: u32,
}

impl MultiScaleRandomCrop {
    /// Creates the strategy from candidate scales and the output size.
    pub fn new(scales: Vec<f64>, size: u32) -> Self {
        Self { scales, size }
    }

    /// Candidate crop scales, as fractions of the shorter frame edge.
    pub fn scales(&self) -> &[f64] {
        &self.scales
    }

    /// Output height and width in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }
}

/// Crop at one of a fixed set of positions, choosing one of `scales` per
/// clip.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiScaleCornerCrop {
    scales: Vec<f64>,
    size: u32,
    positions: Vec<CropPosition>,
}

impl MultiScaleCornerCrop {
    /// Creates the strategy sampling from all five positions.
    pub fn new(scales: Vec<f64>, size: u32) -> Self {
        Self {
            scales,
            size,
            positions: CropPosition::ALL.to_vec(),
        }
    }

    /// Restricts the strategy to the given positions.
    pub fn with_positions(mut self, positions: Vec<CropPosition>) -> Self {
        self.positions = positions;
        self
    }

    /// Candidate crop scales, as fractions of the shorter frame edge.
    pub fn scales(&self) -> &[f64] {
        &self.scales
    }

    /// Output height and width in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Positions the crop may be taken from.
    pub fn positions(&self) -> &[CropPosition] {
        &self.positions
    }
}

/// The crop strategy selected for the training pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum CropStrategy {
    Random(MultiScaleRandomCrop),
    Corner(MultiScaleCornerCrop),
}

/// Builds the crop strategy selected by `settings`.
///
/// `center` is corner cropping restricted to the center position.
pub fn crop_method(settings: &CropSettings, scales: &[f64]) -> CropStrategy {
    match settings.train_crop {
        CropMode::Random => CropStrategy::Random(MultiScaleRandomCrop::new(
            scales.to_vec(),
            settings.sample_size,
        )),
        CropMode::Corner => CropStrategy::Corner(MultiScaleCornerCrop::new(
            scales.to_vec(),
            settings.sample_size,
        )),
        CropMode::Center => CropStrategy::Corner(
            MultiScaleCornerCrop::new(scales.to_vec(), settings.sample_size)
                .with_positions(vec![CropPosition::Center]),
        ),
    }
}
