//! Selection of input-transform parameters from configuration.
//!
//! The types here describe *which* normalization and crop the input pipeline
//! should run; the pixel work itself happens in the dataset loader that
//! consumes them.

pub mod crop;
pub mod normalize;

pub use crop::{
    crop_method, CropMode, CropPosition, CropStrategy, MultiScaleCornerCrop, MultiScaleRandomCrop,
};
pub use normalize::{norm_method, Normalize};
