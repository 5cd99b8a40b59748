//! Model construction and device placement.

use burn::module::Module;
use burn::tensor::backend::Backend;

use crate::config::ModelSettings;
use crate::errors::TrainError;

/// Source of concrete classifier models.
///
/// The pipeline stays agnostic of the architecture; implementors build a
/// module with the requested class count on the given device.
pub trait ModelFactory<B: Backend> {
    /// The module type this factory produces.
    type Model: Module<B>;

    /// Builds a classifier with `num_classes` output classes on `device`.
    fn build(&self, num_classes: usize, device: &B::Device) -> Self::Model;
}

/// Builds the configured model on the first device of `devices`.
///
/// The remaining devices are reported for multi-device runs; distributing
/// the module across them is the tensor runtime's concern. An empty device
/// list fails with [`TrainError::NoDevice`].
pub fn init_model<B, F>(
    factory: &F,
    settings: &ModelSettings,
    devices: &[B::Device],
) -> Result<F::Model, TrainError>
where
    B: Backend,
    F: ModelFactory<B>,
{
    let device = devices.first().ok_or(TrainError::NoDevice)?;
    let model = factory.build(settings.n_classes, device);
    log::info!(
        "initialized model with {} parameters for {} classes on {} device(s)",
        model.num_params(),
        settings.n_classes,
        devices.len()
    );
    Ok(model)
}
