//! Loss criterion construction.

use burn::nn::loss::{CrossEntropyLoss, CrossEntropyLossConfig};
use burn::tensor::backend::Backend;

/// Builds the multi-class cross-entropy criterion on `device`.
///
/// Classification over video clips is the only task the pipeline trains, so
/// cross entropy is the only criterion.
// TODO: make the criterion selectable once a regression task needs one.
pub fn criterion<B: Backend>(device: &B::Device) -> CrossEntropyLoss<B> {
    CrossEntropyLossConfig::new().init(device)
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;
    use burn::tensor::{ElementConversion, Int, Tensor};

    type TestBackend = NdArray;

    #[test]
    fn test_criterion_scores_confident_correct_predictions_lower() {
        let device = Default::default();
        let criterion = criterion::<TestBackend>(&device);

        let confident = Tensor::from_floats([[5.0, -5.0], [-5.0, 5.0]], &device);
        let uncertain = Tensor::from_floats([[0.1, 0.0], [0.0, 0.1]], &device);
        let targets = Tensor::<TestBackend, 1, Int>::from_ints([0, 1], &device);

        let low: f32 = criterion
            .forward(confident, targets.clone())
            .into_scalar()
            .elem();
        let high: f32 = criterion.forward(uncertain, targets).into_scalar().elem();

        assert!(low.is_finite());
        assert!(high.is_finite());
        assert!(low < high, "expected {low} < {high}");
    }
}
