//! Top-k classification accuracy.

use burn::tensor::backend::Backend;
use burn::tensor::{ElementConversion, Int, Tensor};

use crate::errors::TrainError;

/// Percentage of examples whose true class is among the `k` highest-scoring
/// predictions, for each requested `k`.
///
/// `output` holds one row of class scores per example; `targets` holds the
/// class index of each example. Results come back in the order of `ks`. Ties
/// at the k-th score resolve however the backend orders equal values when
/// sorting.
pub fn topk_accuracy<B: Backend>(
    output: Tensor<B, 2>,
    targets: Tensor<B, 1, Int>,
    ks: &[usize],
) -> Result<Vec<f64>, TrainError> {
    let [batch_size, n_classes] = output.dims();
    for &k in ks {
        if k == 0 || k > n_classes {
            return Err(TrainError::InvalidTopK { k, n_classes });
        }
    }
    let max_k = match ks.iter().max() {
        Some(&k) => k,
        None => return Ok(Vec::new()),
    };

    let ranked = output
        .argsort_descending(1)
        .slice([0..batch_size, 0..max_k]);
    let expanded = targets
        .reshape([batch_size, 1])
        .expand([batch_size, max_k]);
    let correct = ranked.equal(expanded);

    let mut percentages = Vec::with_capacity(ks.len());
    for &k in ks {
        let hits: i64 = correct
            .clone()
            .slice([0..batch_size, 0..k])
            .int()
            .sum()
            .into_scalar()
            .elem();
        percentages.push(hits as f64 * 100.0 / batch_size as f64);
    }
    Ok(percentages)
}
