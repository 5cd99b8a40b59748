//! Checkpoint persistence for training records.

use std::fs;
use std::path::{Path, PathBuf};

use burn::record::{FullPrecisionSettings, NamedMpkFileRecorder, Record, Recorder};
use burn::tensor::backend::Backend;

use crate::config::OutputSettings;
use crate::errors::TrainError;

/// Recorder used for every checkpoint file.
pub type DefaultRecorder = NamedMpkFileRecorder<FullPrecisionSettings>;

/// Creates the recorder all checkpoints are written with.
pub fn default_recorder() -> DefaultRecorder {
    NamedMpkFileRecorder::<FullPrecisionSettings>::new()
}

/// Path of the rolling checkpoint for `store_name`.
pub fn checkpoint_path(output: &OutputSettings, store_name: &str) -> PathBuf {
    output
        .result_path
        .join(format!("{}_checkpoint.mpk", store_name))
}

/// Path of the best-model copy.
///
/// Always derived from the configured store name, not from whatever name a
/// checkpoint was saved under.
pub fn best_path(output: &OutputSettings) -> PathBuf {
    output
        .result_path
        .join(format!("{}_best.mpk", output.store_name))
}

/// Writes `record` to `<result_path>/<store_name>_checkpoint.mpk`, creating
/// the directory if needed, and returns the written path.
///
/// With `is_best` set, the freshly written file is also copied to
/// [`best_path`]. The copy is named after the configured store name, so it
/// lands elsewhere when the `store_name` argument differs from the
/// configured one.
pub fn save_checkpoint<B, R>(
    record: R,
    is_best: bool,
    store_name: &str,
    output: &OutputSettings,
) -> Result<PathBuf, TrainError>
where
    B: Backend,
    R: Record<B>,
{
    fs::create_dir_all(&output.result_path)?;

    let path = checkpoint_path(output, store_name);
    let recorder = default_recorder();
    recorder.record(record, path.clone())?;
    log::info!("saved checkpoint to {}", path.display());

    if is_best {
        let best = best_path(output);
        fs::copy(&path, &best)?;
        log::info!("updated best model at {}", best.display());
    }
    Ok(path)
}

/// Loads a record previously written by [`save_checkpoint`].
pub fn load_checkpoint<B, R>(path: &Path, device: &B::Device) -> Result<R, TrainError>
where
    B: Backend,
    R: Record<B>,
{
    let recorder = default_recorder();
    Ok(recorder.load(path.to_path_buf(), device)?)
}
