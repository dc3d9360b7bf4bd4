//! Optimizer drivers: validate the input, reduce every channel independently,
//! and assemble a fresh output.
//!
//! Contract shared by both drivers:
//! - no output slot -> `OptimizeError::NullOutput`, nothing is touched;
//! - the output is reset to its default before validation, so an invalid
//!   input leaves it empty (`OptimizeError::InvalidInput`);
//! - on success the output passes the same validation as the input.

use serde::Serialize;

use crate::compact::compact_keys;
use crate::config::ReductionMode;
use crate::data::Key;
use crate::filter::filter_keys;
use crate::value::TrackValue;

pub mod animation;
pub mod track;

pub use animation::AnimationOptimizer;
pub use track::TrackOptimizer;

/// Key counts before and after a successful optimization.
#[derive(Copy, Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct ReductionStats {
    pub input_keys: usize,
    pub output_keys: usize,
}

impl ReductionStats {
    pub fn removed_keys(&self) -> usize {
        self.input_keys - self.output_keys
    }

    /// Fraction of keys kept, 1.0 when the input had none.
    pub fn kept_ratio(&self) -> f32 {
        if self.input_keys == 0 {
            1.0
        } else {
            self.output_keys as f32 / self.input_keys as f32
        }
    }
}

/// Run the pass selected by `mode` over one channel.
pub(crate) fn reduce_channel<K: Key>(keys: &[K], tolerance: f32, mode: ReductionMode) -> Vec<K> {
    match mode {
        ReductionMode::Interpolated => filter_keys(keys, tolerance),
        ReductionMode::ConstantRun => compact_keys(keys, tolerance),
    }
}

/// Number of consecutive key pairs encoded in opposite hemispheres.
///
/// Such pairs are not corrected here: interpolating them takes the long way
/// round, so the filter keeps more keys than needed. Callers report them so
/// the producer can be fixed.
pub(crate) fn hemisphere_flips<K: Key>(keys: &[K]) -> usize {
    keys.windows(2)
        .filter(|pair| K::Value::opposite_hemispheres(pair[0].value(), pair[1].value()))
        .count()
}
