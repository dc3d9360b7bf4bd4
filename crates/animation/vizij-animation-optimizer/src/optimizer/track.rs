//! Generic property track optimizer.

use crate::config::{ReductionMode, DEFAULT_TRACK_TOLERANCE};
use crate::data::RawTrack;
use crate::error::OptimizeError;
use crate::value::TrackValue;

use super::{hemisphere_flips, reduce_channel, ReductionStats};

/// Reduces the keys of a `RawTrack<T>` for any supported value type.
/// In interpolated mode step keys are never merged.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackOptimizer {
    /// Tolerance in the track value's unit (radians for quaternion tracks).
    pub tolerance: f32,
    pub mode: ReductionMode,
}

impl Default for TrackOptimizer {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TRACK_TOLERANCE,
            mode: ReductionMode::Interpolated,
        }
    }
}

impl TrackOptimizer {
    pub fn new(tolerance: f32) -> Self {
        Self {
            tolerance,
            mode: ReductionMode::Interpolated,
        }
    }

    pub fn constant_run(tolerance: f32) -> Self {
        Self {
            tolerance,
            mode: ReductionMode::ConstantRun,
        }
    }

    /// Optimize `input` into `output`.
    ///
    /// On failure `output` (if any) is reset to an empty track.
    pub fn optimize<T: TrackValue>(
        &self,
        input: &RawTrack<T>,
        output: Option<&mut RawTrack<T>>,
    ) -> Result<(), OptimizeError> {
        self.optimize_with_stats(input, output).map(|_| ())
    }

    pub fn optimize_with_stats<T: TrackValue>(
        &self,
        input: &RawTrack<T>,
        output: Option<&mut RawTrack<T>>,
    ) -> Result<ReductionStats, OptimizeError> {
        let output = output.ok_or(OptimizeError::NullOutput)?;
        *output = RawTrack::default();

        if let Err(err) = input.validate() {
            log::debug!("rejecting {:?} track '{}': {err}", T::KIND, input.name);
            return Err(err.into());
        }

        let flips = hemisphere_flips(&input.points);
        if flips > 0 {
            log::warn!(
                "track '{}': {flips} consecutive key pair(s) have opposite signs; \
                 blending them does not take the shortest arc",
                input.name
            );
        }

        output.name = input.name.clone();
        output.points = reduce_channel(&input.points, self.tolerance, self.mode);

        debug_assert!(output.validate().is_ok(), "optimized track must be valid");

        let stats = ReductionStats {
            input_keys: input.len(),
            output_keys: output.len(),
        };
        log::debug!(
            "optimized {:?} track '{}' ({:?}): {} -> {} keys",
            T::KIND,
            input.name,
            self.mode,
            stats.input_keys,
            stats.output_keys
        );
        Ok(stats)
    }

    /// Convenience wrapper returning a new track.
    pub fn run<T: TrackValue>(&self, input: &RawTrack<T>) -> Result<RawTrack<T>, OptimizeError> {
        let mut output = RawTrack::default();
        self.optimize(input, Some(&mut output))?;
        Ok(output)
    }
}
