//! Skeletal clip optimizer.

use crate::config::{AnimationTolerances, ReductionMode};
use crate::data::{JointTrack, RawAnimation};
use crate::error::OptimizeError;

use super::{hemisphere_flips, reduce_channel, ReductionStats};

/// Reduces the keys of a `RawAnimation`, each joint's translation, rotation
/// and scale channels independently with their own tolerance.
///
/// `Default` tolerances favor quality over memory footprint.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnimationOptimizer {
    pub tolerances: AnimationTolerances,
    pub mode: ReductionMode,
}

impl AnimationOptimizer {
    pub fn new(tolerances: AnimationTolerances) -> Self {
        Self {
            tolerances,
            mode: ReductionMode::Interpolated,
        }
    }

    /// Optimizer collapsing near-constant runs instead of interpolable keys.
    pub fn constant_run(tolerances: AnimationTolerances) -> Self {
        Self {
            tolerances,
            mode: ReductionMode::ConstantRun,
        }
    }

    /// Optimize `input` into `output`.
    ///
    /// On failure `output` (if any) is reset to `RawAnimation::default()`.
    pub fn optimize(
        &self,
        input: &RawAnimation,
        output: Option<&mut RawAnimation>,
    ) -> Result<(), OptimizeError> {
        self.optimize_with_stats(input, output).map(|_| ())
    }

    /// Same as `optimize`, also reporting key counts.
    pub fn optimize_with_stats(
        &self,
        input: &RawAnimation,
        output: Option<&mut RawAnimation>,
    ) -> Result<ReductionStats, OptimizeError> {
        let output = output.ok_or(OptimizeError::NullOutput)?;
        *output = RawAnimation::default();

        if let Err(err) = input.validate() {
            log::debug!("rejecting animation '{}': {err}", input.name);
            return Err(err.into());
        }

        output.name = input.name.clone();
        output.duration = input.duration;
        output.tracks = input
            .tracks
            .iter()
            .enumerate()
            .map(|(joint, track)| self.reduce_joint(joint, track))
            .collect();

        debug_assert!(output.validate().is_ok(), "optimized animation must be valid");

        let stats = ReductionStats {
            input_keys: input.key_count(),
            output_keys: output.key_count(),
        };
        log::debug!(
            "optimized animation '{}' ({:?}): {} -> {} keys over {} joints",
            input.name,
            self.mode,
            stats.input_keys,
            stats.output_keys,
            input.num_tracks()
        );
        Ok(stats)
    }

    /// Convenience wrapper returning a new clip.
    pub fn run(&self, input: &RawAnimation) -> Result<RawAnimation, OptimizeError> {
        let mut output = RawAnimation::default();
        self.optimize(input, Some(&mut output))?;
        Ok(output)
    }

    fn reduce_joint(&self, joint: usize, track: &JointTrack) -> JointTrack {
        let flips = hemisphere_flips(&track.rotations);
        if flips > 0 {
            log::warn!(
                "joint {joint}: {flips} consecutive rotation key pair(s) have opposite signs; \
                 blending them does not take the shortest arc"
            );
        }

        let tol = &self.tolerances;
        JointTrack {
            translations: reduce_channel(&track.translations, tol.translation, self.mode),
            rotations: reduce_channel(&track.rotations, tol.rotation, self.mode),
            scales: reduce_channel(&track.scales, tol.scale, self.mode),
        }
    }
}
