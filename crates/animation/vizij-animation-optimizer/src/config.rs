//! Optimizer configuration.
//!
//! Tolerances are plain data passed to each optimizer; there is no global
//! default state. `Default` impls favor quality over key count.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::optimizer::{AnimationOptimizer, TrackOptimizer};

/// Default translation tolerance: 1 mm.
pub const DEFAULT_TRANSLATION_TOLERANCE: f32 = 1e-3;
/// Default rotation tolerance: 0.1 degree, in radians.
pub const DEFAULT_ROTATION_TOLERANCE: f32 = 0.1 * std::f32::consts::PI / 180.0;
/// Default scale tolerance: 0.1%.
pub const DEFAULT_SCALE_TOLERANCE: f32 = 1e-3;
/// Default tolerance for generic property tracks.
pub const DEFAULT_TRACK_TOLERANCE: f32 = 1e-3;

/// Which reduction pass the optimizers run per channel.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReductionMode {
    /// Drop keys that interpolation between retained neighbors rebuilds.
    #[default]
    Interpolated,
    /// Collapse runs of near-identical values to their first key.
    ConstantRun,
}

/// Per-channel tolerances for skeletal clips.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnimationTolerances {
    /// Distance between two translations, in meters.
    pub translation: f32,
    /// Angle between two rotations, in radians.
    pub rotation: f32,
    /// Norm of the difference of two scales.
    pub scale: f32,
}

impl Default for AnimationTolerances {
    fn default() -> Self {
        Self {
            translation: DEFAULT_TRANSLATION_TOLERANCE,
            rotation: DEFAULT_ROTATION_TOLERANCE,
            scale: DEFAULT_SCALE_TOLERANCE,
        }
    }
}

/// Configuration surface for tools driving the optimizers.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OptimizerConfig {
    pub mode: ReductionMode,
    pub animation: AnimationTolerances,
    pub track_tolerance: f32,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            mode: ReductionMode::default(),
            animation: AnimationTolerances::default(),
            track_tolerance: DEFAULT_TRACK_TOLERANCE,
        }
    }
}

impl OptimizerConfig {
    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: OptimizerConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Every tolerance must be finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            ("animation.translation", self.animation.translation),
            ("animation.rotation", self.animation.rotation),
            ("animation.scale", self.animation.scale),
            ("track_tolerance", self.track_tolerance),
        ];
        for (name, value) in checks {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidTolerance { name, value });
            }
        }
        Ok(())
    }

    pub fn animation_optimizer(&self) -> AnimationOptimizer {
        AnimationOptimizer {
            tolerances: self.animation,
            mode: self.mode,
        }
    }

    pub fn track_optimizer(&self) -> TrackOptimizer {
        TrackOptimizer {
            tolerance: self.track_tolerance,
            mode: self.mode,
        }
    }
}
