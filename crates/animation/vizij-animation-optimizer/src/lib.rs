//! Vizij Animation Optimizer (engine-agnostic)
//!
//! Offline keyframe reduction for raw animation clips and property tracks.
//! Keys that the runtime sampler can rebuild from their retained neighbors,
//! within a per-channel tolerance, are dropped; near-static runs can
//! alternatively be collapsed to a single key.
//!
//! ```
//! use vizij_animation_optimizer::{AnimationOptimizer, JointTrack, RawAnimation, TranslationKey};
//!
//! let input = RawAnimation {
//!     name: "slide".into(),
//!     duration: 1.0,
//!     tracks: vec![JointTrack {
//!         translations: vec![
//!             TranslationKey::new(0.0, [0.0, 0.0, 0.0]),
//!             TranslationKey::new(0.5, [1.0, 0.0, 0.0]),
//!             TranslationKey::new(1.0, [2.0, 0.0, 0.0]),
//!         ],
//!         ..Default::default()
//!     }],
//! };
//! let output = AnimationOptimizer::default().run(&input).unwrap();
//! assert_eq!(output.tracks[0].translations.len(), 2);
//! ```

pub mod compact;
pub mod config;
pub mod data;
pub mod error;
pub mod filter;
pub mod interp;
pub mod optimizer;
pub mod sampling;
pub mod value;

// Re-exports for consumers (tools, pipelines)
pub use compact::compact_keys;
pub use config::{AnimationTolerances, OptimizerConfig, ReductionMode};
pub use data::{
    Interpolation, JointKey, JointTrack, Key, Keypoint, RawAnimation, RawFloat2Track,
    RawFloat3Track, RawFloat4Track, RawFloatTrack, RawQuaternionTrack, RawTrack, RotationKey,
    ScaleKey, TranslationKey, MAX_JOINTS,
};
pub use error::{ConfigError, OptimizeError, ValidationError};
pub use filter::filter_keys;
pub use optimizer::{AnimationOptimizer, ReductionStats, TrackOptimizer};
pub use sampling::{sample_keys, sample_track};
pub use value::{Quat, TrackValue, ValueKind};
