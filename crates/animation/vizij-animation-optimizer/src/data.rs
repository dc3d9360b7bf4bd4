//! Raw (offline) animation data model consumed and produced by the optimizers.
//!
//! Two shapes are supported:
//! - `RawAnimation`: a skeletal clip, one translation/rotation/scale channel
//!   triple per joint, keyed in seconds within `[0, duration]`.
//! - `RawTrack<T>`: a single named property channel keyed by normalized stamps
//!   in `[0, 1]`, with a per-key interpolation mode.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::value::{Quat, TrackValue};

/// Maximum number of joint tracks a clip may hold.
pub const MAX_JOINTS: usize = 1024;

/// How a key blends towards the next one.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Interpolation {
    /// Hold this key's value until the next key.
    Step,
    #[default]
    Linear,
}

/// Common view over keyframe types so reduction passes and the sampler can be
/// written once.
pub trait Key: Clone {
    type Value: TrackValue;

    /// Time or normalized stamp of the key.
    fn position(&self) -> f32;

    fn value(&self) -> &Self::Value;

    /// Untagged keys are linear.
    fn interpolation(&self) -> Interpolation {
        Interpolation::Linear
    }
}

/// A key of a skeletal channel, `time` in seconds.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct JointKey<T> {
    pub time: f32,
    pub value: T,
}

impl<T> JointKey<T> {
    pub fn new(time: f32, value: T) -> Self {
        Self { time, value }
    }
}

impl<T: TrackValue> Key for JointKey<T> {
    type Value = T;

    #[inline]
    fn position(&self) -> f32 {
        self.time
    }

    #[inline]
    fn value(&self) -> &T {
        &self.value
    }
}

pub type TranslationKey = JointKey<[f32; 3]>;
pub type RotationKey = JointKey<Quat>;
pub type ScaleKey = JointKey<[f32; 3]>;

/// A key of a generic track, `stamp` normalized to [0, 1].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Keypoint<T> {
    pub stamp: f32,
    pub value: T,
    #[serde(default)]
    pub interpolation: Interpolation,
}

impl<T> Keypoint<T> {
    pub fn linear(stamp: f32, value: T) -> Self {
        Self {
            stamp,
            value,
            interpolation: Interpolation::Linear,
        }
    }

    pub fn step(stamp: f32, value: T) -> Self {
        Self {
            stamp,
            value,
            interpolation: Interpolation::Step,
        }
    }
}

impl<T: TrackValue> Key for Keypoint<T> {
    type Value = T;

    #[inline]
    fn position(&self) -> f32 {
        self.stamp
    }

    #[inline]
    fn value(&self) -> &T {
        &self.value
    }

    #[inline]
    fn interpolation(&self) -> Interpolation {
        self.interpolation
    }
}

/// A named property track.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RawTrack<T> {
    #[serde(default)]
    pub name: String,
    #[serde(default = "Vec::new")]
    pub points: Vec<Keypoint<T>>,
}

pub type RawFloatTrack = RawTrack<f32>;
pub type RawFloat2Track = RawTrack<[f32; 2]>;
pub type RawFloat3Track = RawTrack<[f32; 3]>;
pub type RawFloat4Track = RawTrack<[f32; 4]>;
pub type RawQuaternionTrack = RawTrack<Quat>;

impl<T> Default for RawTrack<T> {
    fn default() -> Self {
        Self {
            name: String::new(),
            points: Vec::new(),
        }
    }
}

impl<T: TrackValue> RawTrack<T> {
    pub fn new(name: impl Into<String>, points: Vec<Keypoint<T>>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Validate keys: finite stamps and values, stamps within [0,1] and
    /// strictly increasing.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_keys(&self.points, 1.0, || format!("track '{}'", self.name))
    }
}

/// Channels of one joint.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct JointTrack {
    #[serde(default)]
    pub translations: Vec<TranslationKey>,
    #[serde(default)]
    pub rotations: Vec<RotationKey>,
    #[serde(default)]
    pub scales: Vec<ScaleKey>,
}

impl JointTrack {
    pub fn key_count(&self) -> usize {
        self.translations.len() + self.rotations.len() + self.scales.len()
    }
}

/// Offline skeletal animation clip, tracks indexed by joint.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RawAnimation {
    #[serde(default)]
    pub name: String,
    /// Duration in seconds; bounds every key time.
    pub duration: f32,
    #[serde(default)]
    pub tracks: Vec<JointTrack>,
}

impl Default for RawAnimation {
    fn default() -> Self {
        Self {
            name: String::new(),
            duration: 1.0,
            tracks: Vec::new(),
        }
    }
}

impl RawAnimation {
    pub fn num_tracks(&self) -> usize {
        self.tracks.len()
    }

    /// Total number of keys across all joints and channels.
    pub fn key_count(&self) -> usize {
        self.tracks.iter().map(JointTrack::key_count).sum()
    }

    /// Validate basic invariants: positive finite duration, joint count within
    /// `MAX_JOINTS`, and per channel finite key values and key times finite,
    /// within `[0, duration]` and strictly increasing.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.duration.is_finite() && self.duration > 0.0) {
            return Err(ValidationError::InvalidDuration {
                duration: self.duration,
            });
        }
        if self.tracks.len() > MAX_JOINTS {
            return Err(ValidationError::TooManyTracks {
                count: self.tracks.len(),
                max: MAX_JOINTS,
            });
        }
        for (joint, track) in self.tracks.iter().enumerate() {
            validate_keys(&track.translations, self.duration, || {
                format!("joint {joint} translations")
            })?;
            validate_keys(&track.rotations, self.duration, || {
                format!("joint {joint} rotations")
            })?;
            validate_keys(&track.scales, self.duration, || {
                format!("joint {joint} scales")
            })?;
        }
        Ok(())
    }
}

fn validate_keys<K: Key>(
    keys: &[K],
    end: f32,
    channel: impl Fn() -> String,
) -> Result<(), ValidationError> {
    let mut previous: Option<f32> = None;
    for (index, key) in keys.iter().enumerate() {
        let position = key.position();
        if !position.is_finite() {
            return Err(ValidationError::NonFinitePosition {
                channel: channel(),
                index,
            });
        }
        if !key.value().is_finite() {
            return Err(ValidationError::NonFiniteValue {
                channel: channel(),
                index,
            });
        }
        if position < 0.0 || position > end {
            return Err(ValidationError::OutOfRange {
                channel: channel(),
                index,
                position,
                end,
            });
        }
        if let Some(previous) = previous {
            if position <= previous {
                return Err(ValidationError::NotIncreasing {
                    channel: channel(),
                    index,
                    position,
                    previous,
                });
            }
        }
        previous = Some(position);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_animation_is_valid() {
        let anim = RawAnimation::default();
        assert_eq!(anim.duration, 1.0);
        assert!(anim.name.is_empty());
        assert!(anim.validate().is_ok());
    }

    #[test]
    fn rejects_bad_duration() {
        for duration in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let anim = RawAnimation {
                duration,
                ..Default::default()
            };
            assert!(matches!(
                anim.validate(),
                Err(ValidationError::InvalidDuration { .. })
            ));
        }
    }

    #[test]
    fn rejects_too_many_joints() {
        let anim = RawAnimation {
            tracks: vec![JointTrack::default(); MAX_JOINTS + 1],
            ..Default::default()
        };
        assert_eq!(
            anim.validate(),
            Err(ValidationError::TooManyTracks {
                count: MAX_JOINTS + 1,
                max: MAX_JOINTS
            })
        );
    }

    #[test]
    fn rejects_unsorted_and_out_of_range_times() {
        let mut anim = RawAnimation {
            duration: 2.0,
            tracks: vec![JointTrack::default(); 2],
            ..Default::default()
        };
        anim.tracks[1].scales = vec![ScaleKey::new(0.5, [1.0; 3]), ScaleKey::new(0.5, [1.0; 3])];
        match anim.validate() {
            Err(ValidationError::NotIncreasing { channel, index, .. }) => {
                assert_eq!(channel, "joint 1 scales");
                assert_eq!(index, 1);
            }
            other => panic!("unexpected {other:?}"),
        }

        anim.tracks[1].scales.clear();
        anim.tracks[0].rotations = vec![RotationKey::new(2.5, Quat::IDENTITY)];
        assert!(matches!(
            anim.validate(),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn track_stamps_are_normalized() {
        let mut track = RawFloatTrack::new("t", vec![Keypoint::linear(0.0, 1.0)]);
        assert!(track.validate().is_ok());
        track.points.push(Keypoint::linear(99.0, 1.0));
        assert!(matches!(
            track.validate(),
            Err(ValidationError::OutOfRange { index: 1, .. })
        ));
        track.points[1].stamp = f32::NAN;
        assert!(matches!(
            track.validate(),
            Err(ValidationError::NonFinitePosition { index: 1, .. })
        ));
    }

    #[test]
    fn rejects_non_finite_values() {
        let track = RawFloatTrack::new(
            "nan",
            vec![Keypoint::linear(0.0, f32::NAN), Keypoint::linear(0.5, 5.0)],
        );
        assert!(matches!(
            track.validate(),
            Err(ValidationError::NonFiniteValue { index: 0, .. })
        ));

        let mut anim = RawAnimation {
            tracks: vec![JointTrack::default()],
            ..Default::default()
        };
        anim.tracks[0].rotations = vec![
            RotationKey::new(0.0, Quat::IDENTITY),
            RotationKey::new(0.5, Quat([0.0, f32::INFINITY, 0.0, 1.0])),
        ];
        match anim.validate() {
            Err(ValidationError::NonFiniteValue { channel, index }) => {
                assert_eq!(channel, "joint 0 rotations");
                assert_eq!(index, 1);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn track_json_defaults_to_linear() {
        let track: RawFloatTrack =
            serde_json::from_str(r#"{"name":"w","points":[{"stamp":0.0,"value":1.0},{"stamp":1.0,"value":2.0,"interpolation":"step"}]}"#)
                .unwrap();
        assert_eq!(track.points[0].interpolation, Interpolation::Linear);
        assert_eq!(track.points[1].interpolation, Interpolation::Step);
    }
}
