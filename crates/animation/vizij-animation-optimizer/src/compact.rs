//! Constant-run compaction.
//!
//! Collapses each maximal run of consecutive keys whose values all lie within
//! tolerance of the run's first key into that first key. No interpolation is
//! involved: this targets near-static segments (e.g. a joint that never
//! moves), not local reconstruction error.
//!
//! Step keys and the key ending a held segment always open a new run, so
//! held values are never turned into ramps.

use crate::data::Key;
use crate::filter::is_step_boundary;
use crate::value::TrackValue;

/// Replace every run of near-identical keys with the run's first key.
///
/// Empty and single-key channels are returned unchanged. A NaN distance
/// ends the run.
pub fn compact_keys<K: Key>(src: &[K], tolerance: f32) -> Vec<K> {
    let Some(first) = src.first() else {
        return Vec::new();
    };

    let mut dest = vec![first.clone()];
    let mut representative = first;
    for (i, key) in src.iter().enumerate().skip(1) {
        let within = K::Value::distance(representative.value(), key.value()) <= tolerance;
        if !within || is_step_boundary(src, i) {
            dest.push(key.clone());
            representative = key;
        }
    }
    dest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Keypoint, RotationKey, TranslationKey};
    use crate::value::Quat;

    #[test]
    fn near_identical_run_collapses_to_first() {
        let src = vec![
            TranslationKey::new(0.1, [7.0, 0.0, 0.0]),
            TranslationKey::new(0.2, [7.0 + 5e-6, 0.0, 0.0]),
            TranslationKey::new(0.3, [7.0, 0.0, 0.0]),
        ];
        let out = compact_keys(&src, 1e-5);
        assert_eq!(out, vec![src[0].clone()]);
        assert_eq!(compact_keys(&src, 0.0), src);
    }

    #[test]
    fn separate_plateaus_are_kept() {
        let src = vec![
            TranslationKey::new(0.0, [0.0; 3]),
            TranslationKey::new(0.1, [0.0; 3]),
            TranslationKey::new(0.2, [1.0, 0.0, 0.0]),
            TranslationKey::new(0.3, [1.0, 0.0, 0.0]),
            TranslationKey::new(0.4, [0.0; 3]),
        ];
        let out = compact_keys(&src, 1e-3);
        let times: Vec<f32> = out.iter().map(|k| k.time).collect();
        assert_eq!(times, vec![0.0, 0.2, 0.4]);
    }

    #[test]
    fn opposite_quaternions_are_the_same_rotation() {
        let q = Quat::from_axis_angle([1.0, 0.0, 0.0], 1.0);
        let src = vec![RotationKey::new(0.0, q), RotationKey::new(0.1, -q)];
        assert_eq!(compact_keys(&src, 1e-6), vec![src[0].clone()]);
    }

    #[test]
    fn empty_and_single() {
        let empty: Vec<TranslationKey> = Vec::new();
        assert!(compact_keys(&empty, 1.0).is_empty());
        let one = vec![TranslationKey::new(0.5, [1.0; 3])];
        assert_eq!(compact_keys(&one, 1.0), one);
    }

    #[test]
    fn held_segments_are_not_absorbed() {
        let src = vec![
            Keypoint::linear(0.0, 0.0f32),
            Keypoint::step(0.5, 0.0),
            Keypoint::linear(1.0, 1.0),
        ];
        assert_eq!(compact_keys(&src, 1e-5), src);

        let flat = vec![
            Keypoint::linear(0.0, 2.0f32),
            Keypoint::step(0.25, 2.0),
            Keypoint::linear(0.5, 2.0),
            Keypoint::linear(0.75, 2.0),
        ];
        let stamps: Vec<f32> = compact_keys(&flat, 1.0).iter().map(|k| k.stamp).collect();
        assert_eq!(stamps, vec![0.0, 0.25, 0.5]);
    }

    #[test]
    fn nan_value_does_not_swallow_the_channel() {
        let src = vec![
            Keypoint::linear(0.0, f32::NAN),
            Keypoint::linear(0.5, 5.0f32),
            Keypoint::linear(1.0, -9.0),
        ];
        assert_eq!(compact_keys(&src, 1e-5).len(), 3);
    }
}
