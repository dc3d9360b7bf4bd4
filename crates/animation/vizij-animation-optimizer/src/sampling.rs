//! Reference sampler for raw channels.
//!
//! Model:
//! - Before the first key the first value is held; after the last key the
//!   last value is held.
//! - Between keys `[Ki -> K(i+1)]` the value is `interpolate(Ki, K(i+1), alpha)`
//!   with `alpha = (u - Ki.position) / (K(i+1).position - Ki.position)`.
//! - A `Step` key holds its value until the next key is reached.
//!
//! This is the contract the optimizer's tolerances are measured against. The
//! alpha computation matches the filter's, so re-sampling a reduced channel
//! reproduces the values that were tested.

use crate::data::{Interpolation, Key, RawTrack};
use crate::error::ValidationError;
use crate::value::TrackValue;

/// Find the segment [i, i+1] that contains position u, and return (i, i+1, alpha).
/// Edge cases:
/// - If u <= first position (or is NaN), returns (0, 0, 0).
/// - If u >= last position, returns (last, last, 0).
/// - If u lands exactly on a key, returns (k, k, 0).
fn find_segment<K: Key>(keys: &[K], u: f32) -> (usize, usize, f32) {
    let n = keys.len();
    if n == 0 || !(u > keys[0].position()) {
        return (0, 0, 0.0);
    }
    if u >= keys[n - 1].position() {
        return (n - 1, n - 1, 0.0);
    }
    // First key at or after u; in 1..n-1 given the checks above.
    let i1 = keys.partition_point(|k| k.position() < u);
    if keys[i1].position() == u {
        return (i1, i1, 0.0);
    }
    let i0 = i1 - 1;
    let left = keys[i0].position();
    let right = keys[i1].position();
    (i0, i1, (u - left) / (right - left))
}

/// Sample a channel at position `u`. Returns `None` for an empty channel.
pub fn sample_keys<K: Key>(keys: &[K], u: f32) -> Option<K::Value> {
    if keys.is_empty() {
        return None;
    }
    let (i0, i1, alpha) = find_segment(keys, u);
    let left = &keys[i0];
    if i0 == i1 || (left.interpolation() == Interpolation::Step && alpha < 1.0) {
        return Some(left.value().clone());
    }
    Some(K::Value::interpolate(left.value(), keys[i1].value(), alpha))
}

/// Validate `track` and sample it at normalized `stamp`. An empty track
/// samples to the value type's identity.
pub fn sample_track<T: TrackValue>(track: &RawTrack<T>, stamp: f32) -> Result<T, ValidationError> {
    track.validate()?;
    Ok(sample_keys(&track.points, stamp).unwrap_or_else(T::identity))
}
