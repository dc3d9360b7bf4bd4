//! Windowed redundancy filter.
//!
//! Single left-to-right pass that keeps the first and last key and drops every
//! interior key the sampler can rebuild, within tolerance, by interpolating
//! between the retained keys around it.
//!
//! For a candidate `i`, the span `(anchor, i]` is tested against the line from
//! the last retained key (`anchor`) to key `i + 1`. If every key in the span
//! is within tolerance, `i` is skipped and the next candidate extends the
//! span. Otherwise `i` is retained and becomes the new anchor. The pass is
//! causal and greedy: it never revisits an anchor to look for a better break.
//!
//! Step keys hold their value until the next key, so they cannot be rebuilt
//! by interpolation. A step key and the key right after it are forced
//! anchors; the channel is split there and only the linear runs in between
//! are filtered.

use crate::data::{Interpolation, Key};
use crate::value::TrackValue;

/// Reduce `src`, keeping keys that cannot be interpolated from their retained
/// neighbors within `tolerance`.
///
/// Channels with two keys or fewer are returned unchanged. The output is a
/// subsequence of `src`, keys are cloned untouched.
pub fn filter_keys<K: Key>(src: &[K], tolerance: f32) -> Vec<K> {
    let n = src.len();
    if n <= 2 {
        return src.to_vec();
    }

    let mut dest = Vec::with_capacity(n);
    dest.push(src[0].clone());

    let mut start = 0;
    for end in forced_anchors(src) {
        filter_run(&src[start..=end], tolerance, &mut dest);
        start = end;
    }

    debug_assert!(dest.len() <= n);
    dest
}

/// Indices (ascending, excluding 0, including `n - 1`) where the channel must
/// be split: step keys, keys following a step key, and the last key.
fn forced_anchors<K: Key>(src: &[K]) -> Vec<usize> {
    let last = src.len() - 1;
    let mut anchors = Vec::new();
    for i in 1..last {
        if is_step_boundary(src, i) {
            anchors.push(i);
        }
    }
    anchors.push(last);
    anchors
}

/// Whether key `i` (with `i > 0`) is a step key or the key ending a held
/// segment. Neither pass may drop or absorb such a key.
pub(crate) fn is_step_boundary<K: Key>(src: &[K], i: usize) -> bool {
    src[i].interpolation() == Interpolation::Step
        || src[i - 1].interpolation() == Interpolation::Step
}

/// Filter one run whose first key is already in `dest`. Appends the retained
/// interior keys and the run's last key.
fn filter_run<K: Key>(run: &[K], tolerance: f32, dest: &mut Vec<K>) {
    let last = run.len() - 1;
    let mut anchor = 0;
    for i in 1..last {
        let left = &run[anchor];
        let right = &run[i + 1];
        let explained = (anchor + 1..=i).all(|j| within_tolerance(left, right, &run[j], tolerance));
        if !explained {
            dest.push(run[i].clone());
            anchor = i;
        }
    }
    dest.push(run[last].clone());
}

/// Whether `test` can be rebuilt by interpolating `left` and `right` at its
/// position.
#[inline]
fn within_tolerance<K: Key>(left: &K, right: &K, test: &K, tolerance: f32) -> bool {
    let alpha = (test.position() - left.position()) / (right.position() - left.position());
    debug_assert!((0.0..=1.0).contains(&alpha));
    let rebuilt = K::Value::interpolate(left.value(), right.value(), alpha);
    K::Value::distance(&rebuilt, test.value()) <= tolerance
}
