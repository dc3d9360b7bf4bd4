//! Value spaces the optimizer can reduce, each with the distance metric and
//! interpolation the runtime sampler uses for it.

use serde::{Deserialize, Serialize};

use crate::interp::functions::{
    distance, dot4, lerp_f32, lerp_vec2, lerp_vec3, lerp_vec4, nlerp_quat, quat_angle,
};

/// Coarse kind of a channel value, used for diagnostics.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ValueKind {
    Float,
    Vec2,
    Vec3,
    Vec4,
    Quat,
}

/// Unit quaternion stored as (x, y, z, w).
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Quat(pub [f32; 4]);

impl Quat {
    pub const IDENTITY: Quat = Quat([0.0, 0.0, 0.0, 1.0]);

    /// Rotation of `angle` radians around a (not necessarily normalized) axis.
    pub fn from_axis_angle(axis: [f32; 3], angle: f32) -> Self {
        let len = distance(&axis, &[0.0; 3]);
        if len <= 0.0 {
            return Self::IDENTITY;
        }
        let (s, c) = (angle * 0.5).sin_cos();
        let k = s / len;
        Quat([axis[0] * k, axis[1] * k, axis[2] * k, c])
    }

    #[inline]
    pub fn dot(&self, other: &Quat) -> f32 {
        dot4(self.0, other.0)
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl std::ops::Neg for Quat {
    type Output = Quat;

    fn neg(self) -> Quat {
        let q = self.0;
        Quat([-q[0], -q[1], -q[2], -q[3]])
    }
}

/// A value type keyframes can carry.
///
/// `distance` is the error metric compared against a tolerance, in the
/// value's natural unit. `interpolate` must be the exact blend used at
/// playback, otherwise tolerances stop bounding the reconstruction error.
pub trait TrackValue: Clone + PartialEq + std::fmt::Debug {
    const KIND: ValueKind;

    fn distance(a: &Self, b: &Self) -> f32;

    fn interpolate(a: &Self, b: &Self, t: f32) -> Self;

    /// Value sampled from a channel without keys.
    fn identity() -> Self;

    /// Every component is finite.
    fn is_finite(&self) -> bool;

    /// Whether `a` and `b` are encoded with opposite signs, so that blending
    /// them does not follow the shortest path. Only meaningful for rotations.
    fn opposite_hemispheres(_a: &Self, _b: &Self) -> bool {
        false
    }
}

impl TrackValue for f32 {
    const KIND: ValueKind = ValueKind::Float;

    #[inline]
    fn distance(a: &Self, b: &Self) -> f32 {
        (a - b).abs()
    }

    #[inline]
    fn interpolate(a: &Self, b: &Self, t: f32) -> Self {
        lerp_f32(*a, *b, t)
    }

    fn identity() -> Self {
        0.0
    }

    fn is_finite(&self) -> bool {
        f32::is_finite(*self)
    }
}

impl TrackValue for [f32; 2] {
    const KIND: ValueKind = ValueKind::Vec2;

    #[inline]
    fn distance(a: &Self, b: &Self) -> f32 {
        distance(a, b)
    }

    #[inline]
    fn interpolate(a: &Self, b: &Self, t: f32) -> Self {
        lerp_vec2(*a, *b, t)
    }

    fn identity() -> Self {
        [0.0; 2]
    }

    fn is_finite(&self) -> bool {
        self.iter().all(|c| c.is_finite())
    }
}

impl TrackValue for [f32; 3] {
    const KIND: ValueKind = ValueKind::Vec3;

    #[inline]
    fn distance(a: &Self, b: &Self) -> f32 {
        distance(a, b)
    }

    #[inline]
    fn interpolate(a: &Self, b: &Self, t: f32) -> Self {
        lerp_vec3(*a, *b, t)
    }

    fn identity() -> Self {
        [0.0; 3]
    }

    fn is_finite(&self) -> bool {
        self.iter().all(|c| c.is_finite())
    }
}

impl TrackValue for [f32; 4] {
    const KIND: ValueKind = ValueKind::Vec4;

    #[inline]
    fn distance(a: &Self, b: &Self) -> f32 {
        distance(a, b)
    }

    #[inline]
    fn interpolate(a: &Self, b: &Self, t: f32) -> Self {
        lerp_vec4(*a, *b, t)
    }

    fn identity() -> Self {
        [0.0; 4]
    }

    fn is_finite(&self) -> bool {
        self.iter().all(|c| c.is_finite())
    }
}

impl TrackValue for Quat {
    const KIND: ValueKind = ValueKind::Quat;

    /// Rotation angle between the two keys, in radians.
    #[inline]
    fn distance(a: &Self, b: &Self) -> f32 {
        quat_angle(a.0, b.0)
    }

    #[inline]
    fn interpolate(a: &Self, b: &Self, t: f32) -> Self {
        Quat(nlerp_quat(a.0, b.0, t))
    }

    fn identity() -> Self {
        Self::IDENTITY
    }

    fn is_finite(&self) -> bool {
        self.0.iter().all(|c| c.is_finite())
    }

    #[inline]
    fn opposite_hemispheres(a: &Self, b: &Self) -> bool {
        a.dot(b) < 0.0
    }
}
