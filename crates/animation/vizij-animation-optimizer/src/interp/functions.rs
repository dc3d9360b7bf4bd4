//! Interpolation helpers shared by the optimizer and the reference sampler:
//! - component-wise lerp for scalars and fixed-size vectors
//! - quaternion NLERP (blend then renormalize, no hemisphere correction)
//! - Euclidean and angular distances

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn lerp_vec2(a: [f32; 2], b: [f32; 2], t: f32) -> [f32; 2] {
    [lerp_f32(a[0], b[0], t), lerp_f32(a[1], b[1], t)]
}

#[inline]
pub fn lerp_vec3(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [
        lerp_f32(a[0], b[0], t),
        lerp_f32(a[1], b[1], t),
        lerp_f32(a[2], b[2], t),
    ]
}

#[inline]
pub fn lerp_vec4(a: [f32; 4], b: [f32; 4], t: f32) -> [f32; 4] {
    [
        lerp_f32(a[0], b[0], t),
        lerp_f32(a[1], b[1], t),
        lerp_f32(a[2], b[2], t),
        lerp_f32(a[3], b[3], t),
    ]
}

#[inline]
pub fn dot4(a: [f32; 4], b: [f32; 4]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3]
}

#[inline]
fn normalize4(mut q: [f32; 4]) -> [f32; 4] {
    let len2 = dot4(q, q);
    if len2 > 0.0 {
        let inv_len = len2.sqrt().recip();
        q[0] *= inv_len;
        q[1] *= inv_len;
        q[2] *= inv_len;
        q[3] *= inv_len;
    }
    q
}

/// Quaternion NLERP: component-wise blend followed by renormalization.
///
/// Unlike playback-side helpers this does not flip `b` onto `a`'s hemisphere.
/// Keys are expected to be sign-consistent already, and the optimizer must
/// reproduce exactly what the downstream sampler computes.
#[inline]
pub fn nlerp_quat(a: [f32; 4], b: [f32; 4], t: f32) -> [f32; 4] {
    normalize4(lerp_vec4(a, b, t))
}

/// Euclidean distance between two equally sized vectors.
#[inline]
pub fn distance<const N: usize>(a: &[f32; N], b: &[f32; N]) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f32>()
        .sqrt()
}

/// Angle in radians between the rotations represented by `a` and `b`.
///
/// `q` and `-q` describe the same rotation, so `b` is aligned to `a`'s
/// hemisphere before measuring. For unit quaternions `atan2(|a - b|, |a + b|)`
/// is a quarter of the rotation angle; unlike `2 * acos(dot)` it stays exact
/// for identical inputs where `dot` rounds just below 1.
#[inline]
pub fn quat_angle(a: [f32; 4], b: [f32; 4]) -> f32 {
    let b = if dot4(a, b) < 0.0 {
        [-b[0], -b[1], -b[2], -b[3]]
    } else {
        b
    };
    let diff = distance(&a, &b);
    let sum = distance(&a, &[-b[0], -b[1], -b[2], -b[3]]);
    4.0 * diff.atan2(sum)
}
