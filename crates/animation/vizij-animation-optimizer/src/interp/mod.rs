//! Interpolation and distance helpers.
//!
//! These mirror the runtime sampler: linear blends for vectors and NLERP for
//! rotations. Error bounds computed by the optimizer only hold if playback
//! uses the same functions.

pub mod functions;
