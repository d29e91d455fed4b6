// crates/rdvz-core/src/cw/mod.rs
//
// Clohessy-Wiltshire closed-form solution for a circular reference orbit.
// Frame: x along-track, y cross-track, z radial.
//
//   position(t) = A(t) p0 + B(t) v0
//   velocity(t) = C(t) p0 + D(t) v0      with C = dA/dt, D = dB/dt

pub mod solve;

use crate::error::{RdvzError, Result};
use crate::linalg::{mat3::Mat3, vec3::Vec3};
use crate::trajectory::state::RelativeState;

/// Pair of 3x3 blocks of the CW state-transition matrix.
///
/// From [`build_matrices`] this is (A, B), the position row; from
/// [`build_velocity_matrices`] it is (C, D), the velocity row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CwMatrices {
    pub a: Mat3,
    pub b: Mat3,
}

impl CwMatrices {
    /// `a * p0 + b * v0`
    #[inline]
    pub fn apply(&self, p0: Vec3, v0: Vec3) -> Vec3 {
        self.a * p0 + self.b * v0
    }
}

fn check_rate(w: f64) -> Result<()> {
    if w == 0.0 || !w.is_finite() {
        return Err(RdvzError::DegenerateOrbit);
    }
    Ok(())
}

pub fn build_matrices(w: f64, t: f64) -> Result<CwMatrices> {
    check_rate(w)?;
    let wt = w * t;
    let (s, c) = wt.sin_cos();

    let a = Mat3::from_rows([
        [1.0, 0.0, 6.0 * (s - wt)],
        [0.0, c, 0.0],
        [0.0, 0.0, 4.0 - 3.0 * c],
    ]);
    let b = Mat3::from_rows([
        [(4.0 / w) * s - 3.0 * t, 0.0, (2.0 / w) * (c - 1.0)],
        [0.0, s / w, 0.0],
        [(2.0 / w) * (1.0 - c), 0.0, s / w],
    ]);
    Ok(CwMatrices { a, b })
}

pub fn build_velocity_matrices(w: f64, t: f64) -> Result<CwMatrices> {
    check_rate(w)?;
    let (s, c) = (w * t).sin_cos();

    let a = Mat3::from_rows([
        [0.0, 0.0, 6.0 * w * (c - 1.0)],
        [0.0, -w * s, 0.0],
        [0.0, 0.0, 3.0 * w * s],
    ]);
    let b = Mat3::from_rows([
        [4.0 * c - 3.0, 0.0, -2.0 * s],
        [0.0, c, 0.0],
        [2.0 * s, 0.0, c],
    ]);
    Ok(CwMatrices { a, b })
}

/// Full relative state at `t` from the initial state (p0, v0).
pub fn propagate_state(w: f64, t: f64, p0: Vec3, v0: Vec3) -> Result<RelativeState> {
    let pos = build_matrices(w, t)?;
    let vel = build_velocity_matrices(w, t)?;
    Ok(RelativeState {
        position: pos.apply(p0, v0),
        velocity: vel.apply(p0, v0),
    })
}
