// crates/rdvz-core/src/cw/solve.rs

use crate::cw::{build_matrices, CwMatrices};
use crate::error::{RdvzError, Result};
use crate::linalg::vec3::Vec3;
use crate::scenario::defaults::SINGULAR_DET_THRESHOLD;

/// Initial velocity v0 such that `A p0 + B v0 = 0`, i.e. `v0 = -(B^-1 A) p0`.
///
/// B is inverted in closed form. `|det(B)| < 1e-6` means the transfer time
/// falls on a natural-motion period where no unique solution exists.
pub fn solve_initial_velocity(m: &CwMatrices, p0: Vec3) -> Result<Vec3> {
    let det = m.b.determinant();
    log::debug!("det(B) = {det:e}");

    let inv_b = m
        .b
        .inverse(SINGULAR_DET_THRESHOLD)
        .ok_or(RdvzError::SingularSystem { determinant: det })?;

    let v0 = -(inv_b * m.a) * p0;
    log::debug!("v0 = ({}, {}, {}) m/s", v0.x, v0.y, v0.z);
    Ok(v0)
}

/// Builds A and B at the transfer time and solves for v0.
pub fn solve_rendezvous(w: f64, transfer_time: f64, p0: Vec3) -> Result<Vec3> {
    let m = build_matrices(w, transfer_time)?;
    solve_initial_velocity(&m, p0)
}
