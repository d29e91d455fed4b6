use std::ops::{Add, Mul, Neg};

use crate::linalg::vec3::Vec3;

/// Row-major 3x3 matrix: `m[row][col]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat3(pub [[f64; 3]; 3]);

impl Mat3 {
    pub const ZERO: Mat3 = Mat3([[0.0; 3]; 3]);
    pub const IDENTITY: Mat3 = Mat3([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);

    #[inline]
    pub const fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Mat3(rows)
    }

    /// Cofactor expansion along the first row.
    pub fn determinant(&self) -> f64 {
        let m = &self.0;
        m[0][0] * (m[1][1] * m[2][2] - m[2][1] * m[1][2])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Classical adjoint (transposed cofactor matrix), so that
    /// `self * self.adjugate() == det(self) * I`.
    pub fn adjugate(&self) -> Mat3 {
        let m = &self.0;
        Mat3([
            [
                m[1][1] * m[2][2] - m[2][1] * m[1][2],
                m[0][2] * m[2][1] - m[0][1] * m[2][2],
                m[0][1] * m[1][2] - m[0][2] * m[1][1],
            ],
            [
                m[1][2] * m[2][0] - m[1][0] * m[2][2],
                m[0][0] * m[2][2] - m[0][2] * m[2][0],
                m[1][0] * m[0][2] - m[0][0] * m[1][2],
            ],
            [
                m[1][0] * m[2][1] - m[2][0] * m[1][1],
                m[2][0] * m[0][1] - m[0][0] * m[2][1],
                m[0][0] * m[1][1] - m[1][0] * m[0][1],
            ],
        ])
    }

    /// Closed-form inverse `adj(M) / det(M)`.
    ///
    /// Returns `None` when `|det(M)| < min_abs_det`; the caller decides what a
    /// singular matrix means for its problem.
    pub fn inverse(&self, min_abs_det: f64) -> Option<Mat3> {
        let det = self.determinant();
        if !(det.abs() >= min_abs_det) {
            return None;
        }
        Some(self.adjugate() * (1.0 / det))
    }

}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    fn mul(self, v: Vec3) -> Vec3 {
        let m = &self.0;
        Vec3::new(
            m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z,
            m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z,
            m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z,
        )
    }
}

impl Mul for Mat3 {
    type Output = Mat3;

    fn mul(self, rhs: Mat3) -> Mat3 {
        let mut out = [[0.0; 3]; 3];
        for (r, row) in out.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| self.0[r][k] * rhs.0[k][c]).sum();
            }
        }
        Mat3(out)
    }
}

impl Mul<f64> for Mat3 {
    type Output = Mat3;

    fn mul(self, k: f64) -> Mat3 {
        let mut out = self.0;
        for row in out.iter_mut() {
            for cell in row.iter_mut() {
                *cell *= k;
            }
        }
        Mat3(out)
    }
}

impl Add for Mat3 {
    type Output = Mat3;

    fn add(self, rhs: Mat3) -> Mat3 {
        let mut out = self.0;
        for (r, row) in out.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell += rhs.0[r][c];
            }
        }
        Mat3(out)
    }
}

impl Neg for Mat3 {
    type Output = Mat3;

    fn neg(self) -> Mat3 {
        self * -1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn adjugate_scales_to_determinant_identity() {
        let m = Mat3::from_rows([[2.0, -1.0, 0.5], [0.0, 3.0, 1.0], [4.0, 0.25, -2.0]]);
        let det = m.determinant();
        let prod = m * m.adjugate();
        for r in 0..3 {
            for c in 0..3 {
                let want = if r == c { det } else { 0.0 };
                assert_abs_diff_eq!(prod.0[r][c], want, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn nan_determinant_is_not_invertible() {
        let mut m = Mat3::IDENTITY;
        m.0[1][1] = f64::NAN;
        assert!(m.inverse(1e-6).is_none());
    }
}
