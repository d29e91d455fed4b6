use approx::assert_abs_diff_eq;
use rdvz_core::Mat3;

/// Element-wise |a - b| <= eps, reporting the offending cell.
pub fn assert_mat3_abs_eq(a: &Mat3, b: &Mat3, eps: f64) {
    for r in 0..3 {
        for c in 0..3 {
            assert_abs_diff_eq!(a.0[r][c], b.0[r][c], epsilon = eps);
        }
    }
}
