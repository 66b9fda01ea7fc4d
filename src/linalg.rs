//! Small linear-algebra helpers for the rotation-based transformations

use ndarray::{Array1, Array2};
use rand::Rng;

/// Tolerance used when validating rotation matrices.
pub const ORTHOGONALITY_TOL: f64 = 1e-9;

/// Max-norm deviation of `M^T M` from the identity.
pub fn orthogonality_deviation(m: &Array2<f64>) -> f64 {
    let gram = m.t().dot(m);
    let mut deviation = 0.0_f64;
    for i in 0..gram.nrows() {
        for j in 0..gram.ncols() {
            let target = if i == j { 1.0 } else { 0.0 };
            deviation = deviation.max((gram[[i, j]] - target).abs());
        }
    }
    deviation
}

/// `true` if `m` is square and `M^T M` is the identity within `tol`.
pub fn is_orthogonal(m: &Array2<f64>, tol: f64) -> bool {
    m.nrows() == m.ncols() && orthogonality_deviation(m) <= tol
}

/// Generate a random orthogonal matrix by Gram-Schmidt orthonormalization
/// of uniform random columns.
///
/// Columns that collapse numerically during orthogonalization are redrawn,
/// so the result always has full rank and orthonormal columns.
pub fn random_orthogonal<R: Rng + ?Sized>(dim: usize, rng: &mut R) -> Array2<f64> {
    let mut q = Array2::<f64>::zeros((dim, dim));
    let mut col = 0;
    while col < dim {
        let mut v = Array1::from_shape_fn(dim, |_| rng.random::<f64>() - 0.5);
        // two projection passes keep the columns orthonormal to machine precision
        for _ in 0..2 {
            for j in 0..col {
                let proj = q.column(j).dot(&v);
                let qj = q.column(j).to_owned();
                v -= &(qj * proj);
            }
        }
        let norm = v.dot(&v).sqrt();
        if norm < 1e-12 {
            // linearly dependent draw, try again
            continue;
        }
        q.column_mut(col).assign(&(v / norm));
        col += 1;
    }
    q
}
