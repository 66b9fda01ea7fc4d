//! Rotation: make the dimensions non-separable

use ndarray::{Array1, Array2};
use rand::Rng;

use crate::error::TransformError;
use crate::linalg::{ORTHOGONALITY_TOL, orthogonality_deviation, random_orthogonal};
use crate::objective::Objective;

/// Applies an orthogonal matrix to the input before evaluation.
///
/// Column-vector convention, fixed throughout this crate:
/// `h(x) = g(M · x)`, so the optimum of the rotated landscape is
/// `M⁻¹ · g.optimum()`, which for an orthogonal matrix is
/// `Mᵀ · g.optimum()`. With this pairing the reported optimum is the exact
/// minimizer of the wrapped function.
#[derive(Debug)]
pub struct RotateFunction<B> {
    base: B,
    matrix: Array2<f64>,
    optimum: Array1<f64>,
}

impl<B: Objective> RotateFunction<B> {
    /// Rotate by an explicit matrix, which must be square of the function's
    /// dimension and orthogonal within [`ORTHOGONALITY_TOL`].
    pub fn with_matrix(base: B, matrix: Array2<f64>) -> Result<Self, TransformError> {
        let d = base.dimension();
        if matrix.nrows() != d || matrix.ncols() != d {
            return Err(TransformError::InvalidDimension {
                reason: format!(
                    "rotation matrix is {}x{} but the function has dimension {}",
                    matrix.nrows(),
                    matrix.ncols(),
                    d
                ),
            });
        }
        let deviation = orthogonality_deviation(&matrix);
        if deviation > ORTHOGONALITY_TOL {
            return Err(TransformError::InvalidRotationMatrix {
                deviation,
                tolerance: ORTHOGONALITY_TOL,
            });
        }
        Ok(Self::from_parts(base, matrix))
    }

    /// Rotate by a freshly generated random orthogonal matrix.
    pub fn random<R: Rng + ?Sized>(base: B, rng: &mut R) -> Self {
        let matrix = random_orthogonal(base.dimension(), rng);
        Self::from_parts(base, matrix)
    }

    fn from_parts(base: B, matrix: Array2<f64>) -> Self {
        // inverse of an orthogonal matrix is its transpose
        let optimum = matrix.t().dot(base.optimum());
        Self {
            base,
            matrix,
            optimum,
        }
    }

    /// The frozen rotation matrix.
    pub fn matrix(&self) -> &Array2<f64> {
        &self.matrix
    }
}

impl<B: Objective> Objective for RotateFunction<B> {
    fn dimension(&self) -> usize {
        self.base.dimension()
    }

    fn optimum(&self) -> &Array1<f64> {
        &self.optimum
    }

    fn desired_value(&self) -> Option<f64> {
        self.base.desired_value()
    }

    fn minimize(&self) -> bool {
        self.base.minimize()
    }

    fn penalized(&self) -> bool {
        self.base.penalized()
    }

    fn evaluate(&self, x: &Array1<f64>) -> f64 {
        self.base.evaluate(&self.matrix.dot(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functions::sphere_function;
    use crate::transformations::translate::TranslateFunction;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_identity_rotation_is_a_no_op() {
        let h = RotateFunction::with_matrix(sphere_function(2), Array2::eye(2)).unwrap();
        let x = Array1::from_vec(vec![3.0, 4.0]);
        assert_eq!(h.evaluate(&x), 25.0);
        assert_eq!(h.optimum(), sphere_function(2).optimum());
    }

    #[test]
    fn test_optimum_is_the_inverse_rotation_of_the_base_optimum() {
        let base = TranslateFunction::with_offset(
            sphere_function(3),
            Array1::from_vec(vec![1.0, -2.0, 0.5]),
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let h = RotateFunction::random(base, &mut rng);
        let expected = h.matrix().t().dot(&Array1::from_vec(vec![1.0, -2.0, 0.5]));
        for i in 0..3 {
            assert!((h.optimum()[i] - expected[i]).abs() < 1e-9);
        }
    }

    #[test]
    fn test_reported_optimum_is_the_true_minimizer() {
        // sphere translated away from the origin, then rotated: the wrapped
        // function must still evaluate to 0 at its reported optimum
        let base = TranslateFunction::with_offset(
            sphere_function(3),
            Array1::from_vec(vec![1.0, -2.0, 0.5]),
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(13);
        let h = RotateFunction::random(base, &mut rng);
        let xopt = h.optimum().clone();
        assert!(h.evaluate(&xopt).abs() < 1e-18);
    }

    #[test]
    fn test_non_orthogonal_matrix_is_rejected() {
        let m = Array2::eye(2) * 2.0;
        let err = RotateFunction::with_matrix(sphere_function(2), m).unwrap_err();
        assert!(matches!(err, TransformError::InvalidRotationMatrix { .. }));
    }

    #[test]
    fn test_wrong_size_matrix_is_rejected() {
        let m = Array2::eye(3);
        let err = RotateFunction::with_matrix(sphere_function(2), m).unwrap_err();
        assert!(matches!(err, TransformError::InvalidDimension { .. }));
    }
}
