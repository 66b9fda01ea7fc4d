//! Soft constraint handling through a boundary penalization term

use ndarray::Array1;

use crate::objective::Objective;

/// Default half-width of the unpenalized box.
pub const DEFAULT_BOUNDARY: f64 = 5.0;

/// Default penalization weight.
pub const DEFAULT_FACTOR: f64 = 1.0;

/// Quadratic boundary-violation penalty: `sum_i max(0, |x_i| - distance)^2`.
///
/// Zero everywhere inside `[-distance, distance]^d` and strictly increasing
/// with the violation outside it.
pub fn boundary_penalty(x: &Array1<f64>, distance: f64) -> f64 {
    x.iter()
        .map(|&xi| (xi.abs() - distance).max(0.0).powi(2))
        .sum()
}

/// Adds a boundary-violation penalty to a function's value.
///
/// The weight is flipped for maximization problems so the penalty always
/// worsens the value in the base function's own sense. A base that is
/// already penalized is passed through verbatim, so stacking this wrapper
/// never penalizes twice.
#[derive(Debug)]
pub struct SoftConstrainedFunction<B> {
    base: B,
    distance: f64,
    factor: f64,
    passthrough: bool,
}

impl<B: Objective> SoftConstrainedFunction<B> {
    /// Penalize outside `[-DEFAULT_BOUNDARY, DEFAULT_BOUNDARY]^d` with the
    /// default weight.
    pub fn new(base: B) -> Self {
        Self::with_limits(base, DEFAULT_BOUNDARY, DEFAULT_FACTOR)
    }

    /// Penalize outside `[-distance, distance]^d`, scaled by
    /// `penalization_factor`.
    pub fn with_limits(base: B, distance: f64, penalization_factor: f64) -> Self {
        let passthrough = base.penalized();
        let factor = if base.minimize() {
            penalization_factor
        } else {
            -penalization_factor
        };
        Self {
            base,
            distance,
            factor,
            passthrough,
        }
    }
}

impl<B: Objective> Objective for SoftConstrainedFunction<B> {
    fn dimension(&self) -> usize {
        self.base.dimension()
    }

    fn optimum(&self) -> &Array1<f64> {
        self.base.optimum()
    }

    fn desired_value(&self) -> Option<f64> {
        self.base.desired_value()
    }

    fn minimize(&self) -> bool {
        self.base.minimize()
    }

    fn penalized(&self) -> bool {
        true
    }

    fn evaluate(&self, x: &Array1<f64>) -> f64 {
        if self.passthrough {
            return self.base.evaluate(x);
        }
        self.base.evaluate(x) + boundary_penalty(x, self.distance) * self.factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functions::sphere_function;
    use crate::transformations::negate::NegateFunction;

    #[test]
    fn test_no_penalty_inside_the_box() {
        let g = sphere_function(2);
        let h = SoftConstrainedFunction::new(sphere_function(2));
        for v in [[0.0, 0.0], [5.0, -5.0], [-3.2, 4.9]] {
            let x = Array1::from_vec(v.to_vec());
            assert_eq!(h.evaluate(&x), g.evaluate(&x));
        }
        assert!(h.penalized());
    }

    #[test]
    fn test_penalty_grows_with_the_violation() {
        let g = sphere_function(2);
        let h = SoftConstrainedFunction::new(sphere_function(2));
        let x6 = Array1::from_vec(vec![6.0, 0.0]);
        let x7 = Array1::from_vec(vec![7.0, 0.0]);
        let p6 = h.evaluate(&x6) - g.evaluate(&x6);
        let p7 = h.evaluate(&x7) - g.evaluate(&x7);
        assert_eq!(p6, 1.0);
        assert_eq!(p7, 4.0);
        assert!(p7 > p6);
    }

    #[test]
    fn test_penalty_worsens_a_maximization_problem() {
        // for a maximizer the penalty must push the value down
        let h = SoftConstrainedFunction::new(NegateFunction::new(sphere_function(2)));
        let base = NegateFunction::new(sphere_function(2));
        let x = Array1::from_vec(vec![6.0, 0.0]);
        assert_eq!(h.evaluate(&x), base.evaluate(&x) - 1.0);
    }

    #[test]
    fn test_already_penalized_base_is_passed_through() {
        let inner = SoftConstrainedFunction::new(sphere_function(2));
        let outer = SoftConstrainedFunction::new(SoftConstrainedFunction::new(sphere_function(2)));
        let x = Array1::from_vec(vec![8.0, -9.0]);
        assert_eq!(outer.evaluate(&x), inner.evaluate(&x));
    }

    #[test]
    fn test_custom_boundary_distance() {
        let h = SoftConstrainedFunction::with_limits(sphere_function(1), 2.0, 1.0);
        let inside = Array1::from_vec(vec![1.5]);
        let outside = Array1::from_vec(vec![3.0]);
        assert_eq!(h.evaluate(&inside), 2.25);
        assert_eq!(h.evaluate(&outside), 9.0 + 1.0);
    }
}
