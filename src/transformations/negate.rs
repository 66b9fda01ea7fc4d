//! Sign inversion, flipping the optimization sense

use ndarray::Array1;

use crate::objective::Objective;

/// The additive inverse of a function: values, desired value and the
/// minimize/maximize sense are all flipped; optimum location, dimension and
/// penalization are untouched.
///
/// Negation is an involution: wrapping twice restores the original values.
#[derive(Debug)]
pub struct NegateFunction<B> {
    base: B,
}

impl<B: Objective> NegateFunction<B> {
    pub fn new(base: B) -> Self {
        Self { base }
    }
}

impl<B: Objective> Objective for NegateFunction<B> {
    fn dimension(&self) -> usize {
        self.base.dimension()
    }

    fn optimum(&self) -> &Array1<f64> {
        self.base.optimum()
    }

    fn desired_value(&self) -> Option<f64> {
        self.base.desired_value().map(|v| -v)
    }

    fn minimize(&self) -> bool {
        !self.base.minimize()
    }

    fn penalized(&self) -> bool {
        self.base.penalized()
    }

    fn evaluate(&self, x: &Array1<f64>) -> f64 {
        -self.base.evaluate(x)
    }
}

/// Negate a bare evaluation closure that carries no metadata.
pub fn negated<F>(f: F) -> impl Fn(&Array1<f64>) -> f64
where
    F: Fn(&Array1<f64>) -> f64,
{
    move |x| -f(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functions::sphere_function;

    #[test]
    fn test_negation_flips_value_and_sense() {
        let g = sphere_function(2);
        let h = NegateFunction::new(g);
        let x = Array1::from_vec(vec![3.0, 4.0]);
        assert_eq!(h.evaluate(&x), -25.0);
        assert!(!h.minimize());
        assert_eq!(h.desired_value(), Some(-0.0));
        assert_eq!(h.dimension(), 2);
    }

    #[test]
    fn test_negation_is_an_involution() {
        let g = sphere_function(3);
        let hh = NegateFunction::new(NegateFunction::new(sphere_function(3)));
        let x = Array1::from_vec(vec![1.0, -2.0, 0.5]);
        assert_eq!(hh.evaluate(&x), g.evaluate(&x));
        assert_eq!(hh.minimize(), g.minimize());
    }

    #[test]
    fn test_negated_closure() {
        let f = |x: &Array1<f64>| x.sum();
        let g = negated(f);
        let x = Array1::from_vec(vec![1.0, 2.0]);
        assert_eq!(g(&x), -3.0);
    }
}
