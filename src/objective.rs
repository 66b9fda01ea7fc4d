//! The function-object contract every wrapper consumes and produces

use std::fmt;

use ndarray::Array1;

/// A black-box objective function with its benchmark metadata.
///
/// Every transformation in this crate takes an `Objective` and is itself an
/// `Objective`, so wrappers compose: the result of one wrapping is a valid
/// input for the next.
pub trait Objective {
    /// Number of input variables, fixed at construction.
    fn dimension(&self) -> usize;

    /// Location of the best value of this (possibly transformed) function.
    ///
    /// For invertible transforms (translation, rotation) this is the exact
    /// optimum of the wrapped landscape; non-invertible distortions inherit
    /// the base optimum unchanged.
    fn optimum(&self) -> &Array1<f64>;

    /// Value at which the function counts as solved, if known.
    fn desired_value(&self) -> Option<f64>;

    /// `true` if lower values are better.
    fn minimize(&self) -> bool;

    /// `true` once a boundary penalty has been applied somewhere in the
    /// wrapper chain.
    fn penalized(&self) -> bool;

    /// Evaluate the function at `x`.
    fn evaluate(&self, x: &Array1<f64>) -> f64;
}

/// Adapter lifting a plain evaluation closure into an [`Objective`].
///
/// Defaults are optimum at the origin, minimization, no desired value and
/// no penalty, which fits the usual benchmark conventions.
pub struct BaseFunction<F> {
    dimension: usize,
    optimum: Array1<f64>,
    desired_value: Option<f64>,
    minimize: bool,
    f: F,
}

impl<F> BaseFunction<F>
where
    F: Fn(&Array1<f64>) -> f64,
{
    /// Wrap `f` as a `dimension`-dimensional minimization problem with its
    /// optimum at the origin.
    pub fn new(dimension: usize, f: F) -> Self {
        Self {
            dimension,
            optimum: Array1::zeros(dimension),
            desired_value: None,
            minimize: true,
            f,
        }
    }

    /// Set the optimum location (must match the dimension).
    pub fn with_optimum(mut self, optimum: Array1<f64>) -> Self {
        assert_eq!(
            optimum.len(),
            self.dimension,
            "optimum length does not match dimension"
        );
        self.optimum = optimum;
        self
    }

    /// Set the value at which the function counts as solved.
    pub fn with_desired_value(mut self, v: f64) -> Self {
        self.desired_value = Some(v);
        self
    }

    /// Mark the function as a maximization problem.
    pub fn maximizing(mut self) -> Self {
        self.minimize = false;
        self
    }
}

impl<F> fmt::Debug for BaseFunction<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseFunction")
            .field("dimension", &self.dimension)
            .field("optimum", &format!("len={}", self.optimum.len()))
            .field("desired_value", &self.desired_value)
            .field("minimize", &self.minimize)
            .finish()
    }
}

impl<F> Objective for BaseFunction<F>
where
    F: Fn(&Array1<f64>) -> f64,
{
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn optimum(&self) -> &Array1<f64> {
        &self.optimum
    }

    fn desired_value(&self) -> Option<f64> {
        self.desired_value
    }

    fn minimize(&self) -> bool {
        self.minimize
    }

    fn penalized(&self) -> bool {
        false
    }

    fn evaluate(&self, x: &Array1<f64>) -> f64 {
        (self.f)(x)
    }
}
