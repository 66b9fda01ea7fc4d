//! Base benchmark functions used as raw material for transformations
//!
//! A small set of classic landscapes organized the usual way:
//! - `unimodal`: single-optimum functions (bowl-shaped, ill-conditioned)
//! - `multimodal`: functions with many local minima
//!
//! Each function is a plain `fn(&Array1<f64>) -> f64`; the `*_function`
//! constructors lift them into [`crate::Objective`]s with the right
//! metadata so they can be fed straight into the transformation wrappers.

pub mod multimodal;
pub mod unimodal;

pub use multimodal::*;
pub use unimodal::*;

use ndarray::Array1;

use crate::objective::BaseFunction;

type PlainFn = fn(&Array1<f64>) -> f64;

/// Sphere as an [`crate::Objective`]: minimum 0 at the origin.
pub fn sphere_function(dimension: usize) -> BaseFunction<PlainFn> {
    BaseFunction::new(dimension, sphere as PlainFn).with_desired_value(0.0)
}

/// Sum-of-squares bowl as an [`crate::Objective`]: minimum 0 at the origin.
pub fn sum_squares_function(dimension: usize) -> BaseFunction<PlainFn> {
    BaseFunction::new(dimension, sum_squares as PlainFn).with_desired_value(0.0)
}

/// Elliptic function as an [`crate::Objective`]: minimum 0 at the origin.
pub fn elliptic_function(dimension: usize) -> BaseFunction<PlainFn> {
    BaseFunction::new(dimension, elliptic as PlainFn).with_desired_value(0.0)
}

/// Rastrigin as an [`crate::Objective`]: minimum 0 at the origin.
pub fn rastrigin_function(dimension: usize) -> BaseFunction<PlainFn> {
    BaseFunction::new(dimension, rastrigin as PlainFn).with_desired_value(0.0)
}

/// Ackley as an [`crate::Objective`]: minimum 0 at the origin.
pub fn ackley_function(dimension: usize) -> BaseFunction<PlainFn> {
    BaseFunction::new(dimension, ackley as PlainFn).with_desired_value(0.0)
}
