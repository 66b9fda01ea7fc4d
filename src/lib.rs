//! Landscape transformations for optimization benchmark functions
//!
//! This library wraps black-box objective functions and reshapes their
//! landscapes the way benchmark suites (BBOB in particular) do:
//!
//! - **Negation**: flip the value and the minimize/maximize sense
//! - **Translation**: move the optimum by a fixed offset
//! - **Rotation**: make dimensions non-separable with an orthogonal matrix
//! - **Penalization**: add a soft boundary-violation penalty
//! - **BBOB composite**: translation + ill-conditioning + rotation +
//!   asymmetry + oscillation chained into one evaluation pipeline
//!
//! Every wrapper takes an [`Objective`] and is itself an [`Objective`], so
//! transformations compose freely. Transformation parameters (offsets,
//! rotation matrices, conditioning diagonals) are drawn once at construction
//! from a caller-supplied RNG and frozen afterwards, which keeps evaluation
//! pure and makes benchmarks reproducible from a seed.
//!
//! # Example
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use bbob_transforms::{BbobBuilder, Objective, sphere_function};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let f = BbobBuilder::new()
//!     .rotate(true)
//!     .conditioning(100.0)
//!     .oscillate(true)
//!     .build(sphere_function(5), &mut rng)
//!     .unwrap();
//!
//! // The relocated optimum is still the exact minimizer.
//! let xopt = f.optimum().clone();
//! assert_eq!(f.evaluate(&xopt), 0.0);
//! ```

pub mod error;
pub mod functions;
pub mod linalg;
pub mod objective;
pub mod transformations;

pub use error::TransformError;
pub use functions::*;
pub use linalg::{is_orthogonal, random_orthogonal};
pub use objective::{BaseFunction, Objective};
pub use transformations::*;
