//! Transformation wrappers over [`crate::Objective`] functions
//!
//! Each wrapper freezes its parameters at construction time and exposes the
//! same evaluation contract as its base, so transformations chain freely:
//! translate a sphere, rotate the result, then penalize the boundary, and
//! the composite is still a valid [`crate::Objective`].

pub mod bbob;
pub mod distortions;
pub mod negate;
pub mod penalize;
pub mod rotate;
pub mod translate;

pub use bbob::{BbobBuilder, BbobTransformation};
pub use distortions::{asymmetrify, generate_diags, oscillatify};
pub use negate::{NegateFunction, negated};
pub use penalize::{SoftConstrainedFunction, boundary_penalty};
pub use rotate::RotateFunction;
pub use translate::{DEFAULT_DISTANCE, TranslateFunction};
