//! Error type shared by all transformation constructors

use thiserror::Error;

/// Errors raised while constructing a transformation.
///
/// Evaluation itself never fails: everything that can go wrong is checked
/// once, up front, when the wrapper is built.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A formula divides by `dim - 1`, or a supplied vector/matrix does not
    /// match the function dimension.
    #[error("invalid dimension: {reason}")]
    InvalidDimension { reason: String },

    /// A random offset draw collapsed to the zero vector and retries were
    /// exhausted, so it cannot be rescaled to the requested norm.
    #[error("degenerate random sample: zero-norm draw after {attempts} attempts")]
    DegenerateSample { attempts: usize },

    /// The supplied rotation matrix is not orthogonal, which would silently
    /// break the optimum-location bookkeeping.
    #[error("invalid rotation matrix: max |M^T M - I| = {deviation:.3e} exceeds {tolerance:.1e}")]
    InvalidRotationMatrix { deviation: f64, tolerance: f64 },
}
