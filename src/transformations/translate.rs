//! Translation: move the optimum by a fixed offset

use ndarray::Array1;
use rand::Rng;

use crate::error::TransformError;
use crate::objective::Objective;

/// How often a zero-norm random direction is redrawn before giving up.
const MAX_REDRAWS: usize = 16;

/// Default Euclidean norm of a random offset.
pub const DEFAULT_DISTANCE: f64 = 0.1;

/// Shifts the evaluation input by a fixed offset: `h(x) = g(x - offset)`.
///
/// The optimum moves with the landscape, so `optimum()` is exactly
/// `g.optimum() + offset`. Desired value, sense and the penalized flag are
/// inherited unchanged.
#[derive(Debug)]
pub struct TranslateFunction<B> {
    base: B,
    offset: Array1<f64>,
    optimum: Array1<f64>,
}

impl<B: Objective> TranslateFunction<B> {
    /// Translate by an explicit offset vector.
    pub fn with_offset(base: B, offset: Array1<f64>) -> Result<Self, TransformError> {
        if offset.len() != base.dimension() {
            return Err(TransformError::InvalidDimension {
                reason: format!(
                    "offset has length {} but the function has dimension {}",
                    offset.len(),
                    base.dimension()
                ),
            });
        }
        let optimum = base.optimum() + &offset;
        Ok(Self {
            base,
            offset,
            optimum,
        })
    }

    /// Translate in a uniformly random direction at the default distance
    /// [`DEFAULT_DISTANCE`] from the old optimum.
    pub fn random<R: Rng + ?Sized>(base: B, rng: &mut R) -> Result<Self, TransformError> {
        Self::random_with_distance(base, DEFAULT_DISTANCE, rng)
    }

    /// Translate in a uniformly random direction, rescaled so the offset has
    /// Euclidean norm exactly `distance`.
    ///
    /// A draw that collapses to the zero vector cannot be rescaled; such
    /// draws are retried a bounded number of times before failing with
    /// [`TransformError::DegenerateSample`].
    pub fn random_with_distance<R: Rng + ?Sized>(
        base: B,
        distance: f64,
        rng: &mut R,
    ) -> Result<Self, TransformError> {
        let d = base.dimension();
        for _ in 0..MAX_REDRAWS {
            let raw = Array1::from_shape_fn(d, |_| rng.random::<f64>());
            let norm = raw.dot(&raw).sqrt();
            if norm > f64::EPSILON {
                return Self::with_offset(base, raw * (distance / norm));
            }
        }
        Err(TransformError::DegenerateSample {
            attempts: MAX_REDRAWS,
        })
    }

    /// The frozen offset vector.
    pub fn offset(&self) -> &Array1<f64> {
        &self.offset
    }
}

impl<B: Objective> Objective for TranslateFunction<B> {
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
        self.base.evaluate(&(x - &self.offset))
    }
}
