//! Composite BBOB-style transformation
//!
//! One wrapper chaining the full benchmark pipeline: relocate the optimum,
//! condition, rotate, then distort with asymmetry and oscillation. The
//! composition order is fixed by benchmark convention: the linear part
//! (conditioning and rotations) always runs before asymmetry, and asymmetry
//! always runs before oscillation.

use ndarray::{Array1, Array2};
use rand::Rng;

use crate::error::TransformError;
use crate::linalg::random_orthogonal;
use crate::objective::Objective;
use crate::transformations::distortions::{asymmetrify_unchecked, generate_diags, oscillatify};

/// Relocated optima are drawn from `[-4.9, 4.9]^d`, the BBOB convention.
const OPTIMUM_RANGE: f64 = 9.8;

/// Fluent builder selecting which parts of the pipeline are active.
///
/// Defaults: translation on, everything else off.
#[derive(Debug)]
pub struct BbobBuilder {
    translate: bool,
    rotate: bool,
    conditioning: Option<f64>,
    asymmetry: Option<f64>,
    oscillate: bool,
}

impl Default for BbobBuilder {
    fn default() -> Self {
        Self {
            translate: true,
            rotate: false,
            conditioning: None,
            asymmetry: None,
            oscillate: false,
        }
    }
}

impl BbobBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Relocate the optimum to a fresh uniform random point in
    /// `[-4.9, 4.9]^d` (on by default).
    pub fn translate(mut self, v: bool) -> Self {
        self.translate = v;
        self
    }

    /// Apply a random orthogonal rotation `R` before evaluation.
    pub fn rotate(mut self, v: bool) -> Self {
        self.rotate = v;
        self
    }

    /// Ill-condition the landscape with factor `alpha` (> 0). When combined
    /// with `rotate`, a second independent rotation `Q` is applied after the
    /// conditioning diagonal.
    pub fn conditioning(mut self, alpha: f64) -> Self {
        self.conditioning = Some(alpha);
        self
    }

    /// Bend positive coordinates with asymmetry strength `beta`.
    pub fn asymmetry(mut self, beta: f64) -> Self {
        self.asymmetry = Some(beta);
        self
    }

    /// Superimpose oscillation on the coordinates.
    pub fn oscillate(mut self, v: bool) -> Self {
        self.oscillate = v;
        self
    }

    /// Draw the frozen parameters from `rng` and build the wrapper.
    ///
    /// Conditioning and asymmetry divide by `dim - 1`, so they require a
    /// base of dimension at least 2.
    pub fn build<B, R>(self, base: B, rng: &mut R) -> Result<BbobTransformation<B>, TransformError>
    where
        B: Objective,
        R: Rng + ?Sized,
    {
        let d = base.dimension();
        if self.asymmetry.is_some() && d < 2 {
            return Err(TransformError::InvalidDimension {
                reason: format!("asymmetry requires dimension >= 2, got {}", d),
            });
        }

        let optimum = if self.translate {
            Array1::from_shape_fn(d, |_| (rng.random::<f64>() - 0.5) * OPTIMUM_RANGE)
        } else {
            base.optimum().clone()
        };

        let diags = match self.conditioning {
            Some(alpha) => generate_diags(alpha, d, false, rng)?,
            None => Array2::eye(d),
        };
        let r = if self.rotate {
            random_orthogonal(d, rng)
        } else {
            Array2::eye(d)
        };
        let q = if self.rotate && self.conditioning.is_some() {
            random_orthogonal(d, rng)
        } else {
            Array2::eye(d)
        };

        Ok(BbobTransformation {
            base,
            optimum,
            diags,
            r,
            q,
            asymmetry: self.asymmetry,
            oscillate: self.oscillate,
        })
    }
}

/// The frozen composite pipeline:
/// `h(x) = g(oscillatify(asymmetrify(Q · diags · R · (x - optimum))))`
/// with every stage optional and defaulting to the identity.
///
/// The distortion stages fix the origin and the linear stage maps the
/// relocated optimum to the origin, so for a base whose optimum is the
/// origin the reported optimum is exact. Asymmetry and oscillation are not
/// invertible, so away from the optimum the landscape is genuinely warped.
#[derive(Debug)]
pub struct BbobTransformation<B> {
    base: B,
    optimum: Array1<f64>,
    diags: Array2<f64>,
    r: Array2<f64>,
    q: Array2<f64>,
    asymmetry: Option<f64>,
    oscillate: bool,
}

impl<B: Objective> BbobTransformation<B> {
    /// The conditioning diagonal (identity when conditioning is off).
    pub fn diags(&self) -> &Array2<f64> {
        &self.diags
    }

    /// The inner rotation `R` (identity when rotation is off).
    pub fn rotation(&self) -> &Array2<f64> {
        &self.r
    }

    /// The outer rotation `Q` (identity unless both rotation and
    /// conditioning are on).
    pub fn outer_rotation(&self) -> &Array2<f64> {
        &self.q
    }
}

impl<B: Objective> Objective for BbobTransformation<B> {
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
        let mut y = self
            .q
            .dot(&self.diags.dot(&self.r.dot(&(x - &self.optimum))));
        if let Some(beta) = self.asymmetry {
            // dimension >= 2 was checked at build time
            y = asymmetrify_unchecked(&y, beta);
        }
        if self.oscillate {
            y = oscillatify(&y);
        }
        self.base.evaluate(&y)
    }
}
