//! Elementwise distortion formulas and the conditioning diagonal
//!
//! These are the BBOB building blocks: an ill-conditioning diagonal, the
//! coordinate-wise asymmetry map and the oscillation map. All three keep the
//! origin fixed, which is what lets the composite wrapper relocate the
//! optimum exactly.

use ndarray::{Array1, Array2};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::TransformError;

/// Diagonal conditioning matrix with entries `alpha^(i / (2*dim - 2))` for
/// `i` in `0..dim`, exponentially spaced from 1 upwards.
///
/// With `shuffled` the entries are randomly permuted before being placed on
/// the diagonal, breaking the coordinate-to-conditioning correlation.
pub fn generate_diags<R: Rng + ?Sized>(
    alpha: f64,
    dim: usize,
    shuffled: bool,
    rng: &mut R,
) -> Result<Array2<f64>, TransformError> {
    if dim < 2 {
        return Err(TransformError::InvalidDimension {
            reason: format!("conditioning requires dimension >= 2, got {}", dim),
        });
    }
    let denom = (2 * dim - 2) as f64;
    let mut entries: Vec<f64> = (0..dim).map(|i| alpha.powf(i as f64 / denom)).collect();
    if shuffled {
        entries.shuffle(rng);
    }
    Ok(Array2::from_diag(&Array1::from_vec(entries)))
}

/// Coordinate-wise asymmetry distortion.
///
/// Positive coordinates are bent upwards with a strength that grows along
/// the coordinate index: `xi -> xi^(1 + beta * i/(dim-1) * sqrt(xi))`.
/// Non-positive coordinates pass through unchanged, so the origin is a
/// fixed point.
pub fn asymmetrify(x: &Array1<f64>, beta: f64) -> Result<Array1<f64>, TransformError> {
    if x.len() < 2 {
        return Err(TransformError::InvalidDimension {
            reason: format!("asymmetry requires dimension >= 2, got {}", x.len()),
        });
    }
    Ok(asymmetrify_unchecked(x, beta))
}

pub(crate) fn asymmetrify_unchecked(x: &Array1<f64>, beta: f64) -> Array1<f64> {
    let denom = (x.len() - 1) as f64;
    Array1::from_shape_fn(x.len(), |i| {
        let xi = x[i];
        if xi > 0.0 {
            xi.powf(1.0 + beta * (i as f64 / denom) * xi.sqrt())
        } else {
            xi
        }
    })
}

/// Coordinate-wise oscillation distortion.
///
/// Superimposes two incommensurate sine waves on the log-magnitude of each
/// coordinate. The wave frequencies depend on the coordinate's sign; the
/// scale slot `s` is 1 in both branches. Zero coordinates pass through, so
/// the origin is a fixed point.
pub fn oscillatify(x: &Array1<f64>) -> Array1<f64> {
    x.mapv(|xi| {
        if xi == 0.0 {
            return xi;
        }
        let (s, c1, c2) = if xi > 0.0 {
            (1.0, 10.0, 7.9)
        } else {
            (1.0, 5.5, 3.1)
        };
        s * (xi.abs().ln() + 0.049 * ((c1 * xi).sin() + (c2 * xi).sin())).exp()
    })
}
