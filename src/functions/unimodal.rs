//! Unimodal test functions
//!
//! Single-optimum landscapes, the natural starting point before any
//! transformation is applied.

use ndarray::Array1;

/// Sphere function - the simplest quadratic bowl
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5, 5]
pub fn sphere(x: &Array1<f64>) -> f64 {
    x.iter().map(|&xi| xi * xi).sum()
}

/// Sum of squares function - axis-weighted quadratic bowl
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-10, 10]
pub fn sum_squares(x: &Array1<f64>) -> f64 {
    x.iter()
        .enumerate()
        .map(|(i, &xi)| (i + 1) as f64 * xi.powi(2))
        .sum()
}

/// Elliptic function - separable and strongly ill-conditioned
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-100, 100]
pub fn elliptic(x: &Array1<f64>) -> f64 {
    let n = x.len();
    if n == 1 {
        return x[0] * x[0];
    }
    x.iter()
        .enumerate()
        .map(|(i, &xi)| 1e6_f64.powf(i as f64 / (n - 1) as f64) * xi.powi(2))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unimodal_minima_at_origin() {
        let x = Array1::from_vec(vec![0.0, 0.0, 0.0]);
        assert_eq!(sphere(&x), 0.0);
        assert_eq!(sum_squares(&x), 0.0);
        assert_eq!(elliptic(&x), 0.0);
    }

    #[test]
    fn test_sphere_values() {
        let x = Array1::from_vec(vec![3.0, 4.0]);
        assert_eq!(sphere(&x), 25.0);
    }

    #[test]
    fn test_sum_squares_weights() {
        // 1*2^2 + 2*3^2 = 22
        let x = Array1::from_vec(vec![2.0, 3.0]);
        assert_eq!(sum_squares(&x), 22.0);
    }

    #[test]
    fn test_elliptic_conditioning() {
        // last axis is weighted 1e6, first axis 1
        let x = Array1::from_vec(vec![1.0, 1.0]);
        assert!((elliptic(&x) - (1.0 + 1e6)).abs() < 1e-9);
    }
}
