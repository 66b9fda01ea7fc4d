//! Multimodal test functions
//!
//! Landscapes with many local minima, used to check that transformations
//! keep a rugged structure intact.

use ndarray::Array1;

/// Rastrigin function - highly multimodal with a regular grid of minima
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5.12, 5.12]
pub fn rastrigin(x: &Array1<f64>) -> f64 {
    let n = x.len() as f64;
    10.0 * n
        + x.iter()
            .map(|&xi| xi.powi(2) - 10.0 * (2.0 * std::f64::consts::PI * xi).cos())
            .sum::<f64>()
}

/// Ackley function - nearly flat outer region with a deep central funnel
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-32.768, 32.768]
pub fn ackley(x: &Array1<f64>) -> f64 {
    let n = x.len() as f64;
    let sum_sq: f64 = x.iter().map(|&xi| xi.powi(2)).sum();
    let sum_cos: f64 = x
        .iter()
        .map(|&xi| (2.0 * std::f64::consts::PI * xi).cos())
        .sum();
    -20.0 * (-0.2 * (sum_sq / n).sqrt()).exp() - (sum_cos / n).exp()
        + 20.0
        + std::f64::consts::E
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multimodal_minima_at_origin() {
        let x = Array1::from_vec(vec![0.0, 0.0]);
        assert!(rastrigin(&x).abs() < 1e-12);
        assert!(ackley(&x).abs() < 1e-12);
    }

    #[test]
    fn test_rastrigin_local_structure() {
        // integer lattice points are local minima but only the origin is global
        let x = Array1::from_vec(vec![1.0, 0.0]);
        assert!(rastrigin(&x) > 0.0);
    }
}
