//! Gaussian Function Module
//! The closed-form curve of the study and its fitted-density companion.

use crate::charts::Histogram;
use rayon::prelude::*;
use statrs::distribution::{Continuous, Normal};

/// The Gaussian function f(x, sigma) = exp(-(x^2) / (2 * sigma^2)).
///
/// Unnormalized: f(0, sigma) == 1.0 for any sigma > 0.
pub fn gaussian(x: f64, sigma: f64) -> f64 {
    (-(x * x) / (2.0 * sigma * sigma)).exp()
}

/// Apply the Gaussian function element-wise.
pub fn apply_gaussian(values: &[f64], sigma: f64) -> Vec<f64> {
    values.par_iter().map(|&x| gaussian(x, sigma)).collect()
}

/// Sample the continuous Gaussian curve over [x_min, x_max].
pub fn curve_points(sigma: f64, x_min: f64, x_max: f64, samples: usize) -> Vec<[f64; 2]> {
    if samples < 2 {
        return Vec::new();
    }

    let step = (x_max - x_min) / (samples - 1) as f64;
    (0..samples)
        .map(|i| {
            let x = x_min + i as f64 * step;
            [x, gaussian(x, sigma)]
        })
        .collect()
}

/// Estimate sigma from zero-mean samples: the root mean square.
pub fn estimate_sigma(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let mean_square = values.iter().map(|x| x * x).sum::<f64>() / values.len() as f64;
    mean_square.sqrt()
}

/// Fit a normal distribution to the samples and sample its density scaled
/// to histogram counts (pdf * n * bin width).
///
/// Returns `None` when the fit is degenerate (fewer than two samples or
/// zero variance).
pub fn fitted_density(
    values: &[f64],
    histogram: &Histogram,
    samples: usize,
) -> Option<Vec<[f64; 2]>> {
    let n = values.len();
    if n < 2 || samples < 2 {
        return None;
    }

    let mean = values.iter().sum::<f64>() / n as f64;
    let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    let std = variance.sqrt();

    let dist = Normal::new(mean, std).ok()?;
    let scale = n as f64 * histogram.bin_width();
    let (x_min, x_max) = histogram.range();
    let step = (x_max - x_min) / (samples - 1) as f64;

    Some(
        (0..samples)
            .map(|i| {
                let x = x_min + i as f64 * step;
                [x, dist.pdf(x) * scale]
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn unity_at_origin_for_any_sigma() {
        for sigma in [0.05, 0.131607, 1.0, 10.0] {
            assert!(close(gaussian(0.0, sigma), 1.0));
        }
    }

    #[test]
    fn symmetric_around_origin() {
        for x in [0.01, 0.1, 0.25, 1.0] {
            assert!(close(gaussian(x, 0.131607), gaussian(-x, 0.131607)));
        }
    }

    #[test]
    fn decays_monotonically_in_magnitude() {
        let sigma = 0.131607;
        assert!(gaussian(0.1, sigma) > gaussian(0.2, sigma));
        assert!(gaussian(0.2, sigma) > gaussian(0.3, sigma));
    }

    #[test]
    fn parallel_application_matches_scalar() {
        let xs = [-0.2, -0.1, 0.0, 0.1, 0.2];
        let ys = apply_gaussian(&xs, 0.131607);

        assert_eq!(ys.len(), xs.len());
        for (x, y) in xs.iter().zip(ys.iter()) {
            assert!(close(*y, gaussian(*x, 0.131607)));
        }
    }

    #[test]
    fn curve_spans_requested_range() {
        let curve = curve_points(0.131607, -0.3, 0.3, 101);

        assert_eq!(curve.len(), 101);
        assert!(close(curve[0][0], -0.3));
        assert!(close(curve[100][0], 0.3));
        // peak at the middle sample
        assert!(close(curve[50][0], 0.0));
        assert!(close(curve[50][1], 1.0));
    }

    #[test]
    fn sigma_estimate_is_root_mean_square() {
        assert!(close(estimate_sigma(&[0.1, -0.1]), 0.1));
        assert!(estimate_sigma(&[]).is_nan());
    }

    #[test]
    fn density_fit_skips_degenerate_input() {
        let histogram = Histogram::from_values(&[1.0, 1.0, 1.0], 10);
        assert!(fitted_density(&[1.0, 1.0, 1.0], &histogram, 50).is_none());
        assert!(fitted_density(&[1.0], &histogram, 50).is_none());
    }

    #[test]
    fn density_fit_peaks_near_sample_mean() {
        let values = [-0.2, -0.1, -0.05, 0.0, 0.05, 0.1, 0.2];
        let histogram = Histogram::from_values(&values, 4);
        let curve = fitted_density(&values, &histogram, 201).unwrap();

        let peak = curve
            .iter()
            .max_by(|a, b| a[1].partial_cmp(&b[1]).unwrap())
            .unwrap();
        assert!(peak[0].abs() < 0.05);
    }
}
