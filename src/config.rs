//! Analysis Settings
//! All hard-coded literals of the study live here.

/// Input file read by the analysis binaries and written by `add_noise`.
pub const NOISE_CSV: &str = "noise_distribution.csv";

/// Labels assigned to the two unnamed CSV columns on load.
pub const COLUMN_NAMES: [&str; 2] = ["Vol", "chars"];

/// Width parameter of the Gaussian curve, derived from the unit-box
/// diagonal: sqrt(sqrt(3) * 0.01).
pub const SIGMA: f64 = 0.131607;

/// Settings for the analysis/viewer binaries.
#[derive(Debug, Clone)]
pub struct AnalysisSettings {
    /// Number of histogram bins for the `chars` column.
    pub hist_bins: usize,
    /// X-axis limits of the scatter chart.
    pub x_lim: (f64, f64),
    /// Samples used when tracing the continuous Gaussian curve.
    pub curve_samples: usize,
    /// Initial viewer window size.
    pub window_size: [f32; 2],
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            hist_bins: 100,
            x_lim: (-0.3, 0.3),
            curve_samples: 400,
            window_size: [960.0, 640.0],
        }
    }
}

/// Settings for the `add_noise` generator.
#[derive(Debug, Clone)]
pub struct GeneratorSettings {
    /// Lattice spacing of the unit box walk.
    pub diff: f64,
    /// Variance = unit-box diagonal length * this ratio.
    pub ratio_for_sigma: f64,
    /// Probability that a lattice point receives a noise sample.
    pub ratio_for_add_noise: f64,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            diff: 0.01,
            ratio_for_sigma: 0.01,
            ratio_for_add_noise: 0.2,
        }
    }
}

impl GeneratorSettings {
    /// Diagonal length of the unit box.
    pub fn diagonal_length(&self) -> f64 {
        3.0_f64.sqrt()
    }

    /// Variance of the injected noise.
    pub fn sigma2(&self) -> f64 {
        self.diagonal_length() * self.ratio_for_sigma
    }

    /// Standard deviation of the injected noise.
    pub fn sigma(&self) -> f64 {
        self.sigma2().sqrt()
    }

    /// Number of lattice points walked per axis.
    pub fn points_per_axis(&self) -> usize {
        (1.0 / self.diff).ceil() as usize
    }

    /// Total number of lattice points in the box.
    pub fn total_points(&self) -> usize {
        let n = self.points_per_axis();
        n * n * n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigma_matches_study_constant() {
        let settings = GeneratorSettings::default();
        assert!((settings.sigma() - SIGMA).abs() < 1e-5);
    }

    #[test]
    fn default_lattice_size() {
        let settings = GeneratorSettings::default();
        assert_eq!(settings.points_per_axis(), 100);
        assert_eq!(settings.total_points(), 1_000_000);
    }
}
