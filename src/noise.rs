//! Noise Sample Recorder
//! Walks the unit-box lattice, stochastically draws Gaussian noise via a
//! Box-Muller transform and records the samples to CSV.

use crate::config::GeneratorSettings;
use polars::prelude::*;
use rand::Rng;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NoiseError {
    #[error("Failed to write CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// One recorded noise draw, keyed by the lattice point it was attached to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseSample {
    pub index: u64,
    pub value: f64,
}

/// Box-Muller transform over a uniform source.
///
/// Each pair of uniform draws yields two independent standard normal
/// samples; the spare is cached for the next call.
pub struct BoxMuller<R: Rng> {
    rng: R,
    spare: Option<f64>,
}

impl<R: Rng> BoxMuller<R> {
    pub fn new(rng: R) -> Self {
        Self { rng, spare: None }
    }

    /// Draw one sample from N(mu, sigma2).
    pub fn sample(&mut self, mu: f64, sigma2: f64) -> f64 {
        let z = match self.spare.take() {
            Some(z) => z,
            None => {
                // open interval keeps ln(u1) finite
                let u1: f64 = self.rng.gen_range(f64::MIN_POSITIVE..1.0);
                let u2: f64 = self.rng.gen();

                let r = (-2.0 * u1.ln()).sqrt();
                let theta = 2.0 * std::f64::consts::PI * u2;

                self.spare = Some(r * theta.sin());
                r * theta.cos()
            }
        };

        mu + z * sigma2.sqrt()
    }
}

/// Walk the unit-box lattice and record one fresh N(0, sigma2) draw per
/// stochastically selected point.
pub fn sample_lattice<S: Rng, R: Rng>(
    settings: &GeneratorSettings,
    select: &mut S,
    gauss: &mut BoxMuller<R>,
) -> Vec<NoiseSample> {
    let sigma2 = settings.sigma2();
    let total = settings.total_points();
    let mut samples = Vec::new();

    for index in 0..total {
        if select.gen::<f64>() < settings.ratio_for_add_noise {
            samples.push(NoiseSample {
                index: index as u64,
                value: gauss.sample(0.0, sigma2),
            });
        }
    }

    samples
}

/// Write samples as a headerless two-column CSV (index, value).
pub fn write_noise_csv(path: &Path, samples: &[NoiseSample]) -> Result<(), NoiseError> {
    let indices: Vec<i64> = samples.iter().map(|s| s.index as i64).collect();
    let values: Vec<f64> = samples.iter().map(|s| s.value).collect();

    let mut df = DataFrame::new(vec![
        Column::new("Vol".into(), indices),
        Column::new("chars".into(), values),
    ])?;

    let mut file = std::fs::File::create(path)?;
    CsvWriter::new(&mut file)
        .include_header(false)
        .finish(&mut df)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataLoader;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn box_muller_reproduces_requested_moments() {
        let mut gauss = BoxMuller::new(StdRng::seed_from_u64(7));
        let sigma2 = 0.0173205;

        let n = 100_000;
        let samples: Vec<f64> = (0..n).map(|_| gauss.sample(0.0, sigma2)).collect();

        let mean = samples.iter().sum::<f64>() / n as f64;
        let variance =
            samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;

        assert!(mean.abs() < 0.005, "mean drifted: {mean}");
        assert!(
            (variance.sqrt() - sigma2.sqrt()).abs() < 0.005,
            "std drifted: {}",
            variance.sqrt()
        );
    }

    #[test]
    fn box_muller_honors_the_mean_offset() {
        let mut gauss = BoxMuller::new(StdRng::seed_from_u64(21));

        let n = 50_000;
        let mean = (0..n).map(|_| gauss.sample(3.0, 0.01)).sum::<f64>() / n as f64;
        assert!((mean - 3.0).abs() < 0.01);
    }

    #[test]
    fn zero_ratio_records_nothing() {
        let settings = GeneratorSettings {
            diff: 0.1,
            ratio_for_sigma: 0.01,
            ratio_for_add_noise: 0.0,
        };
        let mut select = StdRng::seed_from_u64(1);
        let mut gauss = BoxMuller::new(StdRng::seed_from_u64(2));

        let samples = sample_lattice(&settings, &mut select, &mut gauss);
        assert!(samples.is_empty());
    }

    #[test]
    fn full_ratio_records_every_lattice_point() {
        let settings = GeneratorSettings {
            diff: 0.1,
            ratio_for_sigma: 0.01,
            ratio_for_add_noise: 1.0,
        };
        let mut select = StdRng::seed_from_u64(1);
        let mut gauss = BoxMuller::new(StdRng::seed_from_u64(2));

        let samples = sample_lattice(&settings, &mut select, &mut gauss);
        assert_eq!(samples.len(), settings.total_points());
        assert_eq!(samples[0].index, 0);
        assert_eq!(samples.last().unwrap().index, (settings.total_points() - 1) as u64);
    }

    #[test]
    fn written_csv_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("noise_distribution.csv");

        let samples = vec![
            NoiseSample { index: 0, value: 0.1 },
            NoiseSample { index: 3, value: -0.2 },
            NoiseSample { index: 9, value: 0.05 },
        ];
        write_noise_csv(&path, &samples).unwrap();

        let mut loader = DataLoader::new();
        loader.load_csv(path.to_str().unwrap()).unwrap();

        assert_eq!(loader.shape(), (3, 2));
        assert_eq!(loader.column_values("chars").unwrap(), vec![0.1, -0.2, 0.05]);
    }
}
