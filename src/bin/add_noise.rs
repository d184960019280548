//! Noise sample recorder.
//!
//! Walks the unit-box lattice, stochastically draws Gaussian noise and
//! writes the recorded samples to `noise_distribution.csv` for the analysis
//! binaries, printing the sigma diagnostics of the study.

use anyhow::Context;
use noiseview::config::{GeneratorSettings, NOISE_CSV};
use noiseview::noise::{sample_lattice, write_noise_csv, BoxMuller};
use std::f64::consts::PI;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let settings = GeneratorSettings::default();

    println!("Diagonal length");
    println!("> {}\n", settings.diagonal_length());
    println!("Sigma2(Variance)");
    println!("> {}\n", settings.sigma2());
    println!("Sigma(Standard Deviation)");
    println!("> {}\n", settings.sigma());
    println!("Number of lattice points");
    println!("> {}\n", settings.total_points());

    println!("----- Stochastically add Gaussian noise -----");
    println!(
        "> Add Gaussian noise with {} percent.\n",
        settings.ratio_for_add_noise * 100.0
    );

    let mut select = rand::thread_rng();
    let mut gauss = BoxMuller::new(rand::thread_rng());
    let samples = sample_lattice(&settings, &mut select, &mut gauss);

    println!("Number of noised points");
    println!("> {}\n", samples.len());

    write_noise_csv(Path::new(NOISE_CSV), &samples)
        .with_context(|| format!("writing {NOISE_CSV}"))?;
    info!(rows = samples.len(), "wrote {NOISE_CSV}");

    // Area under the unnormalized curve is sqrt(2*pi*sigma^2); dividing by
    // the normalization constant must give exactly 1.
    let sigma2 = settings.sigma2();
    let integral = (2.0 * PI * sigma2).sqrt();
    println!("Gaussian Integration Value");
    println!("> {integral}\n");
    println!("Normalized Integration Value");
    println!("> {}", integral / (2.0 * PI * sigma2).sqrt());

    Ok(())
}
