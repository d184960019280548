//! Scatter of noise samples against their Gaussian function values.
//!
//! Loads `noise_distribution.csv`, applies f(x, sigma) = exp(-(x^2)/(2*sigma^2))
//! to the `chars` column and opens a viewer window plotting the samples with
//! the continuous curve overlaid.

use anyhow::Context;
use noiseview::charts::{ChartContent, ChartMeta, ColumnReport, ScatterChart};
use noiseview::config::{AnalysisSettings, NOISE_CSV, SIGMA};
use noiseview::data::DataLoader;
use noiseview::gui::run_viewer;
use noiseview::stats;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let settings = AnalysisSettings::default();

    let mut loader = DataLoader::new();
    loader
        .load_csv(NOISE_CSV)
        .with_context(|| format!("loading {NOISE_CSV}"))?;
    let (rows, cols) = loader.shape();
    println!("({rows}, {cols})");

    let xs = loader.column_values("chars")?;
    let ys = stats::apply_gaussian(&xs, SIGMA);
    let estimated = stats::estimate_sigma(&xs);
    info!(sigma = SIGMA, estimated, "applied Gaussian function");

    let points: Vec<[f64; 2]> = xs.iter().zip(ys.iter()).map(|(&x, &y)| [x, y]).collect();
    let curve = stats::curve_points(SIGMA, settings.x_lim.0, settings.x_lim.1, settings.curve_samples);

    let df = loader.get_dataframe().context("no data loaded")?;
    let meta = ChartMeta {
        source: NOISE_CSV.to_string(),
        rows,
        sigma: Some(SIGMA),
        bins: None,
        columns: stats::describe(df)
            .into_iter()
            .map(|(column, stats)| ColumnReport { column, stats })
            .collect(),
    };

    let content = ChartContent::Scatter(ScatterChart {
        title: "Gaussian noise distribution".to_string(),
        points,
        curve,
        x_lim: settings.x_lim,
        sigma: SIGMA,
        meta,
    });

    run_viewer("Gaussian noise distribution", &settings, content)
        .map_err(|e| anyhow::anyhow!("viewer failed: {e}"))
}
