//! Histogram of the recorded noise distribution.
//!
//! Loads `noise_distribution.csv`, prints the per-column summary table and
//! opens a viewer window with a 100-bin histogram of the `chars` column.

use anyhow::Context;
use noiseview::charts::{ChartContent, ChartMeta, ColumnReport, Histogram, HistogramChart};
use noiseview::config::{AnalysisSettings, NOISE_CSV};
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
    info!(rows, cols, "loaded {NOISE_CSV}");

    let df = loader.get_dataframe().context("no data loaded")?;
    let summaries = stats::describe(df);
    println!("{}", stats::render_summary_table(&summaries));

    let values = loader.column_values("chars")?;
    let histogram = Histogram::from_values(&values, settings.hist_bins);
    let fitted = stats::fitted_density(&values, &histogram, settings.curve_samples);

    let meta = ChartMeta {
        source: NOISE_CSV.to_string(),
        rows,
        sigma: None,
        bins: Some(settings.hist_bins),
        columns: summaries
            .into_iter()
            .map(|(column, stats)| ColumnReport { column, stats })
            .collect(),
    };

    let content = ChartContent::Histogram(HistogramChart {
        title: "Gaussian noise distribution".to_string(),
        histogram,
        fitted,
        meta,
    });

    run_viewer("Gaussian noise distribution", &settings, content)
        .map_err(|e| anyhow::anyhow!("viewer failed: {e}"))
}
