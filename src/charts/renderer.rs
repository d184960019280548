//! Static Chart Renderer
//! Renders the viewer chart to a PNG file with plotters, plus a JSON
//! metadata sidecar describing what was plotted.

use crate::charts::{ChartContent, HistogramChart, ScatterChart};
use crate::stats::ColumnSummary;
use plotters::prelude::*;
use serde::Serialize;
use std::fmt::Display;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to draw chart: {0}")]
    Backend(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialize metadata: {0}")]
    Json(#[from] serde_json::Error),
}

fn draw_err<E: Display>(e: E) -> RenderError {
    RenderError::Backend(e.to_string())
}

/// Summary statistics for one exported column.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnReport {
    pub column: String,
    pub stats: ColumnSummary,
}

/// Sidecar metadata written next to an exported chart.
#[derive(Debug, Clone, Serialize)]
pub struct ChartMeta {
    pub source: String,
    pub rows: usize,
    pub sigma: Option<f64>,
    pub bins: Option<usize>,
    pub columns: Vec<ColumnReport>,
}

const SAMPLE_RGB: RGBColor = RGBColor(52, 152, 219);
const CURVE_RGB: RGBColor = RGBColor(231, 76, 60);

/// Renders chart snapshots outside the interactive view.
pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render the chart to a PNG file.
    pub fn render_png(
        content: &ChartContent,
        path: &Path,
        width: u32,
        height: u32,
    ) -> Result<(), RenderError> {
        match content {
            ChartContent::Histogram(chart) => Self::render_histogram(chart, path, width, height),
            ChartContent::Scatter(chart) => Self::render_scatter(chart, path, width, height),
        }
    }

    /// Write the metadata sidecar as pretty-printed JSON.
    pub fn write_metadata(meta: &ChartMeta, path: &Path) -> Result<(), RenderError> {
        let json = serde_json::to_string_pretty(meta)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    fn render_histogram(
        chart: &HistogramChart,
        path: &Path,
        width: u32,
        height: u32,
    ) -> Result<(), RenderError> {
        let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        let (mut x_min, mut x_max) = chart.histogram.range();
        if x_max - x_min < f64::EPSILON {
            x_min -= 0.5;
            x_max += 0.5;
        }
        let y_max = (chart.histogram.max_count().max(1) as f64) * 1.05;

        let mut cc = ChartBuilder::on(&root)
            .caption(&chart.title, ("sans-serif", 24))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(x_min..x_max, 0f64..y_max)
            .map_err(draw_err)?;

        cc.configure_mesh()
            .x_desc("Noise value")
            .y_desc("Frequency")
            .draw()
            .map_err(draw_err)?;

        cc.draw_series(chart.histogram.iter_bars().map(|(center, bar_width, count)| {
            let half = bar_width / 2.0;
            Rectangle::new(
                [(center - half, 0.0), (center + half, count as f64)],
                SAMPLE_RGB.mix(0.6).filled(),
            )
        }))
        .map_err(draw_err)?;

        if let Some(fitted) = &chart.fitted {
            cc.draw_series(LineSeries::new(
                fitted.iter().map(|p| (p[0], p[1])),
                CURVE_RGB.stroke_width(2),
            ))
            .map_err(draw_err)?
            .label("Fitted normal")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], CURVE_RGB));

            cc.configure_series_labels()
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .draw()
                .map_err(draw_err)?;
        }

        root.present().map_err(draw_err)?;
        Ok(())
    }

    fn render_scatter(
        chart: &ScatterChart,
        path: &Path,
        width: u32,
        height: u32,
    ) -> Result<(), RenderError> {
        let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        let (x_min, x_max) = chart.x_lim;

        let mut cc = ChartBuilder::on(&root)
            .caption(&chart.title, ("sans-serif", 24))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(x_min..x_max, -0.05f64..1.05f64)
            .map_err(draw_err)?;

        cc.configure_mesh()
            .x_desc("x")
            .y_desc("y")
            .draw()
            .map_err(draw_err)?;

        cc.draw_series(
            chart
                .points
                .iter()
                .map(|p| Circle::new((p[0], p[1]), 2, SAMPLE_RGB.mix(0.8).filled())),
        )
        .map_err(draw_err)?
        .label("samples")
        .legend(|(x, y)| Circle::new((x + 10, y), 3, SAMPLE_RGB.filled()));

        if !chart.curve.is_empty() {
            cc.draw_series(LineSeries::new(
                chart.curve.iter().map(|p| (p[0], p[1])),
                CURVE_RGB.stroke_width(2),
            ))
            .map_err(draw_err)?
            .label(format!("exp(-x²/2σ²), σ = {}", chart.sigma))
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], CURVE_RGB));
        }

        cc.configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(draw_err)?;

        root.present().map_err(draw_err)?;
        Ok(())
    }
}
