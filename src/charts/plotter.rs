//! Chart Plotter Module
//! Creates interactive visualizations using egui_plot.

use crate::charts::renderer::ChartMeta;
use crate::charts::Histogram;
use egui::Color32;
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, Points};

/// Color for histogram bars and scatter samples
pub const SAMPLE_COLOR: Color32 = Color32::from_rgb(52, 152, 219); // Blue
/// Color for fitted/analytic curves
pub const CURVE_COLOR: Color32 = Color32::from_rgb(231, 76, 60); // Red

/// Histogram view of the recorded noise column.
#[derive(Clone)]
pub struct HistogramChart {
    pub title: String,
    pub histogram: Histogram,
    /// Fitted normal density scaled to counts, if the fit succeeded.
    pub fitted: Option<Vec<[f64; 2]>>,
    pub meta: ChartMeta,
}

/// Scatter of samples against their Gaussian function values.
#[derive(Clone)]
pub struct ScatterChart {
    pub title: String,
    pub points: Vec<[f64; 2]>,
    pub curve: Vec<[f64; 2]>,
    pub x_lim: (f64, f64),
    pub sigma: f64,
    pub meta: ChartMeta,
}

/// The one chart a viewer window displays.
#[derive(Clone)]
pub enum ChartContent {
    Histogram(HistogramChart),
    Scatter(ScatterChart),
}

impl ChartContent {
    pub fn title(&self) -> &str {
        match self {
            ChartContent::Histogram(chart) => &chart.title,
            ChartContent::Scatter(chart) => &chart.title,
        }
    }

    pub fn meta(&self) -> &ChartMeta {
        match self {
            ChartContent::Histogram(chart) => &chart.meta,
            ChartContent::Scatter(chart) => &chart.meta,
        }
    }

    /// Base name for exported files.
    pub fn slug(&self) -> &'static str {
        match self {
            ChartContent::Histogram(_) => "noise_histogram",
            ChartContent::Scatter(_) => "noise_scatter",
        }
    }
}

/// Creates scientific visualization charts using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Draw whichever chart the window holds.
    pub fn draw(ui: &mut egui::Ui, content: &ChartContent) {
        match content {
            ChartContent::Histogram(chart) => Self::draw_histogram(ui, chart),
            ChartContent::Scatter(chart) => Self::draw_scatter(ui, chart),
        }
    }

    /// Frequency histogram with optional fitted-density overlay.
    pub fn draw_histogram(ui: &mut egui::Ui, chart: &HistogramChart) {
        let bars: Vec<Bar> = chart
            .histogram
            .iter_bars()
            .map(|(center, width, count)| {
                Bar::new(center, count as f64)
                    .width(width)
                    .fill(SAMPLE_COLOR.gamma_multiply(0.6))
                    .stroke(egui::Stroke::new(1.0, SAMPLE_COLOR))
            })
            .collect();

        Plot::new("noise_histogram")
            .legend(Legend::default())
            .x_axis_label("Noise value")
            .y_axis_label("Frequency")
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).name("chars"));

                if let Some(fitted) = &chart.fitted {
                    plot_ui.line(
                        Line::new(PlotPoints::from_iter(fitted.iter().copied()))
                            .color(CURVE_COLOR)
                            .width(1.5)
                            .name("Fitted normal"),
                    );
                }
            });
    }

    /// Sample scatter with the continuous Gaussian curve overlaid.
    pub fn draw_scatter(ui: &mut egui::Ui, chart: &ScatterChart) {
        Plot::new("noise_scatter")
            .legend(Legend::default())
            .x_axis_label("x")
            .y_axis_label("y")
            .include_x(chart.x_lim.0)
            .include_x(chart.x_lim.1)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.points(
                    Points::new(PlotPoints::from_iter(chart.points.iter().copied()))
                        .radius(2.0)
                        .color(SAMPLE_COLOR.gamma_multiply(0.8))
                        .name("samples"),
                );

                if !chart.curve.is_empty() {
                    plot_ui.line(
                        Line::new(PlotPoints::from_iter(chart.curve.iter().copied()))
                            .color(CURVE_COLOR)
                            .width(1.5)
                            .name(format!("exp(-x²/2σ²), σ = {}", chart.sigma)),
                    );
                }
            });
    }
}
