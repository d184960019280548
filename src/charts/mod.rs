//! Charts module - binning and chart rendering

mod histogram;
mod plotter;
mod renderer;

pub use histogram::Histogram;
pub use plotter::{ChartContent, ChartPlotter, HistogramChart, ScatterChart};
pub use renderer::{ChartMeta, ColumnReport, RenderError, StaticChartRenderer};
