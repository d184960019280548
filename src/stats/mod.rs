//! Statistics module - descriptive summary and the Gaussian function

mod gaussian;
mod summary;

pub use gaussian::{apply_gaussian, curve_points, estimate_sigma, fitted_density, gaussian};
pub use summary::{describe, render_summary_table, ColumnSummary};
