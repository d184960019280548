//! Summary Statistics Module
//! Per-column descriptive statistics (count, mean, std, quartiles) with
//! terminal table rendering.

use polars::prelude::*;
use serde::Serialize;
use tabled::{builder::Builder, settings::Style};

/// Descriptive statistics for a single column.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnSummary {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub max: f64,
}

impl Default for ColumnSummary {
    fn default() -> Self {
        Self {
            count: 0,
            mean: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            p25: f64::NAN,
            p50: f64::NAN,
            p75: f64::NAN,
            max: f64::NAN,
        }
    }
}

impl ColumnSummary {
    /// Compute descriptive statistics for an array of values.
    ///
    /// Std is the sample standard deviation (ddof = 1); percentiles use
    /// linear interpolation, matching the NumPy/pandas convention.
    pub fn from_values(values: &[f64]) -> Self {
        let n = values.len();
        if n == 0 {
            return Self::default();
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let mean = values.iter().sum::<f64>() / n as f64;
        let variance = if n > 1 {
            values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64
        } else {
            0.0
        };

        Self {
            count: n,
            mean,
            std: variance.sqrt(),
            min: sorted[0],
            p25: percentile(&sorted, 25.0),
            p50: percentile(&sorted, 50.0),
            p75: percentile(&sorted, 75.0),
            max: sorted[n - 1],
        }
    }
}

/// Calculate percentile using linear interpolation (NumPy compatible).
fn percentile(sorted_values: &[f64], p: f64) -> f64 {
    let n = sorted_values.len();
    if n == 0 {
        return f64::NAN;
    }
    if n == 1 {
        return sorted_values[0];
    }

    let rank = (p / 100.0) * (n - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = (rank.ceil() as usize).min(n - 1);
    let frac = rank - lower as f64;

    if lower == upper {
        sorted_values[lower]
    } else {
        sorted_values[lower] * (1.0 - frac) + sorted_values[upper] * frac
    }
}

/// Compute summary statistics for every numeric column of the DataFrame.
pub fn describe(df: &DataFrame) -> Vec<(String, ColumnSummary)> {
    df.get_columns()
        .iter()
        .filter_map(|col| {
            let values: Vec<f64> = col
                .cast(&DataType::Float64)
                .ok()?
                .f64()
                .ok()?
                .into_iter()
                .flatten()
                .collect();
            Some((col.name().to_string(), ColumnSummary::from_values(&values)))
        })
        .collect()
}

/// Render summaries as a terminal table, one column per data column.
pub fn render_summary_table(summaries: &[(String, ColumnSummary)]) -> String {
    let mut builder = Builder::default();

    let mut header = vec![String::new()];
    header.extend(summaries.iter().map(|(name, _)| name.clone()));
    builder.push_record(header);

    let rows: [(&str, fn(&ColumnSummary) -> String); 8] = [
        ("count", |s| format!("{}", s.count)),
        ("mean", |s| format!("{:.6}", s.mean)),
        ("std", |s| format!("{:.6}", s.std)),
        ("min", |s| format!("{:.6}", s.min)),
        ("25%", |s| format!("{:.6}", s.p25)),
        ("50%", |s| format!("{:.6}", s.p50)),
        ("75%", |s| format!("{:.6}", s.p75)),
        ("max", |s| format!("{:.6}", s.max)),
    ];

    for (label, fmt) in rows {
        let mut record = vec![label.to_string()];
        record.extend(summaries.iter().map(|(_, s)| fmt(s)));
        builder.push_record(record);
    }

    let mut table = builder.build();
    table.with(Style::psql());
    table.to_string()
}
