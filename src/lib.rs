//! Noiseview - Gaussian Noise Distribution Analysis & Chart Viewer
//!
//! Shared library behind the `noise_histogram`, `noise_scatter` and
//! `add_noise` binaries. Loads recorded noise samples from CSV, computes
//! descriptive statistics and displays interactive charts.

pub mod charts;
pub mod config;
pub mod data;
pub mod gui;
pub mod noise;
pub mod stats;
