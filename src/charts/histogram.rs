//! Histogram Binning
//! Equal-width bins over a value slice; edges carry one more entry than counts.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Histogram {
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bin values into `num_bins` equal-width buckets spanning [min, max].
    ///
    /// Values on the upper edge land in the last bucket. Constant data
    /// collapses to a single bucket.
    pub fn from_values(values: &[f64], num_bins: usize) -> Self {
        if values.is_empty() || num_bins == 0 {
            return Self {
                edges: Vec::new(),
                counts: Vec::new(),
            };
        }

        let min = values.iter().fold(f64::INFINITY, |a, &b| a.min(b));
        let max = values.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));

        if (max - min).abs() < f64::EPSILON {
            return Self {
                edges: vec![min, max],
                counts: vec![values.len()],
            };
        }

        let step = (max - min) / num_bins as f64;
        let mut counts = vec![0; num_bins];
        let mut edges = Vec::with_capacity(num_bins + 1);

        for i in 0..=num_bins {
            edges.push(min + i as f64 * step);
        }

        for &val in values {
            let idx = ((val - min) / step).floor() as usize;
            counts[idx.min(num_bins - 1)] += 1;
        }

        Self { edges, counts }
    }

    /// Number of buckets.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of binned values.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Width of a single bucket.
    pub fn bin_width(&self) -> f64 {
        if self.edges.len() < 2 {
            0.0
        } else {
            self.edges[1] - self.edges[0]
        }
    }

    /// Value range covered by the buckets.
    pub fn range(&self) -> (f64, f64) {
        if self.edges.is_empty() {
            (0.0, 0.0)
        } else {
            (self.edges[0], self.edges[self.edges.len() - 1])
        }
    }

    /// Iterate buckets as (center, width, count).
    pub fn iter_bars(&self) -> impl Iterator<Item = (f64, f64, usize)> + '_ {
        let width = self.bin_width();
        self.counts.iter().enumerate().map(move |(i, &count)| {
            let center = (self.edges[i] + self.edges[i + 1]) / 2.0;
            (center, width, count)
        })
    }

    /// Largest bucket count, 0 when empty.
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_sum_to_sample_count() {
        let values: Vec<f64> = (0..97).map(|i| (i as f64) * 0.013 - 0.5).collect();
        let histogram = Histogram::from_values(&values, 10);

        assert_eq!(histogram.len(), 10);
        assert_eq!(histogram.edges.len(), 11);
        assert_eq!(histogram.total(), 97);
    }

    #[test]
    fn upper_edge_value_lands_in_last_bucket() {
        let histogram = Histogram::from_values(&[0.0, 0.5, 1.0], 4);
        assert_eq!(histogram.counts[3], 1);
        assert_eq!(histogram.total(), 3);
    }

    #[test]
    fn constant_data_collapses_to_one_bucket() {
        let histogram = Histogram::from_values(&[2.5, 2.5, 2.5], 100);
        assert_eq!(histogram.counts, vec![3]);
        assert_eq!(histogram.edges, vec![2.5, 2.5]);
    }

    #[test]
    fn empty_input_yields_empty_histogram() {
        let histogram = Histogram::from_values(&[], 100);
        assert!(histogram.is_empty());
        assert_eq!(histogram.max_count(), 0);
    }

    #[test]
    fn bars_cover_the_range() {
        let histogram = Histogram::from_values(&[0.0, 1.0, 2.0, 3.0, 4.0], 4);
        let bars: Vec<_> = histogram.iter_bars().collect();

        assert_eq!(bars.len(), 4);
        assert!((bars[0].0 - 0.5).abs() < 1e-12);
        assert!((bars[0].1 - 1.0).abs() < 1e-12);
        assert_eq!(histogram.range(), (0.0, 4.0));
    }
}
