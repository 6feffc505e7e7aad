//! Summary statistics over per-game samples.

use serde::Serialize;

/// Five-number summary plus mean and standard deviation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stats {
    pub min: f64,
    pub p25: f64,
    pub median: f64,
    pub mean: f64,
    pub p75: f64,
    pub max: f64,
    pub stddev: f64,
}

impl Stats {
    /// `None` when `values` is empty.
    #[must_use]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        #[allow(clippy::cast_precision_loss)]
        let n = sorted.len() as f64;
        let mean = sorted.iter().sum::<f64>() / n;
        let variance = sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

        Some(Self {
            min: sorted[0],
            p25: percentile(&sorted, 0.25),
            median: percentile(&sorted, 0.50),
            mean,
            p75: percentile(&sorted, 0.75),
            max: sorted[sorted.len() - 1],
            stddev: variance.sqrt(),
        })
    }
}

/// Linear interpolation between the two nearest ranks.
fn percentile(sorted: &[f64], p: f64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let rank = p * (sorted.len() - 1) as f64;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let frac = rank - rank.floor();
        sorted[lo] * (1.0 - frac) + sorted[hi] * frac
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_none() {
        assert!(Stats::from_values(&[]).is_none());
    }

    #[test]
    fn single_value_collapses_every_field() {
        let s = Stats::from_values(&[7.0]).unwrap();
        assert_eq!(s.min, 7.0);
        assert_eq!(s.median, 7.0);
        assert_eq!(s.max, 7.0);
        assert_eq!(s.stddev, 0.0);
    }

    #[test]
    fn quartiles_interpolate() {
        let s = Stats::from_values(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(s.min, 1.0);
        assert_eq!(s.p25, 1.75);
        assert_eq!(s.median, 2.5);
        assert_eq!(s.p75, 3.25);
        assert_eq!(s.max, 4.0);
        assert_eq!(s.mean, 2.5);
    }

    #[test]
    fn order_of_input_does_not_matter() {
        let a = Stats::from_values(&[3.0, 1.0, 2.0]).unwrap();
        let b = Stats::from_values(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(a, b);
    }
}
