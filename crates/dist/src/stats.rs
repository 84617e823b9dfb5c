//! Descriptive statistics over generated sample sets.
//!
//! Statistics are recomputed on demand from the current sample set; nothing
//! is cached across regenerations.

use crate::error::DistError;

/// Descriptive statistics for one sample set.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Number of samples
    pub count: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Population variance
    pub variance: f64,
    /// Population standard deviation
    pub std_dev: f64,
    /// Midpoint of the sorted samples
    pub median: f64,
    /// Smallest sample
    pub min: f64,
    /// Largest sample
    pub max: f64,
}

impl Summary {
    /// Summarize a sample set.
    ///
    /// Variance is the population form (divide by n, not n-1); the median
    /// averages the two middle elements for even-length sets.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty sample set.
    pub fn from_samples(samples: &[f64]) -> Result<Self, DistError> {
        if samples.is_empty() {
            return Err(DistError::EmptySampleSet);
        }

        let count = samples.len();
        let mean = samples.iter().sum::<f64>() / count as f64;
        let variance = samples
            .iter()
            .map(|x| {
                let diff = x - mean;
                diff * diff
            })
            .sum::<f64>()
            / count as f64;

        let mut sorted = samples.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).expect("samples must not contain NaN"));
        let median = if count % 2 == 1 {
            sorted[count / 2]
        } else {
            (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
        };

        Ok(Self {
            count,
            mean,
            variance,
            std_dev: variance.sqrt(),
            median,
            min: sorted[0],
            max: sorted[count - 1],
        })
    }
}

/// Bin a sample set over a fixed range for histogram display.
///
/// Returns `bins` counts; samples outside the range are dropped, and the
/// upper edge lands in the last bin.
pub fn histogram(samples: &[f64], range: (f64, f64), bins: usize) -> Vec<usize> {
    assert!(bins > 0, "histogram needs at least one bin");
    let (lo, hi) = range;
    assert!(hi > lo, "histogram range must be non-empty");

    let width = (hi - lo) / bins as f64;
    let mut counts = vec![0usize; bins];
    for &x in samples {
        if x < lo || x > hi {
            continue;
        }
        let index = (((x - lo) / width) as usize).min(bins - 1);
        counts[index] += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sample_set() {
        assert!(matches!(
            Summary::from_samples(&[]),
            Err(DistError::EmptySampleSet)
        ));
    }

    #[test]
    fn test_single_sample() {
        let s = Summary::from_samples(&[3.0]).unwrap();
        assert_eq!(s.count, 1);
        assert_eq!(s.mean, 3.0);
        assert_eq!(s.variance, 0.0);
        assert_eq!(s.median, 3.0);
        assert_eq!(s.min, 3.0);
        assert_eq!(s.max, 3.0);
    }

    #[test]
    fn test_known_summary() {
        let s = Summary::from_samples(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert!((s.mean - 5.0).abs() < 1e-12);
        // Population variance of this classic set is exactly 4
        assert!((s.variance - 4.0).abs() < 1e-12);
        assert!((s.std_dev - 2.0).abs() < 1e-12);
        assert_eq!(s.min, 2.0);
        assert_eq!(s.max, 9.0);
        // Even length: midpoint averages 4 and 5
        assert!((s.median - 4.5).abs() < 1e-12);
    }

    #[test]
    fn test_median_odd_length() {
        let s = Summary::from_samples(&[9.0, 1.0, 5.0]).unwrap();
        assert_eq!(s.median, 5.0);
    }

    #[test]
    fn test_summary_ignores_input_order() {
        let a = Summary::from_samples(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        let b = Summary::from_samples(&[4.0, 2.0, 1.0, 3.0]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_histogram_counts() {
        let samples = [0.1, 0.2, 0.6, 0.7, 0.8, 1.0];
        let counts = histogram(&samples, (0.0, 1.0), 2);
        // Upper edge 1.0 lands in the last bin
        assert_eq!(counts, vec![2, 4]);
    }

    #[test]
    fn test_histogram_drops_out_of_range() {
        let samples = [-1.0, 0.5, 2.0];
        let counts = histogram(&samples, (0.0, 1.0), 4);
        assert_eq!(counts.iter().sum::<usize>(), 1);
    }
}
