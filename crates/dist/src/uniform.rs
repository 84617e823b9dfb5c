//! The continuous uniform family on an interval [a, b].

use crate::error::DistError;
use crate::source::UniformSource;

/// A uniform distribution on [a, b].
#[derive(Debug, Clone, PartialEq)]
pub struct Uniform {
    /// Lower bound (a)
    pub a: f64,
    /// Upper bound (b)
    pub b: f64,
}

impl Uniform {
    /// Create a uniform distribution on [a, b].
    ///
    /// # Errors
    ///
    /// Returns an error unless b > a (a degenerate interval has no density).
    pub fn new(a: f64, b: f64) -> Result<Self, DistError> {
        if b <= a {
            return Err(DistError::InvalidParameter {
                name: "b".to_string(),
                reason: "upper bound must exceed lower bound".to_string(),
            });
        }
        Ok(Self { a, b })
    }

    /// Expected value (a + b)/2.
    pub fn mean(&self) -> f64 {
        (self.a + self.b) / 2.0
    }

    /// Variance (b - a)²/12.
    pub fn variance(&self) -> f64 {
        let width = self.b - self.a;
        width * width / 12.0
    }

    /// Probability density at x: 1/(b-a) on [a, b], else 0.
    pub fn pdf(&self, x: f64) -> f64 {
        if x < self.a || x > self.b {
            return 0.0;
        }
        1.0 / (self.b - self.a)
    }

    /// Cumulative probability P(X ≤ x): a ramp from 0 at a to 1 at b.
    pub fn cdf(&self, x: f64) -> f64 {
        ((x - self.a) / (self.b - self.a)).clamp(0.0, 1.0)
    }

    /// Draw one value: a + U·(b-a).
    pub fn sample(&self, source: &UniformSource) -> f64 {
        self.a + source.next_f64() * (self.b - self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_degenerate_interval() {
        assert!(Uniform::new(1.0, 1.0).is_err());
        assert!(Uniform::new(2.0, 1.0).is_err());
    }

    #[test]
    fn test_pdf_inside_and_outside() {
        let u = Uniform { a: -1.0, b: 3.0 };
        assert_eq!(u.pdf(0.0), 0.25);
        assert_eq!(u.pdf(-1.0), 0.25);
        assert_eq!(u.pdf(3.0), 0.25);
        assert_eq!(u.pdf(-1.1), 0.0);
        assert_eq!(u.pdf(3.1), 0.0);
    }

    #[test]
    fn test_cdf_ramp() {
        let u = Uniform { a: 0.0, b: 2.0 };
        assert_eq!(u.cdf(-1.0), 0.0);
        assert_eq!(u.cdf(1.0), 0.5);
        assert_eq!(u.cdf(5.0), 1.0);
    }

    #[test]
    fn test_samples_stay_in_interval() {
        let u = Uniform { a: -4.0, b: 4.0 };
        let source = UniformSource::with_seed(21);
        for _ in 0..1000 {
            let x = u.sample(&source);
            assert!((-4.0..=4.0).contains(&x));
        }
    }

    #[test]
    fn test_unit_interval_sample_mean() {
        let u = Uniform { a: 0.0, b: 1.0 };
        let source = UniformSource::new();
        let n = 10_000;
        let sum: f64 = (0..n).map(|_| u.sample(&source)).sum();
        assert!((sum / n as f64 - 0.5).abs() < 0.05);
    }
}
