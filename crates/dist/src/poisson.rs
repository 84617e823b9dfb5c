//! The Poisson family: event counts at a fixed average rate.

use crate::error::DistError;
use crate::math::factorial;
use crate::source::UniformSource;

/// A Poisson distribution with rate λ.
#[derive(Debug, Clone, PartialEq)]
pub struct Poisson {
    /// Average number of events (λ)
    pub lambda: f64,
}

impl Poisson {
    /// Create a Poisson distribution with rate λ.
    ///
    /// # Errors
    ///
    /// Returns an error if λ is not strictly positive.
    pub fn new(lambda: f64) -> Result<Self, DistError> {
        if lambda <= 0.0 {
            return Err(DistError::InvalidParameter {
                name: "lambda".to_string(),
                reason: "rate must be positive".to_string(),
            });
        }
        Ok(Self { lambda })
    }

    /// Expected value λ.
    pub fn mean(&self) -> f64 {
        self.lambda
    }

    /// Variance λ.
    pub fn variance(&self) -> f64 {
        self.lambda
    }

    /// Probability mass at x.
    ///
    /// pmf(k) = λᵏ e^{-λ} / k!; zero for negative or non-integer x, and
    /// zero past the factorial overflow sentinel (k > 20).
    pub fn pdf(&self, x: f64) -> f64 {
        if x < 0.0 || x.fract() != 0.0 {
            return 0.0;
        }
        let k = x as u64;
        self.lambda.powf(k as f64) * (-self.lambda).exp() / factorial(k)
    }

    /// Cumulative probability P(X ≤ x): the pmf summed over k = 0..⌊x⌋.
    pub fn cdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        let top = x.floor() as u64;
        let mut acc = 0.0;
        for k in 0..=top {
            acc += self.pdf(k as f64);
        }
        acc.clamp(0.0, 1.0)
    }

    /// Draw one value using Knuth's algorithm: multiply uniforms until the
    /// product falls below e^{-λ}.
    pub fn sample(&self, source: &UniformSource) -> f64 {
        let limit = (-self.lambda).exp();
        let mut k = 0u64;
        let mut product = 1.0;
        loop {
            k += 1;
            product *= source.next_f64();
            if product <= limit {
                break;
            }
        }
        (k - 1) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_nonpositive_rate() {
        assert!(Poisson::new(0.0).is_err());
        assert!(Poisson::new(-2.0).is_err());
    }

    #[test]
    fn test_pmf_known_value() {
        // Poisson(2.5): pmf(3) = 2.5³ e^{-2.5} / 6
        let p = Poisson { lambda: 2.5 };
        assert!((p.pdf(3.0) - 0.2137630172).abs() < 1e-9);
    }

    #[test]
    fn test_pmf_outside_support() {
        let p = Poisson { lambda: 2.5 };
        assert_eq!(p.pdf(-1.0), 0.0);
        assert_eq!(p.pdf(1.5), 0.0);
    }

    #[test]
    fn test_cdf_known_value() {
        let p = Poisson { lambda: 2.5 };
        assert!((p.cdf(3.0) - 0.7575761331).abs() < 1e-9);
        // CDF approaches 1 well inside the display range
        assert!(p.cdf(20.0) > 1.0 - 1e-9);
    }

    #[test]
    fn test_cdf_monotone() {
        let p = Poisson { lambda: 4.0 };
        let mut last = 0.0;
        for k in 0..=20 {
            let c = p.cdf(k as f64);
            assert!(c >= last);
            last = c;
        }
    }

    #[test]
    fn test_sample_mean_close_to_lambda() {
        let p = Poisson { lambda: 4.0 };
        let source = UniformSource::with_seed(5);
        let n = 5_000;
        let sum: f64 = (0..n).map(|_| p.sample(&source)).sum();
        assert!((sum / n as f64 - 4.0).abs() < 0.15);
    }
}
