//! The exponential family: waiting times between Poisson events.

use crate::error::DistError;
use crate::source::UniformSource;

/// An exponential distribution with rate λ.
#[derive(Debug, Clone, PartialEq)]
pub struct Exponential {
    /// Rate (λ), the reciprocal of the mean waiting time
    pub rate: f64,
}

impl Exponential {
    /// Create an exponential distribution with the given rate.
    ///
    /// # Errors
    ///
    /// Returns an error if the rate is not strictly positive.
    pub fn new(rate: f64) -> Result<Self, DistError> {
        if rate <= 0.0 {
            return Err(DistError::InvalidParameter {
                name: "rate".to_string(),
                reason: "rate must be positive".to_string(),
            });
        }
        Ok(Self { rate })
    }

    /// Expected value 1/λ.
    pub fn mean(&self) -> f64 {
        1.0 / self.rate
    }

    /// Variance 1/λ².
    pub fn variance(&self) -> f64 {
        1.0 / (self.rate * self.rate)
    }

    /// Probability density at x: λe^{-λx} for x ≥ 0, else 0.
    pub fn pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        self.rate * (-self.rate * x).exp()
    }

    /// Cumulative probability P(X ≤ x) = 1 - e^{-λx} for x ≥ 0, else 0.
    pub fn cdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        1.0 - (-self.rate * x).exp()
    }

    /// Draw one value by inverting the CDF: -ln(U)/λ.
    pub fn sample(&self, source: &UniformSource) -> f64 {
        let u = source.next_f64().max(1e-10); // Avoid log(0)
        -u.ln() / self.rate
    }
}
