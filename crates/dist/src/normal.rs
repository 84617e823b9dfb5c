//! The normal (Gaussian) family.

use crate::error::DistError;
use crate::math::erf;
use crate::source::UniformSource;
use std::f64::consts::PI;

/// A normal distribution N(μ, σ²).
///
/// # Example
///
/// ```rust
/// use vizmath_dist::Normal;
///
/// let standard = Normal::standard();
/// // pdf peaks at the mean: 1/√(2π) ≈ 0.3989
/// assert!((standard.pdf(0.0) - 0.3989422804).abs() < 1e-6);
/// // cdf at the mean is one half
/// assert!((standard.cdf(0.0) - 0.5).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Normal {
    /// Mean (μ)
    pub mean: f64,
    /// Standard deviation (σ)
    pub std_dev: f64,
}

impl Normal {
    /// Create N(mean, std_dev²).
    ///
    /// # Errors
    ///
    /// Returns an error if `std_dev` is not strictly positive.
    pub fn new(mean: f64, std_dev: f64) -> Result<Self, DistError> {
        if std_dev <= 0.0 {
            return Err(DistError::InvalidParameter {
                name: "std_dev".to_string(),
                reason: "standard deviation must be positive".to_string(),
            });
        }
        Ok(Self { mean, std_dev })
    }

    /// The standard normal N(0, 1).
    pub fn standard() -> Self {
        Self {
            mean: 0.0,
            std_dev: 1.0,
        }
    }

    /// The variance σ².
    pub fn variance(&self) -> f64 {
        self.std_dev * self.std_dev
    }

    /// Probability density at x.
    ///
    /// pdf(x) = (1/√(2πσ²)) exp(-(x-μ)²/(2σ²))
    pub fn pdf(&self, x: f64) -> f64 {
        let z = (x - self.mean) / self.std_dev;
        let normalization = 1.0 / (self.std_dev * (2.0 * PI).sqrt());
        normalization * (-0.5 * z * z).exp()
    }

    /// Cumulative probability P(X ≤ x), via the error-function approximation.
    ///
    /// CDF(x) = 0.5 * (1 + erf((x-μ)/(σ√2)))
    pub fn cdf(&self, x: f64) -> f64 {
        let z = (x - self.mean) / (self.std_dev * 2.0_f64.sqrt());
        (0.5 * (1.0 + erf(z))).clamp(0.0, 1.0)
    }

    /// Draw one value using the Box–Muller transform.
    pub fn sample(&self, source: &UniformSource) -> f64 {
        let u1 = source.next_f64().max(1e-10); // Avoid log(0)
        let u2 = source.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
        self.mean + self.std_dev * z
    }
}
