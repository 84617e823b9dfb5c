//! The binomial family: successes in n independent Bernoulli trials.

use crate::error::DistError;
use crate::math::choose;
use crate::source::UniformSource;

/// A binomial distribution B(n, p).
#[derive(Debug, Clone, PartialEq)]
pub struct Binomial {
    /// Number of trials
    pub n: u64,
    /// Success probability per trial
    pub p: f64,
}

impl Binomial {
    /// Create B(n, p).
    ///
    /// # Errors
    ///
    /// Returns an error if n is zero or p is outside [0, 1].
    pub fn new(n: u64, p: f64) -> Result<Self, DistError> {
        if n == 0 {
            return Err(DistError::InvalidParameter {
                name: "n".to_string(),
                reason: "trial count must be at least 1".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&p) {
            return Err(DistError::InvalidParameter {
                name: "p".to_string(),
                reason: "success probability must be in [0, 1]".to_string(),
            });
        }
        Ok(Self { n, p })
    }

    /// Expected value n·p.
    pub fn mean(&self) -> f64 {
        self.n as f64 * self.p
    }

    /// Variance n·p·(1-p).
    pub fn variance(&self) -> f64 {
        self.n as f64 * self.p * (1.0 - self.p)
    }

    /// Probability mass at x.
    ///
    /// pmf(k) = C(n,k) pᵏ (1-p)ⁿ⁻ᵏ; zero for non-integer x and for k
    /// outside 0..=n.
    pub fn pdf(&self, x: f64) -> f64 {
        if x < 0.0 || x > self.n as f64 || x.fract() != 0.0 {
            return 0.0;
        }
        let k = x as u64;
        choose(self.n, k) * self.p.powf(k as f64) * (1.0 - self.p).powf((self.n - k) as f64)
    }

    /// Cumulative probability P(X ≤ x): the pmf summed over k = 0..⌊x⌋.
    pub fn cdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        let top = x.floor().min(self.n as f64) as u64;
        let mut acc = 0.0;
        for k in 0..=top {
            acc += self.pdf(k as f64);
        }
        acc.clamp(0.0, 1.0)
    }

    /// Draw one value: count successes over n Bernoulli trials.
    pub fn sample(&self, source: &UniformSource) -> f64 {
        let mut successes = 0u64;
        for _ in 0..self.n {
            if source.next_f64() < self.p {
                successes += 1;
            }
        }
        successes as f64
    }
}
