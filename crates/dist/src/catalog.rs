//! The distribution catalog: family metadata and enum dispatch.
//!
//! Families are a closed set, so dispatch is a tagged enum rather than a
//! lookup keyed by name. The descriptor tables are the immutable metadata
//! the control layer reads to build its sliders: bounds, defaults, step
//! sizes, and a display domain per family.
//!
//! # Example
//!
//! ```rust
//! use vizmath_dist::{Family, UniformSource};
//!
//! let spec = Family::Normal.descriptor();
//! assert_eq!(spec.params.len(), 2);
//!
//! // Build from slider values, then evaluate and sample uniformly.
//! let dist = Family::Normal.from_params(0.0, 1.0).unwrap();
//! let source = UniformSource::new();
//! let density = dist.pdf(0.0);
//! let draws = dist.sample_many(&source, 100);
//! assert_eq!(draws.len(), 100);
//! assert!(density > 0.0);
//! ```

use serde::Serialize;

use crate::binomial::Binomial;
use crate::error::DistError;
use crate::exponential::Exponential;
use crate::normal::Normal;
use crate::poisson::Poisson;
use crate::source::UniformSource;
use crate::uniform::Uniform;

/// Slider metadata for a single distribution parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParamSpec {
    /// Parameter name as displayed
    pub name: &'static str,
    /// Smallest allowed value
    pub min: f64,
    /// Largest allowed value
    pub max: f64,
    /// Initial value
    pub default: f64,
    /// Slider increment
    pub step: f64,
}

/// Immutable catalog entry for one distribution family.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FamilyDescriptor {
    /// Family name as displayed
    pub name: &'static str,
    /// Up to two parameters, in slider order
    pub params: &'static [ParamSpec],
    /// Finite display domain [min, max] for curves and histograms
    pub domain: (f64, f64),
    /// One-line description
    pub description: &'static str,
}

static NORMAL_PARAMS: [ParamSpec; 2] = [
    ParamSpec {
        name: "mean",
        min: -5.0,
        max: 5.0,
        default: 0.0,
        step: 0.1,
    },
    ParamSpec {
        name: "std dev",
        min: 0.1,
        max: 3.0,
        default: 1.0,
        step: 0.1,
    },
];

static BINOMIAL_PARAMS: [ParamSpec; 2] = [
    ParamSpec {
        name: "trials",
        min: 1.0,
        max: 50.0,
        default: 10.0,
        step: 1.0,
    },
    ParamSpec {
        name: "p",
        min: 0.0,
        max: 1.0,
        default: 0.5,
        step: 0.01,
    },
];

static POISSON_PARAMS: [ParamSpec; 1] = [ParamSpec {
    name: "lambda",
    min: 0.1,
    max: 20.0,
    default: 4.0,
    step: 0.1,
}];

static EXPONENTIAL_PARAMS: [ParamSpec; 1] = [ParamSpec {
    name: "rate",
    min: 0.1,
    max: 5.0,
    default: 1.0,
    step: 0.1,
}];

static UNIFORM_PARAMS: [ParamSpec; 2] = [
    ParamSpec {
        name: "a",
        min: -10.0,
        max: 10.0,
        default: 0.0,
        step: 0.1,
    },
    ParamSpec {
        name: "b",
        min: -10.0,
        max: 10.0,
        default: 1.0,
        step: 0.1,
    },
];

static NORMAL_DESCRIPTOR: FamilyDescriptor = FamilyDescriptor {
    name: "Normal",
    params: &NORMAL_PARAMS,
    domain: (-10.0, 10.0),
    description: "Bell curve centered on the mean; spread set by the standard deviation",
};

static BINOMIAL_DESCRIPTOR: FamilyDescriptor = FamilyDescriptor {
    name: "Binomial",
    params: &BINOMIAL_PARAMS,
    domain: (0.0, 50.0),
    description: "Number of successes in n independent yes/no trials",
};

static POISSON_DESCRIPTOR: FamilyDescriptor = FamilyDescriptor {
    name: "Poisson",
    params: &POISSON_PARAMS,
    domain: (0.0, 30.0),
    description: "Event counts over a fixed interval at average rate lambda",
};

static EXPONENTIAL_DESCRIPTOR: FamilyDescriptor = FamilyDescriptor {
    name: "Exponential",
    params: &EXPONENTIAL_PARAMS,
    domain: (0.0, 10.0),
    description: "Waiting time between events of a Poisson process",
};

static UNIFORM_DESCRIPTOR: FamilyDescriptor = FamilyDescriptor {
    name: "Uniform",
    params: &UNIFORM_PARAMS,
    domain: (-10.0, 10.0),
    description: "Equal density everywhere on the interval [a, b]",
};

/// The five distribution families in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Family {
    Normal,
    Binomial,
    Poisson,
    Exponential,
    Uniform,
}

impl Family {
    /// Every family, in display order.
    pub const ALL: [Family; 5] = [
        Family::Normal,
        Family::Binomial,
        Family::Poisson,
        Family::Exponential,
        Family::Uniform,
    ];

    /// The catalog entry for this family.
    pub fn descriptor(&self) -> &'static FamilyDescriptor {
        match self {
            Family::Normal => &NORMAL_DESCRIPTOR,
            Family::Binomial => &BINOMIAL_DESCRIPTOR,
            Family::Poisson => &POISSON_DESCRIPTOR,
            Family::Exponential => &EXPONENTIAL_DESCRIPTOR,
            Family::Uniform => &UNIFORM_DESCRIPTOR,
        }
    }

    /// Build a distribution from slider values.
    ///
    /// One-parameter families ignore `p2`. The binomial trial count is
    /// rounded to the nearest integer before validation.
    ///
    /// # Errors
    ///
    /// Returns an error when a value violates the family's constraints
    /// (σ > 0, 0 ≤ p ≤ 1, λ > 0, b > a).
    pub fn from_params(&self, p1: f64, p2: f64) -> Result<Distribution, DistError> {
        match self {
            Family::Normal => Ok(Distribution::Normal(Normal::new(p1, p2)?)),
            Family::Binomial => Ok(Distribution::Binomial(Binomial::new(
                p1.round().max(0.0) as u64,
                p2,
            )?)),
            Family::Poisson => Ok(Distribution::Poisson(Poisson::new(p1)?)),
            Family::Exponential => Ok(Distribution::Exponential(Exponential::new(p1)?)),
            Family::Uniform => Ok(Distribution::Uniform(Uniform::new(p1, p2)?)),
        }
    }

    /// Build the distribution at the catalog defaults.
    pub fn default_distribution(&self) -> Distribution {
        match self {
            Family::Normal => Distribution::Normal(Normal::standard()),
            Family::Binomial => Distribution::Binomial(Binomial { n: 10, p: 0.5 }),
            Family::Poisson => Distribution::Poisson(Poisson { lambda: 4.0 }),
            Family::Exponential => Distribution::Exponential(Exponential { rate: 1.0 }),
            Family::Uniform => Distribution::Uniform(Uniform { a: 0.0, b: 1.0 }),
        }
    }
}

/// A parameterized distribution, one variant per family.
///
/// The uniform interface the curve/histogram layer consumes: `pdf`, `cdf`,
/// `sample`, plus closed-form moments for annotation.
#[derive(Debug, Clone, PartialEq)]
pub enum Distribution {
    Normal(Normal),
    Binomial(Binomial),
    Poisson(Poisson),
    Exponential(Exponential),
    Uniform(Uniform),
}

impl Distribution {
    /// Which family this distribution belongs to.
    pub fn family(&self) -> Family {
        match self {
            Distribution::Normal(_) => Family::Normal,
            Distribution::Binomial(_) => Family::Binomial,
            Distribution::Poisson(_) => Family::Poisson,
            Distribution::Exponential(_) => Family::Exponential,
            Distribution::Uniform(_) => Family::Uniform,
        }
    }

    /// Probability density (or mass) at x. Zero outside the support.
    pub fn pdf(&self, x: f64) -> f64 {
        match self {
            Distribution::Normal(d) => d.pdf(x),
            Distribution::Binomial(d) => d.pdf(x),
            Distribution::Poisson(d) => d.pdf(x),
            Distribution::Exponential(d) => d.pdf(x),
            Distribution::Uniform(d) => d.pdf(x),
        }
    }

    /// Cumulative probability P(X ≤ x), bounded in [0, 1].
    pub fn cdf(&self, x: f64) -> f64 {
        match self {
            Distribution::Normal(d) => d.cdf(x),
            Distribution::Binomial(d) => d.cdf(x),
            Distribution::Poisson(d) => d.cdf(x),
            Distribution::Exponential(d) => d.cdf(x),
            Distribution::Uniform(d) => d.cdf(x),
        }
    }

    /// Draw one random value.
    pub fn sample(&self, source: &UniformSource) -> f64 {
        match self {
            Distribution::Normal(d) => d.sample(source),
            Distribution::Binomial(d) => d.sample(source),
            Distribution::Poisson(d) => d.sample(source),
            Distribution::Exponential(d) => d.sample(source),
            Distribution::Uniform(d) => d.sample(source),
        }
    }

    /// Draw a whole sample set, regenerated wholesale on each call.
    pub fn sample_many(&self, source: &UniformSource, count: usize) -> Vec<f64> {
        (0..count).map(|_| self.sample(source)).collect()
    }

    /// Closed-form expected value.
    pub fn mean(&self) -> f64 {
        match self {
            Distribution::Normal(d) => d.mean,
            Distribution::Binomial(d) => d.mean(),
            Distribution::Poisson(d) => d.mean(),
            Distribution::Exponential(d) => d.mean(),
            Distribution::Uniform(d) => d.mean(),
        }
    }

    /// Closed-form variance.
    pub fn variance(&self) -> f64 {
        match self {
            Distribution::Normal(d) => d.variance(),
            Distribution::Binomial(d) => d.variance(),
            Distribution::Poisson(d) => d.variance(),
            Distribution::Exponential(d) => d.variance(),
            Distribution::Uniform(d) => d.variance(),
        }
    }

    /// The family's finite display domain.
    pub fn domain(&self) -> (f64, f64) {
        self.family().descriptor().domain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_param_counts() {
        assert_eq!(Family::Normal.descriptor().params.len(), 2);
        assert_eq!(Family::Binomial.descriptor().params.len(), 2);
        assert_eq!(Family::Poisson.descriptor().params.len(), 1);
        assert_eq!(Family::Exponential.descriptor().params.len(), 1);
        assert_eq!(Family::Uniform.descriptor().params.len(), 2);
    }

    #[test]
    fn test_defaults_within_declared_bounds() {
        for family in Family::ALL {
            for param in family.descriptor().params {
                assert!(
                    param.min <= param.default && param.default <= param.max,
                    "default out of bounds for {} / {}",
                    family.descriptor().name,
                    param.name
                );
                assert!(param.step > 0.0);
            }
        }
    }

    #[test]
    fn test_from_params_matches_defaults() {
        for family in Family::ALL {
            let spec = family.descriptor();
            let p1 = spec.params[0].default;
            let p2 = spec.params.get(1).map(|p| p.default).unwrap_or(0.0);
            let built = family.from_params(p1, p2).unwrap();
            assert_eq!(built, family.default_distribution());
        }
    }

    #[test]
    fn test_from_params_validation() {
        assert!(Family::Normal.from_params(0.0, -1.0).is_err());
        assert!(Family::Binomial.from_params(10.0, 1.5).is_err());
        assert!(Family::Poisson.from_params(-2.0, 0.0).is_err());
        assert!(Family::Exponential.from_params(0.0, 0.0).is_err());
        assert!(Family::Uniform.from_params(3.0, 3.0).is_err());
    }

    #[test]
    fn test_binomial_trial_count_rounds() {
        let d = Family::Binomial.from_params(9.6, 0.5).unwrap();
        assert_eq!(d, Distribution::Binomial(Binomial { n: 10, p: 0.5 }));
    }

    #[test]
    fn test_dispatch_agrees_with_family_impl() {
        let d = Family::Poisson.default_distribution();
        let direct = Poisson { lambda: 4.0 };
        assert_eq!(d.pdf(3.0), direct.pdf(3.0));
        assert_eq!(d.cdf(3.0), direct.cdf(3.0));
        assert_eq!(d.mean(), 4.0);
        assert_eq!(d.variance(), 4.0);
    }

    #[test]
    fn test_sample_many_length_and_domain() {
        let source = UniformSource::with_seed(17);
        for family in Family::ALL {
            let d = family.default_distribution();
            let draws = d.sample_many(&source, 250);
            assert_eq!(draws.len(), 250);
            for x in draws {
                assert!(x.is_finite());
            }
        }
    }
}
