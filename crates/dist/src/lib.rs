//! # Dist — the distribution engine behind the probability playground
//!
//! Five distribution families (normal, binomial, Poisson, exponential,
//! uniform), each exposing density, cumulative probability, and random
//! sampling, plus descriptive statistics over generated sample sets.
//!
//! The engine is the numeric half of an interactive teaching view: a control
//! layer feeds in slider values, this crate hands back the curves, samples,
//! and summary numbers the canvas draws. Everything here is synchronous and
//! total — out-of-support inputs yield 0, never an error or NaN; parameter
//! validation happens once when a distribution is built.
//!
//! ## Example
//!
//! ```rust
//! use vizmath_dist::{Family, Summary, UniformSource};
//!
//! // Build a distribution from slider values.
//! let dist = Family::Normal.from_params(0.0, 1.0).unwrap();
//!
//! // A pdf curve over the display domain.
//! let (lo, hi) = dist.domain();
//! let curve: Vec<(f64, f64)> = (0..=100)
//!     .map(|i| lo + (hi - lo) * i as f64 / 100.0)
//!     .map(|x| (x, dist.pdf(x)))
//!     .collect();
//! assert_eq!(curve.len(), 101);
//!
//! // A sample set and its statistics.
//! let source = UniformSource::new();
//! let samples = dist.sample_many(&source, 1000);
//! let summary = Summary::from_samples(&samples).unwrap();
//! assert!(summary.mean.abs() < 0.2);
//! ```

mod binomial;
mod catalog;
mod error;
mod exponential;
pub mod math;
mod normal;
mod poisson;
mod source;
mod stats;
mod uniform;

pub use binomial::Binomial;
pub use catalog::{Distribution, Family, FamilyDescriptor, ParamSpec};
pub use error::DistError;
pub use exponential::Exponential;
pub use math::{choose, erf, factorial, FACTORIAL_LIMIT};
pub use normal::Normal;
pub use poisson::Poisson;
pub use source::UniformSource;
pub use stats::{histogram, Summary};
