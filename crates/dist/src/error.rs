//! Error types for the distribution engine.

use thiserror::Error;

/// Errors that can occur when building distributions or summarizing samples.
///
/// Everything downstream of a successful construction is a total function:
/// pdf/cdf return 0 outside the support instead of erroring.
#[derive(Debug, Clone, Error)]
pub enum DistError {
    /// A parameter is outside its valid range.
    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Statistics were requested for an empty sample set.
    #[error("Cannot summarize an empty sample set")]
    EmptySampleSet,
}
