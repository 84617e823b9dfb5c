//! # Lagrange — the multiplier demonstration
//!
//! Closed-form pieces of one constrained problem: minimize f = x² + y² on
//! the line x + y = 2. The learner drags a λ slider until the objective
//! gradient and the scaled constraint gradient line up at the optimum; this
//! crate supplies the gradients, the distance between them, and the banded
//! alignment check the display lights up on.
//!
//! The problem never gets solved generally — the optimum (1, 1) with λ = 2
//! is a constant of the demonstration.
//!
//! ## Example
//!
//! ```rust
//! use vizmath_lagrange::{check_alignment, MULTIPLIER};
//!
//! assert!(check_alignment(MULTIPLIER));
//! assert!(!check_alignment(0.0));
//! ```

mod problem;

pub use problem::{
    alignment_distance, check_alignment, constraint, grad_constraint, grad_objective, lagrangian,
    objective, scaled_constraint_gradient, ALIGNMENT_TOLERANCE, MULTIPLIER, SOLUTION,
};
