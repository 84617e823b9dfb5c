//! # Descent — gradient descent on the bowl surface
//!
//! The demonstration surface z = x² + y² with its closed-form gradient
//! (2x, 2y), stepped by an externally driven timer. Each call to
//! [`BowlSurface::step`] is one pure transition: position moves against the
//! gradient, the visited path grows by one, and convergence is re-checked
//! against a fixed loss threshold.
//!
//! ## Example
//!
//! ```rust
//! use vizmath_descent::{BowlSurface, CONVERGENCE_THRESHOLD};
//!
//! let surface = BowlSurface::new();
//! let state = surface.descend(&surface.reset(), 0.1, 100);
//! assert!(state.converged);
//! assert!(state.loss() < CONVERGENCE_THRESHOLD);
//! ```

mod surface;

pub use surface::{BowlSurface, DescentState, CONVERGENCE_THRESHOLD, START_POSITION};
