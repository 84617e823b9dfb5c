//! The one fixed constrained-optimization problem.
//!
//! Minimize f(x, y) = x² + y² subject to g(x, y) = x + y - 2 = 0. The
//! optimum (1, 1) and its multiplier λ = 2 are hard-coded constants of this
//! demonstration; none of the formulas below generalize to other f/g pairs.

/// The constrained optimum of this problem.
pub const SOLUTION: (f64, f64) = (1.0, 1.0);

/// The true multiplier: ∇f(SOLUTION) = MULTIPLIER · ∇g(SOLUTION).
pub const MULTIPLIER: f64 = 2.0;

/// How far apart ∇f and λ∇g may sit while still counting as aligned.
pub const ALIGNMENT_TOLERANCE: f64 = 0.5;

/// Objective f(x, y) = x² + y².
pub fn objective(x: f64, y: f64) -> f64 {
    x * x + y * y
}

/// Constraint g(x, y) = x + y - 2; the feasible line is g = 0.
pub fn constraint(x: f64, y: f64) -> f64 {
    x + y - 2.0
}

/// Objective gradient ∇f = (2x, 2y).
pub fn grad_objective(x: f64, y: f64) -> (f64, f64) {
    (2.0 * x, 2.0 * y)
}

/// Constraint gradient ∇g = (1, 1), constant everywhere.
pub fn grad_constraint(_x: f64, _y: f64) -> (f64, f64) {
    (1.0, 1.0)
}

/// The λ∇g arrow drawn against ∇f.
pub fn scaled_constraint_gradient(lambda: f64) -> (f64, f64) {
    let (gx, gy) = grad_constraint(SOLUTION.0, SOLUTION.1);
    (lambda * gx, lambda * gy)
}

/// Euclidean distance between ∇f at the optimum and λ∇g.
///
/// Zero exactly at λ = MULTIPLIER; grows linearly as λ moves away.
pub fn alignment_distance(lambda: f64) -> f64 {
    let (fx, fy) = grad_objective(SOLUTION.0, SOLUTION.1);
    let (gx, gy) = scaled_constraint_gradient(lambda);
    let dx = fx - gx;
    let dy = fy - gy;
    (dx * dx + dy * dy).sqrt()
}

/// Whether the slider's λ puts the two gradients within tolerance.
///
/// A banded check, not exact equality — the display uses it to light up
/// when the learner gets close.
pub fn check_alignment(lambda: f64) -> bool {
    alignment_distance(lambda) < ALIGNMENT_TOLERANCE
}

/// The Lagrangian L(x, y, λ) = f(x, y) - λ·g(x, y).
pub fn lagrangian(x: f64, y: f64, lambda: f64) -> f64 {
    objective(x, y) - lambda * constraint(x, y)
}
