//! The bowl surface and its descent transitions.
//!
//! State transitions are pure: `step(state, rate)` returns a fresh state and
//! never touches the old one. The animation timer lives outside this crate —
//! whoever drives the view calls `step` at whatever cadence it likes and
//! stops once `converged` flips.

use std::cell::Cell;

/// Loss below this value counts as having reached the bottom.
pub const CONVERGENCE_THRESHOLD: f64 = 0.01;

/// Where reset places the ball.
pub const START_POSITION: (f64, f64) = (2.0, 2.0);

/// One snapshot of a descent run.
///
/// The path is append-only: every step pushes the new position, and only
/// reset/randomize replace it wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct DescentState {
    /// Current (x, y)
    pub position: (f64, f64),
    /// Every position visited, starting point first
    pub path: Vec<(f64, f64)>,
    /// Steps taken since the last reset
    pub steps: usize,
    /// Whether the loss has dropped below the convergence threshold
    pub converged: bool,
}

impl DescentState {
    fn at(position: (f64, f64)) -> Self {
        Self {
            position,
            path: vec![position],
            steps: 0,
            converged: BowlSurface::loss_at(position) < CONVERGENCE_THRESHOLD,
        }
    }

    /// Height of the surface at the current position.
    pub fn loss(&self) -> f64 {
        BowlSurface::loss_at(self.position)
    }
}

/// The demonstration surface z = x² + y².
///
/// # Example
///
/// ```rust
/// use vizmath_descent::BowlSurface;
///
/// let surface = BowlSurface::new();
/// let mut state = surface.reset();
/// for _ in 0..10 {
///     state = surface.step(&state, 0.1);
/// }
/// assert!(state.loss() < surface.loss(2.0, 2.0));
/// assert_eq!(state.path.len(), 11);
/// ```
#[derive(Debug, Clone)]
pub struct BowlSurface {
    /// Random state for randomize (simple LCG)
    seed: Cell<u64>,
}

impl BowlSurface {
    /// Create a surface with the default randomize seed.
    pub fn new() -> Self {
        Self::with_seed(42)
    }

    /// Create a surface with a specific randomize seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Cell::new(seed),
        }
    }

    fn loss_at((x, y): (f64, f64)) -> f64 {
        x * x + y * y
    }

    /// Height of the surface: x² + y².
    pub fn loss(&self, x: f64, y: f64) -> f64 {
        Self::loss_at((x, y))
    }

    /// Gradient of the surface: exactly (2x, 2y).
    pub fn gradient(&self, x: f64, y: f64) -> (f64, f64) {
        (2.0 * x, 2.0 * y)
    }

    /// One descent transition: p' = p - rate·∇loss(p).
    ///
    /// No bound is placed on the learning rate; a rate past 1 makes the
    /// loss grow without bound, which the caller observes through
    /// [`DescentState::loss`] rather than through an error.
    pub fn step(&self, state: &DescentState, learning_rate: f64) -> DescentState {
        let (x, y) = state.position;
        let (gx, gy) = self.gradient(x, y);
        let position = (x - learning_rate * gx, y - learning_rate * gy);

        let mut path = state.path.clone();
        path.push(position);

        DescentState {
            position,
            path,
            steps: state.steps + 1,
            converged: Self::loss_at(position) < CONVERGENCE_THRESHOLD,
        }
    }

    /// Fresh state at the fixed start position.
    pub fn reset(&self) -> DescentState {
        DescentState::at(START_POSITION)
    }

    /// Fresh state at a random position, x and y uniform on [-4, 4].
    pub fn randomize(&self) -> DescentState {
        let x = (self.next_random() - 0.5) * 8.0;
        let y = (self.next_random() - 0.5) * 8.0;
        DescentState::at((x, y))
    }

    /// Run up to `max_steps` transitions, stopping early on convergence.
    pub fn descend(
        &self,
        state: &DescentState,
        learning_rate: f64,
        max_steps: usize,
    ) -> DescentState {
        let mut current = state.clone();
        for _ in 0..max_steps {
            if current.converged {
                break;
            }
            current = self.step(&current, learning_rate);
        }
        current
    }

    /// Simple random number generator (LCG).
    fn next_random(&self) -> f64 {
        let s = self.seed.get();
        let new_seed = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.seed.set(new_seed);
        (new_seed >> 33) as f64 / (1u64 << 31) as f64
    }
}

impl Default for BowlSurface {
    fn default() -> Self {
        Self::new()
    }
}
