//! Trace a descent run step by step, the way the animation timer would.

use vizmath_descent::BowlSurface;

fn main() {
    let surface = BowlSurface::new();
    let rate = 0.1;

    let mut state = surface.reset();
    println!("step  position              loss");
    println!(
        "{:>4}  ({:>7.4}, {:>7.4})  {:>8.5}",
        state.steps, state.position.0, state.position.1, state.loss()
    );

    while !state.converged && state.steps < 50 {
        state = surface.step(&state, rate);
        println!(
            "{:>4}  ({:>7.4}, {:>7.4})  {:>8.5}",
            state.steps,
            state.position.0,
            state.position.1,
            state.loss()
        );
    }

    println!(
        "\nconverged after {} steps; path holds {} positions",
        state.steps,
        state.path.len()
    );

    // A run from a random start
    let random = surface.descend(&surface.randomize(), rate, 100);
    println!(
        "random start {:?} -> {:?} in {} steps",
        random.path[0], random.position, random.steps
    );
}
