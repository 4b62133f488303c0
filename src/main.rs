/*
 * Herd Simulation
 *
 * A herd of individuals flocks across the screen following three instincts:
 * 1. Separation: Get away from the ones that are too close
 * 2. Alignment: Go where the others nearby are going
 * 3. Cohesion: Stay within the local group
 *
 * A black hole under the pointer pulls the herd in. Clicking or dragging
 * spawns new individuals; others are born at random as time passes.
 * Set RUST_LOG (e.g. RUST_LOG=herd=debug) to see what the herd is doing.
 */

use herd::app::{model, update};

fn main() {
    init_tracing();
    nannou::app(model).update(update).run();
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
