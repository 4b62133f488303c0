/*
 * Herd Simulation - Module Definitions
 *
 * This file defines the module structure for the herd simulation.
 * The simulation core (individual, herd, black hole, vector helpers) has no
 * dependency on the window; the remaining modules make up the nannou host.
 */

// Re-export key components for easier access
pub use app::Model;
pub use black_hole::BlackHole;
pub use camera::Camera;
pub use debug::DebugInfo;
pub use error::ParamsError;
pub use herd::{Herd, TickSummary};
pub use individual::{Individual, Neighbors};
pub use params::{DisplaySettings, HerdParams};
pub use vector::VectorExt;

// Define modules
pub mod app;
pub mod black_hole;
pub mod camera;
pub mod debug;
pub mod error;
pub mod herd;
pub mod individual;
pub mod input;
pub mod params;
pub mod renderer;
pub mod ui;
pub mod vector;

// Constants
pub const INDIVIDUAL_SIZE: f32 = 0.5;
// Used when the host cannot tell how big the screen is
pub const FALLBACK_WORLD_SIZE: f32 = 100.0;
