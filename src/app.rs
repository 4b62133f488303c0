/*
 * Application Module
 *
 * This module defines the main application model and logic for the herd
 * simulation. It handles the initialization and per-frame update; drawing
 * lives in the renderer module and event handlers in the input module.
 *
 * The simulation runs one herd tick per displayed frame, so its pace follows
 * the display rate rather than wall-clock time.
 */

use nannou::prelude::*;
use nannou_egui::Egui;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use crate::black_hole::BlackHole;
use crate::camera::Camera;
use crate::debug::DebugInfo;
use crate::herd::Herd;
use crate::input::{mouse_moved, mouse_released, raw_window_event, resized};
use crate::params::{DisplaySettings, HerdParams};
use crate::renderer::view;
use crate::ui;
use crate::FALLBACK_WORLD_SIZE;

// Main model for the application
pub struct Model {
    pub herd: Herd,
    pub params: HerdParams,
    pub display: DisplaySettings,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub camera: Camera,
    // Pointer position in world space
    pub mouse_position: Vec2,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let world_size = world_size(app);

    // Create the main window with dynamic size
    let window_id = app
        .new_window()
        .title("Herd")
        .size(world_size.x as u32, world_size.y as u32)
        .view(view)
        .mouse_moved(mouse_moved)
        .mouse_released(mouse_released)
        .resized(resized)
        .raw_event(raw_window_event)
        .build()
        .expect("failed to build the main window");

    // Get the window
    let window = app.window(window_id).expect("main window vanished after creation");

    // Create the UI
    let egui = Egui::from_window(&window);

    // Create the herd, born anywhere on the initial canvas and drawn to its center
    let params = HerdParams::default();
    let black_hole = BlackHole::new(world_size / 2.0);
    let mut herd = match Herd::with_params(
        params.clone(),
        world_size,
        world_size,
        black_hole.clone(),
        StdRng::from_entropy(),
    ) {
        Ok(herd) => herd,
        Err(err) => {
            warn!(%err, "invalid herd parameters, falling back to defaults");
            Herd::new(world_size, world_size, black_hole, StdRng::from_entropy())
        }
    };
    herd.populate(params.initial_population);

    info!(
        width = world_size.x,
        height = world_size.y,
        population = herd.len(),
        "herd simulation ready"
    );

    Model {
        herd,
        params,
        display: DisplaySettings::default(),
        egui,
        debug_info: DebugInfo::default(),
        camera: Camera::new(),
        mouse_position: world_size / 2.0,
    }
}

// Window size as 80% of the primary monitor
fn world_size(app: &App) -> Vec2 {
    match app.primary_monitor() {
        Some(monitor) => {
            let monitor_size = monitor.size();
            vec2(monitor_size.width as f32 * 0.8, monitor_size.height as f32 * 0.8)
        }
        None => {
            warn!("no primary monitor reported, using the fallback world size");
            vec2(FALLBACK_WORLD_SIZE, FALLBACK_WORLD_SIZE)
        }
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    // Update debug info
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    // Update UI and push lifecycle changes to the herd
    let params_changed = ui::update_ui(
        &mut model.egui,
        &mut model.params,
        &mut model.display,
        &model.debug_info,
    );
    if params_changed {
        if let Err(err) = model.herd.set_params(model.params.clone()) {
            warn!(%err, "rejected herd parameters");
            model.params = model.herd.params().clone();
        }
    }

    // The black hole follows the pointer
    model.herd.attract_to(model.mouse_position);

    if !model.display.pause_simulation {
        let summary = model.herd.tick();
        model.debug_info.record(summary, model.herd.len());
    } else {
        model.debug_info.population = model.herd.len();
    }
}
