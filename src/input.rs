/*
 * Input Module
 *
 * This module handles user input events for the herd simulation.
 *
 * Features:
 * - The pointer position drives the black hole
 * - Releasing or dragging the left button spawns an individual at the pointer
 * - Resizing the window moves the wrap-around edges
 * - Raw events are forwarded to the UI
 */

use nannou::prelude::*;
use nannou::winit::event::{MouseButton, WindowEvent};
use tracing::trace;

use crate::app::Model;

// Mouse moved event handler
pub fn mouse_moved(app: &App, model: &mut Model, pos: Point2) {
    model.mouse_position = model.camera.screen_to_world(pos, app.window_rect());

    // Dragging leaves a trail of newborns
    if app.mouse.buttons.left().is_down() {
        spawn_at_pointer(model);
    }
}

// Mouse released event handler
pub fn mouse_released(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        spawn_at_pointer(model);
    }
}

// Window resized event handler
pub fn resized(_app: &App, model: &mut Model, size: Vec2) {
    model.herd.set_bounds(size);
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &WindowEvent) {
    model.egui.handle_raw_event(event);
}

fn spawn_at_pointer(model: &mut Model) {
    // Clicks on the control panel belong to the panel
    if model.egui.ctx().is_pointer_over_area() {
        return;
    }

    let position = model.mouse_position;
    model.herd.spawn_at(position.x, position.y);
    trace!(x = position.x, y = position.y, population = model.herd.len(), "spawned at pointer");
}
