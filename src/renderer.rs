/*
 * Renderer Module
 *
 * This module handles the rendering of the herd simulation.
 * Each frame is painted over the previous one with a translucent black veil,
 * which leaves short fading trails behind the individuals. On top of that it
 * draws the instinct legend, the herd and optionally the black hole.
 */

use nannou::prelude::*;
use tracing::error;

use crate::app::Model;

const LEGEND: [&str; 3] = [
    "Separation instinct",
    "Alignment instinct",
    "Cohesion instinct",
];
const LEGEND_X: f32 = 50.0;
const LEGEND_SPACING: f32 = 50.0;
const LEGEND_FONT_SIZE: u32 = 16;
const LEGEND_WIDTH: f32 = 400.0;

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let window_rect = app.window_rect();

    // Start from black, then only fade what is already there
    if frame.nth() == 0 {
        draw.background().color(BLACK);
    }
    draw.rect()
        .xy(window_rect.xy())
        .wh(window_rect.wh())
        .color(rgba8(0, 0, 0, 0x44));

    draw_legend(&draw, model, window_rect);

    if model.display.show_black_hole {
        model.herd.black_hole().draw(&draw, &model.camera, window_rect);
    }

    model.herd.draw(&draw, &model.camera, window_rect);

    // Finish drawing
    if let Err(err) = draw.to_frame(app, &frame) {
        error!(?err, "failed to draw the herd");
    }

    // Draw the egui UI
    if let Err(err) = model.egui.draw_to_frame(&frame) {
        error!(?err, "failed to draw the control panel");
    }
}

// Static text in the top-left corner, one line per instinct
fn draw_legend(draw: &Draw, model: &Model, window_rect: Rect) {
    for (i, line) in LEGEND.iter().enumerate() {
        let anchor = vec2(LEGEND_X, (i + 1) as f32 * LEGEND_SPACING);
        let screen_pos = model.camera.world_to_screen(anchor, window_rect);

        // nannou centers text on its box, so shift it right by half the width
        draw.text(line)
            .x_y(screen_pos.x + LEGEND_WIDTH / 2.0, screen_pos.y)
            .w(LEGEND_WIDTH)
            .left_justify()
            .color(WHITE)
            .font_size(LEGEND_FONT_SIZE);
    }
}
