/*
 * Black Hole Module
 *
 * The black hole draws the herd in. It sits wherever the host puts it
 * (usually under the pointer) and pulls harder on individuals that are close.
 */

use nannou::prelude::*;

use crate::camera::Camera;

// Pull strength is STRENGTH / (SOFTENING + distance)
pub const BLACK_HOLE_STRENGTH: f32 = 50.0;
pub const BLACK_HOLE_SOFTENING: f32 = 15.0;
pub const BLACK_HOLE_SIZE: f32 = 20.0;

#[derive(Clone, Debug)]
pub struct BlackHole {
    pub position: Vec2,
    pub size: f32,
}

impl BlackHole {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            size: BLACK_HOLE_SIZE,
        }
    }

    // Calculate the force to apply according to the position of an object
    pub fn force(&self, point: Vec2) -> f32 {
        BLACK_HOLE_STRENGTH / (BLACK_HOLE_SOFTENING + self.position.distance(point))
    }

    // Draw the black hole as a faint disc
    pub fn draw(&self, draw: &Draw, camera: &Camera, window_rect: Rect) {
        let screen_pos = camera.world_to_screen(self.position, window_rect);

        draw.ellipse()
            .xy(screen_pos)
            .w_h(self.size, self.size)
            .color(rgba8(255, 255, 255, 5))
            .stroke(WHITE)
            .stroke_weight(1.0);
    }
}
