/*
 * Camera Module
 *
 * This module defines the Camera struct that maps between world space and
 * screen space. The simulation works in canvas coordinates (origin in the
 * top-left corner, y pointing down) while nannou draws with the origin at
 * the window center and y pointing up.
 */

use nannou::prelude::*;

#[derive(Clone, Copy, Debug, Default)]
pub struct Camera;

impl Camera {
    pub fn new() -> Self {
        Self
    }

    // Convert a point from world space to screen space
    pub fn world_to_screen(&self, point: Vec2, window_rect: Rect) -> Vec2 {
        vec2(window_rect.left() + point.x, window_rect.top() - point.y)
    }

    // Convert a point from screen space to world space
    pub fn screen_to_world(&self, point: Vec2, window_rect: Rect) -> Vec2 {
        vec2(point.x - window_rect.left(), window_rect.top() - point.y)
    }
}
