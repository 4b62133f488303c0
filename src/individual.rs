/*
 * Individual Module
 *
 * This module defines the Individual struct and its behavior.
 * Each individual follows three instincts, each weighted by its own bias:
 * 1. Separation: Get away from the ones that are too close
 * 2. Alignment: Go where the others nearby are going
 * 3. Cohesion: Stay within the local group
 * On top of that every individual is pulled towards the black hole.
 */

use std::f32::consts::TAU;

use nannou::prelude::*;
use rand::Rng;

use crate::black_hole::BlackHole;
use crate::camera::Camera;
use crate::vector::VectorExt;
use crate::INDIVIDUAL_SIZE;

pub const MAX_SPEED: f32 = 4.0;
pub const MAX_STEERING_FORCE: f32 = 0.2;
pub const SEPARATION_RADIUS: f32 = 40.0;
pub const ALIGNMENT_RADIUS: f32 = 40.0;
pub const COHESION_RADIUS: f32 = 150.0;
// Separation divides by the squared distance, closer neighbors count as this far
pub const MIN_SEPARATION_DISTANCE: f32 = 0.01;
// Bias in [0, 2) maps onto a 0..240 color channel
pub const BIAS_COLOR_SCALE: f32 = 120.0;

#[derive(Clone, Debug)]
pub struct Individual {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub max_speed: f32,
    pub separation_bias: f32,
    pub alignment_bias: f32,
    pub cohesion_bias: f32,
}

// Everyone in the herd except one individual, in collection order
#[derive(Clone, Copy, Debug)]
pub struct Neighbors<'a> {
    before: &'a [Individual],
    after: &'a [Individual],
}

impl<'a> Neighbors<'a> {
    // Treat a whole slice as neighbors (the individual is not part of it)
    pub fn from_slice(individuals: &'a [Individual]) -> Self {
        Self {
            before: individuals,
            after: &[],
        }
    }

    // Borrow the individual at `index` mutably and everyone else shared
    pub fn split(
        individuals: &'a mut [Individual],
        index: usize,
    ) -> Option<(&'a mut Individual, Neighbors<'a>)> {
        if index >= individuals.len() {
            return None;
        }
        let (before, rest) = individuals.split_at_mut(index);
        let (current, after) = rest.split_first_mut()?;
        let before: &'a [Individual] = before;
        let after: &'a [Individual] = after;
        Some((current, Neighbors { before, after }))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Individual> + 'a {
        self.before.iter().chain(self.after.iter())
    }

    pub fn len(&self) -> usize {
        self.before.len() + self.after.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Individual {
    pub fn new<R: Rng + ?Sized>(x: f32, y: f32, rng: &mut R) -> Self {
        // Random heading with a modest initial speed
        let angle = rng.gen_range(0.0..TAU);
        let speed = rng.gen_range(1.0..2.0);
        let velocity = vec2(angle.cos(), angle.sin()) * speed;

        Self {
            position: vec2(x, y),
            velocity,
            acceleration: Vec2::ZERO,
            max_speed: MAX_SPEED,
            separation_bias: rng.gen_range(1.5..2.0),
            alignment_bias: rng.gen_range(1.0..2.0),
            cohesion_bias: rng.gen_range(0.0..2.0),
        }
    }

    // Color channels on a 0..255 scale, one per instinct
    pub fn color(&self) -> [f32; 3] {
        [
            self.separation_bias * BIAS_COLOR_SCALE,
            self.alignment_bias * BIAS_COLOR_SCALE,
            self.cohesion_bias * BIAS_COLOR_SCALE,
        ]
    }

    // Move forward in time by one step
    pub fn tick(&mut self, neighbors: &Neighbors, black_hole: &BlackHole, bounds: Vec2) {
        let force = self.look_around(neighbors, black_hole);
        self.apply_force(force);
        self.update();
        self.wrap_edges(bounds);
    }

    // Gather information about the surroundings into a single force
    pub fn look_around(&self, neighbors: &Neighbors, black_hole: &BlackHole) -> Vec2 {
        let separation = self.separation(neighbors) * self.separation_bias;
        let alignment = self.alignment(neighbors) * self.alignment_bias;
        let cohesion = self.cohesion(neighbors) * self.cohesion_bias;
        let attraction = self.steer(black_hole.position) * black_hole.force(self.position);

        separation + alignment + cohesion + attraction
    }

    pub fn apply_force(&mut self, force: Vec2) {
        self.acceleration += force;
    }

    // Euler step: position first, then velocity, then clear the accumulator
    pub fn update(&mut self) {
        self.position += self.velocity;
        self.velocity += self.acceleration;
        self.acceleration = Vec2::ZERO;
    }

    // Teleport to the far extreme when leaving the world
    pub fn wrap_edges(&mut self, bounds: Vec2) {
        if self.position.x < 0.0 {
            self.position.x = bounds.x;
        }
        if self.position.y < 0.0 {
            self.position.y = bounds.y;
        }
        if self.position.y > bounds.y {
            self.position.y = 0.0;
        }
        if self.position.x > bounds.x {
            self.position.x = 0.0;
        }
    }

    // Calculate separation force (get away from crowding neighbors)
    pub fn separation(&self, neighbors: &Neighbors) -> Vec2 {
        let mut steering = Vec2::ZERO;
        let mut count = 0;

        for other in neighbors.iter() {
            let d = self.position.distance(other.position);
            if d < SEPARATION_RADIUS {
                let d = d.max(MIN_SEPARATION_DISTANCE);
                steering += (self.position - other.position) / (d * d);
                count += 1;
            }
        }

        if count == 0 {
            return Vec2::ZERO;
        }
        steering /= count as f32;
        self.reynolds(steering)
    }

    // Calculate alignment force (steer towards average heading of neighbors)
    pub fn alignment(&self, neighbors: &Neighbors) -> Vec2 {
        let mut steering = Vec2::ZERO;
        let mut count = 0;

        for other in neighbors.iter() {
            if self.position.distance(other.position) < ALIGNMENT_RADIUS {
                steering += other.velocity;
                count += 1;
            }
        }

        if count == 0 {
            return Vec2::ZERO;
        }
        steering /= count as f32;
        self.reynolds(steering)
    }

    // Calculate cohesion force (steer towards average position of neighbors)
    pub fn cohesion(&self, neighbors: &Neighbors) -> Vec2 {
        let mut center = Vec2::ZERO;
        let mut count = 0;

        for other in neighbors.iter() {
            if self.position.distance(other.position) < COHESION_RADIUS {
                center += other.position;
                count += 1;
            }
        }

        if count == 0 {
            return Vec2::ZERO;
        }
        center /= count as f32;
        self.steer(center)
    }

    // Steering force that takes this individual towards a point
    pub fn steer(&self, target: Vec2) -> Vec2 {
        self.reynolds(target - self.position)
    }

    // Reynolds: steering = desired - velocity, capped
    fn reynolds(&self, desired: Vec2) -> Vec2 {
        (desired.set_magnitude(self.max_speed) - self.velocity).limit(MAX_STEERING_FORCE)
    }

    // Draw the individual
    pub fn draw(&self, draw: &Draw, camera: &Camera, window_rect: Rect) {
        let screen_pos = camera.world_to_screen(self.position, window_rect);
        let [r, g, b] = self.color();

        draw.ellipse()
            .xy(screen_pos)
            .w_h(INDIVIDUAL_SIZE, INDIVIDUAL_SIZE)
            .color(rgb(r / 255.0, g / 255.0, b / 255.0))
            .stroke(WHITE)
            .stroke_weight(0.5);
    }
}
