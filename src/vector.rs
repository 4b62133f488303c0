/*
 * Vector Module
 *
 * This module extends nannou's Vec2 with the two operations the steering
 * rules lean on: rescaling a vector to a given magnitude and capping its
 * magnitude. Both are safe on the zero vector.
 */

use nannou::prelude::*;

pub trait VectorExt {
    // Rescale to the given magnitude, the zero vector stays zero
    fn set_magnitude(self, magnitude: f32) -> Self;

    // Cap the magnitude, keeping the direction
    fn limit(self, max: f32) -> Self;
}

impl VectorExt for Vec2 {
    #[inline]
    fn set_magnitude(self, magnitude: f32) -> Self {
        let length = self.length();
        if length > 0.0 {
            self * (magnitude / length)
        } else {
            Vec2::ZERO
        }
    }

    #[inline]
    fn limit(self, max: f32) -> Self {
        let length_squared = self.length_squared();
        if length_squared > max * max {
            self * (max / length_squared.sqrt())
        } else {
            self
        }
    }
}
