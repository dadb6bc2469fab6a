use serde::{Deserialize, Serialize};

use super::vec2::Vec2;

/// A circular body
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Body {
    // === Physics State ===
    /// Center position (arena units)
    pub pos: Vec2,
    /// Velocity vector (units per frame)
    pub velocity: Vec2,
    /// Always > 0
    pub radius: f32,
    /// Always > 0
    pub mass: f32,
}

impl Body {
    /// Create a body at rest
    pub fn new(x: f32, y: f32, radius: f32, mass: f32) -> Self {
        debug_assert!(radius > 0.0, "body radius must be positive");
        debug_assert!(mass > 0.0, "body mass must be positive");
        Self {
            pos: Vec2::new(x, y),
            velocity: Vec2::zero(),
            radius,
            mass,
        }
    }

    pub fn with_velocity(mut self, vx: f32, vy: f32) -> Self {
        self.velocity = Vec2::new(vx, vy);
        self
    }

    /// Explicit Euler step with a one-frame timestep.
    #[inline]
    pub fn integrate(&mut self) {
        self.pos += self.velocity;
    }

    /// Clamp the body inside `[radius, dim - radius]` on each axis and
    /// reflect the velocity component that crossed. Lossless.
    ///
    /// Returns the number of axes reflected (0..=2).
    pub fn bounce_walls(&mut self, width: f32, height: f32) -> u32 {
        let mut bounces = 0;

        if self.pos.x < self.radius {
            self.pos.x = self.radius;
            self.velocity.x = -self.velocity.x;
            bounces += 1;
        } else if self.pos.x > width - self.radius {
            self.pos.x = width - self.radius;
            self.velocity.x = -self.velocity.x;
            bounces += 1;
        }

        if self.pos.y < self.radius {
            self.pos.y = self.radius;
            self.velocity.y = -self.velocity.y;
            bounces += 1;
        } else if self.pos.y > height - self.radius {
            self.pos.y = height - self.radius;
            self.velocity.y = -self.velocity.y;
            bounces += 1;
        }

        bounces
    }

    /// Move one frame and resolve walls. Returns wall reflections.
    pub fn advance(&mut self, width: f32, height: f32) -> u32 {
        self.integrate();
        self.bounce_walls(width, height)
    }

    /// Strict overlap: touching circles do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Body) -> bool {
        let reach = self.radius + other.radius;
        (other.pos - self.pos).length_squared() < reach * reach
    }

    pub fn momentum(&self) -> Vec2 {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity.length_squared()
    }
}
