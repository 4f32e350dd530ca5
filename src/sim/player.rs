//! The player character
//!
//! Capy is a one-dimensional constant-acceleration integrator: gravity pulls
//! down every tick, a flap overwrites the velocity with a fixed upward
//! impulse, and the speed is clamped to a terminal value after every step.
//! Horizontal position never changes after spawn.

use super::rect::Rect;
use crate::config::GameConfig;

/// The player entity
#[derive(Debug, Clone, Copy)]
pub struct Capy {
    /// Top edge of the hitbox
    pub y: f32,
    /// Vertical velocity (positive is down)
    pub vy: f32,
    config: GameConfig,
}

impl Capy {
    /// Spawn vertically centered in the field, at rest
    pub fn new(config: GameConfig) -> Self {
        Self {
            y: (config.field_height - config.capy_height) / 2.0,
            vy: 0.0,
            config,
        }
    }

    /// One physics step: move, accelerate, clamp
    pub fn integrate(&mut self) {
        self.y += self.vy;
        self.vy += self.config.gravity;
        self.vy = self
            .vy
            .clamp(-self.config.terminal_velocity, self.config.terminal_velocity);
    }

    /// Flap impulse: overwrites the velocity, never accumulates
    pub fn flap(&mut self) {
        self.vy = -self.config.flap_speed;
    }

    /// Fixed-size hitbox anchored at the character's position
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.config.capy_x,
            self.y,
            self.config.capy_width,
            self.config.capy_height,
        )
    }

    /// Whether the character left the field vertically
    ///
    /// Checks only the top-edge y and the height, matching the collision
    /// hitbox as long as the hitbox stays axis-aligned.
    pub fn is_out_of_bounds(&self) -> bool {
        self.y < 0.0 || self.y + self.config.capy_height > self.config.field_height
    }
}
