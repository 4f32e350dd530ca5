//! Pipe pairs and the obstacle generator
//!
//! A pipe pair is one obstacle unit: a top and bottom rectangle separated by
//! a fixed-height vertical gap at a random height. The generator is a pure
//! function of the config and the injected RNG.

use rand::Rng;

use super::rect::Rect;
use crate::config::GameConfig;

/// One obstacle unit: two sub-pipes separated by a vertical gap
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipePair {
    /// Left edge of both sub-pipes
    pub left: f32,
    /// Right edge (`left + pipe_width`)
    pub right: f32,
    /// Top of the gap (bottom edge of the top sub-pipe)
    pub gap_top: f32,
    /// Bottom of the gap (`gap_top + pipe_gap`)
    pub gap_bottom: f32,
    /// Set exactly once, when the pair's right edge moves left of the
    /// character's left edge
    pub passed: bool,
}

impl PipePair {
    /// Shift the pair left by `speed` pixels (both sub-pipes move together)
    pub fn advance(&mut self, speed: f32) {
        self.left -= speed;
        self.right -= speed;
    }

    /// Rectangle of the top sub-pipe, from the field ceiling to the gap
    pub fn top_rect(&self) -> Rect {
        Rect::new(self.left, 0.0, self.right - self.left, self.gap_top)
    }

    /// Rectangle of the bottom sub-pipe, from the gap to the field floor
    pub fn bottom_rect(&self, field_height: f32) -> Rect {
        Rect::new(
            self.left,
            self.gap_bottom,
            self.right - self.left,
            field_height - self.gap_bottom,
        )
    }

    /// Whether the given bounds collide with either sub-pipe
    pub fn hits(&self, bounds: &Rect, field_height: f32) -> bool {
        bounds.overlaps(&self.top_rect()) || bounds.overlaps(&self.bottom_rect(field_height))
    }
}

/// Generate a fresh pair with its left edge at `spawn_x`
///
/// The gap top is uniform in `[edge_buffer, field_height - edge_buffer -
/// pipe_gap]`; the config is validated at session construction so the range
/// is never negative.
pub fn generate_pipe<R: Rng>(config: &GameConfig, rng: &mut R, spawn_x: f32) -> PipePair {
    let gap_top = config.edge_buffer + rng.random::<f32>() * config.gap_top_range();
    PipePair {
        left: spawn_x,
        right: spawn_x + config.pipe_width,
        gap_top,
        gap_bottom: gap_top + config.pipe_gap,
        passed: false,
    }
}
