//! Gameplay tuning injected at session construction
//!
//! The sim never reads module-level globals; every tunable lives in an
//! immutable `GameConfig` value so tests can run alternate configurations
//! deterministically.

use std::fmt;

use crate::consts;

/// Immutable gameplay configuration
///
/// Validated once at session construction; a `GameConfig` held by a live
/// session is always well-formed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    /// Play-field width in pixels
    pub field_width: f32,
    /// Play-field height in pixels
    pub field_height: f32,
    /// Horizontal extent of each pipe
    pub pipe_width: f32,
    /// Vertical passable region between a pair's sub-pipes
    pub pipe_gap: f32,
    /// Minimum distance from a field edge to a gap edge
    pub edge_buffer: f32,
    /// Left-edge to left-edge distance between consecutive pairs
    pub pipe_spacing: f32,
    /// Horizontal pipe scroll speed (pixels per tick)
    pub pipe_speed: f32,
    /// Cosmetic backdrop scroll speed (pixels per tick)
    pub backdrop_speed: f32,
    /// Character's fixed horizontal position
    pub capy_x: f32,
    /// Character hitbox width
    pub capy_width: f32,
    /// Character hitbox height
    pub capy_height: f32,
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Upward impulse speed set by a flap
    pub flap_speed: f32,
    /// Vertical speed clamp, enforced after every integration step
    pub terminal_velocity: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: consts::FIELD_WIDTH,
            field_height: consts::FIELD_HEIGHT,
            pipe_width: consts::PIPE_WIDTH,
            pipe_gap: consts::PIPE_GAP,
            edge_buffer: consts::EDGE_BUFFER,
            pipe_spacing: consts::PIPE_SPACING,
            pipe_speed: consts::PIPE_SPEED,
            backdrop_speed: consts::BACKDROP_SPEED,
            capy_x: consts::CAPY_X,
            capy_width: consts::CAPY_WIDTH,
            capy_height: consts::CAPY_HEIGHT,
            gravity: consts::GRAVITY,
            flap_speed: consts::FLAP_SPEED,
            terminal_velocity: consts::TERMINAL_VELOCITY,
        }
    }
}

impl GameConfig {
    /// Range of valid `gap_top` values for the obstacle generator
    ///
    /// Negative means the gap plus both edge buffers cannot fit in the field.
    pub fn gap_top_range(&self) -> f32 {
        self.field_height - 2.0 * self.edge_buffer - self.pipe_gap
    }

    /// Validate the configuration, failing fast on values that would make
    /// the obstacle generator's random range invalid or stall the scroll.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gap_top_range() < 0.0 {
            return Err(ConfigError::GapTooTall {
                pipe_gap: self.pipe_gap,
                edge_buffer: self.edge_buffer,
                field_height: self.field_height,
            });
        }
        if self.pipe_spacing <= self.pipe_width {
            return Err(ConfigError::SpacingTooTight {
                pipe_spacing: self.pipe_spacing,
                pipe_width: self.pipe_width,
            });
        }
        if self.pipe_speed <= 0.0 {
            return Err(ConfigError::NonPositiveSpeed {
                pipe_speed: self.pipe_speed,
            });
        }
        Ok(())
    }
}

/// Configuration validation failure
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// `pipe_gap + 2 * edge_buffer` exceeds the field height, inverting the
    /// obstacle generator's random range
    GapTooTall {
        pipe_gap: f32,
        edge_buffer: f32,
        field_height: f32,
    },
    /// Consecutive pairs would overlap
    SpacingTooTight { pipe_spacing: f32, pipe_width: f32 },
    /// Pipes would never scroll
    NonPositiveSpeed { pipe_speed: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::GapTooTall {
                pipe_gap,
                edge_buffer,
                field_height,
            } => write!(
                f,
                "pipe gap {pipe_gap} plus edge buffers {edge_buffer}x2 does not fit in field height {field_height}"
            ),
            ConfigError::SpacingTooTight {
                pipe_spacing,
                pipe_width,
            } => write!(
                f,
                "pipe spacing {pipe_spacing} must exceed pipe width {pipe_width}"
            ),
            ConfigError::NonPositiveSpeed { pipe_speed } => {
                write!(f, "pipe speed {pipe_speed} must be positive")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
