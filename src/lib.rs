//! Capy Hop - a Flappy Bird style browser game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, pipes, collisions, session state)
//! - `config`: Injected gameplay tuning with fail-fast validation
//! - `render`: 2D canvas rendering (wasm)
//! - `audio`: Fire-and-forget audio cues over `<audio>` elements (wasm)
//! - `settings`: User preferences persisted to LocalStorage

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod config;
#[cfg(target_arch = "wasm32")]
pub mod render;
pub mod settings;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use settings::Settings;

/// Default gameplay tuning constants
///
/// The values `GameConfig::default()` is built from. All speeds and
/// accelerations are in pixels per tick (one tick per animation frame).
pub mod consts {
    /// Play-field dimensions
    pub const FIELD_WIDTH: f32 = 480.0;
    pub const FIELD_HEIGHT: f32 = 640.0;

    /// Pipe geometry
    pub const PIPE_WIDTH: f32 = 50.0;
    /// Vertical passable region between a pair's sub-pipes
    pub const PIPE_GAP: f32 = 150.0;
    /// Minimum distance from a field edge to a gap edge
    pub const EDGE_BUFFER: f32 = 50.0;
    /// Left-edge to left-edge distance between consecutive pairs
    pub const PIPE_SPACING: f32 = 220.0;
    /// Horizontal scroll speed of the pipes
    pub const PIPE_SPEED: f32 = 2.0;

    /// Cosmetic backdrop parallax speed (slower than the pipes)
    pub const BACKDROP_SPEED: f32 = 0.5;

    /// Character geometry - fixed x, fixed hitbox size
    pub const CAPY_X: f32 = 100.0;
    pub const CAPY_WIDTH: f32 = 45.0;
    pub const CAPY_HEIGHT: f32 = 33.0;

    /// Vertical physics: constant acceleration, clamped terminal speed,
    /// instantaneous flap impulse
    pub const GRAVITY: f32 = 0.4;
    pub const FLAP_SPEED: f32 = 7.0;
    pub const TERMINAL_VELOCITY: f32 = 10.0;
}
