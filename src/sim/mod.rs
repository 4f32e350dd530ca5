//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per host animation frame, constants in pixels per tick
//! - Seeded RNG only
//! - Stable pipe order (oldest at the front of the queue)
//! - No rendering or platform dependencies

pub mod level;
pub mod pipes;
pub mod player;
pub mod rect;
pub mod state;
pub mod tick;

pub use level::Level;
pub use pipes::{PipePair, generate_pipe};
pub use player::Capy;
pub use rect::Rect;
pub use state::{GameEvent, GameState, RunState};
pub use tick::{TickInput, tick};
