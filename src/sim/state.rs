//! Session state and events
//!
//! One `GameState` is one session: it owns the run state, the score, the
//! current level and character, and the RNG stream feeding the obstacle
//! generator. Level and character are replaced wholesale on restart.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::level::Level;
use super::player::Capy;
use crate::config::{ConfigError, GameConfig};

/// Whether the session is waiting for its first input or in play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Waiting for the first flap; renders but does not advance physics
    Idle,
    /// Active gameplay
    Running,
}

/// Notifications emitted by the tick for the host shell (audio, HUD, logs)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// First flap of a session moved it from idle to running
    Started,
    /// The character flapped
    Flapped,
    /// A pipe pair was cleared; carries the new score
    PipeCleared { score: u32 },
    /// Collision or out-of-bounds ended the session; carries the final score.
    /// The session has already been reset to a fresh idle state when this is
    /// observed.
    GameOver { score: u32 },
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Gameplay tuning, validated at construction
    pub config: GameConfig,
    /// Seed the session RNG was created from
    pub seed: u64,
    /// RNG stream feeding the obstacle generator
    pub rng: Pcg32,
    /// Current run state; the tick is its sole mutator
    pub run_state: RunState,
    /// Pipes cleared this session
    pub score: u32,
    /// Ticks spent running this session
    pub time_ticks: u64,
    /// The scrolling obstacle field
    pub level: Level,
    /// The player character
    pub capy: Capy,
}

impl GameState {
    /// Create a new session, failing fast on invalid configuration
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = Pcg32::seed_from_u64(seed);
        let level = Level::new(config, &mut rng);
        Ok(Self {
            config,
            seed,
            rng,
            run_state: RunState::Idle,
            score: 0,
            time_ticks: 0,
            level,
            capy: Capy::new(config),
        })
    }

    /// Reset to a fresh idle session: new level, new character, score zeroed
    ///
    /// The RNG stream keeps advancing so every life sees a fresh pipe layout.
    pub fn reset(&mut self) {
        self.level = Level::new(self.config, &mut self.rng);
        self.capy = Capy::new(self.config);
        self.score = 0;
        self.time_ticks = 0;
        self.run_state = RunState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::level::LIVE_PIPES;

    #[test]
    fn test_new_session_is_idle_with_zero_score() {
        let state = GameState::new(GameConfig::default(), 99).unwrap();
        assert_eq!(state.run_state, RunState::Idle);
        assert_eq!(state.score, 0);
        assert_eq!(state.level.pipes.len(), LIVE_PIPES);
        assert!(state.level.pipes.iter().all(|p| !p.passed));
    }

    #[test]
    fn test_invalid_config_fails_construction() {
        let config = GameConfig {
            pipe_gap: 700.0,
            ..GameConfig::default()
        };
        assert!(GameState::new(config, 1).is_err());
    }

    #[test]
    fn test_reset_regenerates_level() {
        let mut state = GameState::new(GameConfig::default(), 7).unwrap();
        let before: Vec<f32> = state.level.pipes.iter().map(|p| p.gap_top).collect();
        state.score = 12;
        state.run_state = RunState::Running;

        state.reset();
        assert_eq!(state.score, 0);
        assert_eq!(state.run_state, RunState::Idle);
        assert_eq!(state.level.pipes.len(), LIVE_PIPES);
        assert!(state.level.pipes.iter().all(|p| !p.passed));
        // The RNG stream moved on, so the layout is a fresh draw
        let after: Vec<f32> = state.level.pipes.iter().map(|p| p.gap_top).collect();
        assert_ne!(before, after);
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = GameState::new(GameConfig::default(), 1234).unwrap();
        let b = GameState::new(GameConfig::default(), 1234).unwrap();
        let gaps_a: Vec<f32> = a.level.pipes.iter().map(|p| p.gap_top).collect();
        let gaps_b: Vec<f32> = b.level.pipes.iter().map(|p| p.gap_top).collect();
        assert_eq!(gaps_a, gaps_b);
    }
}
