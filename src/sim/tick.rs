//! Per-frame tick
//!
//! One synchronous pass of advance + collision check + scoring, driven once
//! per host animation frame. The loop itself never stops; a game over resets
//! the session to idle within the same tick and the next frame keeps going.

use super::state::{GameEvent, GameState, RunState};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Discrete activate input (pointer press, tap, space). Starts the
    /// session when idle and always triggers one flap.
    pub activate: bool,
}

/// Advance the session by one tick, pushing notifications into `events`
pub fn tick(state: &mut GameState, input: &TickInput, events: &mut Vec<GameEvent>) {
    if input.activate {
        if state.run_state == RunState::Idle {
            state.run_state = RunState::Running;
            events.push(GameEvent::Started);
        }
        state.capy.flap();
        events.push(GameEvent::Flapped);
    }

    // The backdrop is cosmetic and scrolls in every state
    state.level.advance_backdrop();

    if state.run_state != RunState::Running {
        return;
    }

    state.time_ticks += 1;
    state.level.advance(&mut state.rng);
    state.capy.integrate();

    let bounds = state.capy.bounds();
    if state.level.collides_with(&bounds) || state.capy.is_out_of_bounds() {
        events.push(GameEvent::GameOver { score: state.score });
        state.reset();
        return;
    }

    let score = &mut state.score;
    state.level.on_passed(&bounds, || {
        *score += 1;
        events.push(GameEvent::PipeCleared { score: *score });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::level::LIVE_PIPES;
    use crate::sim::pipes::PipePair;

    fn new_state() -> GameState {
        GameState::new(GameConfig::default(), 2024).unwrap()
    }

    fn run_tick(state: &mut GameState, activate: bool) -> Vec<GameEvent> {
        let mut events = Vec::new();
        tick(state, &TickInput { activate }, &mut events);
        events
    }

    #[test]
    fn test_idle_holds_physics_and_pipes() {
        let mut state = new_state();
        let y = state.capy.y;
        let front_left = state.level.pipes[0].left;
        for _ in 0..10 {
            let events = run_tick(&mut state, false);
            assert!(events.is_empty());
        }
        assert_eq!(state.capy.y, y);
        assert_eq!(state.level.pipes[0].left, front_left);
        assert_eq!(state.run_state, RunState::Idle);
    }

    #[test]
    fn test_activate_starts_and_flaps() {
        let mut state = new_state();
        let events = run_tick(&mut state, true);
        assert_eq!(events, vec![GameEvent::Started, GameEvent::Flapped]);
        assert_eq!(state.run_state, RunState::Running);
        // The flap impulse is applied before integration
        assert_eq!(
            state.capy.vy,
            -state.config.flap_speed + state.config.gravity
        );

        // Later activates flap without re-starting
        let events = run_tick(&mut state, true);
        assert_eq!(events, vec![GameEvent::Flapped]);
    }

    #[test]
    fn test_running_advances_pipes_and_physics() {
        let mut state = new_state();
        run_tick(&mut state, true);
        let front_left = state.level.pipes[0].left;
        let y = state.capy.y;

        run_tick(&mut state, false);
        assert_eq!(
            state.level.pipes[0].left,
            front_left - state.config.pipe_speed
        );
        assert_ne!(state.capy.y, y);
    }

    #[test]
    fn test_pipe_cleared_increments_score() {
        let mut state = new_state();
        run_tick(&mut state, true);

        // Park a pair just right of the character; it crosses next tick
        let bounds = state.capy.bounds();
        state.capy.vy = 0.0;
        state.level.pipes[0] = PipePair {
            left: bounds.left() - 50.0,
            right: bounds.left() + 1.0,
            gap_top: 0.0,
            gap_bottom: state.config.field_height,
            passed: false,
        };

        let events = run_tick(&mut state, false);
        assert!(events.contains(&GameEvent::PipeCleared { score: 1 }));
        assert_eq!(state.score, 1);

        // The same pair never scores twice
        let events = run_tick(&mut state, false);
        assert!(!events.iter().any(|e| matches!(e, GameEvent::PipeCleared { .. })));
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_game_over_resets_session() {
        let mut state = new_state();
        run_tick(&mut state, true);
        state.score = 5;

        // Drop the character below the floor; the next integration step
        // leaves it out of bounds
        state.capy.y = state.config.field_height + 20.0;
        state.capy.vy = 0.0;

        let events = run_tick(&mut state, false);
        assert!(events.contains(&GameEvent::GameOver { score: 5 }));

        // Fresh idle session: score zeroed, three unpassed pairs, centered capy
        assert_eq!(state.run_state, RunState::Idle);
        assert_eq!(state.score, 0);
        assert_eq!(state.level.pipes.len(), LIVE_PIPES);
        assert!(state.level.pipes.iter().all(|p| !p.passed));
        assert!(!state.capy.is_out_of_bounds());
    }

    #[test]
    fn test_collision_triggers_game_over() {
        let mut state = new_state();
        run_tick(&mut state, true);

        // Wall with no gap directly over the character
        let bounds = state.capy.bounds();
        state.level.pipes[0] = PipePair {
            left: bounds.left() - 10.0,
            right: bounds.right() + 10.0,
            gap_top: state.config.field_height,
            gap_bottom: state.config.field_height,
            passed: false,
        };
        state.capy.vy = 0.0;

        let events = run_tick(&mut state, false);
        assert!(events.iter().any(|e| matches!(e, GameEvent::GameOver { .. })));
        assert_eq!(state.run_state, RunState::Idle);
    }

    #[test]
    fn test_loop_keeps_ticking_after_reset() {
        let mut state = new_state();
        run_tick(&mut state, true);
        state.capy.y = state.config.field_height + 20.0;
        run_tick(&mut state, false);
        assert_eq!(state.run_state, RunState::Idle);

        // Next activate starts a brand new run
        let events = run_tick(&mut state, true);
        assert_eq!(events, vec![GameEvent::Started, GameEvent::Flapped]);
        assert_eq!(state.run_state, RunState::Running);
    }
}
