//! The level: pipe lifecycle and backdrop parallax
//!
//! Owns the ordered queue of live pipe pairs (oldest at the front) and the
//! cosmetic backdrop strips. Pipes never reorder and always leave in
//! creation order, so spacing and recycling only ever touch the queue ends.

use std::collections::VecDeque;

use rand::Rng;

use super::pipes::{PipePair, generate_pipe};
use super::rect::Rect;
use crate::config::GameConfig;

/// Number of live pipe pairs at all times
pub const LIVE_PIPES: usize = 3;

/// Backdrop strips per seed (one on screen, one queued to its right)
const SEED_STRIPS: usize = 2;

/// The scrolling obstacle field
#[derive(Debug, Clone)]
pub struct Level {
    config: GameConfig,
    /// Live pairs, oldest at the front
    pub pipes: VecDeque<PipePair>,
    /// Left offsets of the backdrop strips, each one field-width wide.
    /// Purely cosmetic; has no effect on gameplay.
    pub backdrop: VecDeque<f32>,
}

impl Level {
    /// Build a fresh level with three pairs seeded ahead of the field
    ///
    /// The config must already be validated; see `GameState::new`.
    pub fn new(config: GameConfig, rng: &mut impl Rng) -> Self {
        let mut pipes = VecDeque::with_capacity(LIVE_PIPES);
        for i in 0..LIVE_PIPES {
            let spawn_x = config.field_width + i as f32 * config.pipe_spacing;
            pipes.push_back(generate_pipe(&config, rng, spawn_x));
        }

        let mut backdrop = VecDeque::with_capacity(SEED_STRIPS + 1);
        for i in 0..SEED_STRIPS {
            backdrop.push_back(i as f32 * config.field_width);
        }

        Self {
            config,
            pipes,
            backdrop,
        }
    }

    /// Scroll all pairs left and recycle the front pair once it is fully
    /// offscreen, keeping the live count and spacing constant
    pub fn advance(&mut self, rng: &mut impl Rng) {
        for pipe in &mut self.pipes {
            pipe.advance(self.config.pipe_speed);
        }

        while self.pipes.front().is_some_and(|p| p.right <= 0.0) {
            self.pipes.pop_front();
            // Queue is never empty here: spacing exceeds pipe width, so at
            // most the front pair can be offscreen while the rest are live.
            let back_left = self.pipes.back().map(|p| p.left).unwrap_or(0.0);
            self.pipes
                .push_back(generate_pipe(&self.config, rng, back_left + self.config.pipe_spacing));
        }
    }

    /// Scroll the backdrop strips, appending and dropping at the ends so the
    /// field is always covered
    pub fn advance_backdrop(&mut self) {
        for strip in &mut self.backdrop {
            *strip -= self.config.backdrop_speed;
        }

        if let Some(&last) = self.backdrop.back() {
            // Append once the lead strip's trailing edge reaches the field's
            // right edge
            let lead_right = last + self.config.field_width;
            if lead_right <= self.config.field_width {
                self.backdrop.push_back(lead_right);
            }
        }
        while self
            .backdrop
            .front()
            .is_some_and(|&x| x + self.config.field_width <= 0.0)
        {
            self.backdrop.pop_front();
        }
    }

    /// Whether the given bounds overlap any sub-pipe of any live pair
    pub fn collides_with(&self, bounds: &Rect) -> bool {
        self.pipes
            .iter()
            .any(|p| p.hits(bounds, self.config.field_height))
    }

    /// Fire `callback` once per pair whose right edge has moved left of the
    /// given bounds; marking is idempotent, so re-querying never re-fires
    pub fn on_passed(&mut self, bounds: &Rect, mut callback: impl FnMut()) {
        for pipe in &mut self.pipes {
            if !pipe.passed && pipe.right < bounds.left() {
                pipe.passed = true;
                callback();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn level(seed: u64) -> (Level, Pcg32) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let level = Level::new(GameConfig::default(), &mut rng);
        (level, rng)
    }

    #[test]
    fn test_always_three_live_pairs() {
        let (mut level, mut rng) = level(42);
        assert_eq!(level.pipes.len(), LIVE_PIPES);
        for _ in 0..5000 {
            level.advance(&mut rng);
            assert_eq!(level.pipes.len(), LIVE_PIPES);
        }
    }

    #[test]
    fn test_spacing_constant_at_creation_and_preserved() {
        let config = GameConfig::default();
        let (mut level, mut rng) = level(9);
        for _ in 0..5000 {
            level.advance(&mut rng);
            let xs: Vec<f32> = level.pipes.iter().map(|p| p.left).collect();
            for pair in xs.windows(2) {
                assert!((pair[1] - pair[0] - config.pipe_spacing).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn test_recycle_determinism() {
        // field 480x640, speed 2: the front pair is replaced on the tick its
        // right edge reaches 0, and the new back pair lands one spacing
        // behind the old back pair.
        let config = GameConfig::default();
        assert_eq!(config.pipe_speed, 2.0);
        let (mut level, mut rng) = level(1);

        let front_right = level.pipes.front().unwrap().right;
        let old_back_left = level.pipes.back().unwrap().left;
        let ticks = (front_right / config.pipe_speed).ceil() as u32;

        for _ in 0..ticks - 1 {
            level.advance(&mut rng);
        }
        // Not yet recycled: the original front pair is still at the front
        assert!(level.pipes.front().unwrap().right > 0.0);

        level.advance(&mut rng);
        let new_back = level.pipes.back().unwrap();
        let expected = old_back_left + config.pipe_spacing - ticks as f32 * config.pipe_speed;
        assert!((new_back.left - expected).abs() < 1e-3);
        assert_eq!(level.pipes.len(), LIVE_PIPES);
    }

    #[test]
    fn test_collision_with_top_sub_pipe() {
        let (mut level, _) = level(5);
        level.pipes[0] = PipePair {
            left: 90.0,
            right: 140.0,
            gap_top: 50.0,
            gap_bottom: 200.0,
            passed: false,
        };
        // Character bounds {left: 100, right: 145, top: 0, bottom: 33}
        let bounds = Rect::new(100.0, 0.0, 45.0, 33.0);
        assert!(level.collides_with(&bounds));
    }

    #[test]
    fn test_no_collision_through_gap() {
        let (mut level, _) = level(5);
        level.pipes[0] = PipePair {
            left: 90.0,
            right: 140.0,
            gap_top: 50.0,
            gap_bottom: 200.0,
            passed: false,
        };
        // Fully inside the gap on the y axis
        let bounds = Rect::new(100.0, 100.0, 45.0, 33.0);
        assert!(!level.collides_with(&bounds));
    }

    #[test]
    fn test_collision_with_bottom_sub_pipe() {
        let (mut level, _) = level(5);
        level.pipes[0] = PipePair {
            left: 90.0,
            right: 140.0,
            gap_top: 50.0,
            gap_bottom: 200.0,
            passed: false,
        };
        let bounds = Rect::new(100.0, 250.0, 45.0, 33.0);
        assert!(level.collides_with(&bounds));
    }

    #[test]
    fn test_passed_fires_exactly_once() {
        let (mut level, _) = level(2);
        level.pipes[0].left = 10.0;
        level.pipes[0].right = 60.0;

        let bounds = Rect::new(100.0, 300.0, 45.0, 33.0);
        let mut fired = 0;
        level.on_passed(&bounds, || fired += 1);
        assert_eq!(fired, 1);

        // Re-querying the same pair never re-triggers
        for _ in 0..10 {
            level.on_passed(&bounds, || fired += 1);
        }
        assert_eq!(fired, 1);
    }

    #[test]
    fn test_not_passed_while_under_pipe() {
        let (mut level, _) = level(2);
        level.pipes[0].left = 80.0;
        level.pipes[0].right = 130.0;

        let bounds = Rect::new(100.0, 300.0, 45.0, 33.0);
        let mut fired = 0;
        level.on_passed(&bounds, || fired += 1);
        assert_eq!(fired, 0);
    }

    #[test]
    fn test_backdrop_always_covers_field() {
        let config = GameConfig::default();
        let (mut level, _) = level(13);
        for _ in 0..20_000 {
            level.advance_backdrop();
            let front = *level.backdrop.front().unwrap();
            let back = *level.backdrop.back().unwrap();
            assert!(front <= 0.0);
            assert!(back + config.field_width >= config.field_width);
            // Strips tile contiguously
            let xs: Vec<f32> = level.backdrop.iter().copied().collect();
            for pair in xs.windows(2) {
                assert!((pair[1] - pair[0] - config.field_width).abs() < 1e-3);
            }
        }
    }
}
