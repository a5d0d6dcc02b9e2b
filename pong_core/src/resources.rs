use glam::Vec2;
use rand::Rng;

use crate::components::Side;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u8,
    pub opponent: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_player(&mut self) {
        self.player += 1;
    }

    pub fn increment_opponent(&mut self) {
        self.opponent += 1;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Player is checked first; only one side can have just scored
    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.player >= win_score {
            Some(Side::Player)
        } else if self.opponent >= win_score {
            Some(Side::Opponent)
        } else {
            None
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Seed from the wall clock, once per process
    pub fn from_time() -> Self {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::new(seed)
    }

    /// Whole number in `min..=max`, which may be negative.
    /// A range with `min >= max` yields `min`.
    pub fn range_negative(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        self.0.gen_range(min..=max)
    }

    /// Velocity with each axis drawn independently from `min..=max`
    pub fn ball_velocity(&mut self, min: i32, max: i32) -> Vec2 {
        let vx = self.range_negative(min, max);
        let vy = self.range_negative(min, max);
        Vec2::new(vx as f32, vy as f32)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub player_scored: bool,
    pub opponent_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub screen_changed: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.player_scored = false;
        self.opponent_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
        self.screen_changed = false;
    }
}
