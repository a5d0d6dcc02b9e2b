use glam::Vec2;
use serde::{Deserialize, Serialize};
use snafu::ensure;

use crate::error::*;
use crate::params::Params;

/// Game configuration
///
/// Every field has a stock value from [`Params`]; missing fields fall back to
/// it when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub screen_width: u32,
    pub screen_height: u32,
    pub paddle_width: u32,
    pub paddle_height: u32,
    pub paddle_step: f32,
    pub ball_width: u32,
    pub ball_height: u32,
    pub velocity_min: i32,
    pub velocity_max: i32,
    pub spin: f32,
    pub win_score: u8,
    pub credits_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: Params::SCREEN_WIDTH,
            screen_height: Params::SCREEN_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_step: Params::PADDLE_STEP,
            ball_width: Params::BALL_WIDTH,
            ball_height: Params::BALL_HEIGHT,
            velocity_min: Params::BALL_VELOCITY_MIN,
            velocity_max: Params::BALL_VELOCITY_MAX,
            spin: Params::SPIN,
            win_score: Params::WIN_SCORE,
            credits_enabled: Params::CREDITS_ENABLED,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject settings the per-frame rules cannot honor
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure!(
            self.velocity_min <= self.velocity_max,
            EmptyVelocityRangeSnafu {
                min: self.velocity_min,
                max: self.velocity_max,
            }
        );
        ensure!(
            self.paddle_height < self.screen_height,
            PaddleTooTallSnafu {
                height: self.paddle_height,
                screen_height: self.screen_height,
            }
        );
        ensure!(
            u64::from(self.paddle_width) * 2 < u64::from(self.screen_width),
            PaddleTooWideSnafu {
                width: self.paddle_width,
                screen_width: self.screen_width,
            }
        );
        ensure!(
            // Spawn is half the screen minus the ball, so it must stay on screen
            self.ball_width <= self.screen_width / 2 && self.ball_height <= self.screen_height / 2,
            BallTooLargeSnafu {
                width: self.ball_width,
                height: self.ball_height,
                screen_width: self.screen_width,
                screen_height: self.screen_height,
            }
        );
        ensure!(
            self.paddle_step.is_finite() && self.paddle_step > 0.0,
            NonPositiveStepSnafu {
                step: self.paddle_step
            }
        );
        ensure!(
            self.spin.is_finite() && self.spin >= 0.0,
            InvalidSpinSnafu { spin: self.spin }
        );
        ensure!(self.win_score > 0, ZeroWinScoreSnafu);
        Ok(())
    }

    pub fn screen_width_f(&self) -> f32 {
        self.screen_width as f32
    }

    pub fn screen_height_f(&self) -> f32 {
        self.screen_height as f32
    }

    /// Lowest top edge a paddle of this height may take
    pub fn paddle_max_y(&self, height: u32) -> f32 {
        self.screen_height_f() - height as f32
    }

    /// Player paddle starts on the left edge
    pub fn player_start(&self) -> Vec2 {
        Vec2::ZERO
    }

    /// Opponent paddle starts on the right edge
    pub fn opponent_start(&self) -> Vec2 {
        Vec2::new(self.screen_width_f() - self.paddle_width as f32, 0.0)
    }

    /// Where the ball is placed at startup and after every point
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(
            (self.screen_width / 2) as f32 - self.ball_width as f32,
            (self.screen_height / 2) as f32 - self.ball_height as f32,
        )
    }
}
