use glam::Vec2;

use crate::bounds::Aabb;

/// Movement along the Y axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Up,
    Down,
    #[default]
    Neutral,
}

/// Which paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player,   // Left edge, human controlled
    Opponent, // Right edge, tracks the ball
}

/// Paddle component - moves along the Y axis only
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2, // Top-left corner
    pub width: u32,
    pub height: u32,
    /// Movement taken this frame, read by the spin rule
    pub last_dir: Direction,
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, width: u32, height: u32) -> Self {
        Self {
            side,
            pos,
            width,
            height,
            last_dir: Direction::Neutral,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.width, self.height)
    }

    /// Y coordinate of the paddle's vertical center
    pub fn mid_y(&self) -> f32 {
        self.pos.y + self.height as f32 / 2.0
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2, // Top-left corner
    pub vel: Vec2, // Pixels per frame
    pub width: u32,
    pub height: u32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, width: u32, height: u32) -> Self {
        Self {
            pos,
            vel,
            width,
            height,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.width, self.height)
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height as f32
    }

    /// Put the ball back at `spawn` with a fresh random velocity
    pub fn reset(&mut self, spawn: Vec2, min: i32, max: i32, rng: &mut crate::GameRng) {
        self.pos = spawn;
        self.vel = rng.ball_velocity(min, max);
    }
}
