//! Adapter contract for the Pong core
//!
//! Types exchanged between the simulation and whatever draws it and polls
//! the keyboard. Uses postcard when the adapter lives out of process.

use postcard::{from_bytes, to_allocvec};
use serde::{Deserialize, Serialize};

// ============================================================================
// Screens
// ============================================================================

/// Discrete game mode. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Screen {
    #[default]
    Title,
    Credits,
    Game,
    PlayerWin,
    PlayerLose,
}

// ============================================================================
// Adapter -> Core
// ============================================================================

/// Which inputs are held down this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InputFrame {
    pub up: bool,
    pub down: bool,
    pub begin: bool,
    pub credits_open: bool,
    pub credits_close: bool,
    pub restart: bool,
}

impl InputFrame {
    pub fn new() -> Self {
        Self::default()
    }
}

// ============================================================================
// Core -> Adapter
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PaddleView {
    pub x: f32,
    pub y: f32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BallView {
    pub x: f32,
    pub y: f32,
    pub width: u32,
    pub height: u32,
    pub vx: f32,
    pub vy: f32,
}

/// Read-only state consumed for drawing a frame
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub screen: Screen,
    pub player: PaddleView,
    pub opponent: PaddleView,
    pub ball: BallView,
    pub score_player: u8,
    pub score_opponent: u8,
}

// ============================================================================
// Serialization Helpers
// ============================================================================

impl InputFrame {
    /// Serialize input frame to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize input frame from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}

impl Snapshot {
    /// Serialize snapshot to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize snapshot from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}
