pub mod bounds;
pub mod components;
pub mod config;
pub mod error;
pub mod fsm;
pub mod game;
pub mod params;
pub mod resources;
pub mod systems;

pub use bounds::*;
pub use components::*;
pub use config::*;
pub use error::ConfigError;
pub use fsm::*;
pub use game::*;
pub use params::*;
pub use resources::*;

pub use pong_proto::{InputFrame, Screen, Snapshot};

use glam::Vec2;
use hecs::World;
use systems::*;

/// Advance the game by one frame.
///
/// On the Game screen this runs the simulation; on every other screen it
/// only reads the transition keys.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    fsm: &mut ScreenFsm,
    score: &mut Score,
    config: &Config,
    input: &InputFrame,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clear events at start of frame
    events.clear();

    match fsm.state() {
        Screen::Game => {
            // 1. Player paddle follows the held keys
            apply_player_input(world, input, config);

            // 2. New ball velocity from the pre-move position
            check_collisions(world, config, events);

            // 3. Move ball
            move_ball(world);

            // 4. Opponent chases the moved ball
            track_ball(world, config);

            // 5. Check scoring (ball exited screen)
            check_scoring(world, score, events, rng, config);

            // 6. End the round once someone reaches the win score
            if let Some(action) = check_winner(score, config) {
                events.screen_changed = fsm.transition(action).success;
            }
        }
        screen => {
            let Some(action) = action_for(screen, input, config.credits_enabled) else {
                return;
            };
            let result = fsm.transition(action);
            events.screen_changed = result.success;
            if result.success && action == ScreenAction::Restart {
                score.reset();
                reset_ball(world, config, rng);
            }
        }
    }
}

/// Helper to create a paddle entity
pub fn create_paddle(
    world: &mut World,
    side: Side,
    pos: Vec2,
    width: u32,
    height: u32,
) -> hecs::Entity {
    world.spawn((Paddle::new(side, pos, width, height),))
}

/// Helper to create the ball entity
pub fn create_ball(
    world: &mut World,
    pos: Vec2,
    vel: Vec2,
    width: u32,
    height: u32,
) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, width, height),))
}
