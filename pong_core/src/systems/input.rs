use hecs::World;
use pong_proto::InputFrame;

use crate::systems::movement::move_paddle;
use crate::{Config, Direction, Paddle, Side};

/// Move the player paddle from the held keys.
///
/// Down and up are handled as two independent moves, so holding both can
/// move the paddle twice in one frame. With no key held the paddle records
/// `Neutral`.
pub fn apply_player_input(world: &mut World, input: &InputFrame, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Player {
            continue;
        }

        if !input.down && !input.up {
            move_paddle(paddle, Direction::Neutral, config);
            continue;
        }
        if input.down {
            move_paddle(paddle, Direction::Down, config);
        }
        if input.up {
            move_paddle(paddle, Direction::Up, config);
        }
    }
}
