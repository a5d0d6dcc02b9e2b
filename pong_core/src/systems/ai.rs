use hecs::World;

use crate::systems::movement::move_paddle;
use crate::{Ball, Config, Direction, Paddle, Side};

/// Move the opponent paddle one step toward the ball.
///
/// Compares the ball's top edge with the paddle's center, using the ball
/// position after this frame's move. A ball level with the center leaves the
/// paddle where it is.
pub fn track_ball(world: &mut World, config: &Config) {
    let ball_y = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.pos.y);

    let ball_y = match ball_y {
        Some(y) => y,
        None => return, // No ball in world
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Opponent {
            continue;
        }

        let mid_y = paddle.mid_y();
        let dir = if ball_y > mid_y {
            Direction::Down
        } else if ball_y < mid_y {
            Direction::Up
        } else {
            Direction::Neutral
        };
        move_paddle(paddle, dir, config);
    }
}
