use crate::{Ball, Config, Direction, Paddle};
use hecs::World;

/// Move a paddle one step, clamped to the screen.
///
/// A step that would cross the top or bottom edge parks the paddle on that
/// edge and records `Neutral` rather than the requested direction.
pub fn move_paddle(paddle: &mut Paddle, dir: Direction, config: &Config) {
    match dir {
        Direction::Up => {
            let y = paddle.pos.y - config.paddle_step;
            if y < 0.0 {
                paddle.pos.y = 0.0;
                paddle.last_dir = Direction::Neutral;
            } else {
                paddle.pos.y = y;
                paddle.last_dir = Direction::Up;
            }
        }
        Direction::Down => {
            let max_y = config.paddle_max_y(paddle.height);
            let y = paddle.pos.y + config.paddle_step;
            if y > max_y {
                paddle.pos.y = max_y;
                paddle.last_dir = Direction::Neutral;
            } else {
                paddle.pos.y = y;
                paddle.last_dir = Direction::Down;
            }
        }
        Direction::Neutral => paddle.last_dir = Direction::Neutral,
    }
}

/// Move ball based on velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}
