use glam::Vec2;
use hecs::World;

use crate::{Ball, Config, Direction, Events, Paddle, Side};

/// What the ball bounced off this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    None,
    Wall,
    Paddle(Side),
}

/// Work out the ball's next velocity from where it is now.
///
/// Only one rule applies per frame, in this order: top/bottom wall, player
/// paddle, opponent paddle. A wall bounce flips `vy`. A paddle bounce flips
/// `vx` and adds spin in the direction the paddle last moved.
pub fn calculate_ball_velocity(
    ball: &Ball,
    paddles: &[Paddle],
    config: &Config,
) -> (Vec2, Contact) {
    if ball.pos.y <= 0.0 || ball.bottom() >= config.screen_height_f() {
        return (Vec2::new(ball.vel.x, -ball.vel.y), Contact::Wall);
    }

    let ball_box = ball.aabb();
    for side in [Side::Player, Side::Opponent] {
        let hit = paddles
            .iter()
            .find(|p| p.side == side && p.aabb().overlaps(&ball_box));
        if let Some(paddle) = hit {
            let mut vel = Vec2::new(-ball.vel.x, ball.vel.y);
            match paddle.last_dir {
                Direction::Up => vel.y -= config.spin,
                Direction::Down => vel.y += config.spin,
                Direction::Neutral => {}
            }
            return (vel, Contact::Paddle(side));
        }
    }

    (ball.vel, Contact::None)
}

/// Check ball collisions with walls and paddles and assign the new velocity
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddle data without holding borrows
    let paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| *p)
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let (vel, contact) = calculate_ball_velocity(ball, &paddles, config);
        match contact {
            Contact::Wall => {
                log::trace!("Ball hit wall at {:?}", ball.pos);
                events.ball_hit_wall = true;
            }
            Contact::Paddle(side) => {
                log::trace!("Ball hit {:?} paddle at {:?}", side, ball.pos);
                events.ball_hit_paddle = true;
            }
            Contact::None => {}
        }
        ball.vel = vel;
    }
}
