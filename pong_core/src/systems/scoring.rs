use crate::fsm::ScreenAction;
use crate::{Ball, Config, Events, GameRng, Score, Side};
use hecs::World;

/// Check if ball left the screen (scoring)
///
/// Leaving on the left scores for the opponent, on the right for the player.
/// Either way the ball goes back to the center with a new velocity; paddles
/// stay where they are.
pub fn check_scoring(
    world: &mut World,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
    config: &Config,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x <= 0.0 {
            score.increment_opponent();
            events.opponent_scored = true;
            log::debug!("Opponent scored, {} - {}", score.player, score.opponent);
        } else if ball.pos.x >= config.screen_width_f() {
            score.increment_player();
            events.player_scored = true;
            log::debug!("Player scored, {} - {}", score.player, score.opponent);
        } else {
            continue;
        }

        ball.reset(
            config.ball_spawn(),
            config.velocity_min,
            config.velocity_max,
            rng,
        );
        log::debug!("Ball reset with velocity {:?}", ball.vel);
    }
}

/// End-of-round screen action once either side reaches the win score
pub fn check_winner(score: &Score, config: &Config) -> Option<ScreenAction> {
    match score.has_winner(config.win_score)? {
        Side::Player => Some(ScreenAction::PlayerWon),
        Side::Opponent => Some(ScreenAction::PlayerLost),
    }
}

/// Re-center the ball with a fresh velocity
pub fn reset_ball(world: &mut World, config: &Config, rng: &mut GameRng) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.reset(
            config.ball_spawn(),
            config.velocity_min,
            config.velocity_max,
            rng,
        );
    }
}
