//! Game context
//!
//! Owns everything one game needs between frames so nothing lives in
//! globals. The presentation layer calls [`Game::update`] once per frame and
//! draws from [`Game::snapshot`].

use hecs::{Entity, World};
use pong_proto::{BallView, InputFrame, PaddleView, Screen, Snapshot};

use crate::{
    create_ball, create_paddle, step, Ball, Config, ConfigError, Events, GameRng, Paddle, Score,
    ScreenFsm, Side,
};

pub struct Game {
    pub world: World,
    pub fsm: ScreenFsm,
    pub score: Score,
    pub config: Config,
    pub events: Events,
    pub rng: GameRng,
    pub player: Entity,
    pub opponent: Entity,
    pub ball: Entity,
}

impl Game {
    /// Validate `config` and spawn the paddles and ball.
    ///
    /// Player paddle on the left edge, opponent on the right, ball in the
    /// center with a random velocity.
    pub fn new(config: Config, mut rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut world = World::new();
        let player = create_paddle(
            &mut world,
            Side::Player,
            config.player_start(),
            config.paddle_width,
            config.paddle_height,
        );
        let opponent = create_paddle(
            &mut world,
            Side::Opponent,
            config.opponent_start(),
            config.paddle_width,
            config.paddle_height,
        );
        let vel = rng.ball_velocity(config.velocity_min, config.velocity_max);
        let ball = create_ball(
            &mut world,
            config.ball_spawn(),
            vel,
            config.ball_width,
            config.ball_height,
        );

        log::info!(
            "New game on {}x{} screen, first to {}",
            config.screen_width,
            config.screen_height,
            config.win_score
        );

        Ok(Self {
            world,
            fsm: ScreenFsm::new(),
            score: Score::new(),
            config,
            events: Events::new(),
            rng,
            player,
            opponent,
            ball,
        })
    }

    /// Advance one frame with the inputs held this frame
    pub fn update(&mut self, input: &InputFrame) {
        step(
            &mut self.world,
            &mut self.fsm,
            &mut self.score,
            &self.config,
            input,
            &mut self.events,
            &mut self.rng,
        );
    }

    pub fn screen(&self) -> Screen {
        self.fsm.state()
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        let entity = self.paddle_entity(side);
        self.world.get::<&Paddle>(entity).ok().map(|p| *p)
    }

    pub fn paddle_mut(&mut self, side: Side) -> Option<&mut Paddle> {
        let entity = self.paddle_entity(side);
        self.world.query_one_mut::<&mut Paddle>(entity).ok()
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.get::<&Ball>(self.ball).ok().map(|b| *b)
    }

    pub fn ball_mut(&mut self) -> Option<&mut Ball> {
        self.world.query_one_mut::<&mut Ball>(self.ball).ok()
    }

    /// Read-only view of the current frame for drawing
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            screen: self.screen(),
            player: paddle_view(self.paddle(Side::Player)),
            opponent: paddle_view(self.paddle(Side::Opponent)),
            ball: self.ball().map(ball_view).unwrap_or_default(),
            score_player: self.score.player,
            score_opponent: self.score.opponent,
        }
    }

    fn paddle_entity(&self, side: Side) -> Entity {
        match side {
            Side::Player => self.player,
            Side::Opponent => self.opponent,
        }
    }
}

fn paddle_view(paddle: Option<Paddle>) -> PaddleView {
    paddle
        .map(|p| PaddleView {
            x: p.pos.x,
            y: p.pos.y,
            width: p.width,
            height: p.height,
        })
        .unwrap_or_default()
}

fn ball_view(ball: Ball) -> BallView {
    BallView {
        x: ball.pos.x,
        y: ball.pos.y,
        width: ball.width,
        height: ball.height,
        vx: ball.vel.x,
        vy: ball.vel.y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn new_game() -> Game {
        Game::new(Config::new(), GameRng::new(42)).unwrap()
    }

    #[test]
    fn test_new_game_layout() {
        let game = new_game();
        assert_eq!(game.screen(), Screen::Title);
        assert_eq!(game.score, Score::new());

        let player = game.paddle(Side::Player).unwrap();
        assert_eq!(player.pos, Vec2::new(0.0, 0.0));
        let opponent = game.paddle(Side::Opponent).unwrap();
        assert_eq!(opponent.pos, Vec2::new(624.0, 0.0));

        let ball = game.ball().unwrap();
        assert_eq!(ball.pos, Vec2::new(304.0, 224.0));
        assert!((-4.0..=4.0).contains(&ball.vel.x));
        assert!((-4.0..=4.0).contains(&ball.vel.y));
    }

    #[test]
    fn test_new_game_rejects_bad_config() {
        let config = Config {
            velocity_min: 1,
            velocity_max: -1,
            ..Config::default()
        };
        assert!(matches!(
            Game::new(config, GameRng::new(1)),
            Err(ConfigError::EmptyVelocityRange { .. })
        ));

        let wide_ball = Config {
            ball_width: 330,
            ..Config::default()
        };
        assert!(matches!(
            Game::new(wide_ball, GameRng::new(1)),
            Err(ConfigError::BallTooLarge { .. })
        ));
    }

    #[test]
    fn test_title_screen_does_not_simulate() {
        let mut game = new_game();
        let before = game.ball().unwrap();
        let input = InputFrame {
            down: true,
            ..Default::default()
        };

        game.update(&input);

        assert_eq!(game.ball().unwrap(), before);
        assert_eq!(game.paddle(Side::Player).unwrap().pos.y, 0.0);
    }

    #[test]
    fn test_paddle_mut_edits_world() {
        let mut game = new_game();
        game.paddle_mut(Side::Opponent).unwrap().pos.y = 50.0;
        assert_eq!(game.paddle(Side::Opponent).unwrap().pos.y, 50.0);
        game.ball_mut().unwrap().vel = Vec2::new(1.0, 1.0);
        assert_eq!(game.ball().unwrap().vel, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut game = new_game();
        game.score.player = 2;
        let snapshot = game.snapshot();
        let ball = game.ball().unwrap();

        assert_eq!(snapshot.screen, Screen::Title);
        assert_eq!(snapshot.player.width, 16);
        assert_eq!(snapshot.player.height, 64);
        assert_eq!(snapshot.opponent.x, 624.0);
        assert_eq!(snapshot.ball.x, ball.pos.x);
        assert_eq!(snapshot.ball.vy, ball.vel.y);
        assert_eq!(snapshot.score_player, 2);
        assert_eq!(snapshot.score_opponent, 0);
    }
}
