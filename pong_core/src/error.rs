use snafu::Snafu;

/// Reasons a [`Config`](crate::Config) cannot drive a game
#[derive(Debug, Clone, PartialEq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ConfigError {
    #[snafu(display("ball velocity range is empty: min {min} > max {max}"))]
    EmptyVelocityRange { min: i32, max: i32 },

    #[snafu(display("paddle height {height} does not fit screen height {screen_height}"))]
    PaddleTooTall { height: u32, screen_height: u32 },

    #[snafu(display("two paddles of width {width} do not fit screen width {screen_width}"))]
    PaddleTooWide { width: u32, screen_width: u32 },

    #[snafu(display(
        "ball {width}x{height} spawns off screen {screen_width}x{screen_height}"
    ))]
    BallTooLarge {
        width: u32,
        height: u32,
        screen_width: u32,
        screen_height: u32,
    },

    #[snafu(display("paddle step must be a positive number, got {step}"))]
    NonPositiveStep { step: f32 },

    #[snafu(display("spin must be a non-negative number, got {spin}"))]
    InvalidSpin { spin: f32 },

    #[snafu(display("win score must be at least 1"))]
    ZeroWinScore,
}
