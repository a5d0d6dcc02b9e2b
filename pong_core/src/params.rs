/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Screen
    pub const SCREEN_WIDTH: u32 = 640;
    pub const SCREEN_HEIGHT: u32 = 480;

    // Paddle
    pub const PADDLE_WIDTH: u32 = 16;
    pub const PADDLE_HEIGHT: u32 = 64;
    pub const PADDLE_STEP: f32 = 4.0; // pixels per frame

    // Ball
    pub const BALL_WIDTH: u32 = 16;
    pub const BALL_HEIGHT: u32 = 16;
    pub const BALL_VELOCITY_MIN: i32 = -4;
    pub const BALL_VELOCITY_MAX: i32 = 4;
    pub const SPIN: f32 = 2.0; // Added to vy on a paddle hit

    // Score
    pub const WIN_SCORE: u8 = 3;

    // Screens
    pub const CREDITS_ENABLED: bool = true;
}
