use glam::Vec2;

use crate::components::Side;

/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (pixels, origin top-left)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 5.0; // px per frame
    pub const PADDLE_MARGIN: f32 = 10.0; // gap between paddle and side edge

    // Ball
    pub const BALL_SIZE: f32 = 20.0;
    pub const BALL_SPEED_INITIAL: f32 = 3.0; // px per frame, per axis
    pub const BALL_SPEED_INCREASE: f32 = 1.1; // multiply vx on paddle hit

    // Score
    pub const SCORE_LIMIT: u32 = 5; // first to 5 wins
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_margin: f32,
    pub ball_size: f32,
    pub ball_speed_initial: f32,
    pub ball_speed_increase: f32,
    /// Upper bound on |vx| after a paddle hit; None lets rallies speed up
    /// without limit, as the classic rules do
    pub ball_speed_limit: Option<f32>,
    pub score_limit: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_margin: Params::PADDLE_MARGIN,
            ball_size: Params::BALL_SIZE,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            ball_speed_limit: None,
            score_limit: Params::SCORE_LIMIT,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// X of a paddle's left edge for the given side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.arena_width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Clamp a paddle's top edge to the arena
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.arena_height - self.paddle_height)
    }

    /// Top-left corner that vertically centers a paddle
    pub fn paddle_spawn_y(&self) -> f32 {
        (self.arena_height - self.paddle_height) / 2.0
    }

    /// Top-left corner that centers the ball on screen
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(
            (self.arena_width - self.ball_size) / 2.0,
            (self.arena_height - self.ball_size) / 2.0,
        )
    }
}
