use glam::Vec2;
use rand::Rng;

use crate::config::Config;
use crate::geometry::Aabb;
use crate::resources::GameRng;

/// Which half of the arena a paddle (and its player) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // top edge, clamped to the arena
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }

    pub fn aabb(&self, config: &Config) -> Aabb {
        Aabb::from_top_left(
            Vec2::new(config.paddle_x(self.side), self.y),
            Vec2::new(config.paddle_width, config.paddle_height),
        )
    }
}

/// Held movement keys for one paddle, refreshed from input every frame
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub up: bool,
    pub down: bool,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2, // top-left corner
    pub vel: Vec2, // px per frame
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    pub fn aabb(&self, config: &Config) -> Aabb {
        Aabb::from_top_left(self.pos, Vec2::splat(config.ball_size))
    }

    /// Serve: recenter the ball and pick one of the four diagonal
    /// directions with two independent fair sign draws
    pub fn reset(&mut self, config: &Config, rng: &mut GameRng) {
        self.pos = config.ball_spawn();

        let speed = config.ball_speed_initial;
        let sx = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let sy = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        self.vel = Vec2::new(sx * speed, sy * speed);
    }
}
