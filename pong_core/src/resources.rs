use crate::components::{PaddleIntent, Side};

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn point_for(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn of(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Which side has reached the score limit, if any
    pub fn leader_at(&self, limit: u32) -> Option<Side> {
        if self.left >= limit {
            Some(Side::Left)
        } else if self.right >= limit {
            Some(Side::Right)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub ball_hit_paddle: bool,
    pub left_scored: bool,
    pub right_scored: bool,
    pub match_over: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Random number generator for serve directions
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// One frame's input snapshot: held movement keys plus edge-triggered
/// state events from the input source
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
    pub toggle_play: bool,
    pub toggle_pause: bool,
    pub restart: bool,
}

impl FrameInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intent_for(&self, side: Side) -> PaddleIntent {
        match side {
            Side::Left => PaddleIntent {
                up: self.left_up,
                down: self.left_down,
            },
            Side::Right => PaddleIntent {
                up: self.right_up,
                down: self.right_down,
            },
        }
    }
}
