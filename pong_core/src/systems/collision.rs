use hecs::World;

use crate::components::{Ball, Paddle, Side};
use crate::config::Config;
use crate::resources::Events;

/// Remembers which paddle the ball is currently overlapping so a
/// sustained overlap amplifies the ball exactly once. Re-arms as soon
/// as the boxes separate.
#[derive(Debug, Clone, Copy, Default)]
pub struct HitLatch {
    left: bool,
    right: bool,
}

impl HitLatch {
    pub fn new() -> Self {
        Self::default()
    }

    fn engaged(&self, side: Side) -> bool {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    fn set(&mut self, side: Side, overlapping: bool) {
        match side {
            Side::Left => self.left = overlapping,
            Side::Right => self.right = overlapping,
        }
    }
}

/// Bounce the ball off a paddle it has just started overlapping:
/// the horizontal velocity reverses and gains 10%, subject to the
/// optional speed limit. Vertical velocity is untouched; there is no
/// spin transfer from paddle movement.
pub fn check_paddle_hits(
    world: &mut World,
    config: &Config,
    latch: &mut HitLatch,
    events: &mut Events,
) {
    let paddles: Vec<Paddle> = {
        let mut query = world.query::<&Paddle>();
        query.iter().map(|(_e, p)| *p).collect()
    };

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let rect = ball.aabb(config);

        for paddle in &paddles {
            let overlapping = rect.overlaps(&paddle.aabb(config));

            if overlapping && !latch.engaged(paddle.side) {
                ball.vel.x *= -config.ball_speed_increase;
                if let Some(limit) = config.ball_speed_limit {
                    ball.vel.x = ball.vel.x.clamp(-limit, limit);
                }
                events.ball_hit_paddle = true;
            }

            latch.set(paddle.side, overlapping);
        }
    }
}
