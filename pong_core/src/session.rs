use glam::Vec2;
use hecs::World;

use crate::components::{Ball, Paddle, PaddleIntent, Side};
use crate::config::Config;
use crate::fsm::{MatchAction, MatchFsm, Phase, Transition};
use crate::resources::{Events, FrameInput, GameRng, Score};
use crate::systems::{check_paddle_hits, check_scoring, move_ball, move_paddles, HitLatch};

/// One running match: all mutable game state, owned by the frame loop
/// and mutated synchronously once per tick.
pub struct MatchSession {
    pub world: World,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub fsm: MatchFsm,
    pub rng: GameRng,
    hit_latch: HitLatch,
}

impl MatchSession {
    pub fn new(config: Config, seed: u64) -> Self {
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        let paddle_y = config.paddle_spawn_y();
        world.spawn((Paddle::new(Side::Left, paddle_y), PaddleIntent::new()));
        world.spawn((Paddle::new(Side::Right, paddle_y), PaddleIntent::new()));

        let mut ball = Ball::new(config.ball_spawn(), Vec2::ZERO);
        ball.reset(&config, &mut rng);
        world.spawn((ball,));

        Self {
            world,
            config,
            score: Score::new(),
            events: Events::new(),
            fsm: MatchFsm::new(),
            rng,
            hit_latch: HitLatch::new(),
        }
    }

    /// Run one frame: discrete state transitions first, then paddle
    /// movement (always live), then ball physics and rules while the
    /// match is active and unpaused.
    pub fn frame(&mut self, input: &FrameInput) {
        self.events.clear();

        self.apply_actions(input);
        self.apply_intents(input);
        move_paddles(&mut self.world, &self.config);

        if self.fsm.is_running() {
            move_ball(&mut self.world, &self.config, &mut self.events);
            check_paddle_hits(
                &mut self.world,
                &self.config,
                &mut self.hit_latch,
                &mut self.events,
            );
            if let Some(winner) = check_scoring(
                &mut self.world,
                &self.config,
                &mut self.score,
                &mut self.events,
                &mut self.rng,
            ) {
                self.fsm.game_over(winner);
                self.events.match_over = true;
            }
        }
    }

    fn apply_actions(&mut self, input: &FrameInput) {
        if input.toggle_play {
            // Leaving Active for Idle abandons the rally
            if self.fsm.apply(MatchAction::TogglePlay) == Some(Transition::Stopped) {
                self.reset_ball();
            }
        }
        if input.toggle_pause {
            self.fsm.apply(MatchAction::TogglePause);
        }
        if input.restart {
            if self.fsm.apply(MatchAction::Restart) == Some(Transition::Restarted) {
                self.score.reset();
                self.reset_ball();
            }
        }
    }

    fn apply_intents(&mut self, input: &FrameInput) {
        for (_entity, (paddle, intent)) in self.world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
            *intent = input.intent_for(paddle.side);
        }
    }

    fn reset_ball(&mut self) {
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.reset(&self.config, &mut self.rng);
        }
        self.hit_latch = HitLatch::new();
    }

    pub fn phase(&self) -> Phase {
        self.fsm.phase()
    }

    pub fn is_paused(&self) -> bool {
        self.fsm.is_paused()
    }

    pub fn winner(&self) -> Option<Side> {
        self.fsm.winner()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn paddle_y(&self, side: Side) -> f32 {
        let mut query = self.world.query::<&Paddle>();
        query
            .iter()
            .find(|(_e, paddle)| paddle.side == side)
            .map(|(_e, paddle)| paddle.y)
            .unwrap_or_else(|| self.config.paddle_spawn_y())
    }

    pub fn ball(&self) -> Ball {
        let mut query = self.world.query::<&Ball>();
        query
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
            .unwrap_or_else(|| Ball::new(self.config.ball_spawn(), Vec2::ZERO))
    }

    /// Teleport the ball; used by tests to set up rallies and points
    pub fn place_ball(&mut self, pos: Vec2, vel: Vec2) {
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.pos = pos;
            ball.vel = vel;
        }
    }
}
