use hecs::World;

use crate::components::{Ball, Side};
use crate::config::Config;
use crate::resources::{Events, GameRng, Score};

/// Check whether the ball left the arena. The left edge is tested before
/// the right, every frame. A point at the score limit ends the match and
/// returns the winner with the ball left where it died; otherwise the
/// ball is served again and play continues.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) -> Option<Side> {
    let mut winner = None;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.aabb(config).left() <= 0.0 {
            score.point_for(Side::Right);
            events.right_scored = true;
            match score.leader_at(config.score_limit) {
                Some(side) => winner = Some(side),
                None => ball.reset(config, rng),
            }
        }
        if ball.aabb(config).right() >= config.arena_width {
            score.point_for(Side::Left);
            events.left_scored = true;
            match score.leader_at(config.score_limit) {
                Some(side) => winner = Some(side),
                None => ball.reset(config, rng),
            }
        }
    }

    winner
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn setup_world() -> (World, Config, Score, Events, GameRng) {
        (
            World::new(),
            Config::new(),
            Score::new(),
            Events::new(),
            GameRng::new(12345),
        )
    }

    #[test]
    fn test_right_player_scores_when_ball_exits_left() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        world.spawn((Ball::new(Vec2::new(-1.0, 300.0), Vec2::new(-3.0, 0.0)),));

        let winner = check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score.right, 1, "Right player should score");
        assert_eq!(score.left, 0);
        assert!(events.right_scored);
        assert_eq!(winner, None);
    }

    #[test]
    fn test_left_player_scores_when_ball_exits_right() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        world.spawn((Ball::new(
            Vec2::new(config.arena_width + 1.0, 300.0),
            Vec2::new(3.0, 0.0),
        ),));

        let winner = check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score.left, 1, "Left player should score");
        assert_eq!(score.right, 0);
        assert!(events.left_scored);
        assert_eq!(winner, None);
    }

    #[test]
    fn test_ball_serves_again_after_non_terminal_point() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        world.spawn((Ball::new(Vec2::new(-1.0, 300.0), Vec2::new(-3.0, 0.0)),));

        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        let mut query = world.query::<&Ball>();
        let (_e, ball) = query.iter().next().unwrap();
        assert_eq!(ball.pos, config.ball_spawn(), "Ball should serve from center");
        assert_eq!(ball.vel.x.abs(), config.ball_speed_initial);
        assert_eq!(ball.vel.y.abs(), config.ball_speed_initial);
    }

    #[test]
    fn test_point_at_limit_returns_winner_without_serving() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        for _ in 0..config.score_limit - 1 {
            score.point_for(Side::Right);
        }
        let dead_pos = Vec2::new(-1.0, 300.0);
        world.spawn((Ball::new(dead_pos, Vec2::new(-3.0, 0.0)),));

        let winner = check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(winner, Some(Side::Right));
        assert_eq!(score.right, config.score_limit);

        let mut query = world.query::<&Ball>();
        let (_e, ball) = query.iter().next().unwrap();
        assert_eq!(ball.pos, dead_pos, "Ball stays where it died on match point");
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        world.spawn((Ball::new(Vec2::new(400.0, 300.0), Vec2::new(3.0, 2.0)),));

        let winner = check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score, Score::new());
        assert!(!events.left_scored && !events.right_scored);
        assert_eq!(winner, None);
    }

    #[test]
    fn test_multiple_points_accumulate() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        let ball_entity = world.spawn((Ball::new(Vec2::new(-1.0, 300.0), Vec2::new(-3.0, 0.0)),));

        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);
        events.clear();

        {
            let mut ball = world.get::<&mut Ball>(ball_entity).unwrap();
            ball.pos = Vec2::new(-1.0, 300.0);
        }
        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score.right, 2, "Points should accumulate");
        assert_eq!(score.left, 0);
    }
}
