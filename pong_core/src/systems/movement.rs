use hecs::World;

use crate::components::{Ball, Paddle, PaddleIntent};
use crate::config::Config;
use crate::resources::Events;

/// Apply held movement keys to the paddles, clamped to the arena.
/// Up and down are evaluated independently, so opposing keys cancel out
/// away from the walls and the unblocked one wins at a wall.
pub fn move_paddles(world: &mut World, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.up {
            paddle.y = config.clamp_paddle_y(paddle.y - config.paddle_speed);
        }
        if intent.down {
            paddle.y = config.clamp_paddle_y(paddle.y + config.paddle_speed);
        }
    }
}

/// Advance the ball one frame and reflect it off the top and bottom walls.
/// Only the direction flips; the position is not pushed back in bounds.
pub fn move_ball(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;

        let rect = ball.aabb(config);
        if rect.top() <= 0.0 || rect.bottom() >= config.arena_height {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn setup_world() -> (World, Config, Events) {
        (World::new(), Config::new(), Events::new())
    }

    fn spawn_paddle(world: &mut World, y: f32, intent: PaddleIntent) -> hecs::Entity {
        world.spawn((Paddle::new(crate::Side::Left, y), intent))
    }

    fn paddle_y(world: &World) -> f32 {
        let mut query = world.query::<&Paddle>();
        query.iter().next().map(|(_e, p)| p.y).unwrap()
    }

    #[test]
    fn test_paddle_moves_up_and_down() {
        let (mut world, config, _events) = setup_world();
        spawn_paddle(
            &mut world,
            250.0,
            PaddleIntent {
                up: true,
                down: false,
            },
        );

        move_paddles(&mut world, &config);
        assert_eq!(paddle_y(&world), 250.0 - config.paddle_speed);
    }

    #[test]
    fn test_paddle_clamped_at_top() {
        let (mut world, config, _events) = setup_world();
        spawn_paddle(
            &mut world,
            2.0,
            PaddleIntent {
                up: true,
                down: false,
            },
        );

        move_paddles(&mut world, &config);
        assert_eq!(paddle_y(&world), 0.0, "Paddle must not cross the top edge");
    }

    #[test]
    fn test_paddle_clamped_at_bottom() {
        let (mut world, config, _events) = setup_world();
        let floor = config.arena_height - config.paddle_height;
        spawn_paddle(
            &mut world,
            floor - 2.0,
            PaddleIntent {
                up: false,
                down: true,
            },
        );

        move_paddles(&mut world, &config);
        assert_eq!(
            paddle_y(&world),
            floor,
            "Paddle must not cross the bottom edge"
        );
    }

    #[test]
    fn test_opposing_keys_cancel_away_from_walls() {
        let (mut world, config, _events) = setup_world();
        spawn_paddle(
            &mut world,
            250.0,
            PaddleIntent {
                up: true,
                down: true,
            },
        );

        move_paddles(&mut world, &config);
        assert_eq!(paddle_y(&world), 250.0);
    }

    #[test]
    fn test_unblocked_direction_wins_at_wall() {
        let (mut world, config, _events) = setup_world();
        spawn_paddle(
            &mut world,
            0.0,
            PaddleIntent {
                up: true,
                down: true,
            },
        );

        // Up is blocked by the wall, so the net movement is downward
        move_paddles(&mut world, &config);
        assert_eq!(paddle_y(&world), config.paddle_speed);
    }

    #[test]
    fn test_ball_advances_by_velocity() {
        let (mut world, config, mut events) = setup_world();
        world.spawn((Ball::new(Vec2::new(400.0, 300.0), Vec2::new(3.0, -2.0)),));

        move_ball(&mut world, &config, &mut events);

        let mut query = world.query::<&Ball>();
        let (_e, ball) = query.iter().next().unwrap();
        assert_eq!(ball.pos, Vec2::new(403.0, 298.0));
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_ball_bounces_off_top_wall_without_position_fix() {
        let (mut world, config, mut events) = setup_world();
        world.spawn((Ball::new(Vec2::new(400.0, 1.0), Vec2::new(3.0, -3.0)),));

        move_ball(&mut world, &config, &mut events);

        let mut query = world.query::<&Ball>();
        let (_e, ball) = query.iter().next().unwrap();
        assert_eq!(ball.vel.y, 3.0, "Vertical velocity should flip");
        assert_eq!(ball.pos.y, -2.0, "Position is left where it landed");
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (mut world, config, mut events) = setup_world();
        let near_floor = config.arena_height - config.ball_size - 1.0;
        world.spawn((Ball::new(Vec2::new(400.0, near_floor), Vec2::new(3.0, 3.0)),));

        move_ball(&mut world, &config, &mut events);

        let mut query = world.query::<&Ball>();
        let (_e, ball) = query.iter().next().unwrap();
        assert_eq!(ball.vel.y, -3.0, "Vertical velocity should flip");
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_wall_bounce_leaves_horizontal_velocity_alone() {
        let (mut world, config, mut events) = setup_world();
        world.spawn((Ball::new(Vec2::new(400.0, 1.0), Vec2::new(3.0, -3.0)),));

        move_ball(&mut world, &config, &mut events);

        let mut query = world.query::<&Ball>();
        let (_e, ball) = query.iter().next().unwrap();
        assert_eq!(ball.vel.x, 3.0);
    }
}
