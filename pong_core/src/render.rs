use glam::Vec2;

use crate::components::Side;
use crate::fsm::Phase;
use crate::session::MatchSession;

pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
pub const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
pub const BANNER_BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];

const SCORE_PX: f32 = 50.0;
const PROMPT_PX: f32 = 70.0;
const BANNER_PX: f32 = 80.0;

/// One drawing primitive in arena pixel coordinates; the front end
/// decides how to rasterize it
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear {
        tint: [f32; 4],
    },
    Rect {
        min: Vec2,
        size: Vec2,
        tint: [f32; 4],
    },
    Ellipse {
        min: Vec2,
        size: Vec2,
        tint: [f32; 4],
    },
    Text {
        text: String,
        center: Vec2,
        px: f32,
        tint: [f32; 4],
    },
}

/// Translate the current session state into an ordered draw list:
/// background, paddles, ball, scores, then the phase overlay.
pub fn render_frame(session: &MatchSession) -> Vec<DrawCmd> {
    let config = &session.config;
    let (w, h) = (config.arena_width, config.arena_height);

    let mut cmds = vec![DrawCmd::Clear { tint: BLACK }];

    for side in [Side::Left, Side::Right] {
        cmds.push(DrawCmd::Rect {
            min: Vec2::new(config.paddle_x(side), session.paddle_y(side)),
            size: Vec2::new(config.paddle_width, config.paddle_height),
            tint: WHITE,
        });
    }

    cmds.push(DrawCmd::Ellipse {
        min: session.ball().pos,
        size: Vec2::splat(config.ball_size),
        tint: WHITE,
    });

    let score = session.score();
    cmds.push(DrawCmd::Text {
        text: score.left.to_string(),
        center: Vec2::new(w / 4.0, 50.0),
        px: SCORE_PX,
        tint: WHITE,
    });
    cmds.push(DrawCmd::Text {
        text: score.right.to_string(),
        center: Vec2::new(w * 3.0 / 4.0, 50.0),
        px: SCORE_PX,
        tint: WHITE,
    });

    match session.phase() {
        Phase::Idle => {
            cmds.push(DrawCmd::Text {
                text: "Press SPACE to Start".to_owned(),
                center: Vec2::new(w / 2.0, h / 2.0),
                px: PROMPT_PX,
                tint: WHITE,
            });
        }
        Phase::Active => {
            if session.is_paused() {
                cmds.push(DrawCmd::Text {
                    text: "Paused".to_owned(),
                    center: Vec2::new(w / 2.0, h / 2.0),
                    px: PROMPT_PX,
                    tint: WHITE,
                });
            }
        }
        Phase::GameOver => {
            cmds.push(DrawCmd::Rect {
                min: Vec2::new(50.0, h / 2.0 - 100.0),
                size: Vec2::new(w - 100.0, 200.0),
                tint: BANNER_BLUE,
            });
            let banner = match session.winner() {
                Some(Side::Left) => "Player 1 Wins!",
                Some(Side::Right) => "Player 2 Wins!",
                None => "Game Over",
            };
            cmds.push(DrawCmd::Text {
                text: banner.to_owned(),
                center: Vec2::new(w / 2.0, h / 2.0),
                px: BANNER_PX,
                tint: WHITE,
            });
            cmds.push(DrawCmd::Text {
                text: "Press SPACE to Restart".to_owned(),
                center: Vec2::new(w / 2.0, h / 2.0 + 80.0),
                px: PROMPT_PX,
                tint: WHITE,
            });
        }
    }

    cmds
}
