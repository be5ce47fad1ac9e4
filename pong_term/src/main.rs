use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::{cursor, execute, terminal};
use log::{debug, info};
use pong_core::{render_frame, Config, FrameInput, MatchSession};

mod input;
mod screen;

/// Terminal front end for two-player Pong.
/// Player 1: W/S. Player 2: arrow keys. Space starts or restarts,
/// P pauses, Q quits.
#[derive(Parser)]
struct Cli {
    /// Seed for serve directions; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Target frame rate
    #[arg(long, default_value_t = 60)]
    fps: u32,
}

/// Restores the terminal even when the frame loop errors out
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!("starting match: seed={seed} fps={}", cli.fps);

    let _guard = TerminalGuard::enter()?;
    run(MatchSession::new(Config::new(), seed), cli.fps)
}

fn run(mut session: MatchSession, fps: u32) -> Result<()> {
    let frame_budget = Duration::from_secs(1) / fps.max(1);
    let mut screen = screen::Screen::new(&session.config)?;

    loop {
        let frame_start = Instant::now();

        let mut frame_input = FrameInput::default();
        if input::poll_frame_input(&mut frame_input, session.phase())? {
            info!("quit requested");
            return Ok(());
        }

        let before = session.phase();
        session.frame(&frame_input);
        if session.phase() != before {
            info!("phase {:?} -> {:?}", before, session.phase());
        }
        if session.events.left_scored || session.events.right_scored {
            debug!("score {}:{}", session.score.left, session.score.right);
        }
        if session.events.match_over {
            info!("match over, winner: {:?}", session.winner());
        }

        screen.draw(&render_frame(&session))?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_budget {
            std::thread::sleep(frame_budget - elapsed);
        }
    }
}
