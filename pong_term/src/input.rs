use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use pong_core::{FrameInput, Phase};

/// Drain pending key events into this frame's input snapshot.
/// Returns true when the player asked to quit.
pub fn poll_frame_input(input: &mut FrameInput, phase: Phase) -> Result<bool> {
    while event::poll(Duration::ZERO)? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Release {
                continue;
            }
            if is_quit(&key) {
                return Ok(true);
            }
            apply_key(input, key.code, phase);
        }
    }
    Ok(false)
}

fn is_quit(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

fn apply_key(input: &mut FrameInput, code: KeyCode, phase: Phase) {
    match code {
        KeyCode::Char('w') | KeyCode::Char('W') => input.left_up = true,
        KeyCode::Char('s') | KeyCode::Char('S') => input.left_down = true,
        KeyCode::Up => input.right_up = true,
        KeyCode::Down => input.right_down = true,
        KeyCode::Char('p') | KeyCode::Char('P') => input.toggle_pause = true,
        // Space restarts a finished match and toggles play otherwise
        KeyCode::Char(' ') => {
            if phase == Phase::GameOver {
                input.restart = true;
            } else {
                input.toggle_play = true;
            }
        }
        _ => {}
    }
}
