//! Match state machine
//!
//! Pausing is modeled as a second axis over the primary phase rather than
//! a fourth exclusive state: the pause flag only carries meaning while
//! Active, so Idle and GameOver can never resume into the wrong phase.

use crate::components::Side;

/// Primary match phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Active,
    GameOver,
}

/// Discrete inputs that drive phase changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchAction {
    TogglePlay,
    TogglePause,
    Restart,
}

/// What a successful transition did; the session performs the side
/// effects (ball and score resets) each variant calls for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Started,
    Stopped,
    PauseOn,
    PauseOff,
    Restarted,
}

/// Match finite state machine
#[derive(Debug, Clone, Copy)]
pub struct MatchFsm {
    phase: Phase,
    paused: bool,
    winner: Option<Side>,
}

impl MatchFsm {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            paused: false,
            winner: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Physics and collision rules run only while active and unpaused
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Active && !self.paused
    }

    /// Attempt a transition; any action not in the table is ignored and
    /// leaves the machine untouched
    pub fn apply(&mut self, action: MatchAction) -> Option<Transition> {
        match (self.phase, self.paused, action) {
            (Phase::Idle, _, MatchAction::TogglePlay) => {
                self.phase = Phase::Active;
                Some(Transition::Started)
            }
            (Phase::Active, false, MatchAction::TogglePlay) => {
                self.phase = Phase::Idle;
                Some(Transition::Stopped)
            }
            (Phase::Active, false, MatchAction::TogglePause) => {
                self.paused = true;
                Some(Transition::PauseOn)
            }
            // Only the pause toggle leaves the paused state
            (Phase::Active, true, MatchAction::TogglePause) => {
                self.paused = false;
                Some(Transition::PauseOff)
            }
            (Phase::GameOver, _, MatchAction::Restart) => {
                self.phase = Phase::Active;
                self.winner = None;
                Some(Transition::Restarted)
            }
            _ => None,
        }
    }

    /// A side reached the score limit; only meaningful while active
    pub fn game_over(&mut self, winner: Side) {
        if self.phase == Phase::Active {
            self.phase = Phase::GameOver;
            self.paused = false;
            self.winner = Some(winner);
        }
    }
}

impl Default for MatchFsm {
    fn default() -> Self {
        Self::new()
    }
}
