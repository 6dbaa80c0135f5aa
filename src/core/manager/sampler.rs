// Author: Dustin Pilgrim
// License: MIT

use crate::core::{action::Action, state::State};

use super::Manager;

/// Result of one sampling-loop frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// No loop is running; the tick is left over from a cancelled frame.
    Stale,
    /// First frame without a mark: the mark was seeded, loop continues.
    Seeded,
    /// Still inside the idle window, loop continues.
    Pending,
    /// Idle window elapsed. The loop has stopped and will not fire again
    /// until restarted.
    Expired,
}

impl Manager {
    /// Starts the sampling loop unless one is already running.
    pub(super) fn start_loop(&self, state: &mut State) -> Option<Action> {
        if state.loop_running() {
            return None;
        }
        state.set_loop_running(true);
        Some(Action::RequestFrame)
    }

    /// Stops the sampling loop and drops its pending frame.
    pub(super) fn stop_loop(&self, state: &mut State) -> Option<Action> {
        if !state.loop_running() {
            return None;
        }
        state.set_loop_running(false);
        Some(Action::CancelFrame)
    }

    /// Evaluates one frame against the activity mark.
    pub(super) fn sample_frame(&self, state: &mut State, now_ms: u64) -> FrameOutcome {
        if !state.loop_running() {
            return FrameOutcome::Stale;
        }

        match state.idle_ms(now_ms) {
            None => {
                state.set_activity_mark(Some(now_ms));
                FrameOutcome::Seeded
            }
            Some(idle) if idle < self.cfg.hide_delay_ms => FrameOutcome::Pending,
            Some(_) => {
                state.set_loop_running(false);
                FrameOutcome::Expired
            }
        }
    }
}
