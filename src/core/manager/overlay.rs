// Author: Dustin Pilgrim
// License: MIT

use crate::core::{action::Action, state::State};

use super::{FrameOutcome, Manager};

/// Sticky overrides that suspend auto-hide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Override {
    Hover,
    Drag,
}

impl Manager {
    /// Pointer activity: refresh the mark and, unless an override is held,
    /// come back from hidden and (re)start the idle window.
    pub(super) fn on_pointer_activity(&self, state: &mut State, now_ms: u64) -> Vec<Action> {
        state.set_activity_mark(Some(now_ms));

        if state.sticky() {
            // measurement resumes when the override is released
            return Vec::new();
        }

        state.set_idle_expired(false);
        self.start_loop(state).into_iter().collect()
    }

    /// Hover-enter / drag-start. Repeats are no-ops.
    pub(super) fn engage_override(
        &self,
        state: &mut State,
        which: Override,
        now_ms: u64,
    ) -> Vec<Action> {
        let held = match which {
            Override::Hover => state.hovering(),
            Override::Drag => state.dragging(),
        };
        if held {
            return Vec::new();
        }

        match which {
            Override::Hover => state.set_hovering(true),
            Override::Drag => state.set_dragging(true),
        }

        state.set_idle_expired(false);
        state.set_activity_mark(Some(now_ms));

        self.stop_loop(state).into_iter().collect()
    }

    /// Hover-leave / drag-end. Without a matching engage this is a no-op.
    ///
    /// Once both overrides are released the idle window restarts at the
    /// release.
    pub(super) fn release_override(
        &self,
        state: &mut State,
        which: Override,
        now_ms: u64,
    ) -> Vec<Action> {
        let held = match which {
            Override::Hover => state.hovering(),
            Override::Drag => state.dragging(),
        };
        if !held {
            return Vec::new();
        }

        match which {
            Override::Hover => state.set_hovering(false),
            Override::Drag => state.set_dragging(false),
        }

        if state.sticky() {
            return Vec::new();
        }

        state.set_activity_mark(Some(now_ms));
        self.start_loop(state).into_iter().collect()
    }

    /// One frame of the sampling loop.
    pub(super) fn on_frame(&self, state: &mut State, now_ms: u64) -> Vec<Action> {
        match self.sample_frame(state, now_ms) {
            FrameOutcome::Stale => Vec::new(),
            FrameOutcome::Seeded | FrameOutcome::Pending => vec![Action::RequestFrame],
            FrameOutcome::Expired => {
                if state.sticky() {
                    tracing::debug!("overlay: idle expiry ignored (override held)");
                } else {
                    tracing::debug!("overlay: idle window elapsed at {now_ms}ms, hiding");
                    state.set_idle_expired(true);
                }
                Vec::new()
            }
        }
    }
}
