// Author: Dustin Pilgrim
// License: MIT

use crate::core::{
    action::Action,
    error::Error,
    events::Event,
    playback::{Intent, admit_intent},
    rate::PlaybackRate,
    state::State,
};

use super::{Manager, overlay::Override};

impl Manager {
    /// Applies one event and returns the side effects it requires.
    ///
    /// Events are expected in delivery order. After `Unmounted` every event is
    /// absorbed without effects.
    pub fn handle_event(&mut self, state: &mut State, event: Event) -> Result<Vec<Action>, Error> {
        if state.torn_down() {
            tracing::debug!("surface: {:?} after teardown ignored", event);
            return Ok(Vec::new());
        }

        let now_ms = event.now_ms();
        let was_visible = state.visible();
        let counts_as_activity = self.cfg.clicks_count_as_activity && event.is_click();

        let mut out = Vec::new();

        match event {
            Event::Mounted { .. } => {
                if !state.mounted() {
                    state.set_mounted(true);
                    // first frame seeds the mark
                    out.extend(self.start_loop(state));
                }
            }

            Event::Unmounted { .. } => {
                return Ok(self.teardown(state));
            }

            Event::FrameTick { .. } => {
                out.extend(self.on_frame(state, now_ms));
            }

            Event::PointerMove { .. } => {
                out.extend(self.on_pointer_activity(state, now_ms));
            }

            Event::HoverEnter { .. } => {
                out.extend(self.engage_override(state, Override::Hover, now_ms));
            }

            Event::HoverLeave { .. } => {
                out.extend(self.release_override(state, Override::Hover, now_ms));
            }

            Event::DragStart { .. } => {
                out.extend(self.engage_override(state, Override::Drag, now_ms));
            }

            Event::DragEnd { .. } => {
                out.extend(self.release_override(state, Override::Drag, now_ms));
            }

            Event::TriggerClick { .. } => {
                out.extend(self.on_trigger_click(state));
            }

            Event::OutsideClick { .. } => {
                out.extend(self.on_outside_click(state));
            }

            Event::ItemSelect { rate, .. } => {
                // a rejected selection leaves state untouched
                out.extend(self.on_item_select(state, rate)?);
            }

            Event::PlaybackChanged { snapshot, .. } => {
                if let Some(rate) = PlaybackRate::from_f64(snapshot.playback_rate) {
                    state.set_selected_rate(rate);
                }

                let live = snapshot.is_live();
                state.set_playback(snapshot);

                if live && state.menu_open() {
                    tracing::debug!("menu: closing, stream went live");
                    out.extend(self.close_menu(state));
                }
            }

            Event::Intent { intent, .. } => match admit_intent(intent, state.playback()) {
                Some(admitted) => {
                    if let Intent::SetPlaybackRate { rate } = admitted {
                        state.set_selected_rate(rate);
                    }
                    out.push(Action::Playback(admitted));
                }
                None => {
                    tracing::debug!("playback: {:?} not offered by current state", intent);
                }
            },
        }

        if counts_as_activity {
            out.extend(self.on_pointer_activity(state, now_ms));
        }

        if state.visible() != was_visible {
            out.push(Action::VisibilityChanged {
                visible: state.visible(),
            });
        }

        Ok(out)
    }

    /// Releases everything the surface holds. Safe to call in any state.
    pub fn teardown(&self, state: &mut State) -> Vec<Action> {
        if state.torn_down() {
            return Vec::new();
        }

        let mut out = Vec::new();
        out.extend(self.stop_loop(state));
        out.extend(self.release_listener(state));

        state.set_menu_open(false);
        state.set_torn_down(true);

        tracing::debug!("surface: torn down");
        out
    }
}
