// Author: Dustin Pilgrim
// License: MIT

use serde::Serialize;

use crate::core::{playback::ControlsModel, rate::PlaybackRate, state::State};

/// What the presentation layer renders from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OverlayView {
    pub visible: bool,
    pub menu_open: bool,
    pub selected_rate: PlaybackRate,
}

impl OverlayView {
    pub fn of(state: &State) -> Self {
        Self {
            visible: state.visible(),
            menu_open: state.menu_open(),
            selected_rate: state.selected_rate(),
        }
    }
}

impl Default for OverlayView {
    fn default() -> Self {
        Self::of(&State::default())
    }
}

/// Snapshot returned for `info`.
///
/// - serialized fields are the JSON contract.
/// - `pretty_text` is the human-facing rendering.
#[derive(Debug, Clone, Serialize)]
pub struct InfoSnapshot {
    pub view: OverlayView,

    pub hovering: bool,
    pub dragging: bool,
    pub idle_expired: bool,
    pub loop_running: bool,

    pub idle_ms: Option<u64>,
    pub hides_in_ms: Option<u64>,

    pub controls: ControlsModel,

    #[serde(skip_serializing)]
    pub pretty_text: String,
}
