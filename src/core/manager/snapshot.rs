// Author: Dustin Pilgrim
// License: MIT

use std::fmt::Write;

use crate::core::{
    info::{InfoSnapshot, OverlayView},
    playback::ControlsModel,
    state::State,
};

use super::Manager;

impl Manager {
    pub fn snapshot(&self, state: &State, now_ms: u64) -> InfoSnapshot {
        let view = OverlayView::of(state);
        let idle_ms = state.idle_ms(now_ms);

        // Only meaningful while the loop is measuring.
        let hides_in_ms = if state.loop_running() {
            idle_ms.map(|idle| self.cfg.hide_delay_ms.saturating_sub(idle))
        } else {
            None
        };

        let controls = ControlsModel::derive(state.playback());

        InfoSnapshot {
            view,
            hovering: state.hovering(),
            dragging: state.dragging(),
            idle_expired: state.idle_expired(),
            loop_running: state.loop_running(),
            idle_ms,
            hides_in_ms,
            controls,
            pretty_text: render_pretty(state, &view, idle_ms, hides_in_ms),
        }
    }
}

fn render_pretty(
    state: &State,
    view: &OverlayView,
    idle_ms: Option<u64>,
    hides_in_ms: Option<u64>,
) -> String {
    let mut s = String::new();

    let overlay = if view.visible { "shown" } else { "hidden" };
    let _ = writeln!(s, "Overlay: {overlay}");

    let mut held = Vec::new();
    if state.hovering() {
        held.push("hover");
    }
    if state.dragging() {
        held.push("drag");
    }
    if !held.is_empty() {
        let _ = writeln!(s, "  held by: {}", held.join(", "));
    }

    match (idle_ms, hides_in_ms) {
        (Some(idle), Some(left)) => {
            let _ = writeln!(s, "  idle: {idle}ms (hides in {left}ms)");
        }
        (Some(idle), None) => {
            let _ = writeln!(s, "  idle: {idle}ms");
        }
        _ => {}
    }

    let menu = if view.menu_open { "open" } else { "closed" };
    let _ = write!(s, "Rate menu: {menu} ({}x)", view.selected_rate);

    s
}
