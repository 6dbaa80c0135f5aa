// Author: Dustin Pilgrim
// License: MIT

use crate::core::{playback::PlaybackSnapshot, rate::PlaybackRate};

#[derive(Debug, Clone)]
pub struct State {
    // Sampling loop: last recorded activity (ms) and whether a frame is pending.
    activity_mark: Option<u64>,
    loop_running: bool,

    // Overlay intent flags. Visibility is derived from these, never stored.
    hovering: bool,
    dragging: bool,
    idle_expired: bool,

    // Rate menu
    menu_open: bool,
    outside_listener: bool,
    selected_rate: PlaybackRate,

    // Host playback state (read-only input)
    playback: PlaybackSnapshot,

    // Lifecycle
    mounted: bool,
    torn_down: bool,
}

impl State {
    pub fn new(initial_rate: PlaybackRate) -> Self {
        Self {
            activity_mark: None,
            loop_running: false,

            hovering: false,
            dragging: false,
            idle_expired: false,

            menu_open: false,
            outside_listener: false,
            selected_rate: initial_rate,

            playback: PlaybackSnapshot::default(),

            mounted: false,
            torn_down: false,
        }
    }

    // ---------------- derived ----------------

    /// Overlay shown unless the idle window expired with no sticky override.
    pub fn visible(&self) -> bool {
        !(self.idle_expired && !self.hovering && !self.dragging)
    }

    /// Hover or drag suspends idle measurement.
    pub fn sticky(&self) -> bool {
        self.hovering || self.dragging
    }

    /// Elapsed time since the activity mark, if one exists.
    pub fn idle_ms(&self, now_ms: u64) -> Option<u64> {
        self.activity_mark.map(|m| now_ms.saturating_sub(m))
    }

    // ---------------- getters ----------------

    pub fn activity_mark(&self) -> Option<u64> {
        self.activity_mark
    }

    pub fn loop_running(&self) -> bool {
        self.loop_running
    }

    pub fn hovering(&self) -> bool {
        self.hovering
    }

    pub fn dragging(&self) -> bool {
        self.dragging
    }

    pub fn idle_expired(&self) -> bool {
        self.idle_expired
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn outside_listener(&self) -> bool {
        self.outside_listener
    }

    pub fn selected_rate(&self) -> PlaybackRate {
        self.selected_rate
    }

    pub fn playback(&self) -> &PlaybackSnapshot {
        &self.playback
    }

    pub fn mounted(&self) -> bool {
        self.mounted
    }

    pub fn torn_down(&self) -> bool {
        self.torn_down
    }

    // ---------------- setters ----------------

    pub fn set_activity_mark(&mut self, v: Option<u64>) {
        self.activity_mark = v;
    }

    pub fn set_loop_running(&mut self, v: bool) {
        self.loop_running = v;
    }

    pub fn set_hovering(&mut self, v: bool) {
        self.hovering = v;
    }

    pub fn set_dragging(&mut self, v: bool) {
        self.dragging = v;
    }

    pub fn set_idle_expired(&mut self, v: bool) {
        self.idle_expired = v;
    }

    pub fn set_menu_open(&mut self, v: bool) {
        self.menu_open = v;
    }

    pub fn set_outside_listener(&mut self, v: bool) {
        self.outside_listener = v;
    }

    pub fn set_selected_rate(&mut self, rate: PlaybackRate) {
        self.selected_rate = rate;
    }

    pub fn set_playback(&mut self, snapshot: PlaybackSnapshot) {
        self.playback = snapshot;
    }

    pub fn set_mounted(&mut self, v: bool) {
        self.mounted = v;
    }

    pub fn set_torn_down(&mut self, v: bool) {
        self.torn_down = v;
    }
}

impl Default for State {
    fn default() -> Self {
        State::new(PlaybackRate::Normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_is_derived_from_flags() {
        let mut s = State::default();
        assert!(s.visible());

        s.set_idle_expired(true);
        assert!(!s.visible());

        s.set_hovering(true);
        assert!(s.visible());

        s.set_hovering(false);
        s.set_dragging(true);
        assert!(s.visible());
    }

    #[test]
    fn idle_ms_saturates() {
        let mut s = State::default();
        assert_eq!(s.idle_ms(10), None);
        s.set_activity_mark(Some(100));
        assert_eq!(s.idle_ms(50), Some(0));
        assert_eq!(s.idle_ms(400), Some(300));
    }
}
