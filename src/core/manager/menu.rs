// Author: Dustin Pilgrim
// License: MIT

use crate::core::{
    action::Action,
    error::{Error, InputError},
    playback::Intent,
    rate::PlaybackRate,
    state::State,
};

use super::Manager;

impl Manager {
    pub(super) fn on_trigger_click(&self, state: &mut State) -> Vec<Action> {
        if state.playback().is_live() {
            tracing::debug!("menu: trigger ignored (live stream has no rate menu)");
            return Vec::new();
        }

        if state.menu_open() {
            self.close_menu(state)
        } else {
            self.open_menu(state)
        }
    }

    pub(super) fn on_outside_click(&self, state: &mut State) -> Vec<Action> {
        if !state.menu_open() {
            return Vec::new();
        }
        self.close_menu(state)
    }

    /// Applies the picked rate, then closes. A rate outside the menu is
    /// rejected and the menu stays open.
    pub(super) fn on_item_select(&self, state: &mut State, raw: f64) -> Result<Vec<Action>, Error> {
        if !state.menu_open() {
            tracing::debug!("menu: selection {raw} ignored (menu closed)");
            return Ok(Vec::new());
        }

        let rate = PlaybackRate::from_f64(raw)
            .ok_or(Error::InvalidInput(InputError::UnsupportedRate(raw)))?;

        state.set_selected_rate(rate);

        let mut out = vec![Action::Playback(Intent::SetPlaybackRate { rate })];
        out.extend(self.close_menu(state));
        Ok(out)
    }

    pub(super) fn open_menu(&self, state: &mut State) -> Vec<Action> {
        let mut out = Vec::new();

        if !state.outside_listener() {
            state.set_outside_listener(true);
            out.push(Action::AttachOutsideListener);
        }

        state.set_menu_open(true);
        out.push(Action::MenuChanged { open: true });
        out
    }

    pub(super) fn close_menu(&self, state: &mut State) -> Vec<Action> {
        let mut out = Vec::new();

        if let Some(a) = self.release_listener(state) {
            out.push(a);
        }

        if state.menu_open() {
            state.set_menu_open(false);
            out.push(Action::MenuChanged { open: false });
        }
        out
    }

    pub(super) fn release_listener(&self, state: &mut State) -> Option<Action> {
        if !state.outside_listener() {
            return None;
        }
        state.set_outside_listener(false);
        Some(Action::DetachOutsideListener)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;

    #[test]
    fn trigger_toggles_and_acquires_listener_once() {
        let mgr = Manager::new(Config::default());
        let mut s = State::default();

        assert_eq!(
            mgr.on_trigger_click(&mut s),
            vec![Action::AttachOutsideListener, Action::MenuChanged { open: true }]
        );
        assert!(s.outside_listener());

        assert_eq!(
            mgr.on_trigger_click(&mut s),
            vec![Action::DetachOutsideListener, Action::MenuChanged { open: false }]
        );
        assert!(!s.outside_listener());
    }

    #[test]
    fn bad_rate_keeps_menu_open() {
        let mgr = Manager::new(Config::default());
        let mut s = State::default();
        mgr.open_menu(&mut s);

        let err = mgr.on_item_select(&mut s, 3.0).unwrap_err();
        assert_eq!(err, Error::InvalidInput(InputError::UnsupportedRate(3.0)));
        assert!(s.menu_open());
        assert!(s.outside_listener());
        assert_eq!(s.selected_rate(), PlaybackRate::Normal);
    }

    #[test]
    fn selection_while_closed_is_ignored() {
        let mgr = Manager::new(Config::default());
        let mut s = State::default();

        assert_eq!(mgr.on_item_select(&mut s, 2.0), Ok(Vec::new()));
        assert_eq!(s.selected_rate(), PlaybackRate::Normal);
    }

    #[test]
    fn outside_click_when_closed_is_noop() {
        let mgr = Manager::new(Config::default());
        let mut s = State::default();
        assert!(mgr.on_outside_click(&mut s).is_empty());
    }
}
