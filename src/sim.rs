// Author: Dustin Pilgrim
// License: MIT

//! Deterministic driver for a surface: a virtual clock stands in for the
//! display's frame callbacks so timing can be replayed and tested exactly.

use serde::Serialize;

use crate::core::{
    action::Action,
    config::Config,
    error::Error,
    events::Event,
    info::{InfoSnapshot, OverlayView},
    manager::Manager,
    playback::Intent,
    state::State,
};

/// Observable change produced while replaying events.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Transition {
    Visibility { at_ms: u64, visible: bool },
    Menu { at_ms: u64, open: bool },
    Listener { at_ms: u64, attached: bool },
    Playback { at_ms: u64, intent: Intent },
    Rejected { at_ms: u64, reason: String },
}

pub struct Simulation {
    manager: Manager,
    state: State,

    now_ms: u64,
    frame_due: Option<u64>,
    frames_run: u64,

    listener_attached: bool,
    log: Vec<Transition>,
}

impl Simulation {
    pub fn new(cfg: Config) -> Self {
        let state = State::new(cfg.initial_rate);
        Self {
            manager: Manager::new(cfg),
            state,
            now_ms: 0,
            frame_due: None,
            frames_run: 0,
            listener_attached: false,
            log: Vec::new(),
        }
    }

    /// Mounted surface at `at_ms`, the usual starting point.
    pub fn mounted(cfg: Config, at_ms: u64) -> Self {
        let mut sim = Self::new(cfg);
        // Mounted never fails
        let _ = sim.dispatch(Event::Mounted { now_ms: at_ms });
        sim
    }

    /// Runs every frame due up to the event's time, then the event itself.
    pub fn dispatch(&mut self, event: Event) -> Result<(), Error> {
        self.advance_to(event.now_ms());
        self.apply(event)
    }

    /// Moves the clock forward, running due frames in order.
    pub fn advance_to(&mut self, t_ms: u64) {
        while let Some(due) = self.frame_due.filter(|due| *due <= t_ms) {
            self.frame_due = None;
            self.now_ms = due;
            self.frames_run += 1;
            let _ = self.apply(Event::FrameTick { now_ms: due });
        }
        self.now_ms = self.now_ms.max(t_ms);
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn view(&self) -> OverlayView {
        OverlayView::of(&self.state)
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn snapshot(&self) -> InfoSnapshot {
        self.manager.snapshot(&self.state, self.now_ms)
    }

    pub fn frame_pending(&self) -> bool {
        self.frame_due.is_some()
    }

    pub fn frames_run(&self) -> u64 {
        self.frames_run
    }

    pub fn listener_attached(&self) -> bool {
        self.listener_attached
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.log
    }

    pub fn take_transitions(&mut self) -> Vec<Transition> {
        std::mem::take(&mut self.log)
    }

    /// Intents forwarded to the player so far.
    pub fn forwarded(&self) -> Vec<Intent> {
        self.log
            .iter()
            .filter_map(|t| match t {
                Transition::Playback { intent, .. } => Some(*intent),
                _ => None,
            })
            .collect()
    }

    fn apply(&mut self, event: Event) -> Result<(), Error> {
        let at_ms = event.now_ms();

        match self.manager.handle_event(&mut self.state, event) {
            Ok(actions) => {
                for action in actions {
                    self.execute(at_ms, action);
                }
                Ok(())
            }
            Err(e) => {
                self.log.push(Transition::Rejected {
                    at_ms,
                    reason: e.to_string(),
                });
                Err(e)
            }
        }
    }

    fn execute(&mut self, at_ms: u64, action: Action) {
        let interval = self.manager.config().frame_interval_ms;

        match action {
            Action::RequestFrame => {
                if self.frame_due.is_none() {
                    self.frame_due = Some(at_ms + interval);
                }
            }
            Action::CancelFrame => {
                self.frame_due = None;
            }
            Action::AttachOutsideListener => {
                self.listener_attached = true;
                self.log.push(Transition::Listener {
                    at_ms,
                    attached: true,
                });
            }
            Action::DetachOutsideListener => {
                self.listener_attached = false;
                self.log.push(Transition::Listener {
                    at_ms,
                    attached: false,
                });
            }
            Action::VisibilityChanged { visible } => {
                self.log.push(Transition::Visibility { at_ms, visible });
            }
            Action::MenuChanged { open } => {
                self.log.push(Transition::Menu { at_ms, open });
            }
            Action::Playback(intent) => {
                self.log.push(Transition::Playback { at_ms, intent });
            }
        }
    }
}
