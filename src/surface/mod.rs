// Author: Dustin Pilgrim
// License: MIT

mod actions;
mod run;

use tokio::sync::{broadcast, mpsc, watch};

use crate::core::{
    config::Config,
    events::Event,
    info::OverlayView,
    manager::Manager,
    manager_msg::SurfaceMsg,
    playback::PlaybackControl,
    state::State,
};
use crate::services::{
    clock::Clock,
    listener::{DocumentClick, OutsideClickListener},
    ticker::FrameTicker,
};

pub type AnyError = Box<dyn std::error::Error + Send + Sync>;

/// Runtime host of one player surface.
///
/// Owns the decision core, the frame ticker and the outside-click listener,
/// and processes every message from a single channel in delivery order.
pub struct Surface {
    manager: Manager,
    state: State,
    clock: Clock,

    tx: mpsc::Sender<SurfaceMsg>,
    document: broadcast::Sender<DocumentClick>,

    ticker: FrameTicker,
    listener: Option<OutsideClickListener>,

    playback: Box<dyn PlaybackControl + Send>,
    view_tx: watch::Sender<OverlayView>,
}

impl Surface {
    pub fn new(
        cfg: Config,
        clock: Clock,
        tx: mpsc::Sender<SurfaceMsg>,
        document: broadcast::Sender<DocumentClick>,
        playback: Box<dyn PlaybackControl + Send>,
    ) -> (Self, watch::Receiver<OverlayView>) {
        let state = State::new(cfg.initial_rate);
        let (view_tx, view_rx) = watch::channel(OverlayView::of(&state));
        let ticker = FrameTicker::new(cfg.frame_interval_ms, clock, tx.clone());

        tracing::debug!(
            "surface: hide_delay={}ms, frame_interval={}ms, clicks_count_as_activity={}",
            cfg.hide_delay_ms,
            cfg.frame_interval_ms,
            cfg.clicks_count_as_activity,
        );

        let surface = Self {
            manager: Manager::new(cfg),
            state,
            clock,
            tx,
            document,
            ticker,
            listener: None,
            playback,
            view_tx,
        };

        (surface, view_rx)
    }

    fn handle_one_event(&mut self, event: Event) {
        match self.manager.handle_event(&mut self.state, event) {
            Ok(actions) => {
                for action in actions {
                    self.exec_action(action);
                }
            }
            Err(e) => tracing::warn!("surface: input rejected: {e}"),
        }

        self.publish_view();
    }

    fn publish_view(&self) {
        let view = OverlayView::of(&self.state);
        self.view_tx.send_if_modified(|current| {
            if *current == view {
                return false;
            }
            *current = view;
            true
        });
    }

    /// Unmounts and releases the ticker and listener. Idempotent.
    fn shutdown(&mut self) {
        let actions = self.manager.teardown(&mut self.state);
        for action in actions {
            self.exec_action(action);
        }

        // a repeated teardown emits nothing; drop the handles regardless
        self.ticker.cancel();
        self.listener = None;
    }
}
