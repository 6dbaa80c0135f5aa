// Author: Dustin Pilgrim
// License: MIT

use tokio::sync::mpsc::Sender;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration};

use crate::core::manager_msg::SurfaceMsg;
use crate::services::clock::Clock;

/// One-shot frame scheduler backing the sampling loop.
///
/// Each `request` arms a single frame; the surface re-requests after every
/// frame it accepts. At most one frame is pending at a time.
pub struct FrameTicker {
    interval: Duration,
    clock: Clock,
    tx: Sender<SurfaceMsg>,

    seq: u64,
    pending: Option<(u64, JoinHandle<()>)>,
}

impl FrameTicker {
    pub fn new(interval_ms: u64, clock: Clock, tx: Sender<SurfaceMsg>) -> Self {
        Self {
            interval: Duration::from_millis(interval_ms),
            clock,
            tx,
            seq: 0,
            pending: None,
        }
    }

    pub fn request(&mut self) {
        if self.pending.is_some() {
            return;
        }

        self.seq = self.seq.wrapping_add(1);
        let seq = self.seq;
        let interval = self.interval;
        let clock = self.clock;
        let tx = self.tx.clone();

        let handle = tokio::spawn(async move {
            sleep(interval).await;

            let now_ms = clock.now_ms();
            // If the surface is gone, stop.
            if tx.send(SurfaceMsg::Frame { seq, now_ms }).await.is_err() {
                tracing::warn!("ticker stopping (receiver dropped)");
            }
        });

        self.pending = Some((seq, handle));
    }

    pub fn cancel(&mut self) {
        if let Some((_, handle)) = self.pending.take() {
            handle.abort();
        }
    }

    /// Claims a delivered frame. False for frames of a cancelled request.
    pub fn accept(&mut self, seq: u64) -> bool {
        match self.pending {
            Some((pending, _)) if pending == seq => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    #[cfg(test)]
    fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Drop for FrameTicker {
    fn drop(&mut self) {
        self.cancel();
    }
}
