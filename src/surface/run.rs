// Author: Dustin Pilgrim
// License: MIT

use tokio::sync::{mpsc, watch};

use crate::core::{events::Event, manager_msg::SurfaceMsg};

use super::{AnyError, Surface};

impl Surface {
    pub async fn run(
        &mut self,
        mut rx: mpsc::Receiver<SurfaceMsg>,
        mut shutdown: watch::Receiver<bool>,
    ) -> Result<(), AnyError> {
        tracing::info!("surface starting");

        self.handle_one_event(Event::Mounted {
            now_ms: self.clock.now_ms(),
        });

        loop {
            tokio::select! {
                res = shutdown.changed() => {
                    if res.is_err() {
                        tracing::info!("surface stopping (shutdown sender dropped)");
                        break;
                    }
                    if *shutdown.borrow() {
                        tracing::info!("surface stopping (shutdown requested)");
                        break;
                    }
                }

                maybe = rx.recv() => {
                    let Some(msg) = maybe else {
                        tracing::info!("surface stopping (event channel closed)");
                        break;
                    };

                    match msg {
                        SurfaceMsg::Event(event) => {
                            self.handle_one_event(event);
                        }

                        SurfaceMsg::Frame { seq, now_ms } => {
                            if self.ticker.accept(seq) {
                                self.handle_one_event(Event::FrameTick { now_ms });
                            } else {
                                tracing::trace!("ticker: dropped stale frame {seq}");
                            }
                        }

                        SurfaceMsg::GetInfo { reply } => {
                            let snap = self.manager.snapshot(&self.state, self.clock.now_ms());
                            let _ = reply.send(snap);
                        }

                        SurfaceMsg::Teardown { reply } => {
                            tracing::info!("surface stopping (teardown requested)");
                            self.shutdown();
                            let _ = reply.send(());
                            break;
                        }
                    }
                }
            }
        }

        self.shutdown();
        Ok(())
    }
}
