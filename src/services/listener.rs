// Author: Dustin Pilgrim
// License: MIT

use tokio::sync::broadcast::{self, error::RecvError};
use tokio::sync::mpsc::Sender;
use tokio::task::JoinHandle;

use crate::core::{events::Event, manager_msg::SurfaceMsg};
use crate::services::clock::Clock;

/// Where a click on the document root landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Trigger,
    MenuItem,
    Elsewhere,
}

/// A click as published by the host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentClick {
    pub target: ClickTarget,
}

/// Document-root click subscription, held only while the rate menu is open.
///
/// Dropping the guard releases the subscription; nothing is forwarded after.
pub struct OutsideClickListener {
    task: JoinHandle<()>,
}

impl OutsideClickListener {
    pub fn attach(
        document: &broadcast::Sender<DocumentClick>,
        clock: Clock,
        tx: Sender<SurfaceMsg>,
    ) -> Self {
        // subscribe before returning so no click after attach is missed
        let mut rx = document.subscribe();

        let task = tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(click) => {
                        if click.target != ClickTarget::Elsewhere {
                            continue;
                        }

                        let ev = Event::OutsideClick {
                            now_ms: clock.now_ms(),
                        };
                        if tx.send(SurfaceMsg::Event(ev)).await.is_err() {
                            break;
                        }
                    }
                    Err(RecvError::Lagged(n)) => {
                        tracing::warn!("listener: missed {n} document clicks");
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        });

        tracing::debug!("listener: outside-click listener attached");
        Self { task }
    }
}

impl Drop for OutsideClickListener {
    fn drop(&mut self) {
        self.task.abort();
        tracing::debug!("listener: outside-click listener released");
    }
}
