// Author: Dustin Pilgrim
// License: MIT

use crate::core::action::Action;
use crate::services::listener::OutsideClickListener;

use super::Surface;

impl Surface {
    pub(super) fn exec_action(&mut self, action: Action) {
        match action {
            Action::RequestFrame => self.ticker.request(),

            Action::CancelFrame => self.ticker.cancel(),

            Action::AttachOutsideListener => {
                // replacing an existing guard drops (and releases) it
                self.listener = Some(OutsideClickListener::attach(
                    &self.document,
                    self.clock,
                    self.tx.clone(),
                ));
            }

            Action::DetachOutsideListener => {
                self.listener = None;
            }

            Action::VisibilityChanged { visible } => {
                tracing::info!("overlay: {}", if visible { "shown" } else { "hidden" });
            }

            Action::MenuChanged { open } => {
                tracing::info!("menu: {}", if open { "open" } else { "closed" });
            }

            Action::Playback(intent) => {
                tracing::info!("playback: {:?}", intent);
                self.playback.dispatch(intent);
            }
        }
    }
}
