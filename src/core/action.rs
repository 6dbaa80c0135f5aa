// Author: Dustin Pilgrim
// License: MIT

use crate::core::playback::Intent;

/// Side effects requested by the manager; the runtime (or the simulation)
/// decides how to carry them out.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Schedule the next sampling-loop frame.
    RequestFrame,

    /// Drop the pending frame; the loop is stopped.
    CancelFrame,

    /// Start listening for document-root clicks (menu opened).
    AttachOutsideListener,

    /// Release the document-root listener (menu closed or surface gone).
    DetachOutsideListener,

    /// Derived overlay visibility flipped.
    VisibilityChanged {
        visible: bool,
    },

    /// Rate menu opened or closed.
    MenuChanged {
        open: bool,
    },

    /// Forward user intent to the host player.
    Playback(Intent),
}
