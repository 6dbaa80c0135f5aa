// Author: Dustin Pilgrim
// License: MIT

use tokio::sync::oneshot;

use crate::core::{events::Event, info::InfoSnapshot};

#[derive(Debug)]
pub enum SurfaceMsg {
    Event(Event),

    /// Frame fired by the ticker. `seq` identifies the request so frames
    /// from a cancelled request can be dropped.
    Frame { seq: u64, now_ms: u64 },

    GetInfo { reply: oneshot::Sender<InfoSnapshot> },

    /// Unmount the surface and stop its runtime loop.
    Teardown { reply: oneshot::Sender<()> },
}
