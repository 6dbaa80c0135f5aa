// Author: Dustin Pilgrim
// License: MIT

use tokio::time::Instant;

/// Monotonic millisecond clock shared by a surface and its services.
///
/// Built on tokio's `Instant` so paused-time tests drive it too.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    origin: Instant,
}

impl Clock {
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}
