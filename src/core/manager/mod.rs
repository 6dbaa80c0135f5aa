// Author: Dustin Pilgrim
// License: MIT

mod engine;
mod menu;
mod overlay;
mod sampler;
mod snapshot;

pub use sampler::FrameOutcome;

use crate::core::config::Config;

/// Pure decision core of one player surface.
///
/// Holds only configuration; all mutable data lives in [`crate::core::state::State`]
/// so the same manager can be driven by the tokio runtime or by the simulation.
#[derive(Debug, Clone)]
pub struct Manager {
    cfg: Config,
}

impl Manager {
    pub fn new(cfg: Config) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }
}
