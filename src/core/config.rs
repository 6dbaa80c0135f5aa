// Author: Dustin Pilgrim
// License: MIT

use crate::core::{
    error::{ConfigError, Error},
    rate::PlaybackRate,
};

/// Idle window before the overlay auto-hides.
pub const DEFAULT_HIDE_DELAY_MS: u64 = 3000;

/// Roughly one display refresh at 60 Hz.
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 16;

/// Effective surface configuration.
///
/// The loader in `crate::config` builds this from a rune file; everything not
/// set there keeps the defaults below.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Inactivity required before the overlay hides.
    pub hide_delay_ms: u64,

    /// Cadence of the sampling loop while it runs.
    pub frame_interval_ms: u64,

    /// Treat trigger/outside/item clicks and forwarded intents as pointer activity.
    pub clicks_count_as_activity: bool,

    /// Rate shown as selected before the host reports one.
    pub initial_rate: PlaybackRate,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hide_delay_ms: DEFAULT_HIDE_DELAY_MS,
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
            clicks_count_as_activity: true,
            initial_rate: PlaybackRate::Normal,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), Error> {
        if self.hide_delay_ms == 0 {
            return Err(Error::InvalidConfig(ConfigError::InvalidHideDelay));
        }
        if !(1..=1000).contains(&self.frame_interval_ms) {
            return Err(Error::InvalidConfig(ConfigError::InvalidFrameInterval(
                self.frame_interval_ms,
            )));
        }
        Ok(())
    }
}
