// Author: Dustin Pilgrim
// License: MIT

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration values are out of range.
    ///
    /// Examples:
    /// - hide delay of zero
    /// - frame interval longer than a second
    InvalidConfig(ConfigError),

    /// An event carried a value the surface does not accept.
    ///
    /// Examples:
    /// - selecting a playback rate that is not offered by the menu
    InvalidInput(InputError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The auto-hide delay must be at least one millisecond.
    InvalidHideDelay,

    /// Frame interval must be between 1 and 1000 ms.
    InvalidFrameInterval(u64),

    /// The initial rate is not part of the rate menu.
    UnknownRate(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    UnsupportedRate(f64),
}

// ---------------- Display ----------------

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfig(e) => write!(f, "{e}"),
            Error::InvalidInput(e) => write!(f, "{e}"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidHideDelay =>
                write!(f, "hide delay must be greater than zero"),
            ConfigError::InvalidFrameInterval(ms) =>
                write!(f, "frame interval {ms}ms out of range (1-1000)"),
            ConfigError::UnknownRate(raw) =>
                write!(f, "unknown playback rate: {raw}"),
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::UnsupportedRate(rate) =>
                write!(f, "unsupported playback rate: {rate}"),
        }
    }
}

impl std::error::Error for Error {}
