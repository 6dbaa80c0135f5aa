// Author: Dustin Pilgrim
// License: MIT

use std::fmt;

use serde::Serialize;

/// The closed set of playback rates offered by the rate menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum PlaybackRate {
    #[serde(rename = "0.25")]
    Quarter,
    #[serde(rename = "0.5")]
    Half,
    #[default]
    #[serde(rename = "1")]
    Normal,
    #[serde(rename = "1.25")]
    OneAndQuarter,
    #[serde(rename = "1.5")]
    OneAndHalf,
    #[serde(rename = "2")]
    Double,
}

impl PlaybackRate {
    /// Menu order, slowest first.
    pub const ALL: [PlaybackRate; 6] = [
        PlaybackRate::Quarter,
        PlaybackRate::Half,
        PlaybackRate::Normal,
        PlaybackRate::OneAndQuarter,
        PlaybackRate::OneAndHalf,
        PlaybackRate::Double,
    ];

    pub fn as_f64(self) -> f64 {
        match self {
            PlaybackRate::Quarter => 0.25,
            PlaybackRate::Half => 0.5,
            PlaybackRate::Normal => 1.0,
            PlaybackRate::OneAndQuarter => 1.25,
            PlaybackRate::OneAndHalf => 1.5,
            PlaybackRate::Double => 2.0,
        }
    }

    /// Exact match only; every member is representable in binary floating point.
    pub fn from_f64(value: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_f64() == value)
    }

    /// Parses menu keys such as `"1.25"`, `"2"` or `"0.5x"`.
    pub fn parse(raw: &str) -> Option<Self> {
        let s = raw.trim();
        let s = s
            .strip_suffix('x')
            .or_else(|| s.strip_suffix('X'))
            .unwrap_or(s);
        s.parse::<f64>().ok().and_then(Self::from_f64)
    }
}

impl fmt::Display for PlaybackRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_f64())
    }
}
