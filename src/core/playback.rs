// Author: Dustin Pilgrim
// License: MIT

use serde::{Deserialize, Serialize};

use crate::core::rate::PlaybackRate;

/// Read-only playback state supplied by the host player.
///
/// A negative `duration` marks a live stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackSnapshot {
    pub paused: bool,
    pub ended: bool,
    pub seeking: bool,
    pub waiting: bool,
    pub loading: bool,

    pub duration: f64,
    pub current_time: f64,

    /// Buffered `(start, end)` ranges in seconds.
    pub buffered: Vec<(f64, f64)>,

    pub volume: f64,
    pub muted: bool,
    pub playback_rate: f64,

    pub fullscreen: bool,
    pub pip_enabled: bool,
    pub pip: bool,
}

impl Default for PlaybackSnapshot {
    fn default() -> Self {
        Self {
            paused: true,
            ended: false,
            seeking: false,
            waiting: false,
            loading: false,
            duration: 0.0,
            current_time: 0.0,
            buffered: Vec::new(),
            volume: 1.0,
            muted: false,
            playback_rate: 1.0,
            fullscreen: false,
            pip_enabled: false,
            pip: false,
        }
    }
}

impl PlaybackSnapshot {
    pub fn is_live(&self) -> bool {
        self.duration < 0.0
    }
}

/// User intent forwarded to the host player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "intent", rename_all = "kebab-case")]
pub enum Intent {
    Play,
    Pause,
    SeekTo { seconds: f64 },
    SetVolume { level: f64 },
    ToggleMute,
    SetPlaybackRate { rate: PlaybackRate },
    EnterFullscreen,
    ExitFullscreen,
    EnterPictureInPicture,
    ExitPictureInPicture,
}

/// Host capability receiving forwarded intents.
pub trait PlaybackControl {
    fn play(&mut self);
    fn pause(&mut self);
    fn seek_to(&mut self, seconds: f64);
    fn set_volume(&mut self, level: f64);
    fn toggle_mute(&mut self);
    fn set_playback_rate(&mut self, rate: PlaybackRate);
    fn enter_fullscreen(&mut self);
    fn exit_fullscreen(&mut self);
    fn enter_picture_in_picture(&mut self);
    fn exit_picture_in_picture(&mut self);

    fn dispatch(&mut self, intent: Intent) {
        match intent {
            Intent::Play => self.play(),
            Intent::Pause => self.pause(),
            Intent::SeekTo { seconds } => self.seek_to(seconds),
            Intent::SetVolume { level } => self.set_volume(level),
            Intent::ToggleMute => self.toggle_mute(),
            Intent::SetPlaybackRate { rate } => self.set_playback_rate(rate),
            Intent::EnterFullscreen => self.enter_fullscreen(),
            Intent::ExitFullscreen => self.exit_fullscreen(),
            Intent::EnterPictureInPicture => self.enter_picture_in_picture(),
            Intent::ExitPictureInPicture => self.exit_picture_in_picture(),
        }
    }
}

/// Which transport controls the current playback state calls for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ControlsModel {
    pub show_play: bool,
    pub show_pause: bool,
    pub show_muted_icon: bool,
    pub is_live: bool,
    pub show_rate_menu: bool,
    pub show_pip: bool,
    pub show_spinner: bool,
    pub show_loading: bool,
}

impl ControlsModel {
    pub fn derive(s: &PlaybackSnapshot) -> Self {
        let is_live = s.is_live();
        Self {
            show_play: s.paused || s.ended,
            show_pause: !s.paused && !s.ended,
            show_muted_icon: s.muted || s.volume == 0.0,
            is_live,
            show_rate_menu: !is_live,
            show_pip: s.pip_enabled,
            show_spinner: (s.waiting || s.seeking) && !s.loading,
            show_loading: s.loading,
        }
    }
}

/// Normalizes an intent against the current snapshot.
///
/// Returns `None` when the control behind the intent is not offered
/// (seeking a live stream, picture-in-picture without support).
pub fn admit_intent(intent: Intent, s: &PlaybackSnapshot) -> Option<Intent> {
    match intent {
        Intent::SeekTo { seconds } => {
            if s.is_live() || !seconds.is_finite() {
                return None;
            }
            Some(Intent::SeekTo {
                seconds: seconds.clamp(0.0, s.duration.max(0.0)),
            })
        }
        Intent::SetVolume { level } => {
            if !level.is_finite() {
                return None;
            }
            Some(Intent::SetVolume {
                level: level.clamp(0.0, 1.0),
            })
        }
        Intent::SetPlaybackRate { .. } if s.is_live() => None,
        Intent::EnterPictureInPicture | Intent::ExitPictureInPicture if !s.pip_enabled => None,
        other => Some(other),
    }
}
