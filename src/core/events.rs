// Author: Dustin Pilgrim
// License: MIT

use crate::core::playback::{Intent, PlaybackSnapshot};

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Surface attached; starts the first idle window.
    Mounted {
        now_ms: u64,
    },
    /// Surface destroyed; releases the frame loop and the outside-click listener.
    Unmounted {
        now_ms: u64,
    },

    /// One display refresh of the sampling loop.
    FrameTick {
        now_ms: u64,
    },

    /// Pointer moved anywhere over the surface.
    PointerMove {
        now_ms: u64,
    },

    /// Pointer entered / left the controls' own hit region.
    HoverEnter {
        now_ms: u64,
    },
    HoverLeave {
        now_ms: u64,
    },

    /// Scrub handle grabbed / released.
    DragStart {
        now_ms: u64,
    },
    DragEnd {
        now_ms: u64,
    },

    /// Click on the rate menu trigger.
    TriggerClick {
        now_ms: u64,
    },
    /// Click on the document root outside the trigger and the menu items.
    OutsideClick {
        now_ms: u64,
    },
    /// Menu item picked; `rate` is the raw item key.
    ItemSelect {
        rate: f64,
        now_ms: u64,
    },

    PlaybackChanged {
        snapshot: PlaybackSnapshot,
        now_ms: u64,
    },

    Intent {
        intent: Intent,
        now_ms: u64,
    },
}

impl Event {
    pub fn now_ms(&self) -> u64 {
        match self {
            Event::Mounted { now_ms }
            | Event::Unmounted { now_ms }
            | Event::FrameTick { now_ms }
            | Event::PointerMove { now_ms }
            | Event::HoverEnter { now_ms }
            | Event::HoverLeave { now_ms }
            | Event::DragStart { now_ms }
            | Event::DragEnd { now_ms }
            | Event::TriggerClick { now_ms }
            | Event::OutsideClick { now_ms }
            | Event::ItemSelect { now_ms, .. }
            | Event::PlaybackChanged { now_ms, .. }
            | Event::Intent { now_ms, .. } => *now_ms,
        }
    }

    /// Clicks that also count as pointer activity for the overlay.
    pub fn is_click(&self) -> bool {
        matches!(
            self,
            Event::TriggerClick { .. }
                | Event::OutsideClick { .. }
                | Event::ItemSelect { .. }
                | Event::Intent { .. }
        )
    }
}
