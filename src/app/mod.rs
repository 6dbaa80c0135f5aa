// Author: Dustin Pilgrim
// License: MIT

pub mod live;
pub mod replay;
pub mod script;

use playskin::core::rate::PlaybackRate;

pub fn print_rates(selected: PlaybackRate) {
    for rate in PlaybackRate::ALL {
        let marker = if rate == selected { "*" } else { " " };
        println!("{marker} {rate}x");
    }
}
