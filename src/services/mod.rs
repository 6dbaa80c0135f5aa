// Author: Dustin Pilgrim
// License: MIT

pub mod clock;
pub mod listener;
pub mod ticker;
