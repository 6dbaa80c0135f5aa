// Author: Dustin Pilgrim
// License: MIT

pub mod config;
pub mod core;
pub mod services;
pub mod sim;
pub mod surface;
