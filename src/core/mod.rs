// Author: Dustin Pilgrim
// License: MIT

pub mod action;
pub mod config;
pub mod error;
pub mod events;
pub mod info;
pub mod manager;
pub mod manager_msg;
pub mod playback;
pub mod rate;
pub mod state;

#[cfg(test)]
mod manager_tests;
