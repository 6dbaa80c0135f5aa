// Author: Dustin Pilgrim
// License: MIT

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "playskin",
    version = env!("CARGO_PKG_VERSION"),
    about = "Auto-hiding video player control overlay"
)]
pub struct Args {
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(short, long, action)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    #[command(about = "Replay a timed event script on a virtual clock")]
    Replay {
        /// Script file, or `-` for stdin
        script: PathBuf,

        #[arg(long)]
        json: bool,
    },

    #[command(about = "Drive a live overlay from stdin in real time")]
    Live,

    #[command(about = "List the playback rates offered by the menu")]
    Rates,
}
