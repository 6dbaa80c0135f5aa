// Author: Dustin Pilgrim
// License: MIT

mod app;
mod cli;
mod log;

use clap::Parser;

use crate::cli::{Args, Command};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = Args::parse();
    log::init(args.verbose);

    if args.verbose {
        tracing::debug!("debug logging enabled");
    }

    let cfg = playskin::config::load(args.config.as_deref()).map_err(|e| {
        tracing::error!("{e:#}");
        e
    })?;

    match args.command.unwrap_or(Command::Live) {
        Command::Replay { script, json } => app::replay::run(cfg, &script, json),
        Command::Live => app::live::run(cfg).await,
        Command::Rates => {
            app::print_rates(cfg.initial_rate);
            Ok(())
        }
    }
}
