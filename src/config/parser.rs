// Author: Dustin Pilgrim
// License: MIT

use std::path::Path;

use eyre::{Result, eyre};
use rune_cfg::RuneConfig;

use crate::core::{
    config::Config,
    error::{ConfigError, Error},
    rate::PlaybackRate,
};

pub fn load_from_path(path: &Path) -> Result<Config> {
    let config = RuneConfig::from_file(path)
        .map_err(|e| eyre!("failed to parse {}: {}", path.display(), e))?;
    parse_playskin_config(&config)
}

pub fn load_from_str(source: &str) -> Result<Config> {
    let config =
        RuneConfig::from_str(source).map_err(|e| eyre!("failed to parse config: {}", e))?;
    parse_playskin_config(&config)
}

/// Reads `playskin.*` keys over the defaults and validates the result.
pub fn parse_playskin_config(config: &RuneConfig) -> Result<Config> {
    let defaults = Config::default();

    let hide_delay_ms = config
        .get::<u64>("playskin.hide_delay_ms")
        .or_else(|_| config.get::<u64>("playskin.hide-delay-ms"))
        .unwrap_or(defaults.hide_delay_ms);

    let frame_interval_ms = config
        .get::<u64>("playskin.frame_interval_ms")
        .or_else(|_| config.get::<u64>("playskin.frame-interval-ms"))
        .unwrap_or(defaults.frame_interval_ms);

    let clicks_count_as_activity = config
        .get::<bool>("playskin.clicks_count_as_activity")
        .or_else(|_| config.get::<bool>("playskin.clicks-count-as-activity"))
        .unwrap_or(defaults.clicks_count_as_activity);

    let initial_rate = match config
        .get::<String>("playskin.initial_rate")
        .or_else(|_| config.get::<String>("playskin.initial-rate"))
    {
        Ok(raw) => PlaybackRate::parse(&raw)
            .ok_or_else(|| Error::InvalidConfig(ConfigError::UnknownRate(raw)))?,
        Err(_) => defaults.initial_rate,
    };

    let cfg = Config {
        hide_delay_ms,
        frame_interval_ms,
        clicks_count_as_activity,
        initial_rate,
    };
    cfg.validate()?;

    tracing::debug!(
        "config: hide_delay={}ms frame_interval={}ms clicks_count_as_activity={} initial_rate={}x",
        cfg.hide_delay_ms,
        cfg.frame_interval_ms,
        cfg.clicks_count_as_activity,
        cfg.initial_rate,
    );

    Ok(cfg)
}
