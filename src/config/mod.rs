// Author: Dustin Pilgrim
// License: MIT

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

use crate::core::config::Config;

pub mod parser;

/// `$XDG_CONFIG_HOME/playskin/playskin.rune`, or `~/.config/...` without XDG.
pub fn resolve_default_config_path() -> PathBuf {
    let mut path = dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));
    path.push("playskin");
    path.push("playskin.rune");
    path
}

/// Loads the overlay configuration.
///
/// An explicit path must exist and parse. Without one, the default path is
/// tried and built-in defaults are used when it is missing.
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        let cfg = parser::load_from_path(path)
            .wrap_err_with(|| format!("failed to load config {}", path.display()))?;
        tracing::info!("config: loaded {}", path.display());
        return Ok(cfg);
    }

    let path = resolve_default_config_path();
    if !path.exists() {
        tracing::debug!("config: {} not found, using defaults", path.display());
        return Ok(Config::default());
    }

    let cfg = parser::load_from_path(&path)
        .wrap_err_with(|| format!("failed to load config {}", path.display()))?;
    tracing::info!("config: loaded {}", path.display());
    Ok(cfg)
}
