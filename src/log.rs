// Author: Dustin Pilgrim
// License: MIT

use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber. `RUST_LOG` is only honored with `--verbose`.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("info")
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
