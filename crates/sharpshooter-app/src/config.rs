//! Host configuration loading.
//!
//! The simulation config comes from an optional JSON file. Any problem with
//! the file is logged and the defaults are used instead.

use std::path::Path;

use tracing::{info, warn};

use sharpshooter_sim::SimConfig;

/// Environment variable naming the JSON config file.
pub const CONFIG_ENV_VAR: &str = "SHARPSHOOTER_CONFIG";

/// Load the config named by `SHARPSHOOTER_CONFIG`, or the defaults when unset.
pub fn load_config() -> SimConfig {
    match std::env::var_os(CONFIG_ENV_VAR) {
        Some(path) => load_config_from(Path::new(&path)),
        None => SimConfig::default(),
    }
}

/// Read and validate `path`, falling back to defaults on any error.
pub fn load_config_from(path: &Path) -> SimConfig {
    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(err) => {
            warn!(path = %path.display(), %err, "could not read config, using defaults");
            return SimConfig::default();
        }
    };
    match SimConfig::from_json_str(&json) {
        Ok(config) => {
            info!(path = %path.display(), seed = config.seed, "loaded config");
            config
        }
        Err(err) => {
            warn!(path = %path.display(), %err, "invalid config, using defaults");
            SimConfig::default()
        }
    }
}
