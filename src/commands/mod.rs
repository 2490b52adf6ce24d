//! Subcommand handlers for the speedctl binary.

pub mod completions;
pub mod config;
pub mod interactive;
pub mod run;

use anyhow::Result;
use std::path::{Path, PathBuf};

use speedctl::cli::VideoArgs;
use speedctl::config::Config;
use speedctl::session::{Session, VideoPresence};

/// Config path: `--config` if given, else the default resolution.
pub fn config_path(config_override: Option<&Path>) -> Result<PathBuf> {
    match config_override {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::config_path(),
    }
}

/// Load the effective configuration.
pub fn load_config(config_override: Option<&Path>) -> Result<Config> {
    Config::load_from(&config_path(config_override)?)
}

/// Build and attach a session from config and command-line video flags.
pub fn start_session(video: &VideoArgs, config: &Config) -> Session {
    let presence = video
        .presence()
        .unwrap_or_else(|| VideoPresence::from_config(&config.video));
    let mut session = Session::from_config(config, presence);
    session.attach();
    session
}
