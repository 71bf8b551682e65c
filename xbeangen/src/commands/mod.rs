//! Command handlers for the xbeangen CLI.
//!
//! Every handler returns `Ok(true)` on success and `Ok(false)` when it ran
//! but found problems the exit code should report.

pub mod generate;
pub mod info;
pub mod init;
pub mod validate;

use crate::cli::Cli;
use tracing::{debug, info};
use xbeangen_core::config::XbeanConfig;
use xbeangen_core::error::Result;

/// Loads `--config` if given, else searches upward for `xbeangen.toml`.
pub fn load_config(cli: &Cli) -> Result<XbeanConfig> {
    match &cli.config {
        Some(path) => {
            debug!("Using configuration file from command line: {:?}", path);
            XbeanConfig::from_path(path)
        }
        None => {
            let config = XbeanConfig::new()?;
            info!("Configuration loaded successfully");
            Ok(config)
        }
    }
}
