//! CLI error type.
//!
//! Every variant is reported on stderr and exits with status 1.

use std::io;
use std::path::PathBuf;

use mapstitch::config::ConfigError;
use mapstitch::loader::LoadError;
use mapstitch::logging::LoggingError;
use mapstitch::output::OutputError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// A command-line path does not exist or cannot be listed.
    #[error("Cannot read {}: {source}", .path.display())]
    Input { path: PathBuf, source: io::Error },

    /// A map file failed under `--strict`.
    #[error("Failed to load map {0}")]
    Load(#[from] LoadError),

    #[error("{0}")]
    Output(#[from] OutputError),

    #[error("No overworld maps found in the given paths")]
    NoTiles,

    #[error(
        "Canvas of {width}x{height} exceeds the limit of {max} pixels \
         (raise output.max_pixels in config.ini)"
    )]
    CanvasTooLarge { width: u64, height: u64, max: u64 },

    #[error("{failed} of {total} map files could not be read")]
    Unreadable { failed: usize, total: usize },
}
