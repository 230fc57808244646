//! Configuration file support.
//!
//! Settings live in an INI file, by default at
//! `~/.config/mapstitch/config.ini` (platform config directory). Every key is
//! optional; a missing file yields the defaults. Command-line flags take
//! precedence over anything read here.
//!
//! ```text
//! [output]
//! path = out.png
//! max_pixels = 268435456
//!
//! [logging]
//! level = info
//! directory = /var/log/mapstitch
//!
//! [input]
//! strict = false
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;
use tracing::Level;

/// Default PNG path when neither the file nor the CLI names one.
pub const DEFAULT_OUTPUT: &str = "out.png";

/// Default ceiling on canvas area (16384×16384).
///
/// Map centers can be arbitrarily far apart; this keeps a stray file from
/// requesting a multi-gigabyte canvas.
pub const DEFAULT_MAX_PIXELS: u64 = 1 << 28;

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    /// The text is not valid INI. `path` is unset for in-memory text.
    #[error("Failed to parse {}: {reason}", source_name(.path))]
    Parse {
        path: Option<PathBuf>,
        reason: String,
    },

    /// A key holds a value that cannot be interpreted.
    #[error("Invalid value '{value}' for {key}")]
    InvalidValue { key: &'static str, value: String },
}

/// `[output]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSettings {
    /// Where the PNG is written.
    pub path: PathBuf,
    /// Largest canvas, in pixels, a render may allocate.
    pub max_pixels: u64,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT),
            max_pixels: DEFAULT_MAX_PIXELS,
        }
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Default level when `RUST_LOG` is not set.
    pub level: Level,
    /// Directory for daily rolling log files. Console only when unset.
    pub directory: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            directory: None,
        }
    }
}

/// `[input]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputSettings {
    /// Abort on the first map file that fails to load.
    pub strict: bool,
}

/// The full configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    pub output: OutputSettings,
    pub logging: LoggingSettings,
    pub input: InputSettings,
}

impl ConfigFile {
    /// Load from the default location, or defaults if there is no file.
    pub fn load() -> Result<Self, ConfigError> {
        match config_file_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text).map_err(|e| match e {
            ConfigError::Parse { reason, .. } => ConfigError::Parse {
                path: Some(path.to_path_buf()),
                reason,
            },
            other => other,
        })
    }

    /// Parse INI text. Unknown sections and keys are ignored.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let ini = Ini::load_from_str(text).map_err(|e| ConfigError::Parse {
            path: None,
            reason: e.to_string(),
        })?;
        let mut config = Self::default();

        if let Some(section) = ini.section(Some("output")) {
            if let Some(path) = non_empty(section.get("path")) {
                config.output.path = PathBuf::from(path);
            }
            if let Some(value) = non_empty(section.get("max_pixels")) {
                config.output.max_pixels =
                    value.parse().map_err(|_| ConfigError::InvalidValue {
                        key: "output.max_pixels",
                        value: value.to_string(),
                    })?;
            }
        }

        if let Some(section) = ini.section(Some("logging")) {
            if let Some(value) = non_empty(section.get("level")) {
                config.logging.level = value.parse().map_err(|_| ConfigError::InvalidValue {
                    key: "logging.level",
                    value: value.to_string(),
                })?;
            }
            if let Some(dir) = non_empty(section.get("directory")) {
                config.logging.directory = Some(PathBuf::from(dir));
            }
        }

        if let Some(section) = ini.section(Some("input")) {
            if let Some(value) = non_empty(section.get("strict")) {
                config.input.strict = parse_bool(value).ok_or_else(|| ConfigError::InvalidValue {
                    key: "input.strict",
                    value: value.to_string(),
                })?;
            }
        }

        Ok(config)
    }
}

/// Default config file location: `<config dir>/mapstitch/config.ini`.
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("mapstitch").join("config.ini"))
}

fn source_name(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => "config".to_string(),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
