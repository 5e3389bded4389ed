use crate::consts;
use serde::Deserialize;
use std::num::NonZeroU64;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file.  Command-line flags
/// override individual fields after loading.
#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct Config {
    /// What kind of border ring the arena is built with
    pub(crate) border: BorderMode,

    /// Whether to scatter obstacles over the arena
    pub(crate) obstacles: bool,

    /// Base tick period in milliseconds; the live period is this divided by
    /// the current level
    pub(crate) tick_ms: NonZeroU64,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("sidewinder").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist
    /// and `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            border: BorderMode::default(),
            obstacles: false,
            tick_ms: NonZeroU64::new(consts::BASE_TICK_MS).expect("BASE_TICK_MS should be nonzero"),
        }
    }
}

/// The two interchangeable border variants
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum BorderMode {
    /// Border cells teleport the snake's head to the opposite edge
    #[default]
    Warp,

    /// Border cells end the round on contact
    Wall,
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}
