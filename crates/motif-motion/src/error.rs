//! Configuration errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to load a [`MotionConfig`](crate::MotionConfig) from disk.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {0}: {1}")]
    Io(PathBuf, #[source] io::Error),

    #[error("failed to parse config file {0}: {1}")]
    Parse(PathBuf, #[source] toml::de::Error),
}
