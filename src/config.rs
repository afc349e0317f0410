//! Configuration System
//!
//! Optional TOML configuration file with `INTACT_*` environment variable
//! overrides. Chunk size and worker count are explicit configuration, not
//! hidden defaults, so tests can exercise the hasher with tiny chunks.

use crate::error::IntactError;
use crate::logging::LoggingConfig;
use crate::tree::hasher::DEFAULT_CHUNK_SIZE;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntactConfig {
    /// Scan and hashing settings
    #[serde(default)]
    pub scan: ScanConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Scan and hashing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Streaming read size in bytes for hashing
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Hashing worker pool size (None = one worker per logical CPU)
    #[serde(default)]
    pub workers: Option<usize>,
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            workers: None,
        }
    }
}

impl IntactConfig {
    /// Load configuration from an optional TOML file plus `INTACT_*`
    /// environment overrides (e.g. `INTACT_SCAN__CHUNK_SIZE=65536`).
    pub fn load(config_file: Option<&Path>) -> Result<Self, IntactError> {
        let mut builder = Config::builder();
        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path));
        }
        let settings = builder
            .add_source(
                Environment::with_prefix("INTACT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}
