//! Scanner configuration.
//!
//! Options can be built in code or loaded from a TOML file such as:
//!
//! ```toml
//! echo_source = true
//! trace_scan = true
//! buffer_capacity = 255
//! max_token_len = 40
//! ```
//!
//! Missing fields take their defaults.

use std::{fs, path::Path};

use serde::Deserialize;
use thiserror::Error;

use crate::lexer::{source::DEFAULT_BUFFER_CAPACITY, tokens::MAX_TOKEN_LEN};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "tiny-scan.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ScanConfig {
    /// Echo every source line to the listing as it is read.
    pub echo_source: bool,

    /// Write every token to the listing as it is produced.
    pub trace_scan: bool,

    /// Characters held by the line buffer per refill.
    pub buffer_capacity: usize,

    /// Longest lexeme kept, in characters; longer ones are silently truncated.
    pub max_token_len: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            echo_source: false,
            trace_scan: false,
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
            max_token_len: MAX_TOKEN_LEN,
        }
    }
}

impl ScanConfig {
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: display.clone(),
            source,
        })?;

        let config: ScanConfig = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: display,
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.buffer_capacity == 0 {
            return Err(ConfigError::Invalid(String::from(
                "buffer_capacity must be at least 1",
            )));
        }
        if self.max_token_len == 0 {
            return Err(ConfigError::Invalid(String::from(
                "max_token_len must be at least 1",
            )));
        }
        Ok(())
    }

    pub fn with_echo_source(mut self, echo_source: bool) -> Self {
        self.echo_source = echo_source;
        self
    }

    pub fn with_trace_scan(mut self, trace_scan: bool) -> Self {
        self.trace_scan = trace_scan;
        self
    }
}
