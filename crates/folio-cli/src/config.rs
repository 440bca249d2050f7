//! Configuration for the `folio` tool.
//!
//! ```toml
//! [acl]
//! lock_timeout_ms = 500
//!
//! [logging]
//! filter = "info,folio_acl=debug"
//! ```

use std::path::Path;

use folio_acl::AclConfig;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default log filter when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Filter forced by `--verbose`.
pub const VERBOSE_LOG_FILTER: &str = "debug";

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolioConfig {
    /// Settings applied to every ACL the tool builds.
    #[serde(default)]
    pub acl: AclConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive.
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

fn default_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl FolioConfig {
    /// Load configuration from an optional path.
    ///
    /// No path means defaults. A path that does not exist is an error, since
    /// the user asked for it explicitly.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let path = Path::new(path);
        if !path.exists() {
            return Err(Error::config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(format!("Invalid config: {e}")))
    }

    /// Pick the log filter: `--verbose`, then `RUST_LOG`, then the file.
    ///
    /// `env_filter` is the value of `RUST_LOG`, if set; a blank value counts
    /// as unset.
    pub fn log_filter(&self, verbose: bool, env_filter: Option<&str>) -> String {
        if verbose {
            return VERBOSE_LOG_FILTER.to_string();
        }
        match env_filter.map(str::trim) {
            Some(filter) if !filter.is_empty() => filter.to_string(),
            _ => self.logging.filter.clone(),
        }
    }
}
