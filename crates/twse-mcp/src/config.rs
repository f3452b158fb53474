//! Server configuration.
//!
//! A single TOML file may carry both sections:
//!
//! ```toml
//! [client]
//! request_interval_secs = 1.0
//!
//! [display]
//! default_limit = 30
//! ```
//!
//! Environment variables override file values.

use serde::{Deserialize, Serialize};
use twse_client::config::{parse_var, ClientConfig};
use twse_core::{TwseError, TwseResult};

/// Environment variable overriding [`DisplayConfig::default_limit`].
pub const ENV_DISPLAY_LIMIT: &str = "DISPLAY_LIMIT";
/// Environment variable overriding [`DisplayConfig::holiday_limit`].
pub const ENV_HOLIDAY_DISPLAY_LIMIT: &str = "HOLIDAY_DISPLAY_LIMIT";

/// How many entries list-style tools show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Entries shown by list summaries.
    #[serde(default = "default_limit")]
    pub default_limit: usize,

    /// Entries shown by the market holiday schedule.
    #[serde(default = "default_holiday_limit")]
    pub holiday_limit: usize,
}

fn default_limit() -> usize {
    20
}

fn default_holiday_limit() -> usize {
    50
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            holiday_limit: default_holiday_limit(),
        }
    }
}

impl DisplayConfig {
    /// Overlays values read through `lookup`, keyed by environment variable name.
    pub fn with_overrides<F>(mut self, lookup: F) -> TwseResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(limit) = parse_var(&lookup, ENV_DISPLAY_LIMIT)? {
            self.default_limit = limit;
        }
        if let Some(limit) = parse_var(&lookup, ENV_HOLIDAY_DISPLAY_LIMIT)? {
            self.holiday_limit = limit;
        }
        Ok(self)
    }
}

/// Complete server configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Upstream client settings.
    #[serde(default)]
    pub client: ClientConfig,

    /// Display limits.
    #[serde(default)]
    pub display: DisplayConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &str) -> TwseResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| TwseError::config(format!("cannot read {path}: {e}")))?;
        toml::from_str(&content).map_err(|e| TwseError::config(format!("{path}: {e}")))
    }

    /// Loads the optional file, then applies the process environment.
    pub fn load(path: Option<&str>) -> TwseResult<Self> {
        let base = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        base.with_overrides(|name| std::env::var(name).ok())
    }

    /// Overlays values read through `lookup` onto both sections.
    pub fn with_overrides<F>(self, lookup: F) -> TwseResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            client: self.client.with_overrides(&lookup)?,
            display: self.display.with_overrides(&lookup)?,
        })
    }
}
