//! Client configuration.
//!
//! Values come from three layers, later ones winning: built-in defaults, an
//! optional TOML file, then `TWSE_*` environment variables.

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use twse_core::{TwseError, TwseResult};

/// Environment variable overriding [`ClientConfig::base_url`].
pub const ENV_BASE_URL: &str = "TWSE_API_BASE_URL";
/// Environment variable overriding [`ClientConfig::user_agent`].
pub const ENV_USER_AGENT: &str = "TWSE_USER_AGENT";
/// Environment variable overriding [`ClientConfig::request_interval_secs`].
pub const ENV_REQUEST_INTERVAL: &str = "TWSE_REQUEST_INTERVAL";
/// Environment variable overriding [`ClientConfig::timeout_secs`].
pub const ENV_TIMEOUT: &str = "TWSE_API_TIMEOUT";
/// Environment variable overriding [`ClientConfig::verify_tls`].
pub const ENV_VERIFY_SSL: &str = "TWSE_VERIFY_SSL";

/// HTTP client configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API root, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Value of the `User-Agent` header.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Minimum seconds between two outbound requests.
    #[serde(default = "default_request_interval")]
    pub request_interval_secs: f64,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: f64,

    /// Verify the server certificate.
    #[serde(default)]
    pub verify_tls: bool,
}

fn default_base_url() -> String {
    "https://openapi.twse.com.tw/v1".to_string()
}

fn default_user_agent() -> String {
    "stock-mcp/1.0".to_string()
}

fn default_request_interval() -> f64 {
    0.5
}

fn default_timeout() -> f64 {
    30.0
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            request_interval_secs: default_request_interval(),
            timeout_secs: default_timeout(),
            verify_tls: false,
        }
    }
}

impl ClientConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &str) -> TwseResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| TwseError::config(format!("cannot read {path}: {e}")))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> TwseResult<Self> {
        toml::from_str(content).map_err(|e| TwseError::config(e.to_string()))
    }

    /// Defaults overlaid with the process environment.
    pub fn from_env() -> TwseResult<Self> {
        Self::default().with_env()
    }

    /// Overlays the process environment.
    pub fn with_env(self) -> TwseResult<Self> {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    /// Overlays values read through `lookup`, keyed by environment variable name.
    pub fn with_overrides<F>(mut self, lookup: F) -> TwseResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_BASE_URL) {
            self.base_url = url;
        }
        if let Some(agent) = lookup(ENV_USER_AGENT) {
            self.user_agent = agent;
        }
        if let Some(secs) = parse_var(&lookup, ENV_REQUEST_INTERVAL)? {
            self.request_interval_secs = secs;
        }
        if let Some(secs) = parse_var(&lookup, ENV_TIMEOUT)? {
            self.timeout_secs = secs;
        }
        if let Some(flag) = lookup(ENV_VERIFY_SSL) {
            self.verify_tls = parse_flag(&flag);
        }
        self.validate()?;
        Ok(self)
    }

    /// Checks that the values can drive a client.
    pub fn validate(&self) -> TwseResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(TwseError::config(format!(
                "base_url must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }
        if !self.request_interval_secs.is_finite() || self.request_interval_secs < 0.0 {
            return Err(TwseError::config(format!(
                "request_interval_secs must be a non-negative number, got {}",
                self.request_interval_secs
            )));
        }
        if !self.timeout_secs.is_finite() || self.timeout_secs <= 0.0 {
            return Err(TwseError::config(format!(
                "timeout_secs must be positive, got {}",
                self.timeout_secs
            )));
        }
        Ok(())
    }

    /// Minimum spacing between requests.
    pub fn request_interval(&self) -> Duration {
        Duration::try_from_secs_f64(self.request_interval_secs).unwrap_or_default()
    }

    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::try_from_secs_f64(self.timeout_secs).unwrap_or(Duration::from_secs(30))
    }
}

/// Reads `name` through `lookup` and parses it, failing on unparsable text.
///
/// Surrounding whitespace is ignored.
pub fn parse_var<T, F>(lookup: &F, name: &str) -> TwseResult<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| TwseError::config(format!("{name}={raw:?}: {e}"))),
    }
}

/// `true`, `1` and `yes` (any case) enable a flag; anything else disables it.
pub fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes")
}
