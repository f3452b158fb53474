//! # TWSE Client
//!
//! HTTP access to the Taiwan Stock Exchange OpenAPI.
//!
//! - [`TwseClient`]: GETs an endpoint path, decodes the body and normalizes it
//!   into records. Implements [`RecordSource`](twse_core::RecordSource).
//! - [`RateLimiter`]: keeps a minimum interval between outbound requests,
//!   shared by every clone of a client.
//! - [`ClientConfig`]: base URL, user agent, interval, timeout and TLS
//!   settings from TOML and environment variables.
//!
//! ```no_run
//! use twse_client::{ClientConfig, TwseClient};
//! use twse_core::RecordSource;
//!
//! # async fn run() -> twse_core::TwseResult<()> {
//! let client = TwseClient::new(&ClientConfig::from_env()?)?;
//! let profiles = client.fetch_records("/opendata/t187ap03_L").await?;
//! println!("{} listed companies", profiles.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod config;
pub mod rate_limit;

pub use client::TwseClient;
pub use config::ClientConfig;
pub use rate_limit::RateLimiter;
