//! # TWSE MCP Server
//!
//! Model Context Protocol (MCP) server for the Taiwan Stock Exchange OpenAPI.
//!
//! Every tool is a [`ToolSpec`](tool::ToolSpec): a name, a description, an
//! upstream [`Endpoint`](twse_core::Endpoint) and a [`ToolKind`](tool::ToolKind)
//! saying how the fetched records are selected and rendered. The built-in
//! catalogue registers about a hundred of them, grouped by upstream area.
//!
//! ## Quick Start
//!
//! ```bash
//! # stdio transport (Claude Desktop and other local clients)
//! twse-mcp-server
//!
//! # streamable HTTP transport
//! twse-mcp-server --http --port 8000
//! ```
//!
//! ## Embedding
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use twse_client::{ClientConfig, TwseClient};
//! use twse_mcp::{DisplayConfig, TwseMcpServer};
//!
//! # fn main() -> twse_core::TwseResult<()> {
//! let client = TwseClient::new(&ClientConfig::default())?;
//! let server = TwseMcpServer::new(Arc::new(client), DisplayConfig::default());
//! assert!(server.registry().get("get_company_profile").is_some());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod after_hours;
pub mod catalog;
pub mod config;
pub mod market_index;
pub mod params;
pub mod registry;
pub mod server;
pub mod template;
pub mod tool;

pub use config::{AppConfig, DisplayConfig};
pub use registry::{RegistrationError, ToolProvider, ToolRegistry};
pub use server::TwseMcpServer;
pub use tool::{ToolKind, ToolSpec};

/// Server name for MCP protocol
pub const SERVER_NAME: &str = "twse-mcp";

/// Server version (same as crate version)
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
