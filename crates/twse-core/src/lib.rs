//! # TWSE Core
//!
//! Core types and pure logic for the Taiwan Stock Exchange OpenAPI MCP server.
//!
//! This crate provides the building blocks shared by the HTTP client and the
//! MCP tool layer:
//!
//! - **Records**: flat, insertion-ordered field maps returned by the upstream API
//! - **Endpoints**: compile-time descriptors of upstream paths and their identifier fields
//! - **Lookup**: selecting the record for a company, stock or warrant code
//! - **Formatting**: rendering records as `key: value` text for LLM consumption
//! - **Sources**: the [`RecordSource`](source::RecordSource) trait the tools fetch through
//!
//! ## Example
//!
//! ```rust
//! use twse_core::prelude::*;
//!
//! let records = Record::list_from_json(
//!     r#"[{"Code":"2330","Name":"TSMC"},{"Code":"2317","Name":"Hon Hai"}]"#,
//! )
//! .unwrap();
//!
//! let tsmc = locate(&records, "2330", Identifier::Code).unwrap();
//! assert_eq!(format_record(tsmc), "Code: 2330\nName: TSMC");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod endpoint;
pub mod error;
pub mod format;
pub mod locate;
pub mod messages;
pub mod record;
pub mod source;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::endpoint::{Endpoint, Identifier, MalformedPolicy};
    pub use crate::error::{TwseError, TwseResult};
    pub use crate::format::{
        filter_meaningful, format_list_response, format_meaningful, format_record,
        format_records, format_records_with, has_meaningful_data, is_absent, RECORD_SEPARATOR,
    };
    pub use crate::locate::{locate, locate_by_keys};
    pub use crate::record::Record;
    pub use crate::source::{Fetched, RecordSource, StaticSource};
}

// Re-export commonly used types at crate root
pub use endpoint::{Endpoint, Identifier, MalformedPolicy};
pub use error::{TwseError, TwseResult};
pub use record::Record;
pub use source::{Fetched, RecordSource, StaticSource};
