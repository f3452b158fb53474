//! Record source abstraction.
//!
//! Tools fetch through [`RecordSource`] so the HTTP client can be swapped for
//! an in-memory source in tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::error::{TwseError, TwseResult};
use crate::record::Record;

/// Outcome of a fetch that reached the upstream API.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched {
    /// Body decoded (possibly to no records).
    Records(Vec<Record>),
    /// Body was not valid JSON.
    Malformed {
        /// Parser message.
        reason: String,
    },
}

impl Fetched {
    /// Decodes a response body.
    pub fn from_body(body: &str) -> Self {
        match Record::list_from_json(body) {
            Ok(records) => Self::Records(records),
            Err(e) => Self::Malformed {
                reason: e.to_string(),
            },
        }
    }

    /// Returns the records, reading a malformed body as no data.
    pub fn into_records(self) -> Vec<Record> {
        match self {
            Self::Records(records) => records,
            Self::Malformed { .. } => Vec::new(),
        }
    }

    /// Returns true if the body could not be decoded.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }
}

/// Anything that can produce the records behind an endpoint path.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetches and decodes one endpoint.
    async fn fetch(&self, path: &str) -> TwseResult<Fetched>;

    /// Fetches one endpoint, reading a malformed body as an empty list.
    async fn fetch_records(&self, path: &str) -> TwseResult<Vec<Record>> {
        Ok(self.fetch(path).await?.into_records())
    }

    /// Fetches one endpoint and keeps only its last `count` records.
    async fn fetch_latest(&self, path: &str, count: usize) -> TwseResult<Vec<Record>> {
        let mut records = self.fetch_records(path).await?;
        let skip = records.len().saturating_sub(count);
        Ok(records.split_off(skip))
    }
}

/// In-memory source serving canned responses.
///
/// Paths without a response answer with HTTP 404, like the live API does.
#[derive(Debug, Default)]
pub struct StaticSource {
    responses: HashMap<String, TwseResult<Fetched>>,
    calls: AtomicUsize,
}

impl StaticSource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serves `records` at `path`.
    pub fn with_records(mut self, path: &str, records: Vec<Record>) -> Self {
        self.responses
            .insert(path.to_string(), Ok(Fetched::Records(records)));
        self
    }

    /// Serves a raw body at `path`, decoded as the HTTP client would.
    pub fn with_body(mut self, path: &str, body: &str) -> Self {
        self.responses
            .insert(path.to_string(), Ok(Fetched::from_body(body)));
        self
    }

    /// Fails requests for `path` with `error`.
    pub fn with_error(mut self, path: &str, error: TwseError) -> Self {
        self.responses.insert(path.to_string(), Err(error));
        self
    }

    /// Number of fetches served so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl RecordSource for StaticSource {
    async fn fetch(&self, path: &str) -> TwseResult<Fetched> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.responses
            .get(path)
            .cloned()
            .unwrap_or_else(|| Err(TwseError::http_status(404, path)))
    }
}
