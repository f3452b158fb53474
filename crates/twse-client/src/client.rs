//! HTTP fetch primitive.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use tracing::{debug, warn};
use twse_core::{Fetched, RecordSource, TwseError, TwseResult};

use crate::config::ClientConfig;
use crate::rate_limit::RateLimiter;

/// Client for the TWSE OpenAPI.
///
/// Cloning is cheap: clones share the connection pool and the rate limiter.
#[derive(Debug, Clone)]
pub struct TwseClient {
    http: reqwest::Client,
    base_url: String,
    limiter: Arc<RateLimiter>,
}

impl TwseClient {
    /// Builds a client from validated configuration.
    pub fn new(config: &ClientConfig) -> TwseResult<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        let agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|e| TwseError::config(format!("invalid user agent: {e}")))?;
        headers.insert(USER_AGENT, agent);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .danger_accept_invalid_certs(!config.verify_tls)
            .build()
            .map_err(|e| TwseError::config(format!("cannot build HTTP client: {e}")))?;

        if !config.verify_tls {
            warn!(base_url = %config.base_url, "TLS certificate verification is disabled");
        }

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            limiter: Arc::new(RateLimiter::new(config.request_interval())),
        })
    }

    /// Replaces the rate limiter, e.g. to share one across clients.
    #[must_use]
    pub fn with_rate_limiter(mut self, limiter: Arc<RateLimiter>) -> Self {
        self.limiter = limiter;
        self
    }

    /// The limiter gating this client.
    pub fn rate_limiter(&self) -> &Arc<RateLimiter> {
        &self.limiter
    }

    /// Absolute URL for an endpoint path.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GETs `path` and returns the body as UTF-8 text.
    ///
    /// The response is always decoded as UTF-8 whatever charset it declares.
    pub async fn get_text(&self, path: &str) -> TwseResult<String> {
        let url = self.url_for(path);
        self.limiter.acquire().await;
        debug!(%url, "fetching");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| request_error(&url, &e))?;

        let status = response.status();
        if !status.is_success() {
            debug!(%url, status = status.as_u16(), "upstream returned an error status");
            return Err(TwseError::http_status(status.as_u16(), url));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| request_error(&url, &e))?;
        let text = String::from_utf8_lossy(&bytes);
        Ok(text.trim_start_matches('\u{feff}').to_string())
    }
}

fn request_error(url: &str, e: &reqwest::Error) -> TwseError {
    if e.is_timeout() {
        TwseError::timeout(url)
    } else {
        TwseError::transport(url, e.to_string())
    }
}

#[async_trait]
impl RecordSource for TwseClient {
    async fn fetch(&self, path: &str) -> TwseResult<Fetched> {
        let body = self.get_text(path).await?;
        let fetched = Fetched::from_body(&body);
        match &fetched {
            Fetched::Records(records) => debug!(path, records = records.len(), "decoded"),
            Fetched::Malformed { reason } => debug!(path, %reason, "body is not valid JSON"),
        }
        Ok(fetched)
    }
}
