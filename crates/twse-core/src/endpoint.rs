//! Upstream endpoint descriptors.
//!
//! Every endpoint declares up front which field identifies its records and how
//! an unparsable body should be treated, so neither is guessed at lookup time.

/// Field holding the code a record is selected by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Identifier {
    /// `公司代號`, used by the company disclosure (`/opendata/t187ap*`) reports.
    CompanyCode,
    /// `證券代號`, used by market announcements and most Chinese-schema trading reports.
    StockCode,
    /// `股票代號`, used by the ex-rights and ETF ranking reports.
    StockNo,
    /// `Code`, used by the English-schema `/exchangeReport` endpoints.
    Code,
    /// `權證代號`, used by the warrant reports.
    WarrantCode,
    /// Tries every known identifier field in turn.
    Probe,
}

impl Identifier {
    /// All identifier field names, in probing order.
    pub const ALL_KEYS: &'static [&'static str] = &["公司代號", "股票代號", "證券代號", "Code", "權證代號"];

    /// Field names checked for this identifier.
    pub const fn keys(self) -> &'static [&'static str] {
        match self {
            Self::CompanyCode => &["公司代號"],
            Self::StockCode => &["證券代號"],
            Self::StockNo => &["股票代號"],
            Self::Code => &["Code"],
            Self::WarrantCode => &["權證代號"],
            Self::Probe => Self::ALL_KEYS,
        }
    }
}

/// What an unparsable response body means for an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedPolicy {
    /// Surface it to the caller as a failed query.
    #[default]
    Report,
    /// Known-flaky legacy endpoint: treat as "no data".
    Tolerate,
}

/// A fixed upstream resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Path below the API base URL, starting with `/`.
    pub path: &'static str,
    /// Field used to select a single record.
    pub identifier: Identifier,
    /// Handling of unparsable bodies.
    pub malformed: MalformedPolicy,
}

impl Endpoint {
    /// Creates an endpoint keyed by probing all identifier fields.
    pub const fn new(path: &'static str) -> Self {
        Self {
            path,
            identifier: Identifier::Probe,
            malformed: MalformedPolicy::Report,
        }
    }

    /// Sets the identifier field.
    pub const fn keyed_by(mut self, identifier: Identifier) -> Self {
        self.identifier = identifier;
        self
    }

    /// Marks the endpoint as known to return invalid JSON at times.
    pub const fn tolerate_malformed(mut self) -> Self {
        self.malformed = MalformedPolicy::Tolerate;
        self
    }

    /// Returns true when an unparsable body should read as "no data".
    pub const fn tolerates_malformed(&self) -> bool {
        matches!(self.malformed, MalformedPolicy::Tolerate)
    }

    /// Checks that the path can be appended to a base URL.
    pub fn validate(&self) -> crate::TwseResult<()> {
        if !self.path.starts_with('/') {
            return Err(crate::TwseError::invalid_endpoint(
                self.path,
                "path must start with '/'",
            ));
        }
        if self.path.contains(char::is_whitespace) {
            return Err(crate::TwseError::invalid_endpoint(
                self.path,
                "path must not contain whitespace",
            ));
        }
        Ok(())
    }
}
