//! Data-driven tools.
//!
//! A [`ToolSpec`] names an endpoint and a [`ToolKind`]; [`ToolSpec::invoke`]
//! runs fetch, locate and format for it. Invocation never fails: transport
//! problems come back as `查詢失敗: ...` text.

use std::sync::Arc;

use rmcp::model::JsonObject;
use tracing::{debug, warn};
use twse_core::format::{
    filter_meaningful, format_list_response, format_meaningful, format_record, format_records,
    has_meaningful_data,
};
use twse_core::locate::locate;
use twse_core::record::display_value;
use twse_core::{messages, Endpoint, Fetched, Record, RecordSource, TwseResult};

use crate::after_hours;
use crate::config::DisplayConfig;
use crate::market_index;
use crate::params::{ParamShape, ToolArgs};
use crate::template::Template;

/// Which records a [`ToolKind::Records`] tool shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    /// Every record.
    All,
    /// The first `n` records.
    First(usize),
    /// The last `n` records; used by the historical index reports.
    Last(usize),
}

impl Window {
    /// Applies the window.
    pub fn apply(self, records: &[Record]) -> &[Record] {
        match self {
            Self::All => records,
            Self::First(n) => &records[..n.min(records.len())],
            Self::Last(n) => &records[records.len().saturating_sub(n)..],
        }
    }
}

/// How many lines a summary shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    /// No limit.
    All,
    /// [`DisplayConfig::default_limit`].
    Display,
    /// [`DisplayConfig::holiday_limit`].
    Holiday,
    /// A fixed count.
    Fixed(usize),
}

impl Limit {
    /// Resolves against the display configuration.
    pub fn resolve(self, display: &DisplayConfig) -> usize {
        match self {
            Self::All => usize::MAX,
            Self::Display => display.default_limit,
            Self::Holiday => display.holiday_limit,
            Self::Fixed(n) => n,
        }
    }
}

/// A counted list with one templated line per record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// What the list holds, e.g. `最近上市公司`.
    pub subject: &'static str,
    /// Header noun; defaults to `{subject}資料`.
    pub title: Option<&'static str>,
    /// Reply when the endpoint has no records; defaults to `目前沒有{subject}資料。`.
    pub empty: Option<&'static str>,
    /// Line rendered for each record.
    pub line: Template,
    /// How many lines to show.
    pub limit: Limit,
    /// Records must carry meaningful data in at least one of these fields.
    pub require: &'static [&'static str],
}

impl Summary {
    /// A summary limited by the display configuration.
    pub const fn new(subject: &'static str, line: &'static str) -> Self {
        Self {
            subject,
            title: None,
            empty: None,
            line: Template::new(line),
            limit: Limit::Display,
            require: &[],
        }
    }

    /// Overrides the header noun.
    pub const fn title(mut self, title: &'static str) -> Self {
        self.title = Some(title);
        self
    }

    /// Overrides the reply for an empty endpoint.
    pub const fn empty(mut self, text: &'static str) -> Self {
        self.empty = Some(text);
        self
    }

    /// Sets the line limit.
    pub const fn limit(mut self, limit: Limit) -> Self {
        self.limit = limit;
        self
    }

    /// Drops records without meaningful data in all of `fields`.
    pub const fn require(mut self, fields: &'static [&'static str]) -> Self {
        self.require = fields;
        self
    }
}

/// A ranked report: a heading read from the first record, then one entry
/// per record separated by blank lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ranking {
    /// What the report ranks, for the no-data reply.
    pub subject: &'static str,
    /// First line, e.g. `... (日期: {Date})`.
    pub heading: Template,
    /// Entry rendered for each record.
    pub entry: Template,
    /// Entries shown.
    pub limit: usize,
}

/// One stock's record rendered as labelled lines under a `【Name (Code)】` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detail {
    /// Used when the code is not found, e.g. `日成交資訊`.
    pub subject: &'static str,
    /// Header suffix, e.g. `評價指標`.
    pub title: &'static str,
    /// Body lines.
    pub lines: &'static [Template],
}

/// Meaningful-field views of company announcements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Meaningful {
    /// What the records are, e.g. `股東會公告`.
    pub subject: &'static str,
    /// Names the company in headers.
    pub heading: Template,
    /// Records need meaningful data in at least one of these fields.
    pub require: &'static [&'static str],
    /// Fields left out of the body.
    pub exclude: &'static [&'static str],
}

/// Behaviour of a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    /// Required code; the matching record, or `""`.
    Lookup,
    /// Optional code; one record, or every record when no code is given.
    LookupOrList,
    /// Every record in a window.
    Records(Window),
    /// Counted list with one line per record.
    Summary(Summary),
    /// Dated ranking with spaced entries.
    Ranking(Ranking),
    /// Labelled lines for one stock.
    Detail(Detail),
    /// Enumerated meaningful-field blocks.
    MeaningfulList(Meaningful),
    /// One company's meaningful fields.
    MeaningfulLookup(Meaningful),
    /// Index category filter over the daily index report.
    MarketIndex,
    /// After-hours fixed-price trading, single stock or paged.
    AfterHours,
}

impl ToolKind {
    /// Arguments the kind accepts.
    pub const fn params(&self) -> ParamShape {
        match self {
            Self::Lookup | Self::Detail(_) | Self::MeaningfulLookup(_) => ParamShape::Code,
            Self::LookupOrList => ParamShape::OptionalCode,
            Self::Records(_) | Self::Summary(_) | Self::Ranking(_) | Self::MeaningfulList(_) => {
                ParamShape::None
            }
            Self::MarketIndex => ParamShape::MarketIndex,
            Self::AfterHours => ParamShape::AfterHours,
        }
    }

    /// Templates the kind renders, for validation.
    pub fn templates(&self) -> Vec<Template> {
        match self {
            Self::Summary(s) => vec![s.line],
            Self::Ranking(r) => vec![r.heading, r.entry],
            Self::Detail(d) => d.lines.to_vec(),
            Self::MeaningfulList(m) | Self::MeaningfulLookup(m) => vec![m.heading],
            _ => Vec::new(),
        }
    }
}

/// A tool: name, description, endpoint and behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolSpec {
    /// Tool name published to clients.
    pub name: &'static str,
    /// Tool description published to clients.
    pub description: &'static str,
    /// Upstream resource.
    pub endpoint: Endpoint,
    /// Behaviour.
    pub kind: ToolKind,
}

const DETAIL_HEADER: Template = Template::new("【{Name} ({Code})】");

impl ToolSpec {
    /// Creates a tool.
    pub const fn new(
        name: &'static str,
        description: &'static str,
        endpoint: Endpoint,
        kind: ToolKind,
    ) -> Self {
        Self {
            name,
            description,
            endpoint,
            kind,
        }
    }

    /// JSON schema of the tool's arguments.
    pub fn input_schema(&self) -> Arc<JsonObject> {
        self.kind.params().input_schema()
    }

    /// Validates the `arguments` of a call.
    pub fn parse_args(&self, raw: Option<JsonObject>) -> TwseResult<ToolArgs> {
        self.kind.params().parse(raw)
    }

    /// Fetches the endpoint and renders the result.
    pub async fn invoke(
        &self,
        source: &dyn RecordSource,
        args: &ToolArgs,
        display: &DisplayConfig,
    ) -> String {
        match self.load(source).await {
            Ok(records) => self.render(records, args, display),
            Err(message) => message,
        }
    }

    async fn load(&self, source: &dyn RecordSource) -> Result<Vec<Record>, String> {
        let path = self.endpoint.path;
        match source.fetch(path).await {
            Ok(Fetched::Records(records)) => Ok(records),
            Ok(Fetched::Malformed { reason }) if self.endpoint.tolerates_malformed() => {
                debug!(tool = self.name, path, %reason, "ignoring malformed body");
                Ok(Vec::new())
            }
            Ok(Fetched::Malformed { reason }) => {
                warn!(tool = self.name, path, %reason, "upstream body is not valid JSON");
                Err(messages::query_failed(messages::malformed_body(&reason)))
            }
            Err(e) => {
                warn!(tool = self.name, path, error = %e, "upstream request failed");
                Err(messages::query_failed(e))
            }
        }
    }

    /// Renders fetched records. Pure; `invoke` without the fetch.
    pub fn render(&self, records: Vec<Record>, args: &ToolArgs, display: &DisplayConfig) -> String {
        let identifier = self.endpoint.identifier;
        match self.kind {
            ToolKind::Lookup => locate(&records, args.code_or_empty(), identifier)
                .map(format_record)
                .unwrap_or_default(),

            ToolKind::LookupOrList => match args.code.as_deref() {
                Some(code) => locate(&records, code, identifier)
                    .map(format_record)
                    .unwrap_or_default(),
                None => format_records(&records),
            },

            ToolKind::Records(window) => format_records(window.apply(&records)),

            ToolKind::Summary(summary) => render_summary(&summary, records, display),

            ToolKind::Ranking(ranking) => {
                let Some(first) = records.first() else {
                    return messages::no_data(ranking.subject);
                };
                let entries: Vec<String> = records
                    .iter()
                    .take(ranking.limit)
                    .map(|r| ranking.entry.render(r))
                    .collect();
                format!("{}:\n\n{}", ranking.heading.render(first), entries.join("\n\n"))
            }

            ToolKind::Detail(detail) => {
                let code = args.code_or_empty();
                let Some(record) = locate(&records, code, identifier) else {
                    return messages::no_data_for_code(&format!("股票代號 {code}"), detail.subject);
                };
                let header = DETAIL_HEADER.render_with(record, |f| (f == "Code").then_some(code));
                let body: Vec<String> = detail.lines.iter().map(|l| l.render(record)).collect();
                format!("{header}{}\n\n{}", detail.title, body.join("\n"))
            }

            ToolKind::MeaningfulList(meaningful) => {
                render_meaningful_list(&meaningful, records, display.default_limit)
            }

            ToolKind::MeaningfulLookup(m) => {
                let code = args.code_or_empty();
                let Some(record) = locate(&records, code, identifier) else {
                    return format!("查無股票代碼 {code} 的{}資料。", m.subject);
                };
                if !has_meaningful_data(record, m.require) {
                    return format!("股票代碼 {code} 的{}資料無效或不完整。", m.subject);
                }
                let fields = format_meaningful(record, m.exclude);
                let body = if fields.is_empty() {
                    "無其他詳細資訊。".to_string()
                } else {
                    fields
                };
                format!("{} {}資訊：\n\n{body}", m.heading.render(record), m.subject)
            }

            ToolKind::MarketIndex => {
                if records.is_empty() {
                    return String::new();
                }
                let selected = market_index::select(&records, args.category, args.count);
                if selected.is_empty() {
                    return market_index::no_indices(args.category);
                }
                market_index::render(&selected, args.format)
            }

            ToolKind::AfterHours => {
                if records.is_empty() {
                    return messages::no_data("集中市場盤後定價交易");
                }
                match args.code.as_deref() {
                    Some(code) => after_hours::render_stock(&records, code),
                    None => after_hours::render_page(&records, args.limit.max(1), args.page_number),
                }
            }
        }
    }
}

fn keep_meaningful(records: Vec<Record>, require: &[&str]) -> Vec<Record> {
    if require.is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|r| has_meaningful_data(r, require))
        .collect()
}

fn render_summary(summary: &Summary, records: Vec<Record>, display: &DisplayConfig) -> String {
    if records.is_empty() {
        return summary
            .empty
            .map_or_else(|| messages::no_data(summary.subject), str::to_string);
    }
    let kept = keep_meaningful(records, summary.require);
    if kept.is_empty() {
        return format!("查無有效的{}資料。", summary.subject);
    }
    let title = summary
        .title
        .map_or_else(|| format!("{}資料", summary.subject), str::to_string);
    format_list_response(
        &kept,
        &title,
        summary.limit.resolve(display),
        |r| summary.line.render(r),
    )
}

fn render_meaningful_list(m: &Meaningful, records: Vec<Record>, limit: usize) -> String {
    if records.is_empty() {
        return messages::no_data(m.subject);
    }
    let kept = keep_meaningful(records, m.require);
    if kept.is_empty() {
        return format!("查無有效的{}資料。", m.subject);
    }

    let mut out = format!(
        "共有 {} 筆{}資料（僅顯示前 {limit} 筆）：\n\n",
        kept.len(),
        m.subject
    );
    for (i, record) in kept.iter().take(limit).enumerate() {
        out.push_str(&format!("【{}】{}\n", i + 1, m.heading.render(record)));
        for (key, value) in filter_meaningful(record, m.exclude).iter() {
            out.push_str(&format!("   {key}: {}\n", display_value(value)));
        }
        out.push('\n');
    }
    if kept.len() > limit {
        out.push_str(&format!("... 還有 {} 筆資料未顯示", kept.len() - limit));
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use twse_core::{Identifier, StaticSource, TwseError};

    const PROFILE: ToolSpec = ToolSpec::new(
        "get_company_profile",
        "Company profile",
        Endpoint::new("/opendata/t187ap03_L").keyed_by(Identifier::CompanyCode),
        ToolKind::Lookup,
    );

    fn records(value: serde_json::Value) -> Vec<Record> {
        Record::normalize(value)
    }

    #[test]
    fn test_window() {
        let data = records(json!([{"n": "1"}, {"n": "2"}, {"n": "3"}]));
        assert_eq!(Window::All.apply(&data).len(), 3);
        assert_eq!(Window::First(2).apply(&data)[1].get_str("n"), Some("2"));
        assert_eq!(Window::Last(2).apply(&data)[0].get_str("n"), Some("2"));
        assert_eq!(Window::Last(10).apply(&data).len(), 3);
        assert_eq!(Window::First(10).apply(&data).len(), 3);
    }

    #[test]
    fn test_lookup_uses_declared_identifier() {
        let data = records(json!([
            {"Code": "2330", "公司代號": "1101", "公司名稱": "台泥"},
            {"公司代號": "2330", "公司名稱": "台積電"}
        ]));
        let out = PROFILE.render(data, &ToolArgs::code("2330"), &DisplayConfig::default());
        assert_eq!(out, "公司代號: 2330\n公司名稱: 台積電");
    }

    #[test]
    fn test_lookup_empty_list_is_empty_string() {
        let out = PROFILE.render(Vec::new(), &ToolArgs::code("2330"), &DisplayConfig::default());
        assert_eq!(out, "");
    }

    #[test]
    fn test_detail_not_found_and_fallback_code() {
        const DAILY: ToolSpec = ToolSpec::new(
            "daily",
            "d",
            Endpoint::new("/exchangeReport/STOCK_DAY_ALL").keyed_by(Identifier::Code),
            ToolKind::Detail(Detail {
                subject: "日成交資訊",
                title: "日成交資訊",
                lines: &[Template::new("收盤價: {ClosingPrice}")],
            }),
        );
        let display = DisplayConfig::default();
        assert_eq!(
            DAILY.render(Vec::new(), &ToolArgs::code("2330"), &display),
            "查無股票代號 2330的日成交資訊"
        );
        let data = records(json!([{"Code": "2330", "ClosingPrice": "1000.00"}]));
        assert_eq!(
            DAILY.render(data, &ToolArgs::code("2330"), &display),
            "【N/A (2330)】日成交資訊\n\n收盤價: 1000.00"
        );
    }

    #[tokio::test]
    async fn test_malformed_policies() {
        let tolerant = ToolSpec::new(
            "csr",
            "c",
            Endpoint::new("/static/20151104/CSR103").tolerate_malformed(),
            ToolKind::Records(Window::All),
        );
        let strict = ToolSpec::new(
            "news",
            "n",
            Endpoint::new("/news/newsList"),
            ToolKind::Records(Window::All),
        );
        let source = StaticSource::new()
            .with_body("/static/20151104/CSR103", "<html>")
            .with_body("/news/newsList", "<html>");
        let display = DisplayConfig::default();

        assert_eq!(tolerant.invoke(&source, &ToolArgs::default(), &display).await, "");
        let reported = strict.invoke(&source, &ToolArgs::default(), &display).await;
        assert!(reported.starts_with("查詢失敗: 上游回傳的資料不是有效的 JSON ("));
    }

    #[tokio::test]
    async fn test_transport_error_becomes_text() {
        let source = StaticSource::new().with_error(
            "/opendata/t187ap03_L",
            TwseError::timeout("https://openapi.twse.com.tw/v1/opendata/t187ap03_L"),
        );
        let out = PROFILE
            .invoke(&source, &ToolArgs::code("2330"), &DisplayConfig::default())
            .await;
        assert_eq!(
            out,
            "查詢失敗: request to https://openapi.twse.com.tw/v1/opendata/t187ap03_L timed out"
        );
    }

    #[test]
    fn test_params_by_kind() {
        assert_eq!(ToolKind::Lookup.params(), ParamShape::Code);
        assert_eq!(ToolKind::LookupOrList.params(), ParamShape::OptionalCode);
        assert_eq!(ToolKind::Records(Window::All).params(), ParamShape::None);
        assert_eq!(ToolKind::AfterHours.params(), ParamShape::AfterHours);
    }
}
