//! Tool argument types.
//!
//! Each tool kind accepts one of the parameter structs below. They provide the
//! JSON schema published in `tools/list` and the typed view of the `arguments`
//! object of a `tools/call`.

use std::sync::Arc;

use rmcp::model::JsonObject;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use twse_core::{TwseError, TwseResult};

use crate::market_index::{IndexCategory, IndexFormat};

/// Tools that take no arguments.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct NoParams {}

/// Tools that select one record.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CodeParams {
    /// Company, stock or warrant code (e.g., "2330")
    pub code: String,
}

/// Tools that select one record or list them all.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct OptionalCodeParams {
    /// Code to select one record (e.g., "2330"). Leave empty to list every record.
    #[serde(default)]
    pub code: String,
}

/// Market index query.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MarketIndexParams {
    /// Index category: major, sector, esg, leverage, return, thematic, dividend or all (other values show all)
    #[serde(default = "default_category")]
    pub category: String,
    /// Maximum number of indices (capped at 50 unless category is "all"; 0 for no limit)
    #[serde(default = "default_count")]
    pub count: i64,
    /// Output format: detailed (all fields, the fallback), summary (close and change) or simple (change only)
    #[serde(default = "default_format")]
    pub format: String,
}

/// After-hours trading query.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AfterHoursParams {
    /// Stock code (e.g., "2330"). Leave empty to page through all traded stocks.
    #[serde(default)]
    pub code: String,
    /// Records per page
    #[serde(default = "default_count_usize")]
    pub limit: usize,
    /// Page to show, starting at 0
    #[serde(default)]
    pub page_number: usize,
}

fn default_category() -> String {
    "major".to_string()
}

fn default_format() -> String {
    "detailed".to_string()
}

fn default_count() -> i64 {
    20
}

fn default_count_usize() -> usize {
    20
}

/// Shape of the arguments a tool accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamShape {
    /// No arguments.
    None,
    /// Required `code`.
    Code,
    /// Optional `code`.
    OptionalCode,
    /// [`MarketIndexParams`].
    MarketIndex,
    /// [`AfterHoursParams`].
    AfterHours,
}

/// Arguments of one call, after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolArgs {
    /// Selected code; `None` lists every record.
    pub code: Option<String>,
    /// Market index category.
    pub category: IndexCategory,
    /// Market index count.
    pub count: i64,
    /// Market index format.
    pub format: IndexFormat,
    /// Page size.
    pub limit: usize,
    /// Page index, from 0.
    pub page_number: usize,
}

impl Default for ToolArgs {
    fn default() -> Self {
        Self {
            code: None,
            category: IndexCategory::default(),
            count: default_count(),
            format: IndexFormat::default(),
            limit: default_count_usize(),
            page_number: 0,
        }
    }
}

impl ToolArgs {
    /// Arguments selecting `code`.
    pub fn code(code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            ..Self::default()
        }
    }

    /// The selected code, or `""`.
    pub fn code_or_empty(&self) -> &str {
        self.code.as_deref().unwrap_or_default()
    }
}

fn non_empty(code: String) -> Option<String> {
    (!code.is_empty()).then_some(code)
}

fn decode<T: DeserializeOwned>(raw: Option<JsonObject>) -> TwseResult<T> {
    serde_json::from_value(Value::Object(raw.unwrap_or_default()))
        .map_err(|e| TwseError::invalid_argument("arguments", e.to_string()))
}

fn schema<T: JsonSchema>() -> Arc<JsonObject> {
    match serde_json::to_value(schemars::schema_for!(T)) {
        Ok(Value::Object(map)) => Arc::new(map),
        _ => Arc::new(JsonObject::new()),
    }
}

impl ParamShape {
    /// JSON schema of the accepted arguments.
    pub fn input_schema(self) -> Arc<JsonObject> {
        match self {
            Self::None => schema::<NoParams>(),
            Self::Code => schema::<CodeParams>(),
            Self::OptionalCode => schema::<OptionalCodeParams>(),
            Self::MarketIndex => schema::<MarketIndexParams>(),
            Self::AfterHours => schema::<AfterHoursParams>(),
        }
    }

    /// Validates a raw `arguments` object.
    pub fn parse(self, raw: Option<JsonObject>) -> TwseResult<ToolArgs> {
        match self {
            Self::None => {
                decode::<NoParams>(raw)?;
                Ok(ToolArgs::default())
            }
            Self::Code => {
                let params: CodeParams = decode(raw)?;
                Ok(ToolArgs::code(params.code))
            }
            Self::OptionalCode => {
                let params: OptionalCodeParams = decode(raw)?;
                Ok(ToolArgs {
                    code: non_empty(params.code),
                    ..ToolArgs::default()
                })
            }
            Self::MarketIndex => {
                let params: MarketIndexParams = decode(raw)?;
                Ok(ToolArgs {
                    category: IndexCategory::from(params.category.as_str()),
                    count: params.count,
                    format: IndexFormat::from(params.format.as_str()),
                    ..ToolArgs::default()
                })
            }
            Self::AfterHours => {
                let params: AfterHoursParams = decode(raw)?;
                if params.limit == 0 {
                    return Err(TwseError::invalid_argument("limit", "must be at least 1"));
                }
                Ok(ToolArgs {
                    code: non_empty(params.code),
                    limit: params.limit,
                    page_number: params.page_number,
                    ..ToolArgs::default()
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Option<JsonObject> {
        match value {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    #[test]
    fn test_required_code() {
        let args = ParamShape::Code.parse(object(json!({"code": "2330"}))).unwrap();
        assert_eq!(args.code.as_deref(), Some("2330"));

        let err = ParamShape::Code.parse(None).unwrap_err();
        assert!(matches!(err, TwseError::InvalidArgument { .. }));
        assert!(ParamShape::Code.parse(object(json!({"code": 2330}))).is_err());
    }

    #[test]
    fn test_optional_code() {
        assert_eq!(ParamShape::OptionalCode.parse(None).unwrap().code, None);
        assert_eq!(
            ParamShape::OptionalCode
                .parse(object(json!({"code": ""})))
                .unwrap()
                .code,
            None
        );
        assert_eq!(
            ParamShape::OptionalCode
                .parse(object(json!({"code": "2330"})))
                .unwrap()
                .code_or_empty(),
            "2330"
        );
    }

    #[test]
    fn test_market_index_defaults() {
        let args = ParamShape::MarketIndex.parse(None).unwrap();
        assert_eq!(args.category, IndexCategory::Major);
        assert_eq!(args.count, 20);
        assert_eq!(args.format, IndexFormat::Detailed);

        let args = ParamShape::MarketIndex
            .parse(object(json!({"category": "all", "count": 0, "format": "simple"})))
            .unwrap();
        assert_eq!(args.category, IndexCategory::All);
        assert_eq!(args.count, 0);
        assert_eq!(args.format, IndexFormat::Simple);

        let args = ParamShape::MarketIndex
            .parse(object(json!({"category": "crypto", "format": "table"})))
            .unwrap();
        assert_eq!(args.category, IndexCategory::All);
        assert_eq!(args.format, IndexFormat::Detailed);
    }

    #[test]
    fn test_after_hours() {
        let args = ParamShape::AfterHours
            .parse(object(json!({"limit": 5, "page_number": 2})))
            .unwrap();
        assert_eq!((args.code, args.limit, args.page_number), (None, 5, 2));

        assert!(ParamShape::AfterHours.parse(object(json!({"limit": 0}))).is_err());
        assert!(ParamShape::AfterHours
            .parse(object(json!({"page_number": -1})))
            .is_err());
    }

    #[test]
    fn test_schemas_are_objects() {
        let code = ParamShape::Code.input_schema();
        assert_eq!(code.get("type"), Some(&json!("object")));
        assert_eq!(code.get("required"), Some(&json!(["code"])));

        let none = ParamShape::None.input_schema();
        assert_eq!(none.get("type"), Some(&json!("object")));

        let index = ParamShape::MarketIndex.input_schema();
        assert!(index["properties"].get("category").is_some());
    }
}
