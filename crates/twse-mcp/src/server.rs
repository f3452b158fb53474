//! MCP server exposing the registered tools.
//!
//! The tool set is data, so `list_tools` and `call_tool` are implemented by
//! hand instead of through the `#[tool_router]` macros.

use std::borrow::Cow;
use std::sync::Arc;

use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, Implementation, JsonObject, ListToolsResult,
    PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, RoleServer, ServerHandler};
use tracing::{debug, warn};
use twse_core::RecordSource;

use crate::catalog;
use crate::config::DisplayConfig;
use crate::registry::ToolRegistry;
use crate::{SERVER_NAME, SERVER_VERSION};

/// TWSE MCP server.
#[derive(Clone)]
pub struct TwseMcpServer {
    registry: Arc<ToolRegistry>,
    source: Arc<dyn RecordSource>,
    display: DisplayConfig,
}

impl std::fmt::Debug for TwseMcpServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwseMcpServer")
            .field("tools", &self.registry.len())
            .field("display", &self.display)
            .finish_non_exhaustive()
    }
}

impl TwseMcpServer {
    /// Creates a server with the built-in catalogue.
    pub fn new(source: Arc<dyn RecordSource>, display: DisplayConfig) -> Self {
        Self::with_registry(Arc::new(catalog::registry()), source, display)
    }

    /// Creates a server with a custom registry.
    pub fn with_registry(
        registry: Arc<ToolRegistry>,
        source: Arc<dyn RecordSource>,
        display: DisplayConfig,
    ) -> Self {
        Self {
            registry,
            source,
            display,
        }
    }

    /// Registered tools.
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// MCP descriptions of every tool, in registration order.
    pub fn tools(&self) -> Vec<Tool> {
        self.registry
            .iter()
            .map(|spec| Tool {
                name: Cow::Borrowed(spec.name),
                title: None,
                description: Some(Cow::Borrowed(spec.description)),
                input_schema: spec.input_schema(),
                output_schema: None,
                annotations: None,
                icons: None,
                meta: None,
            })
            .collect()
    }

    /// Runs one tool.
    ///
    /// Unknown tools and invalid arguments are protocol errors. Upstream
    /// failures are part of the tool's text result.
    pub async fn call(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        let Some(spec) = self.registry.get(name) else {
            warn!(tool = name, "unknown tool");
            return Err(McpError::invalid_params(format!("tool '{name}' not found"), None));
        };
        let args = spec
            .parse_args(arguments)
            .map_err(|e| McpError::invalid_params(format!("{name}: {e}"), None))?;

        debug!(tool = name, path = spec.endpoint.path, "calling tool");
        let text = spec.invoke(self.source.as_ref(), &args, &self.display).await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

impl ServerHandler for TwseMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: SERVER_VERSION.to_string(),
                title: Some("Taiwan Stock Exchange OpenAPI".to_string()),
                icons: None,
                website_url: Some("https://openapi.twse.com.tw".to_string()),
            },
            instructions: Some(
                "Taiwan Stock Exchange data tools. Company tools take a stock code such as \"2330\"; \
                 market tools take no arguments. Results are plain text in Traditional Chinese."
                    .to_string(),
            ),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        let tools = self.tools();
        debug!(tool_count = tools.len(), "list_tools called");
        Ok(ListToolsResult::with_all_items(tools))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        self.call(&request.name, request.arguments).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use twse_core::StaticSource;

    fn server(source: StaticSource) -> TwseMcpServer {
        TwseMcpServer::new(Arc::new(source), DisplayConfig::default())
    }

    fn text(result: &CallToolResult) -> String {
        result
            .content
            .iter()
            .filter_map(|c| c.as_text().map(|t| t.text.clone()))
            .collect()
    }

    #[test]
    fn test_tools_listed_with_schemas() {
        let server = server(StaticSource::new());
        let tools = server.tools();
        assert_eq!(tools.len(), server.registry().len());
        let profile = tools
            .iter()
            .find(|t| t.name == "get_company_profile")
            .unwrap();
        assert_eq!(profile.input_schema.get("required"), Some(&json!(["code"])));
    }

    #[test]
    fn test_server_info() {
        let info = server(StaticSource::new()).get_info();
        assert_eq!(info.server_info.name, SERVER_NAME);
        assert!(info.capabilities.tools.is_some());
    }

    #[tokio::test]
    async fn test_unknown_tool_is_protocol_error() {
        let err = server(StaticSource::new())
            .call("get_nothing", None)
            .await
            .unwrap_err();
        assert!(err.message.contains("get_nothing"));
    }

    #[tokio::test]
    async fn test_missing_code_is_protocol_error() {
        assert!(server(StaticSource::new())
            .call("get_company_profile", None)
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_call_returns_text() {
        let source = StaticSource::new().with_body(
            "/opendata/t187ap03_L",
            r#"[{"公司代號":"2330","公司簡稱":"台積電"}]"#,
        );
        let args = json!({"code": "2330"}).as_object().cloned();
        let result = server(source)
            .call("get_company_profile", args)
            .await
            .unwrap();
        assert_eq!(text(&result), "公司代號: 2330\n公司簡稱: 台積電");
        assert_ne!(result.is_error, Some(true));
    }
}
