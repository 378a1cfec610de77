//! MCP server handler
//!
//! Exposes the tool dispatcher through rmcp's `tools/list` and
//! `tools/call` requests.

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    model::{
        CallToolRequestParams, CallToolResult, Content, Implementation, ListToolsResult,
        PaginatedRequestParams, ServerCapabilities, ServerInfo, Tool,
    },
    service::RequestContext,
};
use syncthing_core::{ToolContent, ToolDefinition, ToolResult};
use syncthing_tools::ToolDispatcher;

/// Name reported in the MCP handshake
pub const SERVER_NAME: &str = "mcp-server-syncthing";

/// rmcp handler backed by a [`ToolDispatcher`]
#[derive(Clone)]
pub struct SyncthingServer {
    dispatcher: Arc<ToolDispatcher>,
}

impl SyncthingServer {
    pub fn new(dispatcher: ToolDispatcher) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
        }
    }

    fn tools(&self) -> Vec<Tool> {
        self.dispatcher.list_tools().iter().map(to_mcp_tool).collect()
    }
}

fn to_mcp_tool(definition: &ToolDefinition) -> Tool {
    let schema = definition
        .input_schema
        .as_object()
        .cloned()
        .unwrap_or_default();
    Tool::new(definition.name.clone(), definition.description.clone(), schema)
}

fn to_call_tool_result(result: ToolResult) -> CallToolResult {
    let content = result
        .content
        .into_iter()
        .map(|block| match block {
            ToolContent::Text { text } => Content::text(text),
        })
        .collect();

    if result.is_error {
        CallToolResult::error(content)
    } else {
        CallToolResult::success(content)
    }
}

impl ServerHandler for SyncthingServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(
                "Tools for monitoring a Syncthing instance and triggering folder scans".to_string(),
            ),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(self.tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let result = self
            .dispatcher
            .invoke(&request.name, request.arguments.as_ref())
            .await;
        Ok(to_call_tool_result(result))
    }
}
