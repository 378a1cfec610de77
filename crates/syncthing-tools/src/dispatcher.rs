//! Tool dispatcher: validates invocations and routes them to the API client

use std::sync::Arc;

use serde_json::{Map, Value as JsonValue};
use syncthing_core::{Error, Result, SyncthingApi, ToolDefinition, ToolResult};
use tracing::{info, warn};

use crate::call::ToolCall;
use crate::kind::SyncthingTool;
use crate::shape::{DEVICE_FIELDS, FOLDER_FIELDS, project};

/// Static tool registry bound to one Syncthing API
///
/// Holds no mutable state; concurrent invocations are independent.
pub struct ToolDispatcher {
    api: Arc<dyn SyncthingApi>,
    definitions: Vec<ToolDefinition>,
}

impl ToolDispatcher {
    pub fn new(api: Arc<dyn SyncthingApi>) -> Self {
        let definitions = SyncthingTool::ALL.iter().map(|t| t.definition()).collect();
        Self { api, definitions }
    }

    /// All tool descriptors, in registry order
    pub fn list_tools(&self) -> &[ToolDefinition] {
        &self.definitions
    }

    pub fn tool_names(&self) -> Vec<&str> {
        self.definitions.iter().map(|d| d.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Invoke a tool by name
    ///
    /// Never fails: validation, unknown tool and API errors all come back
    /// as an error result.
    pub async fn invoke(&self, name: &str, arguments: Option<&Map<String, JsonValue>>) -> ToolResult {
        info!(tool = name, "Invoking tool");

        match self.try_invoke(name, arguments).await {
            Ok(output) => ToolResult::success(output),
            Err(e) => {
                warn!(tool = name, error = %e, "Tool invocation failed");
                ToolResult::error(e)
            }
        }
    }

    async fn try_invoke(
        &self,
        name: &str,
        arguments: Option<&Map<String, JsonValue>>,
    ) -> Result<String> {
        let tool =
            SyncthingTool::from_name(name).ok_or_else(|| Error::UnknownTool(name.to_string()))?;

        let empty = Map::new();
        let call = ToolCall::parse(tool, arguments.unwrap_or(&empty))?;

        self.execute(&call).await
    }

    /// Run a validated call and format its output
    pub async fn execute(&self, call: &ToolCall) -> Result<String> {
        let request = call.request();
        let response = self
            .api
            .call(&request.endpoint, request.method, None)
            .await?;

        match call {
            ToolCall::ListFolders => pretty(&project(response, FOLDER_FIELDS)?),
            ToolCall::ListDevices => pretty(&project(response, DEVICE_FIELDS)?),
            ToolCall::ScanFolder { folder, sub } => Ok(match sub {
                Some(sub) => format!("Scan triggered for folder: {} (subfolder: {})", folder, sub),
                None => format!("Scan triggered for folder: {}", folder),
            }),
            ToolCall::GetStatus
            | ToolCall::GetFolderStatus { .. }
            | ToolCall::GetFolderErrors { .. }
            | ToolCall::GetFileInfo { .. }
            | ToolCall::GetConnections => pretty(&response),
        }
    }
}

fn pretty(value: &JsonValue) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
