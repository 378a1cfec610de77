//! Validated tool invocations
//!
//! Arguments arrive as an untyped JSON object. Each tool narrows them into
//! its own variant here; anything missing or of the wrong type is rejected
//! before a request is built.

use serde_json::{Map, Value as JsonValue};
use syncthing_core::{ApiMethod, Error, Result};

use crate::kind::SyncthingTool;

/// A tool invocation with its arguments checked and typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolCall {
    GetStatus,
    ListFolders,
    GetFolderStatus { folder: String },
    GetFolderErrors { folder: String },
    GetFileInfo { folder: String, file: String },
    ScanFolder { folder: String, sub: Option<String> },
    ListDevices,
    GetConnections,
}

/// The single HTTP request a tool call maps to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: ApiMethod,
    pub endpoint: String,
}

impl ApiRequest {
    fn get(endpoint: String) -> Self {
        Self {
            method: ApiMethod::Get,
            endpoint,
        }
    }

    fn post(endpoint: String) -> Self {
        Self {
            method: ApiMethod::Post,
            endpoint,
        }
    }
}

impl ToolCall {
    /// Validate `arguments` for `tool`
    pub fn parse(tool: SyncthingTool, arguments: &Map<String, JsonValue>) -> Result<Self> {
        let call = match tool {
            SyncthingTool::GetStatus => Self::GetStatus,
            SyncthingTool::ListFolders => Self::ListFolders,
            SyncthingTool::GetFolderStatus => Self::GetFolderStatus {
                folder: required_folder(arguments)?,
            },
            SyncthingTool::GetFolderErrors => Self::GetFolderErrors {
                folder: required_folder(arguments)?,
            },
            SyncthingTool::GetFileInfo => {
                match (string_arg(arguments, "folder"), string_arg(arguments, "file")) {
                    (Some(folder), Some(file)) => Self::GetFileInfo { folder, file },
                    _ => {
                        return Err(Error::Validation(
                            "folder and file parameters are required".to_string(),
                        ));
                    }
                }
            }
            SyncthingTool::ScanFolder => Self::ScanFolder {
                folder: required_folder(arguments)?,
                sub: optional_sub(arguments)?,
            },
            SyncthingTool::ListDevices => Self::ListDevices,
            SyncthingTool::GetConnections => Self::GetConnections,
        };
        Ok(call)
    }

    pub fn tool(&self) -> SyncthingTool {
        match self {
            Self::GetStatus => SyncthingTool::GetStatus,
            Self::ListFolders => SyncthingTool::ListFolders,
            Self::GetFolderStatus { .. } => SyncthingTool::GetFolderStatus,
            Self::GetFolderErrors { .. } => SyncthingTool::GetFolderErrors,
            Self::GetFileInfo { .. } => SyncthingTool::GetFileInfo,
            Self::ScanFolder { .. } => SyncthingTool::ScanFolder,
            Self::ListDevices => SyncthingTool::ListDevices,
            Self::GetConnections => SyncthingTool::GetConnections,
        }
    }

    /// Build the Syncthing request for this call
    pub fn request(&self) -> ApiRequest {
        match self {
            Self::GetStatus => ApiRequest::get("/rest/system/status".to_string()),
            Self::ListFolders => ApiRequest::get("/rest/config/folders".to_string()),
            Self::GetFolderStatus { folder } => {
                ApiRequest::get(format!("/rest/db/status?folder={}", encode(folder)))
            }
            Self::GetFolderErrors { folder } => {
                ApiRequest::get(format!("/rest/folder/errors?folder={}", encode(folder)))
            }
            Self::GetFileInfo { folder, file } => ApiRequest::get(format!(
                "/rest/db/file?folder={}&file={}",
                encode(folder),
                encode(file)
            )),
            Self::ScanFolder { folder, sub } => {
                let mut endpoint = format!("/rest/db/scan?folder={}", encode(folder));
                if let Some(sub) = sub {
                    endpoint.push_str("&sub=");
                    endpoint.push_str(&encode(sub));
                }
                ApiRequest::post(endpoint)
            }
            Self::ListDevices => ApiRequest::get("/rest/config/devices".to_string()),
            Self::GetConnections => ApiRequest::get("/rest/system/connections".to_string()),
        }
    }
}

fn encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

fn string_arg(arguments: &Map<String, JsonValue>, name: &str) -> Option<String> {
    arguments.get(name).and_then(|v| v.as_str()).map(str::to_string)
}

fn required_folder(arguments: &Map<String, JsonValue>) -> Result<String> {
    string_arg(arguments, "folder")
        .ok_or_else(|| Error::Validation("folder parameter is required".to_string()))
}

/// `sub` may be absent, null or empty; anything else must be a string
fn optional_sub(arguments: &Map<String, JsonValue>) -> Result<Option<String>> {
    match arguments.get("sub") {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::String(sub)) if sub.is_empty() => Ok(None),
        Some(JsonValue::String(sub)) => Ok(Some(sub.clone())),
        Some(_) => Err(Error::Validation(
            "sub parameter must be a string".to_string(),
        )),
    }
}
