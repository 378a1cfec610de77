//! The closed set of tools this server exposes

use serde_json::Value as JsonValue;
use syncthing_core::{SchemaBuilder, ToolDefinition};

/// One variant per registered tool, in listing order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyncthingTool {
    GetStatus,
    ListFolders,
    GetFolderStatus,
    GetFolderErrors,
    GetFileInfo,
    ScanFolder,
    ListDevices,
    GetConnections,
}

impl SyncthingTool {
    /// Every tool, in the order `tools/list` reports them
    pub const ALL: [SyncthingTool; 8] = [
        Self::GetStatus,
        Self::ListFolders,
        Self::GetFolderStatus,
        Self::GetFolderErrors,
        Self::GetFileInfo,
        Self::ScanFolder,
        Self::ListDevices,
        Self::GetConnections,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::GetStatus => "get_status",
            Self::ListFolders => "list_folders",
            Self::GetFolderStatus => "get_folder_status",
            Self::GetFolderErrors => "get_folder_errors",
            Self::GetFileInfo => "get_file_info",
            Self::ScanFolder => "scan_folder",
            Self::ListDevices => "list_devices",
            Self::GetConnections => "get_connections",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::GetStatus => {
                "Get overall Syncthing system status including version, uptime, and system info"
            }
            Self::ListFolders => "List all configured folders with their IDs, labels, and paths",
            Self::GetFolderStatus => {
                "Get detailed status of a specific folder including sync state, errors, and byte counts"
            }
            Self::GetFolderErrors => "Get list of errors for a specific folder",
            Self::GetFileInfo => {
                "Get detailed information about a specific file including local and global versions"
            }
            Self::ScanFolder => "Trigger a scan of a folder or subfolder to detect changes",
            Self::ListDevices => "List all configured devices with their IDs and connection status",
            Self::GetConnections => "Get current connection status for all devices",
        }
    }

    pub fn input_schema(&self) -> JsonValue {
        const FOLDER: (&str, &str, &str, bool) = ("folder", "string", "Folder ID", true);

        match self {
            Self::GetStatus | Self::ListFolders | Self::ListDevices | Self::GetConnections => {
                SchemaBuilder::empty_object()
            }
            Self::GetFolderStatus | Self::GetFolderErrors => {
                SchemaBuilder::object_schema_with_descriptions(vec![FOLDER])
            }
            Self::GetFileInfo => SchemaBuilder::object_schema_with_descriptions(vec![
                FOLDER,
                (
                    "file",
                    "string",
                    "Relative path to file within folder",
                    true,
                ),
            ]),
            Self::ScanFolder => SchemaBuilder::object_schema_with_descriptions(vec![
                FOLDER,
                (
                    "sub",
                    "string",
                    "Optional subfolder path to scan (relative to folder root)",
                    false,
                ),
            ]),
        }
    }

    pub fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(self.name(), self.description(), self.input_schema())
    }

    /// Look a tool up by its registered name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique_and_round_trip() {
        let names: HashSet<&str> = SyncthingTool::ALL.iter().map(|t| t.name()).collect();
        assert_eq!(names.len(), SyncthingTool::ALL.len());

        for tool in SyncthingTool::ALL {
            assert_eq!(SyncthingTool::from_name(tool.name()), Some(tool));
        }
    }

    #[test]
    fn test_from_name_unknown() {
        assert_eq!(SyncthingTool::from_name("restart_daemon"), None);
        assert_eq!(SyncthingTool::from_name(""), None);
    }

    #[test]
    fn test_required_arguments() {
        let required = |tool: SyncthingTool| tool.definition().required().join(",");

        assert_eq!(required(SyncthingTool::GetStatus), "");
        assert_eq!(required(SyncthingTool::ListFolders), "");
        assert_eq!(required(SyncthingTool::GetFolderStatus), "folder");
        assert_eq!(required(SyncthingTool::GetFolderErrors), "folder");
        assert_eq!(required(SyncthingTool::GetFileInfo), "folder,file");
        assert_eq!(required(SyncthingTool::ScanFolder), "folder");
        assert_eq!(required(SyncthingTool::ListDevices), "");
        assert_eq!(required(SyncthingTool::GetConnections), "");
    }

    #[test]
    fn test_scan_folder_schema_lists_optional_sub() {
        let schema = SyncthingTool::ScanFolder.input_schema();
        assert_eq!(schema["properties"]["sub"]["type"], "string");
        assert_eq!(schema["required"], serde_json::json!(["folder"]));
    }
}
