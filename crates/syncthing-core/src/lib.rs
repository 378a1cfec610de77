//! syncthing-core: Syncthing MCP Server Core Library
//!
//! Configuration, error types, the Syncthing REST client and the tool
//! result types shared by the dispatcher and the MCP adapter.

pub mod client;
pub mod config;
pub mod error;
pub mod tool;

pub use client::{ApiMethod, SyncthingApi, SyncthingClient};
pub use config::SyncthingConfig;
pub use error::{Error, Result};
pub use tool::{SchemaBuilder, ToolContent, ToolDefinition, ToolResult};
