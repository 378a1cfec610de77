//! Tool types shared between the dispatcher and the MCP adapter
//!
//! Definitions describe what a caller may invoke; results carry the
//! single text block produced by an invocation.

pub mod definition;
pub mod result;

pub use definition::{SchemaBuilder, ToolDefinition};
pub use result::{ToolContent, ToolResult};
