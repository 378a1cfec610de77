//! syncthing-tools: Syncthing tools exposed over MCP
//!
//! The tool set is closed: [`SyncthingTool`] names every tool, [`ToolCall`]
//! carries its validated arguments, and [`ToolDispatcher`] routes a call to
//! exactly one Syncthing API request.

pub mod call;
pub mod dispatcher;
pub mod kind;
pub mod shape;

pub use call::{ApiRequest, ToolCall};
pub use dispatcher::ToolDispatcher;
pub use kind::SyncthingTool;
