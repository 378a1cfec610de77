//! Tool invocation results

use serde::Serialize;

/// One content block of a tool result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ToolContent {
    Text { text: String },
}

/// Tool execution result
///
/// Always holds exactly one text block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResult {
    pub content: Vec<ToolContent>,
    pub is_error: bool,
}

impl ToolResult {
    /// Create a successful tool result
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: output.into(),
            }],
            is_error: false,
        }
    }

    /// Create an error tool result, prefixed with the `[ERROR]` marker
    pub fn error(message: impl std::fmt::Display) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: format!("[ERROR] {}", message),
            }],
            is_error: true,
        }
    }

    /// Text of the first content block
    pub fn text(&self) -> &str {
        match self.content.first() {
            Some(ToolContent::Text { text }) => text,
            None => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_result() {
        let result = ToolResult::success("ok");
        assert!(!result.is_error);
        assert_eq!(result.text(), "ok");
        assert_eq!(result.content.len(), 1);
    }

    #[test]
    fn test_error_result_is_marked() {
        let result = ToolResult::error("folder parameter is required");
        assert!(result.is_error);
        assert_eq!(result.text(), "[ERROR] folder parameter is required");
    }

    #[test]
    fn test_wire_shape() {
        let value = serde_json::to_value(ToolResult::success("hi")).unwrap();
        assert_eq!(
            value,
            json!({"content": [{"type": "text", "text": "hi"}], "isError": false})
        );
    }
}
