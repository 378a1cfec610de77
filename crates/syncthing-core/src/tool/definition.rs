//! Tool definition helpers

use serde::Serialize;
use serde_json::{Value as JsonValue, json};

/// Name, description and input schema of one tool
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: JsonValue,
}

impl ToolDefinition {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: JsonValue,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
        }
    }

    /// Names listed under the schema's `required` key
    pub fn required(&self) -> Vec<&str> {
        self.input_schema["required"]
            .as_array()
            .map(|names| names.iter().filter_map(|n| n.as_str()).collect())
            .unwrap_or_default()
    }
}

/// Helper functions for creating tool schemas
pub struct SchemaBuilder;

impl SchemaBuilder {
    /// Object schema without any properties
    pub fn empty_object() -> JsonValue {
        Self::object_schema_with_descriptions(Vec::new())
    }

    /// Create an object schema with descriptions for properties
    ///
    /// # Arguments
    /// * `properties` - A list of tuples (name, type, description, required)
    ///
    /// # Example
    /// ```
    /// use syncthing_core::SchemaBuilder;
    ///
    /// let schema = SchemaBuilder::object_schema_with_descriptions(vec![
    ///     ("folder", "string", "Folder ID", true),
    ///     ("sub", "string", "Subfolder", false),
    /// ]);
    /// assert_eq!(schema["required"], serde_json::json!(["folder"]));
    /// ```
    pub fn object_schema_with_descriptions(
        properties: Vec<(&str, &str, &str, bool)>,
    ) -> JsonValue {
        let props: serde_json::Map<String, JsonValue> = properties
            .iter()
            .map(|(name, type_str, desc, _)| {
                (
                    name.to_string(),
                    json!({"type": type_str, "description": desc}),
                )
            })
            .collect();

        let required: Vec<&str> = properties
            .iter()
            .filter(|(_, _, _, required)| *required)
            .map(|(name, _, _, _)| *name)
            .collect();

        json!({
            "type": "object",
            "properties": props,
            "required": required
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_schema() {
        let schema = SchemaBuilder::empty_object();
        assert_eq!(
            schema,
            json!({"type": "object", "properties": {}, "required": []})
        );
    }

    #[test]
    fn test_required_lists_only_required_properties() {
        let definition = ToolDefinition::new(
            "get_file_info",
            "File info",
            SchemaBuilder::object_schema_with_descriptions(vec![
                ("folder", "string", "Folder ID", true),
                ("file", "string", "Path", true),
                ("sub", "string", "Optional", false),
            ]),
        );
        assert_eq!(definition.required(), vec!["folder", "file"]);
        assert_eq!(
            definition.input_schema["properties"]["sub"]["description"],
            "Optional"
        );
    }

    #[test]
    fn test_serializes_camel_case() {
        let definition = ToolDefinition::new("t", "d", SchemaBuilder::empty_object());
        let value = serde_json::to_value(&definition).unwrap();
        assert!(value.get("inputSchema").is_some());
    }
}
