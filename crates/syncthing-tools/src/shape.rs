//! Response shaping for listing tools

use serde_json::{Map, Value as JsonValue};
use syncthing_core::{Error, Result};

/// Fields kept from each `/rest/config/folders` entry
pub const FOLDER_FIELDS: &[&str] = &["id", "label", "path", "type"];

/// Fields kept from each `/rest/config/devices` entry
pub const DEVICE_FIELDS: &[&str] = &["deviceID", "name", "addresses"];

/// Keep only `fields` of every element of a JSON array
///
/// Element order is preserved. Fields missing from an element are left
/// out rather than written as null.
pub fn project(value: JsonValue, fields: &[&str]) -> Result<JsonValue> {
    let items = match value {
        JsonValue::Array(items) => items,
        other => {
            return Err(Error::UnexpectedResponse(format!(
                "expected a JSON array, got {}",
                kind_of(&other)
            )));
        }
    };

    let projected = items
        .into_iter()
        .map(|item| {
            let mut out = Map::new();
            if let JsonValue::Object(mut obj) = item {
                for field in fields {
                    if let Some(v) = obj.remove(*field) {
                        out.insert((*field).to_string(), v);
                    }
                }
            }
            JsonValue::Object(out)
        })
        .collect();

    Ok(JsonValue::Array(projected))
}

fn kind_of(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
