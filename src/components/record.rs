//! # Component Record

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Field name to declared type, taken verbatim from `interface Props`.
///
/// Optional markers (`?`) are not represented.
pub type PropsSchema = HashMap<String, String>;

/// An accepted component, ready for persistence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRecord {
    /// Opaque 32-character hex identifier
    pub id: String,

    /// Component name (unique within a store)
    pub name: String,

    /// Validated source text
    pub code: String,

    /// Derived props schema
    #[serde(default)]
    pub props_schema: PropsSchema,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_shape() {
        let record = ComponentRecord {
            id: "0123456789abcdef0123456789abcdef".to_string(),
            name: "Button".to_string(),
            code: "interface Props { label: string; }".to_string(),
            props_schema: PropsSchema::from([("label".to_string(), "string".to_string())]),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "0123456789abcdef0123456789abcdef",
                "name": "Button",
                "code": "interface Props { label: string; }",
                "props_schema": { "label": "string" }
            })
        );
    }

    #[test]
    fn test_missing_schema_defaults_to_empty() {
        let record: ComponentRecord =
            serde_json::from_value(json!({ "id": "a", "name": "b", "code": "c" })).unwrap();
        assert!(record.props_schema.is_empty());
    }
}
