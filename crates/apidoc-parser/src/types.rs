//! Typed view of the embedded API document

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

/// Raw API document structure
///
/// Only the substructure this tooling traverses is typed. Schema
/// definitions stay raw JSON values and are classified on demand via
/// [`SchemaShape`].
#[derive(Debug, Clone, Deserialize)]
pub struct RawApiDoc {
    #[serde(default)]
    pub components: RawComponents,
    #[serde(default)]
    pub paths: IndexMap<String, RawPathItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawComponents {
    #[serde(default)]
    pub schemas: IndexMap<String, Value>,
}

/// Path item: only the PUT slot matters here
#[derive(Debug, Clone, Deserialize)]
pub struct RawPathItem {
    pub put: Option<RawOperation>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOperation {
    pub request_body: Option<RawRequestBody>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawRequestBody {
    #[serde(default)]
    pub content: IndexMap<String, RawMediaType>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMediaType {
    pub schema: Option<Value>,
}

/// Classified view of a raw schema value
///
/// Chained lookups over the document become pattern matches over this
/// shape; absence at any step is an empty result, not an error.
#[derive(Debug, Clone, Copy)]
pub enum SchemaShape<'a> {
    /// A `$ref` pointer to another component schema
    Reference { target: &'a str },
    /// An inline object schema with a properties map
    Object {
        properties: &'a serde_json::Map<String, Value>,
    },
    /// Anything else: primitive descriptor, array, enum, composition
    Primitive,
}

impl<'a> SchemaShape<'a> {
    /// Classify a raw schema value
    pub fn classify(value: &'a Value) -> Self {
        match value.as_object() {
            Some(obj) => {
                if let Some(target) = obj.get("$ref").and_then(Value::as_str) {
                    SchemaShape::Reference { target }
                } else if let Some(properties) = obj.get("properties").and_then(Value::as_object) {
                    SchemaShape::Object { properties }
                } else {
                    SchemaShape::Primitive
                }
            }
            None => SchemaShape::Primitive,
        }
    }

    /// Properties of an inline object schema, if any
    pub fn properties(value: &'a Value) -> Option<&'a serde_json::Map<String, Value>> {
        match Self::classify(value) {
            SchemaShape::Object { properties } => Some(properties),
            _ => None,
        }
    }
}
