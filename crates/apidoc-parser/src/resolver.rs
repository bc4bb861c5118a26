//! Schema reference resolution

use indexmap::IndexMap;
use serde_json::Value;

/// Extract the schema name from a reference string
///
/// References look like `#/components/schemas/<Name>`; the name is the
/// trailing `/`-delimited segment. A reference with no `/` is returned
/// unchanged.
pub fn ref_schema_name(reference: &str) -> &str {
    reference.rsplit('/').next().unwrap_or(reference)
}

/// Name-based index over the component schemas of a parsed document
pub struct SchemaIndex<'a> {
    schemas: &'a IndexMap<String, Value>,
}

impl<'a> SchemaIndex<'a> {
    /// Create an index over the given component schemas
    pub fn new(schemas: &'a IndexMap<String, Value>) -> Self {
        Self { schemas }
    }

    /// Look up a schema definition by name
    pub fn get(&self, name: &str) -> Option<&'a Value> {
        self.schemas.get(name)
    }

    /// Resolve a `$ref` string to its schema definition
    ///
    /// An absent name is a normal empty result; callers decide how to
    /// render the missing definition.
    pub fn resolve(&self, reference: &str) -> Option<&'a Value> {
        self.schemas.get(ref_schema_name(reference))
    }

    /// The underlying schemas map, in document order
    pub fn schemas(&self) -> &'a IndexMap<String, Value> {
        self.schemas
    }
}
