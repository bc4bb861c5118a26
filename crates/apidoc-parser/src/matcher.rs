//! Schema name matching against configured target groups

use indexmap::IndexMap;
use serde_json::Value;

/// Matches schema names against substring pattern groups
pub struct SchemaMatcher;

impl SchemaMatcher {
    /// Collect, for each target group, the schema names containing at
    /// least one of the group's patterns as a case-sensitive substring
    ///
    /// Results follow the schemas map's iteration order. A group with no
    /// matching schema yields an empty list.
    pub fn match_groups(
        schemas: &IndexMap<String, Value>,
        groups: &IndexMap<String, Vec<String>>,
    ) -> IndexMap<String, Vec<String>> {
        groups
            .iter()
            .map(|(group, patterns)| {
                let matched = schemas
                    .keys()
                    .filter(|name| patterns.iter().any(|p| name.contains(p.as_str())))
                    .cloned()
                    .collect();
                (group.clone(), matched)
            })
            .collect()
    }

    /// Schema names containing `needle` as a case-insensitive substring,
    /// in the schemas map's iteration order
    pub fn search_insensitive<'a>(
        schemas: &'a IndexMap<String, Value>,
        needle: &str,
    ) -> Vec<&'a str> {
        let needle = needle.to_lowercase();
        schemas
            .keys()
            .filter(|name| name.to_lowercase().contains(&needle))
            .map(String::as_str)
            .collect()
    }
}
