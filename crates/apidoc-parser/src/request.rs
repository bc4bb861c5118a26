//! PUT request-body schema location

use crate::resolver::ref_schema_name;
use crate::types::{RawApiDoc, SchemaShape};
use tracing::debug;

/// Locates the request-body schema of a tokened PUT operation
pub struct RequestSchemaLocator;

impl RequestSchemaLocator {
    /// Find the schema name referenced by the JSON request body of the
    /// first PUT operation whose path contains `token`
    ///
    /// Only the first path that contains the token and defines a `put`
    /// operation is considered; later qualifying paths are ignored. Every
    /// step of `requestBody.content["application/json"].schema.$ref` is
    /// optional, and absence at any level yields `None`.
    pub fn locate(doc: &RawApiDoc, token: &str) -> Option<String> {
        let (path, item) = doc
            .paths
            .iter()
            .find(|(path, item)| path.contains(token) && item.put.is_some())?;

        debug!("Matched PUT operation at {}", path);

        let schema = item
            .put
            .as_ref()?
            .request_body
            .as_ref()?
            .content
            .get("application/json")?
            .schema
            .as_ref()?;

        match SchemaShape::classify(schema) {
            SchemaShape::Reference { target } => Some(ref_schema_name(target).to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(paths: serde_json::Value) -> RawApiDoc {
        serde_json::from_value(json!({ "paths": paths })).unwrap()
    }

    fn put_with_ref(reference: &str) -> serde_json::Value {
        json!({
            "put": {
                "requestBody": {
                    "content": {
                        "application/json": {
                            "schema": {"$ref": reference}
                        }
                    }
                }
            }
        })
    }

    #[test]
    fn test_locate_resolves_reference_name() {
        let doc = doc(json!({
            "/products/{originProductNo}": put_with_ref("#/components/schemas/ProductUpdateRequest"),
        }));

        assert_eq!(
            RequestSchemaLocator::locate(&doc, "originProductNo").as_deref(),
            Some("ProductUpdateRequest")
        );
    }

    #[test]
    fn test_locate_none_when_no_path_contains_token() {
        let doc = doc(json!({
            "/products/{productId}": put_with_ref("#/components/schemas/Req"),
        }));

        assert!(RequestSchemaLocator::locate(&doc, "originProductNo").is_none());
    }

    #[test]
    fn test_locate_none_when_path_has_no_put() {
        let doc = doc(json!({
            "/products/{originProductNo}": {"get": {}},
        }));

        assert!(RequestSchemaLocator::locate(&doc, "originProductNo").is_none());
    }

    #[test]
    fn test_locate_none_when_chain_is_absent() {
        for operation in [
            json!({"put": {}}),
            json!({"put": {"requestBody": {}}}),
            json!({"put": {"requestBody": {"content": {"text/plain": {"schema": {"$ref": "#/x/Y"}}}}}}),
            json!({"put": {"requestBody": {"content": {"application/json": {}}}}}),
            json!({"put": {"requestBody": {"content": {"application/json": {"schema": {"type": "object"}}}}}}),
        ] {
            let doc = doc(json!({ "/products/{originProductNo}": operation }));
            assert!(
                RequestSchemaLocator::locate(&doc, "originProductNo").is_none(),
                "chain should short-circuit to None"
            );
        }
    }

    #[test]
    fn test_locate_first_qualifying_path_wins() {
        let doc = doc(json!({
            "/v1/products/{originProductNo}": put_with_ref("#/components/schemas/First"),
            "/v2/products/{originProductNo}": put_with_ref("#/components/schemas/Second"),
        }));

        assert_eq!(
            RequestSchemaLocator::locate(&doc, "originProductNo").as_deref(),
            Some("First")
        );
    }

    #[test]
    fn test_locate_stops_at_first_qualifying_path_even_without_ref() {
        // The first tokened path with a PUT is the only one considered,
        // even when its reference chain does not resolve.
        let doc = doc(json!({
            "/v1/products/{originProductNo}": {"put": {}},
            "/v2/products/{originProductNo}": put_with_ref("#/components/schemas/Second"),
        }));

        assert!(RequestSchemaLocator::locate(&doc, "originProductNo").is_none());
    }
}
