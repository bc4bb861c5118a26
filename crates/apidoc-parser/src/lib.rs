//! # apidoc-parser
//!
//! Parser for OpenAPI-style documents embedded in larger text blobs.
//! Strips the JSON payload out of a doc file, types the substructure the
//! tooling traverses, and resolves schema references by name.

mod types;
mod loader;
mod matcher;
mod request;
mod resolver;
mod error;

pub use types::*;
pub use loader::DocumentLoader;
pub use matcher::SchemaMatcher;
pub use request::RequestSchemaLocator;
pub use resolver::{ref_schema_name, SchemaIndex};
pub use error::{ExtractError, ExtractResult};
