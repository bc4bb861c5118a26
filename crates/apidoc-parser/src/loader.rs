//! Document loading and embedded-JSON extraction

use crate::error::{ExtractError, ExtractResult};
use crate::types::RawApiDoc;
use std::path::Path;
use tracing::debug;

/// Loads API documents embedded in larger text blobs
///
/// The input is typically a JavaScript module wrapping exported API-doc
/// data rather than a pure JSON file. The candidate payload is the
/// inclusive substring between the first `{` and the last `}` of the
/// trimmed content.
///
/// Known limitation: the brace heuristic truncates on a `}` inside a
/// string literal ahead of the true closing boundary and cannot separate
/// multiple independent JSON objects in one file.
pub struct DocumentLoader;

impl DocumentLoader {
    /// Load and parse a document from a file
    pub fn load(path: &Path) -> ExtractResult<RawApiDoc> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse a document from raw text content
    pub fn parse(content: &str) -> ExtractResult<RawApiDoc> {
        let candidate = Self::strip_embedded_json(content)?;
        let doc: RawApiDoc = serde_json::from_str(candidate)?;

        debug!(
            "Parsed embedded document: {} schemas, {} paths",
            doc.components.schemas.len(),
            doc.paths.len()
        );

        Ok(doc)
    }

    /// Slice the candidate JSON object out of the surrounding text
    ///
    /// Fails with [`ExtractError::MalformedInput`] when either boundary
    /// character is missing; no parse is attempted in that case. A last
    /// `}` that precedes the first `{` yields an empty candidate, which
    /// fails at the parse step instead.
    pub fn strip_embedded_json(content: &str) -> ExtractResult<&str> {
        let content = content.trim();
        let start = content.find('{').ok_or(ExtractError::MalformedInput)?;
        let end = content.rfind('}').ok_or(ExtractError::MalformedInput)?;

        if end < start {
            return Ok("");
        }

        Ok(&content[start..=end])
    }
}
