//! Report rendering

use anyhow::Result;
use apidoc_parser::{
    ref_schema_name, RawApiDoc, RequestSchemaLocator, SchemaIndex, SchemaMatcher, SchemaShape,
};
use serde_json::Value;
use std::io::Write;

use crate::config::{ReportConfig, ReportSection};

/// How many fallback schema fragments a section prints at most
const FALLBACK_FRAGMENT_LIMIT: usize = 2;

/// Renders the schema report for a parsed document
pub struct SchemaReport<'a> {
    doc: &'a RawApiDoc,
    config: &'a ReportConfig,
}

impl<'a> SchemaReport<'a> {
    pub fn new(doc: &'a RawApiDoc, config: &'a ReportConfig) -> Self {
        Self { doc, config }
    }

    /// Render the full report: banner, PUT schema announcement and
    /// property list, then each configured section
    pub fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Successfully loaded JSON")?;

        let index = SchemaIndex::new(&self.doc.components.schemas);
        let put_schema = RequestSchemaLocator::locate(self.doc, &self.config.put_path_token);

        if let Some(name) = put_schema.as_deref() {
            writeln!(out, "Found PUT schema: {}", name)?;
            writeln!(out)?;
            writeln!(out, "--- Properties in {} ---", name)?;
            if let Some(properties) = index.get(name).and_then(SchemaShape::properties) {
                for property in properties.keys() {
                    writeln!(out, "- {}", property)?;
                }
            }
        }

        for section in &self.config.report_sections {
            writeln!(out)?;
            writeln!(
                out,
                "==================== {} ====================",
                section.label.to_uppercase()
            )?;
            self.render_section(out, &index, put_schema.as_deref(), section)?;
        }

        Ok(())
    }

    /// Render one section body: the PUT schema's own property when it has
    /// one, a case-insensitive name search over all schemas otherwise
    fn render_section<W: Write>(
        &self,
        out: &mut W,
        index: &SchemaIndex<'a>,
        put_schema: Option<&str>,
        section: &ReportSection,
    ) -> Result<()> {
        let inline = put_schema
            .and_then(|name| index.get(name))
            .and_then(SchemaShape::properties)
            .and_then(|properties| properties.get(section.property.as_str()));

        if let Some(value) = inline {
            writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
            if let SchemaShape::Reference { target } = SchemaShape::classify(value) {
                writeln!(out)?;
                writeln!(out, "--- Referenced Schema: {} ---", ref_schema_name(target))?;
                writeln!(out, "{}", pretty_or_empty(index.resolve(target))?)?;
            }
            return Ok(());
        }

        let matches = SchemaMatcher::search_insensitive(index.schemas(), &section.property);
        if matches.is_empty() {
            return Ok(());
        }

        writeln!(out, "Possible schemas: {:?}", matches)?;
        for name in matches.iter().take(FALLBACK_FRAGMENT_LIMIT) {
            writeln!(out)?;
            writeln!(out, "--- Schema: {} ---", name)?;
            writeln!(out, "{}", pretty_or_empty(index.get(name))?)?;
        }

        Ok(())
    }
}

/// Pretty-print a schema definition, or an empty object when it is absent
fn pretty_or_empty(value: Option<&Value>) -> Result<String> {
    match value {
        Some(value) => Ok(serde_json::to_string_pretty(value)?),
        None => Ok("{}".to_string()),
    }
}
