//! Report configuration
//!
//! Bundles every knob of a report run: the input file, the PUT path
//! token, the target keyword groups, and the ordered report sections.
//! Defaults reproduce the commerce product API inspection the tool was
//! built for.

use anyhow::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A single report section: a display label and the property to look up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSection {
    /// Header label (uppercased when rendered)
    pub label: String,
    /// Property name looked up in the PUT schema; also the fallback
    /// search needle
    pub property: String,
}

impl ReportSection {
    fn named(name: &str) -> Self {
        Self {
            label: name.to_string(),
            property: name.to_string(),
        }
    }
}

/// Configuration for a report run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportConfig {
    /// Input file containing the embedded API document
    pub input_path: PathBuf,
    /// Token identifying the update path among the document's paths
    pub put_path_token: String,
    /// Keyword groups matched against schema names, in report order
    pub target_groups: IndexMap<String, Vec<String>>,
    /// Sections of the rendered report, in output order
    pub report_sections: Vec<ReportSection>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        let mut target_groups = IndexMap::new();
        target_groups.insert(
            "productInfoProvide".to_string(),
            strings(&["productInfoProvide", "ProductInfoProvide"]),
        );
        target_groups.insert(
            "certification".to_string(),
            strings(&["certification", "Certification"]),
        );
        target_groups.insert("delivery".to_string(), strings(&["delivery", "Delivery"]));
        target_groups.insert("option".to_string(), strings(&["option", "Option"]));
        target_groups.insert("seo".to_string(), strings(&["seo", "SEO"]));
        target_groups.insert("discount".to_string(), strings(&["discount", "Point", "point"]));

        let report_sections = [
            "productInfoProvide",
            "certification",
            "delivery",
            "option",
            "seo",
            "discount",
            "point",
        ]
        .iter()
        .map(|name| ReportSection::named(name))
        .collect();

        Self {
            input_path: PathBuf::new(),
            put_path_token: "originProductNo".to_string(),
            target_groups,
            report_sections,
        }
    }
}

impl ReportConfig {
    /// Default configuration for the given input file
    pub fn for_input(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            ..Self::default()
        }
    }

    /// Load a configuration from a JSON file
    ///
    /// Fields absent from the file keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: ReportConfig = serde_json::from_str(&contents)?;
        debug!("Loaded report config from {:?}", path);
        Ok(config)
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
