//! schema-report CLI
//!
//! Loads an OpenAPI-style document embedded in a doc blob and prints the
//! configured schema report to stdout. Diagnostics go to stderr via
//! `RUST_LOG` so report output stays byte-stable across runs.

use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

use apidoc_parser::{DocumentLoader, ExtractError, SchemaMatcher};

mod config;
mod report;

use config::ReportConfig;
use report::SchemaReport;

/// Report schema fragments from an embedded OpenAPI-style document
#[derive(Parser, Debug)]
#[command(name = "schema-report")]
#[command(version = "0.1.0")]
#[command(about = "Reports schema fragments from an API document embedded in a doc blob")]
struct Args {
    /// Input file containing the embedded JSON document
    #[arg(required_unless_present = "config")]
    input: Option<PathBuf>,

    /// JSON config file overriding the built-in token, groups, and sections
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &args.config {
        Some(path) => ReportConfig::load(path)?,
        None => ReportConfig::default(),
    };
    if let Some(input) = args.input {
        config.input_path = input;
    }

    let doc = match DocumentLoader::load(&config.input_path) {
        Ok(doc) => doc,
        Err(ExtractError::MalformedInput) => {
            println!("Could not find start or end");
            return Ok(());
        }
        Err(ExtractError::Json(err)) => {
            println!("Error: {}", err);
            return Ok(());
        }
        Err(err) => {
            println!("Error: {}", err);
            return Ok(());
        }
    };

    let matches = SchemaMatcher::match_groups(&doc.components.schemas, &config.target_groups);
    for (group, names) in &matches {
        debug!("Target group {} matched {} schemas: {:?}", group, names.len(), names);
    }

    let report = SchemaReport::new(&doc, &config);
    let stdout = std::io::stdout();
    report.render(&mut stdout.lock())?;

    Ok(())
}
