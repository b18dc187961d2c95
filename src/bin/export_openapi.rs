//! Write the OpenAPI document to disk
//!
//! Usage: cargo run --bin export_openapi [-- <output path>]
//!
//! Defaults to docs/openapi.json.

use std::{env, fs, path::PathBuf};

use anyhow::{Context, Result};
use sentiment_api::docs::ApiDoc;
use utoipa::OpenApi;

fn main() -> Result<()> {
    let output = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("docs/openapi.json"));

    let json = ApiDoc::openapi()
        .to_pretty_json()
        .context("Failed to serialize OpenAPI spec")?;

    if let Some(dir) = output.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    fs::write(&output, json).with_context(|| format!("Failed to write {}", output.display()))?;
    println!("Exported OpenAPI spec to {}", output.display());
    Ok(())
}
