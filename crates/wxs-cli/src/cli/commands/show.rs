//! `wxs show <namespace>` and `wxs raw <file>` – print fragments as JSON.

use anyhow::{Context, Result};
use wxs_core::SchemaLoader;

pub async fn run_show(loader: &SchemaLoader, namespace: &str) -> Result<()> {
    let schemas = loader.run().await?;
    let fragments = schemas
        .namespace(namespace)
        .with_context(|| format!("unknown namespace {namespace:?} in {}", schemas.tag()))?;
    println!("{}", serde_json::to_string_pretty(fragments)?);
    Ok(())
}

pub async fn run_raw(loader: &SchemaLoader, file: &str) -> Result<()> {
    let schemas = loader.run().await?;
    let fragments = schemas
        .file(file)
        .with_context(|| format!("no schema file {file:?} in {}", schemas.tag()))?;
    println!("{}", serde_json::to_string_pretty(fragments)?);
    Ok(())
}
