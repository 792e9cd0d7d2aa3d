//! `wxs dump` – serialize the whole load result.

use anyhow::{Context, Result};
use std::path::Path;
use wxs_core::SchemaLoader;

pub async fn run_dump(loader: &SchemaLoader, output: Option<&Path>) -> Result<()> {
    let schemas = loader.run().await?;
    let json = serde_json::to_string_pretty(&schemas)?;
    match output {
        Some(path) => {
            std::fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
            tracing::info!("wrote schema dump for {} to {}", schemas.tag(), path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
