//! `wxs tag` – print the resolved tag.

use anyhow::Result;
use wxs_core::SchemaLoader;

pub async fn run_tag(loader: &SchemaLoader) -> Result<()> {
    let tag = loader.resolve_tag().await?;
    println!("{tag}");
    Ok(())
}
