//! `wxs fetch` – ensure the schemas are extracted and print a summary.

use anyhow::Result;
use wxs_core::{SchemaLoader, VersionTag};

pub async fn run_fetch(loader: &SchemaLoader) -> Result<()> {
    let schemas = loader.run().await?;
    let layout = loader.layout_for(VersionTag::new(schemas.tag()));
    println!("Tag:        {}", schemas.tag());
    println!("Directory:  {}", layout.dir.display());
    println!("Files:      {}", schemas.raw().len());
    println!("Namespaces: {}", schemas.namespaces().len());
    Ok(())
}
