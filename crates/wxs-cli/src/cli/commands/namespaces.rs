//! `wxs namespaces` – list namespaces and fragment counts.

use anyhow::Result;
use wxs_core::SchemaLoader;

pub async fn run_namespaces(loader: &SchemaLoader) -> Result<()> {
    let schemas = loader.run().await?;
    let width = schemas
        .namespaces()
        .keys()
        .map(String::len)
        .max()
        .unwrap_or(0);
    for (name, fragments) in schemas.namespaces() {
        println!("{:<width$}  {}", name, fragments.len(), width = width);
    }
    Ok(())
}
