//! Schema loader: resolve tag → ensure extraction → parse → index.

use std::path::PathBuf;

use crate::config::WxsConfig;
use crate::error::Result;
use crate::fetch;
use crate::parse;
use crate::resolve;
use crate::schema::Schemas;
use crate::tag::{TagLayout, VersionTag};

/// Loads the WebExtension schemas of one repository snapshot.
///
/// ```ignore
/// let schemas = SchemaLoader::new(cfg, out_dir)
///     .with_tag(Some(VersionTag::new("FIREFOX_128_0_3_RELEASE")))
///     .run()
///     .await?;
/// let privacy = &schemas.namespaces()["privacy"];
/// ```
#[derive(Debug, Clone)]
pub struct SchemaLoader {
    cfg: WxsConfig,
    out_dir: PathBuf,
    tag: Option<VersionTag>,
}

impl SchemaLoader {
    pub fn new(cfg: WxsConfig, out_dir: impl Into<PathBuf>) -> Self {
        SchemaLoader {
            cfg,
            out_dir: out_dir.into(),
            tag: None,
        }
    }

    /// Pins the tag to load. `None` resolves the latest stable release during `run`.
    pub fn with_tag(mut self, tag: Option<VersionTag>) -> Self {
        self.tag = tag;
        self
    }

    /// Returns the pinned tag, or asks the latest-release endpoint.
    pub async fn resolve_tag(&self) -> Result<VersionTag> {
        match &self.tag {
            Some(tag) => Ok(tag.clone()),
            None => resolve::resolve_latest_tag(&self.cfg.latest_release_url).await,
        }
    }

    /// Extraction directory of `tag` under this loader's output directory.
    pub fn layout_for(&self, tag: VersionTag) -> TagLayout {
        TagLayout::new(tag, &self.out_dir, &self.cfg.repo)
    }

    /// Resolves the tag and computes its extraction directory.
    pub async fn layout(&self) -> Result<TagLayout> {
        let tag = self.resolve_tag().await?;
        Ok(self.layout_for(tag))
    }

    /// Runs the full load. Any failure aborts the run; no partial result is returned.
    pub async fn run(&self) -> Result<Schemas> {
        let layout = self.layout().await?;

        if fetch::tag_dir_exists(&layout).await {
            tracing::info!("using cached schemas at {}", layout.dir.display());
        } else {
            fetch::download_areas(&self.cfg, &layout, &self.out_dir).await?;
        }

        let raw = parse::parse_areas(&layout, &self.cfg.areas, &self.cfg.schema_subpath).await?;
        let schemas = Schemas::new(&layout.tag, raw);
        tracing::info!(
            "loaded {} schema files, {} namespaces for {}",
            schemas.raw().len(),
            schemas.namespaces().len(),
            schemas.tag()
        );
        Ok(schemas)
    }
}
