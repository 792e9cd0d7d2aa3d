//! Archive download and extraction for each product area.
//!
//! Each area's schema directory is served by the repository archive endpoint
//! as its own zip. The zips share a top-level `{repo}-{tag}/` directory, so
//! extracting all of them into `out_dir` produces one tag directory holding
//! every area.

use std::io::Cursor;
use std::path::{Path, PathBuf};
use tokio::task::JoinSet;

use crate::config::WxsConfig;
use crate::error::{Result, SchemaError};
use crate::http;
use crate::tag::TagLayout;

/// `{base}/{tag}.zip/{area}/{subpath...}`
pub fn archive_url(base: &str, tag: &str, area: &str, subpath: &[String]) -> String {
    let mut parts = vec![
        base.trim_end_matches('/').to_string(),
        format!("{}.zip", tag),
        area.to_string(),
    ];
    parts.extend(subpath.iter().cloned());
    parts.join("/")
}

/// True if the tag directory is already on disk. Contents are not verified.
pub async fn tag_dir_exists(layout: &TagLayout) -> bool {
    tokio::fs::metadata(&layout.dir)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false)
}

/// Downloads and extracts every configured area concurrently into `out_dir`.
/// Returns on the first failure; results of the remaining areas are discarded.
pub async fn download_areas(cfg: &WxsConfig, layout: &TagLayout, out_dir: &Path) -> Result<()> {
    tokio::fs::create_dir_all(out_dir)
        .await
        .map_err(|e| SchemaError::io(out_dir, e))?;

    let mut join_set = JoinSet::new();
    for area in &cfg.areas {
        let url = archive_url(
            &cfg.archive_base_url,
            layout.tag.as_str(),
            area,
            &cfg.schema_subpath,
        );
        let out_dir: PathBuf = out_dir.to_path_buf();
        let area = area.clone();
        join_set.spawn_blocking(move || {
            tracing::info!("downloading {} schemas from {}", area, url);
            let bytes = http::get_bytes(&url)?;
            extract_zip(&bytes, &out_dir, &url)?;
            tracing::info!("extracted {} ({} bytes) into {}", area, bytes.len(), out_dir.display());
            Ok::<_, SchemaError>(())
        });
    }

    // An early return drops the set; sibling results are discarded.
    while let Some(res) = join_set.join_next().await {
        res??;
    }
    Ok(())
}

/// Extracts a zip held in memory into `out_dir`. `url` is only used for error context.
pub fn extract_zip(bytes: &[u8], out_dir: &Path, url: &str) -> Result<()> {
    let archive_err = |source: zip::result::ZipError| SchemaError::Archive {
        url: url.to_string(),
        source,
    };
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).map_err(archive_err)?;
    archive.extract(out_dir).map_err(archive_err)?;
    Ok(())
}
