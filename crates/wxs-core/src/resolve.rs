//! Latest stable tag discovery via the release download redirect.

use url::Url;

use crate::error::{Result, SchemaError};
use crate::http::{self, ResponseHead};
use crate::tag::{self, VersionTag};

/// Resolves the latest stable release tag by issuing a HEAD to
/// `latest_release_url` without following the redirect.
pub async fn resolve_latest_tag(latest_release_url: &str) -> Result<VersionTag> {
    let url = latest_release_url.to_string();
    let head = tokio::task::spawn_blocking(move || http::head_no_redirect(&url)).await??;
    let tag = tag_from_head(latest_release_url, &head)?;
    tracing::info!("resolved latest stable tag {}", tag);
    Ok(tag)
}

/// Validates the redirect response and maps its target to a tag.
/// Relative `Location` values are resolved against `request_url`.
pub fn tag_from_head(request_url: &str, head: &ResponseHead) -> Result<VersionTag> {
    if head.status != 302 {
        return Err(SchemaError::Resolution(format!(
            "expected redirect from {}, got HTTP {}",
            request_url, head.status
        )));
    }
    let location = head.location.as_deref().ok_or_else(|| {
        SchemaError::Resolution(format!("redirect from {} has no Location header", request_url))
    })?;

    let path = Url::parse(request_url)
        .and_then(|base| base.join(location))
        .map(|u| u.path().to_string())
        .unwrap_or_else(|_| location.to_string());

    let release = tag::release_from_path(&path).ok_or_else(|| {
        SchemaError::Resolution(format!(
            "could not parse version from redirect target {}",
            location
        ))
    })?;
    Ok(VersionTag::from_release(release))
}
