//! Version tags and the on-disk layout derived from them.

use regex::Regex;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Identifier of a repository snapshot, e.g. `FIREFOX_128_0_3_RELEASE`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionTag(String);

impl VersionTag {
    pub fn new(tag: impl Into<String>) -> Self {
        VersionTag(tag.into())
    }

    /// Maps a dotted release number to the release tag naming convention:
    /// `128.0.3` → `FIREFOX_128_0_3_RELEASE`.
    pub fn from_release(release: &str) -> Self {
        VersionTag(format!("FIREFOX_{}_RELEASE", release.replace('.', "_")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VersionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn releases_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"/pub/firefox/releases/([^/]+)/").expect("valid regex"))
}

/// Extracts the release number from a download path such as
/// `/pub/firefox/releases/128.0.3/linux-x86_64/en-US/firefox-128.0.3.tar.bz2`.
pub fn release_from_path(path: &str) -> Option<&str> {
    releases_pattern()
        .captures(path)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// A resolved tag together with its extraction directory.
#[derive(Debug, Clone)]
pub struct TagLayout {
    pub tag: VersionTag,
    /// `{out_dir}/{repo}-{tag}`; holds one subdirectory per area.
    pub dir: PathBuf,
}

impl TagLayout {
    pub fn new(tag: VersionTag, out_dir: &Path, repo: &str) -> Self {
        let dir = out_dir.join(format!("{}-{}", repo, tag));
        TagLayout { tag, dir }
    }

    /// Schema directory of one area: `{dir}/{area}/{subpath...}`.
    pub fn schema_dir(&self, area: &str, subpath: &[String]) -> PathBuf {
        let mut p = self.dir.join(area);
        for seg in subpath {
            p.push(seg);
        }
        p
    }
}
