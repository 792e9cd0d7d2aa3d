use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_REPO: &str = "mozilla-unified";
pub const DEFAULT_ARCHIVE_BASE_URL: &str = "https://hg.mozilla.org/mozilla-unified/archive";
pub const DEFAULT_LATEST_RELEASE_URL: &str =
    "https://download.mozilla.org/?product=firefox-latest&os=linux64&lang=en-US";

/// Global configuration loaded from `~/.config/wxs/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WxsConfig {
    /// Repository name; prefixes the per-tag extraction directory (`{repo}-{tag}`).
    pub repo: String,
    /// Base URL of the repository archive endpoint. The tag, area and schema
    /// subpath are appended to it.
    pub archive_base_url: String,
    /// Endpoint that redirects to the latest stable release.
    pub latest_release_url: String,
    /// Product areas holding a copy of the schema directory.
    pub areas: Vec<String>,
    /// Path segments of the schema directory below each area.
    pub schema_subpath: Vec<String>,
    /// Extraction root; if missing, `~/.cache/wxs/schemas` is used.
    #[serde(default)]
    pub out_dir: Option<PathBuf>,
}

impl Default for WxsConfig {
    fn default() -> Self {
        Self {
            repo: DEFAULT_REPO.to_string(),
            archive_base_url: DEFAULT_ARCHIVE_BASE_URL.to_string(),
            latest_release_url: DEFAULT_LATEST_RELEASE_URL.to_string(),
            areas: vec!["browser".to_string(), "toolkit".to_string()],
            schema_subpath: vec![
                "components".to_string(),
                "extensions".to_string(),
                "schemas".to_string(),
            ],
            out_dir: None,
        }
    }
}

impl WxsConfig {
    /// Extraction root: the configured `out_dir`, else the XDG cache location.
    pub fn resolve_out_dir(&self) -> Result<PathBuf> {
        match &self.out_dir {
            Some(dir) => Ok(dir.clone()),
            None => default_out_dir(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("wxs")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// `~/.cache/wxs/schemas` on Debian.
pub fn default_out_dir() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("wxs")?;
    Ok(xdg_dirs.get_cache_home().join("wxs").join("schemas"))
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<WxsConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = WxsConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: WxsConfig = toml::from_str(&data)?;
    Ok(cfg)
}
