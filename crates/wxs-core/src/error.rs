//! Error type for a schema load run. Every variant is fatal to the run.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    /// Latest-release lookup did not redirect, or the redirect target had no release number.
    #[error("tag resolution failed: {0}")]
    Resolution(String),

    /// Archive GET returned a non-2xx status.
    #[error("http status {status} while trying to download {url} - probably invalid tag name")]
    Download { url: String, status: u32 },

    /// Curl reported an error (connection, TLS, malformed URL, ...).
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: curl::Error,
    },

    /// Downloaded body was not a readable zip archive, or extraction failed.
    #[error("extracting archive from {url}: {source}")]
    Archive {
        url: String,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Schema file was not valid JSON after comment stripping.
    #[error("parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl SchemaError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SchemaError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn http(url: &str, source: curl::Error) -> Self {
        SchemaError::Http {
            url: url.to_string(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SchemaError>;
