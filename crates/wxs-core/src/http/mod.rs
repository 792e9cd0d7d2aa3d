//! Blocking HTTP helpers over libcurl.
//!
//! Both calls run in the current thread; call them from `spawn_blocking`
//! when used from async code.

mod parse;

pub use parse::ResponseHead;

use crate::error::{Result, SchemaError};
use std::str;

/// HEAD request that does not follow redirects. Returns the status and the
/// headers the loader cares about (`Location`).
pub fn head_no_redirect(url: &str) -> Result<ResponseHead> {
    let mut headers: Vec<String> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(|e| SchemaError::http(url, e))?;
    easy.nobody(true).map_err(|e| SchemaError::http(url, e))?; // HEAD request
    easy.follow_location(false)
        .map_err(|e| SchemaError::http(url, e))?;

    {
        let mut transfer = easy.transfer();
        transfer
            .header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    headers.push(s.trim_end().to_string());
                }
                true
            })
            .map_err(|e| SchemaError::http(url, e))?;
        transfer.perform().map_err(|e| SchemaError::http(url, e))?;
    }

    let code = easy.response_code().map_err(|e| SchemaError::http(url, e))?;
    Ok(parse::parse_head(code, &headers))
}

/// GET request buffering the whole body in memory. Non-2xx is a `Download` error.
pub fn get_bytes(url: &str) -> Result<Vec<u8>> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(|e| SchemaError::http(url, e))?;
    easy.follow_location(true)
        .map_err(|e| SchemaError::http(url, e))?;

    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(|e| SchemaError::http(url, e))?;
        transfer.perform().map_err(|e| SchemaError::http(url, e))?;
    }

    let code = easy.response_code().map_err(|e| SchemaError::http(url, e))?;
    if !(200..300).contains(&code) {
        return Err(SchemaError::Download {
            url: url.to_string(),
            status: code,
        });
    }
    tracing::debug!("GET {} -> {} ({} bytes)", url, code, body.len());
    Ok(body)
}
