//! Minimal HTTP/1.1 server standing in for the release redirect and the
//! repository archive endpoints in integration tests.
//!
//! `HEAD /latest` answers with the configured status and `Location`.
//! `GET /archive/...` serves a registered zip body, or 404 for unknown paths.

use std::collections::HashMap;
use std::io::{Cursor, Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use wxs_core::config::WxsConfig;

pub const SUBPATH: &str = "components/extensions/schemas";

#[derive(Debug, Clone)]
pub struct ServerOptions {
    /// Status returned for `HEAD /latest`.
    pub latest_status: u32,
    /// `Location` header returned for `HEAD /latest`.
    pub latest_location: Option<String>,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            latest_status: 302,
            latest_location: Some(
                "/pub/firefox/releases/128.0.3/linux-x86_64/en-US/firefox-128.0.3.tar.bz2"
                    .to_string(),
            ),
        }
    }
}

pub struct ArchiveServer {
    /// Base URL, e.g. "http://127.0.0.1:12345/".
    pub base: String,
    archive_requests: Arc<AtomicUsize>,
}

impl ArchiveServer {
    /// Config pointing every endpoint at this server.
    pub fn config(&self) -> WxsConfig {
        WxsConfig {
            archive_base_url: format!("{}archive", self.base),
            latest_release_url: format!("{}latest", self.base),
            ..WxsConfig::default()
        }
    }

    /// Number of `GET /archive/...` requests served so far (any status).
    pub fn archive_requests(&self) -> usize {
        self.archive_requests.load(Ordering::SeqCst)
    }
}

/// Archive path for one area, as requested by the loader.
pub fn archive_path(tag: &str, area: &str) -> String {
    format!("/archive/{}.zip/{}/{}", tag, area, SUBPATH)
}

/// Builds the zip the archive endpoint returns for one area: every file is
/// stored under `mozilla-unified-{tag}/{area}/components/extensions/schemas/`.
pub fn area_zip(tag: &str, area: &str, files: &[(&str, &str)]) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut w = zip::ZipWriter::new(&mut buf);
        let opts = zip::write::SimpleFileOptions::default();
        for (name, body) in files {
            let path = format!("mozilla-unified-{}/{}/{}/{}", tag, area, SUBPATH, name);
            w.start_file(path, opts).unwrap();
            w.write_all(body.as_bytes()).unwrap();
        }
        w.finish().unwrap();
    }
    buf.into_inner()
}

/// Starts a server in a background thread. It runs until the process exits.
pub fn start(archives: HashMap<String, Vec<u8>>, opts: ServerOptions) -> ArchiveServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let archives = Arc::new(archives);
    let opts = Arc::new(opts);
    let archive_requests = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&archive_requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let archives = Arc::clone(&archives);
            let opts = Arc::clone(&opts);
            let counter = Arc::clone(&counter);
            thread::spawn(move || handle(stream, &archives, &opts, &counter));
        }
    });
    ArchiveServer {
        base: format!("http://127.0.0.1:{}/", port),
        archive_requests,
    }
}

fn handle(
    mut stream: std::net::TcpStream,
    archives: &HashMap<String, Vec<u8>>,
    opts: &ServerOptions,
    counter: &AtomicUsize,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let mut first = request.lines().next().unwrap_or("").split_whitespace();
    let method = first.next().unwrap_or("");
    let path = first.next().unwrap_or("");

    if path.starts_with("/latest") {
        let location = opts
            .latest_location
            .as_deref()
            .map(|l| format!("Location: {}\r\n", l))
            .unwrap_or_default();
        let response = format!(
            "HTTP/1.1 {} {}\r\n{}Content-Length: 0\r\nConnection: close\r\n\r\n",
            opts.latest_status,
            reason(opts.latest_status),
            location
        );
        let _ = stream.write_all(response.as_bytes());
        return;
    }

    if method.eq_ignore_ascii_case("GET") && path.starts_with("/archive/") {
        counter.fetch_add(1, Ordering::SeqCst);
        match archives.get(path) {
            Some(body) => {
                let header = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: application/zip\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                    body.len()
                );
                let _ = stream.write_all(header.as_bytes());
                let _ = stream.write_all(body);
            }
            None => not_found(&mut stream),
        }
        return;
    }

    not_found(&mut stream);
}

fn not_found(stream: &mut std::net::TcpStream) {
    let body = b"Not Found";
    let header = format!(
        "HTTP/1.1 404 Not Found\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        body.len()
    );
    let _ = stream.write_all(header.as_bytes());
    let _ = stream.write_all(body);
}

fn reason(status: u32) -> &'static str {
    match status {
        200 => "OK",
        301 => "Moved Permanently",
        302 => "Found",
        404 => "Not Found",
        _ => "Status",
    }
}
