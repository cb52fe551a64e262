//! Document loading: local JSON files or remote endpoints.
//!
//! The core crates require already-parsed values, so every transport and
//! parse failure is handled here before they are invoked.

use std::fs;
use std::time::Duration;

use serde_json::Value;
use tracing::debug;

const USER_AGENT: &str = concat!("apidrift/", env!("CARGO_PKG_VERSION"));

/// Failure to obtain or parse a document.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Local file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// Request could not be built or did not complete.
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// The endpoint answered outside the 2xx range.
    #[error("{url} answered with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The document body is not valid JSON.
    #[error("{origin} is not valid JSON: {source}")]
    Parse {
        origin: String,
        source: serde_json::Error,
    },
}

/// Load a JSON document from a file path or an http(s) URL.
pub fn load_json(target: &str, timeout: Duration) -> Result<Value, SourceError> {
    if is_url(target) {
        fetch_url(target, timeout)
    } else {
        read_file(target)
    }
}

/// Returns `true` if the target is a remote URL rather than a path.
pub fn is_url(target: &str) -> bool {
    target.starts_with("http://") || target.starts_with("https://")
}

fn read_file(path: &str) -> Result<Value, SourceError> {
    debug!(path, "reading local document");
    let text = fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_string(),
        source,
    })?;
    parse(&text, path)
}

fn fetch_url(url: &str, timeout: Duration) -> Result<Value, SourceError> {
    debug!(url, timeout_secs = timeout.as_secs(), "fetching remote document");
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|source| SourceError::Http {
            url: url.to_string(),
            source,
        })?;

    let response = client
        .get(url)
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .map_err(|source| SourceError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response.text().map_err(|source| SourceError::Http {
        url: url.to_string(),
        source,
    })?;
    parse(&body, url)
}

fn parse(text: &str, origin: &str) -> Result<Value, SourceError> {
    serde_json::from_str(text).map_err(|source| SourceError::Parse {
        origin: origin.to_string(),
        source,
    })
}
