//! Best-effort remote page-title lookup.
//!
//! Fetches the bookmarked page (directly or through a configured proxy that
//! wraps the HTML in a JSON envelope) and extracts its `<title>` text. The
//! collaborator is untrusted: every failure mode is a tagged [`TitleError`]
//! and callers degrade to the hostname-derived label. Results are applied to
//! the live list only and never persisted.

mod fetch;
mod html;

use crate::config::LinkboxConfig;
use crate::label::derive_label;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Why a title lookup produced no usable title. Never surfaced to the user;
/// logged at debug level and replaced by the hostname-derived label.
#[derive(Debug, Error)]
pub enum TitleError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] curl::Error),
    #[error("HTTP {0}")]
    Http(u32),
    #[error("response body is not valid UTF-8")]
    Encoding,
    #[error("page has no usable <title>")]
    NoTitle,
}

/// Proxy response envelope (allorigins-style): raw page HTML in `contents`.
#[derive(Debug, Deserialize)]
struct ProxyEnvelope {
    contents: String,
}

/// One-shot title lookup client. Blocking (libcurl); call from
/// `spawn_blocking` when used from async code.
#[derive(Debug, Clone)]
pub struct TitleLookup {
    proxy: Option<String>,
    connect_timeout: Duration,
    timeout: Duration,
}

impl TitleLookup {
    pub fn from_config(cfg: &LinkboxConfig) -> Self {
        TitleLookup {
            proxy: cfg.title_proxy.clone(),
            connect_timeout: Duration::from_secs(cfg.fetch_connect_timeout_secs),
            timeout: Duration::from_secs(cfg.fetch_timeout_secs),
        }
    }

    /// Attempts to resolve the page title for `url`.
    pub fn lookup(&self, url: &str) -> Result<String, TitleError> {
        let request_url = self.request_url(url);
        let body = fetch::fetch_body(&request_url, self.connect_timeout, self.timeout)?;
        let body = String::from_utf8(body).map_err(|_| TitleError::Encoding)?;
        html::extract_title(&page_html(body)).ok_or(TitleError::NoTitle)
    }

    /// Resolves the display label for `url`: the remote title when the lookup
    /// succeeds, the hostname-derived label on any failure. Never fails.
    pub fn resolve_label(&self, url: &str) -> String {
        match self.lookup(url) {
            Ok(title) => title,
            Err(e) => {
                tracing::debug!(url, "title lookup failed, using hostname label: {}", e);
                derive_label(url)
            }
        }
    }

    /// The URL actually fetched: the target itself, or the proxy template
    /// with `{url}` replaced by the percent-encoded target.
    fn request_url(&self, url: &str) -> String {
        match &self.proxy {
            Some(template) => {
                let encoded: String =
                    url::form_urlencoded::byte_serialize(url.as_bytes()).collect();
                template.replace("{url}", &encoded)
            }
            None => url.to_string(),
        }
    }
}

/// Unwraps the proxy envelope if the body is one; otherwise the body is
/// assumed to be the page HTML itself (direct fetch, no proxy).
fn page_html(body: String) -> String {
    match serde_json::from_str::<ProxyEnvelope>(&body) {
        Ok(envelope) => envelope.contents,
        Err(_) => body,
    }
}
