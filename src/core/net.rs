// src/core/net.rs
// Page fetching. One blocking GET per call with the site's fixed header profile.

use std::collections::HashMap;
use std::time::Instant;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use scraper::Html;
use tracing::debug;

use crate::config::SiteConfig;
use crate::error::{Result, ScrapeError};

/// Anything that can turn a URL into page markup.
///
/// `Sync` because detail pages are fetched from scoped worker threads that
/// share one source.
pub trait PageSource: Sync {
    fn fetch(&self, url: &str) -> Result<String>;
}

/// Fetch `url` and parse it into a navigable document.
/// Transport and status failures propagate unchanged.
pub fn fetch_document(source: &dyn PageSource, url: &str) -> Result<Html> {
    let body = source.fetch(url)?;
    Ok(Html::parse_document(&body))
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(site: &SiteConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        for (name, value) in &site.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| ScrapeError::bad_value("header name", name.as_str()))?;
            let value = HeaderValue::from_str(value)
                .map_err(|_| ScrapeError::bad_value("header value", value.as_str()))?;
            headers.insert(name, value);
        }

        // The blocking client defaults to a 30s timeout; `None` switches it off.
        let client = Client::builder()
            .default_headers(headers)
            .timeout(site.timeout)
            .build()
            .map_err(ScrapeError::Client)?;

        Ok(Self { client })
    }
}

impl PageSource for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        let t = Instant::now();
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|source| ScrapeError::Transport { url: s!(url), source })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::Status { url: s!(url), status: status.as_u16() });
        }

        let body = resp
            .text()
            .map_err(|source| ScrapeError::Transport { url: s!(url), source })?;
        debug!(url, bytes = body.len(), elapsed = ?t.elapsed(), "fetched");
        Ok(body)
    }
}

/// Serves pages from memory. Unknown URLs answer 404.
/// Used for offline runs against captured pages.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    pages: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.insert(url, body);
        self
    }

    pub fn insert(&mut self, url: impl Into<String>, body: impl Into<String>) {
        self.pages.insert(url.into(), body.into());
    }
}

impl PageSource for MemorySource {
    fn fetch(&self, url: &str) -> Result<String> {
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| ScrapeError::Status { url: s!(url), status: 404 })
    }
}
