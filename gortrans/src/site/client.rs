//! HTTP page fetching.

use reqwest::header::{ACCEPT_CHARSET, HeaderMap, HeaderValue};
use tracing::debug;

use super::error::ClientError;
use super::pages::PageSource;

/// Default site root (mobile version, lighter markup).
const DEFAULT_BASE_URL: &str = "https://www.m.gortransperm.ru";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Longest error body kept in [`ClientError::Api`].
const MAX_ERROR_BODY: usize = 500;

/// Configuration for the site client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Site root, without a trailing slash
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Create a config pointing at the production site.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing or a mirror).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetches raw pages from the site over HTTP.
///
/// No retries and no caching: each call is one GET.
#[derive(Debug, Clone)]
pub struct GortransClient {
    http: reqwest::Client,
    base_url: String,
}

impl GortransClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT_CHARSET, HeaderValue::from_static("utf-8"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Absolute URL for a site path such as `/route/80/`.
    pub fn page_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl PageSource for GortransClient {
    async fn fetch_page(&self, path: &str, query: &[(&str, &str)]) -> Result<String, ClientError> {
        let url = self.page_url(path);
        debug!(url = %url, ?query, "fetching page");

        let response = self.http.get(&url).query(query).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(path.to_string()));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: body.chars().take(MAX_ERROR_BODY).collect(),
            });
        }

        Ok(response.text().await?)
    }
}
