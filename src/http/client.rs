//! HTTP client with explicit timeouts
//!
//! Wraps a reqwest client so that no request can block indefinitely.
//! Status codes are returned to the caller untouched; deciding whether a
//! status is acceptable is the caller's job.

use crate::config::SourceSettings;
use crate::error::Result;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout
    pub timeout: Duration,
    /// Connection timeout
    pub connect_timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

impl From<&SourceSettings> for HttpClientConfig {
    fn from(settings: &SourceSettings) -> Self {
        Self {
            timeout: settings.timeout(),
            connect_timeout: settings.connect_timeout(),
            ..Self::default()
        }
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the connection timeout
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// HTTP client bound to a base URL
pub struct HttpClient {
    client: Client,
    base_url: Url,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a client for the given base URL
    pub fn new(base_url: &str, config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: normalize_base_url(base_url)?,
            config,
        })
    }

    /// The base URL, always ending with a slash
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the URL for an endpoint path relative to the base URL
    pub fn endpoint_url(&self, path: &str, query: &[(&str, String)]) -> Result<Url> {
        let mut url = self.base_url.join(path.trim_start_matches('/'))?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }

    /// GET an absolute URL
    pub async fn get(&self, url: &Url) -> Result<Response> {
        debug!("GET {url}");
        let response = self.client.get(url.clone()).send().await?;
        debug!("GET {url} -> {}", response.status());
        Ok(response)
    }

    /// GET the base URL itself
    pub async fn get_root(&self) -> Result<Response> {
        let root = self.base_url.clone();
        self.get(&root).await
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url.as_str())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Parse a base URL and make sure relative joins append to its path
fn normalize_base_url(base_url: &str) -> Result<Url> {
    let mut url = Url::parse(base_url)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
