//! HTTP client for the upstream news API
//!
//! The upstream service exposes `GET /api/news` and `GET /api/news/{id}`
//! returning JSON. Responses are deserialized into the typed schema here, at
//! the boundary, so the rest of the backend never sees a malformed record.

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::debug;

use nachos_core::UpstreamNewsItem;

use crate::error::NewsError;

/// Production upstream host, overridable via configuration
pub const DEFAULT_BASE_URL: &str = "https://news.losnachoschipies.fr";

/// Client for the upstream news API
pub struct NewsApiClient {
    client: Client,
    base_url: String,
}

impl NewsApiClient {
    /// Create a client against the given upstream base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .user_agent("NachosSite/1.0")
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_url: base_url.into(),
        }
    }

    /// Upstream base URL this client targets
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full news listing
    pub async fn fetch_all(&self) -> Result<Vec<UpstreamNewsItem>, NewsError> {
        let url = format!("{}/api/news", self.base_url);
        debug!("Fetching news list from {}", url);
        self.get_json(&url).await
    }

    /// Fetch a single news item by id
    ///
    /// The id is an opaque path segment; upstream is the source of truth for
    /// whether it names anything.
    pub async fn fetch_by_id(&self, id: &str) -> Result<UpstreamNewsItem, NewsError> {
        let url = format!("{}/api/news/{}", self.base_url, id);
        debug!("Fetching news item from {}", url);
        self.get_json(&url).await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, NewsError> {
        let response = self
            .client
            .get(url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| NewsError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NewsError::Upstream {
                status: status.as_u16(),
                message: format!("news API returned status {}", status),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| NewsError::Parse(e.to_string()))
    }
}

impl Default for NewsApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
