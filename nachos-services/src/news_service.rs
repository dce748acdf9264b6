//! News Service
//!
//! Cache-then-fetch orchestration for the news proxy: serve a fresh cached
//! response when one exists, otherwise forward to the upstream API and cache
//! the result. Failures pass through untouched so the routes can translate
//! them; nothing is retried here.

use std::time::Duration;

use tracing::info;

use nachos_core::UpstreamNewsItem;
use nachos_news::{NewsApiClient, NewsError};

use crate::news_cache::NewsCache;

/// News proxy service
pub struct NewsService {
    client: NewsApiClient,
    cache: NewsCache,
}

impl NewsService {
    /// Create a service with the standard revalidation window
    pub fn new(client: NewsApiClient) -> Self {
        Self {
            client,
            cache: NewsCache::new(),
        }
    }

    /// Create a service with a custom cache freshness window
    pub fn with_cache_ttl(client: NewsApiClient, ttl: Duration) -> Self {
        Self {
            client,
            cache: NewsCache::with_ttl(ttl),
        }
    }

    /// Upstream base URL, for the health report
    pub fn upstream_base_url(&self) -> &str {
        self.client.base_url()
    }

    /// Number of live cache entries, for the health report
    pub async fn cached_entries(&self) -> usize {
        self.cache.entry_count().await
    }

    /// Full news listing, cached for the revalidation window
    pub async fn list_news(&self) -> Result<Vec<UpstreamNewsItem>, NewsError> {
        if let Some(cached) = self.cache.get_list().await {
            return Ok(cached);
        }

        let items = self.client.fetch_all().await?;
        info!("Fetched {} news items from upstream", items.len());
        self.cache.store_list(items.clone()).await;
        Ok(items)
    }

    /// Single news item by id, cached for the revalidation window
    pub async fn news_by_id(&self, id: &str) -> Result<UpstreamNewsItem, NewsError> {
        if let Some(cached) = self.cache.get_item(id).await {
            return Ok(cached);
        }

        let item = self.client.fetch_by_id(id).await?;
        info!("Fetched news item {} from upstream", id);
        self.cache.store_item(id, item.clone()).await;
        Ok(item)
    }
}
