//! News response cache
//!
//! In-memory cache of successful upstream responses. Each entry stays fresh
//! for a fixed revalidation window; once expired, the next request fetches
//! upstream again. Best effort only: callers must not rely on staleness
//! bounds, and failures are never cached.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use tracing::debug;

use nachos_core::UpstreamNewsItem;

/// Freshness window for cached upstream responses
pub const REVALIDATE_WINDOW: Duration = Duration::from_secs(60);

/// Cache entry with expiration
struct CacheEntry<T> {
    data: T,
    expires_at: Instant,
}

impl<T: Clone> CacheEntry<T> {
    fn new(data: T, ttl: Duration) -> Self {
        Self {
            data,
            expires_at: Instant::now() + ttl,
        }
    }

    fn fresh(&self) -> Option<T> {
        if Instant::now() < self.expires_at {
            Some(self.data.clone())
        } else {
            None
        }
    }
}

/// Time-windowed cache for the two proxy endpoints
pub struct NewsCache {
    ttl: Duration,
    list: RwLock<Option<CacheEntry<Vec<UpstreamNewsItem>>>>,
    items: RwLock<HashMap<String, CacheEntry<UpstreamNewsItem>>>,
}

impl NewsCache {
    /// Create a cache with the standard revalidation window
    pub fn new() -> Self {
        Self::with_ttl(REVALIDATE_WINDOW)
    }

    /// Create a cache with a custom freshness window
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            list: RwLock::new(None),
            items: RwLock::new(HashMap::new()),
        }
    }

    /// Get the cached news listing if still fresh
    pub async fn get_list(&self) -> Option<Vec<UpstreamNewsItem>> {
        let entry = self.list.read().await;
        let hit = entry.as_ref().and_then(CacheEntry::fresh);
        if hit.is_some() {
            debug!("News list served from cache");
        }
        hit
    }

    /// Store a fresh news listing
    pub async fn store_list(&self, items: Vec<UpstreamNewsItem>) {
        let mut entry = self.list.write().await;
        *entry = Some(CacheEntry::new(items, self.ttl));
    }

    /// Get a cached news item if still fresh
    ///
    /// Keys are the raw request path segments, not parsed ids.
    pub async fn get_item(&self, id: &str) -> Option<UpstreamNewsItem> {
        let items = self.items.read().await;
        let hit = items.get(id).and_then(CacheEntry::fresh);
        if hit.is_some() {
            debug!("News item {} served from cache", id);
        }
        hit
    }

    /// Store a fresh news item
    pub async fn store_item(&self, id: &str, item: UpstreamNewsItem) {
        let mut items = self.items.write().await;
        // Expired siblings are dropped here rather than by a sweeper task
        items.retain(|_, entry| Instant::now() < entry.expires_at);
        items.insert(id.to_string(), CacheEntry::new(item, self.ttl));
    }

    /// Number of live entries, for the health report
    pub async fn entry_count(&self) -> usize {
        let list = self.list.read().await;
        let items = self.items.read().await;
        let now = Instant::now();
        let list_count = list
            .as_ref()
            .filter(|entry| now < entry.expires_at)
            .map_or(0, |_| 1);
        list_count
            + items
                .values()
                .filter(|entry| now < entry.expires_at)
                .count()
    }
}

impl Default for NewsCache {
    fn default() -> Self {
        Self::new()
    }
}
