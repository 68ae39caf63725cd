//! Caching layer for price series to avoid repeated provider calls

use crate::api::MarketDataProvider;
use crate::engine::PricePoint;
use crate::error::Result;
use async_trait::async_trait;
use cached::{Cached, TimedCache};
use chrono::NaiveDate;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// Cache key for a price series request
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// Stock symbol
    pub ticker: String,
    /// First day requested
    pub start: NaiveDate,
    /// Day after the last one requested
    pub end: NaiveDate,
}

impl CacheKey {
    /// Create a new cache key
    pub fn new(ticker: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            ticker: ticker.into(),
            start,
            end,
        }
    }
}

/// Thread-safe cache for price series
pub struct PriceCache {
    cache: Arc<RwLock<TimedCache<CacheKey, Vec<PricePoint>>>>,
}

impl PriceCache {
    /// Create a new cache with specified TTL
    pub fn new(ttl: Duration) -> Self {
        Self {
            cache: Arc::new(RwLock::new(TimedCache::with_lifespan(ttl))),
        }
    }

    /// Get a value from the cache
    pub async fn get(&self, key: &CacheKey) -> Option<Vec<PricePoint>> {
        let mut cache = self.cache.write().await;
        cache.cache_get(key).cloned()
    }

    /// Insert a value into the cache
    pub async fn insert(&self, key: CacheKey, value: Vec<PricePoint>) {
        let mut cache = self.cache.write().await;
        let _ = cache.cache_set(key, value);
    }

    /// Clear all cached entries
    pub async fn clear(&self) {
        let mut cache = self.cache.write().await;
        cache.cache_clear();
    }

    /// Get the number of cached entries
    pub async fn len(&self) -> usize {
        let cache = self.cache.read().await;
        cache.cache_size()
    }

    /// Check if the cache is empty
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Clone for PriceCache {
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
        }
    }
}

/// Provider wrapper that reuses recent successful fetches
///
/// Errors and empty series are never cached, so a transient provider failure
/// can be retried straight away.
pub struct CachedProvider<P> {
    inner: P,
    cache: PriceCache,
}

impl<P: MarketDataProvider> CachedProvider<P> {
    pub fn new(inner: P, ttl: Duration) -> Self {
        Self {
            inner,
            cache: PriceCache::new(ttl),
        }
    }

    /// Handle on the underlying cache
    pub fn cache(&self) -> &PriceCache {
        &self.cache
    }
}

#[async_trait]
impl<P: MarketDataProvider> MarketDataProvider for CachedProvider<P> {
    async fn closing_prices(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PricePoint>> {
        let key = CacheKey::new(ticker, start, end);

        if let Some(points) = self.cache.get(&key).await {
            tracing::debug!("Cache hit for key: {:?}", key);
            return Ok(points);
        }

        tracing::debug!("Cache miss for key: {:?}", key);

        let points = self.inner.closing_prices(ticker, start, end).await?;
        if !points.is_empty() {
            self.cache.insert(key, points.clone()).await;
        }

        Ok(points)
    }
}
