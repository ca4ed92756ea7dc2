//! Sprite fetching and caching.
//!
//! [`SpriteStore`] is the seam between the compositor and the network:
//! the renderer asks for sprite bytes by name and does not care where
//! they come from. [`RemoteSprites`] is the production store, fetching
//! from the Habitica asset CDN through a bounded in-memory cache with
//! in-flight coalescing. Tests substitute a deterministic fake.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

/// CDN serving the avatar sprite assets.
pub const DEFAULT_ASSETS_URL: &str =
    "https://habitica-assets.s3.amazonaws.com/mobileApp/images";

/// Default number of sprites kept in the in-memory cache.
const DEFAULT_CACHE_CAPACITY: usize = 32;

/// Errors from a sprite store. The compositor downgrades these to
/// per-layer warnings; they are never fatal to a composition.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The fetch itself failed (DNS, connect, timeout, body read).
    #[error("request for sprite '{name}' failed: {reason}")]
    Request { name: String, reason: String },

    /// The asset host answered with a non-success status.
    #[error("unexpected status {status} fetching sprite '{name}'")]
    Status { name: String, status: u16 },
}

/// Source of sprite images, keyed by sprite name.
///
/// Sprites are immutable once published (new art gets a new name), so
/// implementations may cache indefinitely.
#[async_trait]
pub trait SpriteStore: Send + Sync {
    /// Fetch the encoded image bytes for a sprite.
    async fn fetch(&self, name: &str) -> Result<Vec<u8>, StoreError>;
}

struct CacheInner {
    map: HashMap<String, Arc<Vec<u8>>>,
    order: VecDeque<String>,
    capacity: usize,
}

/// A bounded sprite cache with insertion-order eviction.
///
/// Safe for concurrent use. A capacity of zero disables caching.
pub struct SpriteCache {
    inner: Mutex<CacheInner>,
}

impl SpriteCache {
    pub fn new(capacity: usize) -> Self {
        SpriteCache {
            inner: Mutex::new(CacheInner {
                map: HashMap::new(),
                order: VecDeque::new(),
                capacity,
            }),
        }
    }

    pub async fn get(&self, name: &str) -> Option<Arc<Vec<u8>>> {
        self.inner.lock().await.map.get(name).cloned()
    }

    /// Insert a sprite, evicting the oldest entry when full.
    pub async fn put(&self, name: &str, bytes: Vec<u8>) {
        let mut inner = self.inner.lock().await;
        if inner.capacity == 0 {
            return;
        }
        if inner.map.contains_key(name) {
            return;
        }
        while inner.order.len() >= inner.capacity {
            if let Some(oldest) = inner.order.pop_front() {
                inner.map.remove(&oldest);
            }
        }
        inner.map.insert(name.to_string(), Arc::new(bytes));
        inner.order.push_back(name.to_string());
    }

    pub async fn evict(&self, name: &str) {
        let mut inner = self.inner.lock().await;
        inner.map.remove(name);
        inner.order.retain(|entry| entry != name);
    }
}

/// Sprite store backed by the Habitica asset CDN.
///
/// Concurrent fetches for the same sprite are coalesced: a second
/// caller for a name already being downloaded waits on the first fetch
/// and is then served from the cache.
pub struct RemoteSprites {
    client: reqwest::Client,
    assets_url: String,
    cache: SpriteCache,
    in_flight: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl RemoteSprites {
    /// Store against the production CDN with a default HTTP client.
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new(), DEFAULT_ASSETS_URL)
    }

    /// Store reusing an existing [`reqwest::Client`] and a custom asset
    /// host.
    pub fn with_client(client: reqwest::Client, assets_url: impl Into<String>) -> Self {
        RemoteSprites {
            client,
            assets_url: assets_url.into(),
            cache: SpriteCache::new(DEFAULT_CACHE_CAPACITY),
            in_flight: Mutex::new(HashMap::new()),
        }
    }

    /// Resize the sprite cache. Zero disables caching.
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache = SpriteCache::new(capacity);
        self
    }

    async fn download(&self, name: &str) -> Result<Vec<u8>, StoreError> {
        let url = sprite_url(&self.assets_url, name);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| StoreError::Request {
                name: name.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status {
                name: name.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| StoreError::Request {
                name: name.to_string(),
                reason: e.to_string(),
            })?
            .to_vec();
        tracing::debug!(sprite = name, size = bytes.len(), "fetched sprite");
        Ok(bytes)
    }
}

impl Default for RemoteSprites {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpriteStore for RemoteSprites {
    async fn fetch(&self, name: &str) -> Result<Vec<u8>, StoreError> {
        if let Some(bytes) = self.cache.get(name).await {
            return Ok(bytes.to_vec());
        }

        // Serialize fetches per sprite name so concurrent callers do
        // not download the same asset twice.
        let key_lock = {
            let mut in_flight = self.in_flight.lock().await;
            in_flight
                .entry(name.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };
        let _guard = key_lock.lock().await;

        // A coalesced waiter finds the bytes the first fetch cached.
        if let Some(bytes) = self.cache.get(name).await {
            return Ok(bytes.to_vec());
        }

        let result = self.download(name).await;
        if let Ok(bytes) = &result {
            self.cache.put(name, bytes.clone()).await;
        }
        self.in_flight.lock().await.remove(name);
        result
    }
}

/// Join a sprite name onto the asset host, defaulting the extension to
/// `.png` when the name carries none (off-convention assets like the
/// Kickstarter gear come with their own extension).
fn sprite_url(assets_url: &str, name: &str) -> String {
    let base = assets_url.trim_end_matches('/');
    if name.contains('.') {
        format!("{base}/{name}")
    } else {
        format!("{base}/{name}.png")
    }
}
