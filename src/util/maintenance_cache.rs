use std::future::Future;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{debug, error};

#[derive(Debug, Clone, Copy)]
struct CachedFlag {
    enabled: bool,
    loaded_at: Instant,
}

/// Maintenance flag memoized for a fixed TTL so the middleware does not hit
/// the database on every request. A stale value lives at most `ttl`.
#[derive(Debug)]
pub struct MaintenanceCache {
    ttl: Duration,
    entry: RwLock<Option<CachedFlag>>,
}

impl MaintenanceCache {
    pub fn new(ttl: Duration) -> Self {
        MaintenanceCache { ttl, entry: RwLock::new(None) }
    }

    /// Cached flag, refreshed through `load` once expired.
    ///
    /// A failing load reports "off" and is not cached, so the next request retries.
    pub async fn get_or_load<F, Fut, E>(&self, load: F) -> bool
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<bool, E>>,
        E: std::fmt::Display,
    {
        if let Some(flag) = *self.entry.read().await {
            if flag.loaded_at.elapsed() < self.ttl {
                return flag.enabled;
            }
        }

        match load().await {
            Ok(enabled) => {
                debug!("Maintenance flag refreshed: {}", enabled);
                *self.entry.write().await = Some(CachedFlag { enabled, loaded_at: Instant::now() });
                enabled
            }
            Err(e) => {
                error!("Failed to load maintenance flag, assuming off: {}", e);
                false
            }
        }
    }

    /// Store a freshly written value, e.g. right after settings are saved.
    pub async fn set(&self, enabled: bool) {
        *self.entry.write().await = Some(CachedFlag { enabled, loaded_at: Instant::now() });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_value_is_cached_within_ttl() {
        let cache = MaintenanceCache::new(Duration::from_secs(60));
        let loads = AtomicUsize::new(0);

        for _ in 0..3 {
            let enabled = cache
                .get_or_load(|| async {
                    loads.fetch_add(1, Ordering::SeqCst);
                    Ok::<_, String>(true)
                })
                .await;
            assert!(enabled);
        }
        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_expired_value_is_reloaded() {
        let cache = MaintenanceCache::new(Duration::from_millis(10));
        assert!(cache.get_or_load(|| async { Ok::<_, String>(true) }).await);
        tokio::time::sleep(Duration::from_millis(25)).await;
        assert!(!cache.get_or_load(|| async { Ok::<_, String>(false) }).await);
    }

    #[tokio::test]
    async fn test_load_failure_means_off_and_is_not_cached() {
        let cache = MaintenanceCache::new(Duration::from_secs(60));
        assert!(!cache.get_or_load(|| async { Err::<bool, _>("db down") }).await);
        assert!(cache.get_or_load(|| async { Ok::<_, String>(true) }).await);
    }

    #[tokio::test]
    async fn test_set_overrides_cached_value() {
        let cache = MaintenanceCache::new(Duration::from_secs(60));
        assert!(!cache.get_or_load(|| async { Ok::<_, String>(false) }).await);
        cache.set(true).await;
        assert!(cache.get_or_load(|| async { Ok::<_, String>(false) }).await);
    }
}
