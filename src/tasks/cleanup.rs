//! TTL Cleanup Task
//!
//! Optional janitor that periodically removes expired cache entries. Reads
//! already treat expired entries as absent; the sweep only reclaims memory.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::Cache;

/// Spawns a background task that sweeps expired entries every `interval`.
///
/// Returns None without spawning anything when `interval` is zero, leaving
/// expiry purely lazy.
///
/// # Example
/// ```ignore
/// let cache: Cache<String> = Cache::new(1000, Duration::from_secs(300));
/// let janitor = spawn_cleanup_task(cache.clone(), Duration::from_secs(1));
/// // Later, during shutdown:
/// if let Some(handle) = janitor {
///     handle.abort();
/// }
/// ```
pub fn spawn_cleanup_task<V>(cache: Cache<V>, interval: Duration) -> Option<JoinHandle<()>>
where
    V: Clone + Send + 'static,
{
    if interval.is_zero() {
        debug!("TTL cleanup disabled, expiry is lazy only");
        return None;
    }

    Some(tokio::spawn(async move {
        info!(?interval, "Starting TTL cleanup task");

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.cleanup_expired();
            if removed > 0 {
                info!("TTL cleanup: removed {} expired entries", removed);
            } else {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    }))
}
