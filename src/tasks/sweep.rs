//! TTL Sweep Task
//!
//! Background task that periodically removes expired cache entries so that
//! keys nobody reads again are still reclaimed.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::cache::{CacheStore, Clock};

/// Default interval between sweeps.
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

// == Sweep Task ==
/// Handle owning the periodic sweep of one cache store.
///
/// The sweep runs until [`stop`](Self::stop) is called or the handle is
/// dropped.
///
/// # Example
/// ```ignore
/// let cache = shared(CacheStore::new(CacheConfig::default()));
/// let sweep = SweepTask::start(cache.clone(), DEFAULT_SWEEP_INTERVAL);
/// // Later, during shutdown:
/// sweep.stop();
/// ```
#[derive(Debug)]
pub struct SweepTask {
    handle: JoinHandle<()>,
}

impl SweepTask {
    /// Spawns the sweep loop on the current tokio runtime.
    ///
    /// Each iteration sleeps for `interval`, then takes the write lock and
    /// removes expired entries. A panic inside one sweep is logged and the
    /// loop carries on.
    pub fn start<V, C>(cache: Arc<RwLock<CacheStore<V, C>>>, interval: Duration) -> Self
    where
        V: Send + Sync + 'static,
        C: Clock + 'static,
    {
        let handle = tokio::spawn(async move {
            info!(
                "Starting TTL sweep task with interval of {} ms",
                interval.as_millis()
            );

            loop {
                tokio::time::sleep(interval).await;

                let outcome = {
                    let mut cache_guard = cache.write().await;
                    panic::catch_unwind(AssertUnwindSafe(|| cache_guard.clean_expired()))
                };

                match outcome {
                    Ok(0) => debug!("TTL sweep: no expired entries found"),
                    Ok(removed) => info!("TTL sweep: removed {} expired entries", removed),
                    Err(payload) => error!("TTL sweep panicked: {}", panic_message(&*payload)),
                }
            }
        });

        Self { handle }
    }

    /// Cancels the sweep.
    pub fn stop(self) {
        self.handle.abort();
        info!("TTL sweep task stopped");
    }
}

impl Drop for SweepTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        *msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.as_str()
    } else {
        "unknown panic"
    }
}
