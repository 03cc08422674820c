//! Feed refresh controller
//!
//! Owns the provider and the shared snapshot. Refreshes are single-flight:
//! a refresh requested while one is in flight is dropped, not queued or
//! deferred, and an in-flight fetch cannot be cancelled.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::providers::FeedProvider;

use super::state::FeedSnapshot;

pub struct FeedController {
    provider: Box<dyn FeedProvider>,
    snapshot: Arc<Mutex<FeedSnapshot>>,
    feed_limit: u32,
    /// Single-flight guard; set for the duration of a fetch
    refreshing: AtomicBool,
}

impl FeedController {
    pub fn new(provider: Box<dyn FeedProvider>, feed_limit: u32) -> Self {
        Self {
            provider,
            snapshot: Arc::new(Mutex::new(FeedSnapshot::default())),
            feed_limit,
            refreshing: AtomicBool::new(false),
        }
    }

    /// Handle to the shared snapshot
    pub fn snapshot(&self) -> Arc<Mutex<FeedSnapshot>> {
        self.snapshot.clone()
    }

    /// Fetch the feed and update the snapshot
    ///
    /// Returns false when a refresh was already in flight; that request is
    /// dropped. A failed fetch records the error text but keeps the posts
    /// from the previous successful fetch.
    pub fn refresh(&self) -> bool {
        if self.refreshing.swap(true, Ordering::SeqCst) {
            return false;
        }
        self.lock().is_refreshing = true;

        let result = self.provider.fetch(self.feed_limit);

        let mut state = self.lock();
        match result {
            Ok(posts) => {
                state.posts = posts;
                state.last_error = None;
            }
            Err(e) => {
                log::warn!("feed refresh failed: {e}");
                state.last_error = Some(e.to_string());
            }
        }
        state.is_refreshing = false;
        drop(state);

        self.refreshing.store(false, Ordering::SeqCst);
        true
    }

    fn lock(&self) -> MutexGuard<'_, FeedSnapshot> {
        self.snapshot.lock().unwrap_or_else(|e| e.into_inner())
    }
}
