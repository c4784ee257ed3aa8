use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use uuid::Uuid;

use super::internal::Auth;

struct Entry {
    auth: Auth,
    cached_at: Instant,
}

/// In-memory cache of resolved sessions
///
/// Saves a database round trip on every authenticated request. Entries live
/// for `ttl` and never outlive the session itself.
#[derive(Clone)]
pub struct Authenticated {
    entries: Arc<DashMap<Uuid, Entry>>,
    ttl: Duration,
}

impl Default for Authenticated {
    fn default() -> Self {
        Self::new(Duration::from_secs(300))
    }
}

impl Authenticated {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            ttl,
        }
    }

    #[tracing::instrument(skip(self), fields(token_id = %token_id))]
    pub fn get(&self, token_id: Uuid) -> Option<Auth> {
        let fresh = {
            let entry = self.entries.get(&token_id)?;

            (entry.cached_at.elapsed() < self.ttl && !entry.auth.is_expired())
                .then(|| entry.auth.clone())
        };

        if fresh.is_none() {
            tracing::debug!("Evicting stale session");
            self.entries.remove(&token_id);
        }

        fresh
    }

    #[tracing::instrument(skip(self, auth), fields(token_id = %auth.token, driver_id = auth.driver.id))]
    pub fn set(&self, auth: &Auth) {
        self.entries.insert(
            auth.token,
            Entry {
                auth: auth.clone(),
                cached_at: Instant::now(),
            },
        );

        tracing::debug!("Session cached");
    }

    /// Forget a session, e.g. on logout
    #[tracing::instrument(skip(self), fields(token_id = %token_id))]
    pub fn remove(&self, token_id: Uuid) {
        if self.entries.remove(&token_id).is_some() {
            tracing::debug!("Session removed from cache");
        }
    }

    /// Drop every stale entry, returning how many were removed
    pub fn evict_expired(&self) -> usize {
        let before = self.entries.len();

        self.entries
            .retain(|_, entry| entry.cached_at.elapsed() < self.ttl && !entry.auth.is_expired());

        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
