use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::debug;
use uuid::Uuid;

use crate::drafts::{DraftResult, DraftStore, DraftStoreFactory};

/// Saved value and the time it was last written.
type Entry = (String, Instant);
type Scopes = Arc<RwLock<HashMap<Uuid, HashMap<String, Entry>>>>;

/// Process-local drafts. Used when no Redis URL is configured, and in tests.
///
/// Entries expire `ttl` after their last write, matching the Redis adapter. Expired
/// entries are hidden from `get` and swept on every `set`.
#[derive(Clone)]
pub struct InMemoryDrafts {
    scopes: Scopes,
    ttl: Duration,
}

impl InMemoryDrafts {
    pub fn new(ttl: Duration) -> Self {
        Self {
            scopes: Scopes::default(),
            ttl,
        }
    }
}

impl DraftStoreFactory for InMemoryDrafts {
    fn open(&self, scope: Uuid) -> Arc<dyn DraftStore> {
        Arc::new(MemoryDraftStore {
            scopes: self.scopes.clone(),
            ttl: self.ttl,
            scope,
        })
    }
}

pub struct MemoryDraftStore {
    scopes: Scopes,
    ttl: Duration,
    scope: Uuid,
}

impl MemoryDraftStore {
    fn is_live(&self, written_at: Instant, now: Instant) -> bool {
        now.duration_since(written_at) < self.ttl
    }
}

#[async_trait]
impl DraftStore for MemoryDraftStore {
    async fn get(&self, key: &str) -> DraftResult<Option<String>> {
        let now = Instant::now();
        let scopes = self.scopes.read().await;
        Ok(scopes
            .get(&self.scope)
            .and_then(|entries| entries.get(key))
            .filter(|(_, written_at)| self.is_live(*written_at, now))
            .map(|(value, _)| value.clone()))
    }

    async fn set(&self, key: &str, value: &str) -> DraftResult<()> {
        let now = Instant::now();
        let mut scopes = self.scopes.write().await;

        let before = scopes.len();
        scopes.retain(|_, entries| {
            entries.retain(|_, (_, written_at)| self.is_live(*written_at, now));
            !entries.is_empty()
        });
        if scopes.len() < before {
            debug!("Expired {} draft scope(s)", before - scopes.len());
        }

        scopes
            .entry(self.scope)
            .or_default()
            .insert(key.to_string(), (value.to_string(), now));
        Ok(())
    }

    async fn delete(&self, key: &str) -> DraftResult<()> {
        let mut scopes = self.scopes.write().await;
        if let Some(entries) = scopes.get_mut(&self.scope) {
            entries.remove(key);
            if entries.is_empty() {
                scopes.remove(&self.scope);
            }
        }
        Ok(())
    }
}
