//! Draft persistence — in-progress form input saved per field under `resume_<field>`.
//!
//! Storage sits behind the `DraftStore` port. `AppState` carries an
//! `Arc<dyn DraftStoreFactory>` and each request opens the store for its draft scope.

pub mod memory;
pub mod redis_store;

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::form::policy::policy_for;

pub use memory::InMemoryDrafts;
pub use redis_store::RedisDrafts;

const DRAFT_KEY_PREFIX: &str = "resume_";

/// Drafts may run past the field's maximum (the user is still editing) but not beyond
/// this multiple of it.
pub const DRAFT_LENGTH_FACTOR: usize = 2;

#[derive(Debug, Error)]
pub enum DraftStoreError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),
}

pub type DraftResult<T> = Result<T, DraftStoreError>;

/// Key/value port for one client's drafts.
#[async_trait]
pub trait DraftStore: Send + Sync {
    async fn get(&self, key: &str) -> DraftResult<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> DraftResult<()>;
    async fn delete(&self, key: &str) -> DraftResult<()>;
}

/// Opens the draft store belonging to one draft scope (one browser).
pub trait DraftStoreFactory: Send + Sync {
    fn open(&self, scope: Uuid) -> Arc<dyn DraftStore>;
}

pub fn draft_key(field_name: &str) -> String {
    format!("{DRAFT_KEY_PREFIX}{field_name}")
}

/// Reads the saved value for each field. Fields with no saved value, or an empty one,
/// are left out so the page keeps its own default.
pub async fn load_drafts(
    store: &dyn DraftStore,
    fields: &[&str],
) -> DraftResult<BTreeMap<String, String>> {
    let mut drafts = BTreeMap::new();
    for &field in fields {
        if let Some(value) = store.get(&draft_key(field)).await? {
            if !value.is_empty() {
                drafts.insert(field.to_string(), value);
            }
        }
    }
    debug!("Loaded {} draft field(s)", drafts.len());
    Ok(drafts)
}

/// Largest draft value, in chars, accepted for a field.
pub fn draft_limit(field_name: &str) -> usize {
    policy_for(field_name).max_length * DRAFT_LENGTH_FACTOR
}

pub async fn save_draft(store: &dyn DraftStore, field_name: &str, value: &str) -> DraftResult<()> {
    store.set(&draft_key(field_name), value).await
}

pub async fn clear_drafts(store: &dyn DraftStore, fields: &[&str]) -> DraftResult<()> {
    for &field in fields {
        store.delete(&draft_key(field)).await?;
    }
    debug!("Cleared {} draft field(s)", fields.len());
    Ok(())
}
