use std::sync::Arc;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use tracing::info;
use uuid::Uuid;

use crate::drafts::{DraftResult, DraftStore, DraftStoreFactory};

/// Redis-backed drafts. Keys are `drafts:<scope>:<key>` and expire after `ttl_secs`.
#[derive(Clone)]
pub struct RedisDrafts {
    conn: ConnectionManager,
    ttl_secs: u64,
}

impl RedisDrafts {
    pub async fn connect(redis_url: &str, ttl_secs: u64) -> DraftResult<Self> {
        let client = redis::Client::open(redis_url)?;
        let conn = ConnectionManager::new(client).await?;
        info!("Redis draft store connected (ttl {ttl_secs}s)");
        Ok(Self { conn, ttl_secs })
    }
}

impl DraftStoreFactory for RedisDrafts {
    fn open(&self, scope: Uuid) -> Arc<dyn DraftStore> {
        Arc::new(RedisDraftStore {
            conn: self.conn.clone(),
            ttl_secs: self.ttl_secs,
            scope,
        })
    }
}

pub struct RedisDraftStore {
    conn: ConnectionManager,
    ttl_secs: u64,
    scope: Uuid,
}

impl RedisDraftStore {
    fn namespaced(&self, key: &str) -> String {
        namespaced_key(self.scope, key)
    }
}

fn namespaced_key(scope: Uuid, key: &str) -> String {
    format!("drafts:{scope}:{key}")
}

#[async_trait]
impl DraftStore for RedisDraftStore {
    async fn get(&self, key: &str) -> DraftResult<Option<String>> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn.get(self.namespaced(key)).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> DraftResult<()> {
        let mut conn = self.conn.clone();
        redis::cmd("SET")
            .arg(self.namespaced(key))
            .arg(value)
            .arg("EX")
            .arg(self.ttl_secs)
            .query_async::<_, ()>(&mut conn)
            .await?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> DraftResult<()> {
        let mut conn = self.conn.clone();
        let _: () = conn.del(self.namespaced(key)).await?;
        Ok(())
    }
}
