use std::sync::Arc;

use crate::config::Config;
use crate::drafts::DraftStoreFactory;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Draft backend. Default: in-memory. Redis when REDIS_URL is set.
    pub drafts: Arc<dyn DraftStoreFactory>,
}
