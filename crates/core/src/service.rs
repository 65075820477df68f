//! Persistence service contract and in-memory mock

use crate::state::Category;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

/// Persistence failure surfaced by the service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("persistence failed: {0}")]
    Persistence(String),
}

/// External collaborator persisting the category selection.
#[async_trait]
pub trait CategoriesService: Send + Sync {
    /// Categories available for selection.
    async fn possible_categories(&self) -> Result<Vec<Category>, ServiceError>;

    /// Keys persisted by the last successful save.
    async fn selected_keys(&self) -> Result<Vec<String>, ServiceError>;

    /// Persist the selection.
    async fn save(&self, keys: Vec<String>) -> Result<(), ServiceError>;
}

/// In-memory mock with simulated latency.
///
/// Selected keys live behind an explicit shared handle owned by this
/// value; clones share the same storage.
#[derive(Clone)]
pub struct MockCategoriesService {
    categories: Vec<Category>,
    selected: Arc<RwLock<Vec<String>>>,
    latency: Duration,
    fail_next: Arc<AtomicBool>,
}

impl MockCategoriesService {
    pub fn new(categories: Vec<Category>, latency: Duration) -> Self {
        Self {
            categories,
            selected: Arc::new(RwLock::new(Vec::new())),
            latency,
            fail_next: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Make the next save fail, to exercise the failure path.
    pub fn fail_next_save(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl CategoriesService for MockCategoriesService {
    async fn possible_categories(&self) -> Result<Vec<Category>, ServiceError> {
        Ok(self.categories.clone())
    }

    async fn selected_keys(&self) -> Result<Vec<String>, ServiceError> {
        Ok(self.selected.read().clone())
    }

    async fn save(&self, keys: Vec<String>) -> Result<(), ServiceError> {
        tokio::time::sleep(self.latency).await;
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(ServiceError::Persistence("simulated failure".to_string()));
        }
        info!(count = keys.len(), "selection saved");
        *self.selected.write() = keys;
        Ok(())
    }
}
