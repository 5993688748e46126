use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{errors::AppResult, models::domain::AttemptRecord};

#[async_trait]
pub trait AttemptRepository: Send + Sync {
    /// Appends `record` unless the same attempt is already stored.
    /// Returns whether the collection grew.
    async fn append_if_new(&self, record: AttemptRecord) -> AppResult<bool>;
    async fn find_all(&self) -> AppResult<Vec<AttemptRecord>>;
    async fn find_by_index(&self, index: usize) -> AppResult<Option<AttemptRecord>>;
}

/// Process-lifetime attempt collection shared by every session.
#[derive(Default)]
pub struct InMemoryAttemptRepository {
    records: Mutex<Vec<AttemptRecord>>,
}

impl InMemoryAttemptRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AttemptRepository for InMemoryAttemptRepository {
    async fn append_if_new(&self, record: AttemptRecord) -> AppResult<bool> {
        let mut records = self.records.lock().await;
        if records.iter().any(|existing| existing.same_attempt(&record)) {
            return Ok(false);
        }
        records.push(record);
        Ok(true)
    }

    async fn find_all(&self) -> AppResult<Vec<AttemptRecord>> {
        Ok(self.records.lock().await.clone())
    }

    async fn find_by_index(&self, index: usize) -> AppResult<Option<AttemptRecord>> {
        Ok(self.records.lock().await.get(index).cloned())
    }
}
