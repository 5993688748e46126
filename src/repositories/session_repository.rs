use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::domain::Session,
};

/// Shared handle to one session; the mutex isolates that session's writers.
pub type SessionHandle = Arc<Mutex<Session>>;

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn create(&self, session: Session) -> AppResult<SessionHandle>;
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<SessionHandle>>;
    async fn delete(&self, id: &Uuid) -> AppResult<()>;
    async fn count(&self) -> AppResult<usize>;
    /// Ids of sessions whose last activity is older than `cutoff`.
    async fn idle_since(&self, cutoff: DateTime<Utc>) -> AppResult<Vec<Uuid>>;
}

#[derive(Default)]
pub struct InMemorySessionRepository {
    sessions: RwLock<HashMap<Uuid, SessionHandle>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn create(&self, session: Session) -> AppResult<SessionHandle> {
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(&session.id) {
            return Err(AppError::AlreadyExists(format!(
                "Session with id '{}' already exists",
                session.id
            )));
        }

        let id = session.id;
        let handle = Arc::new(Mutex::new(session));
        sessions.insert(id, Arc::clone(&handle));
        Ok(handle)
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<SessionHandle>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(id).cloned())
    }

    async fn delete(&self, id: &Uuid) -> AppResult<()> {
        let mut sessions = self.sessions.write().await;
        sessions
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Session with id '{}' not found", id)))
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(self.sessions.read().await.len())
    }

    async fn idle_since(&self, cutoff: DateTime<Utc>) -> AppResult<Vec<Uuid>> {
        // Snapshot the handles so the map lock is not held while sessions are locked.
        let handles: Vec<(Uuid, SessionHandle)> = {
            let sessions = self.sessions.read().await;
            sessions.iter().map(|(id, h)| (*id, Arc::clone(h))).collect()
        };

        let mut idle = Vec::new();
        for (id, handle) in handles {
            if handle.lock().await.is_idle_since(cutoff) {
                idle.push(id);
            }
        }
        Ok(idle)
    }
}
