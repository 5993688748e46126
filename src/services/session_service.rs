use std::{sync::Arc, time::Duration};

use chrono::{TimeDelta, Utc};
use serde::Serialize;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::{
    constants::content::{InfoPage, DISCLAIMER, INFO_PAGES},
    errors::{AppError, AppResult},
    models::{
        domain::{Page, Profile, Session},
        dto::response::SessionView,
    },
    repositories::{SessionHandle, SessionRepository},
};

#[derive(Debug, Clone, Serialize)]
pub struct ContentView {
    pub pages: &'static [InfoPage],
    pub disclaimer: &'static str,
}

pub struct SessionService {
    repository: Arc<dyn SessionRepository>,
}

impl SessionService {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn start_session(&self) -> AppResult<SessionView> {
        let handle = self.repository.create(Session::new()).await?;
        let session = handle.lock().await;

        log::info!("Started session {}", session.id);
        Ok(SessionView::from(&*session))
    }

    /// Shared handle for `id`; every other service goes through here, so
    /// this is also where a session's activity clock is refreshed.
    pub async fn handle(&self, id: &Uuid) -> AppResult<SessionHandle> {
        let handle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Session with id '{}' not found", id)))?;
        handle.lock().await.touch();
        Ok(handle)
    }

    /// Drops every session with no activity within `ttl`. Returns how many went.
    pub async fn evict_idle(&self, ttl: Duration) -> AppResult<usize> {
        let ttl = TimeDelta::from_std(ttl)
            .map_err(|e| AppError::InternalError(format!("Invalid session TTL: {}", e)))?;
        let idle = self.repository.idle_since(Utc::now() - ttl).await?;

        let mut evicted = 0;
        for id in idle {
            match self.repository.delete(&id).await {
                Ok(()) => evicted += 1,
                // Already gone
                Err(AppError::NotFound(_)) => {}
                Err(e) => return Err(e),
            }
        }

        if evicted > 0 {
            log::info!(
                "Evicted {} idle session(s), {} remain",
                evicted,
                self.repository.count().await?
            );
        }
        Ok(evicted)
    }

    /// Runs `evict_idle` every `every` for the life of the process.
    pub fn spawn_idle_sweep(self: Arc<Self>, ttl: Duration, every: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            // First tick fires immediately
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if let Err(e) = self.evict_idle(ttl).await {
                    log::error!("Idle session sweep failed: {}", e);
                }
            }
        })
    }

    pub async fn session_view(&self, id: &Uuid) -> AppResult<SessionView> {
        let handle = self.handle(id).await?;
        let session = handle.lock().await;
        Ok(SessionView::from(&*session))
    }

    pub async fn submit_profile(&self, id: &Uuid, profile: Profile) -> AppResult<SessionView> {
        let handle = self.handle(id).await?;
        let mut session = handle.lock().await;
        session.set_profile(profile)?;

        log::info!(
            "Profile set for session {} ({})",
            session.id,
            profile.surgery_category.label()
        );
        Ok(SessionView::from(&*session))
    }

    pub async fn navigate(&self, id: &Uuid, requested: Page) -> AppResult<SessionView> {
        let handle = self.handle(id).await?;
        let mut session = handle.lock().await;
        let shown = session.navigate(requested);

        if shown != requested {
            log::debug!("Session {} asked for {:?}, routed to {:?}", session.id, requested, shown);
        }
        Ok(SessionView::from(&*session))
    }

    pub async fn content(&self, id: &Uuid) -> AppResult<ContentView> {
        let handle = self.handle(id).await?;
        let session = handle.lock().await;
        session.ensure_pre_quiz_completed()?;

        Ok(ContentView {
            pages: &INFO_PAGES,
            disclaimer: DISCLAIMER,
        })
    }
}
