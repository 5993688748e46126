use std::{collections::BTreeSet, sync::Arc};

use uuid::Uuid;

use crate::{
    constants::{
        content::CONSENT_SECTIONS,
        messages::{CHECKLIST_COMPLETE, CHECKLIST_GETTING_STARTED},
    },
    errors::{AppError, AppResult},
    models::dto::response::{ChecklistItemView, ChecklistView},
    services::SessionService,
};

const HALFWAY_PERCENT: f64 = 50.0;

pub struct ChecklistService {
    sessions: Arc<SessionService>,
}

impl ChecklistService {
    pub fn new(sessions: Arc<SessionService>) -> Self {
        Self { sessions }
    }

    pub async fn view(&self, id: &Uuid) -> AppResult<ChecklistView> {
        let handle = self.sessions.handle(id).await?;
        let session = handle.lock().await;
        session.ensure_pre_quiz_completed()?;

        Ok(checklist_view(&session.checklist))
    }

    pub async fn set_item(&self, id: &Uuid, index: usize, checked: bool) -> AppResult<ChecklistView> {
        if index >= CONSENT_SECTIONS.len() {
            return Err(AppError::NotFound(format!("Checklist item {} does not exist", index)));
        }

        let handle = self.sessions.handle(id).await?;
        let mut session = handle.lock().await;
        session.ensure_pre_quiz_completed()?;

        if checked {
            session.checklist.insert(index);
        } else {
            session.checklist.remove(&index);
        }
        Ok(checklist_view(&session.checklist))
    }
}

pub fn checklist_view(checked: &BTreeSet<usize>) -> ChecklistView {
    let items: Vec<ChecklistItemView> = CONSENT_SECTIONS
        .iter()
        .enumerate()
        .map(|(index, &title)| ChecklistItemView {
            index,
            title,
            checked: checked.contains(&index),
        })
        .collect();

    let total = items.len();
    let completed = items.iter().filter(|item| item.checked).count();
    let progress_percent = if total == 0 {
        0.0
    } else {
        100.0 * completed as f64 / total as f64
    };

    ChecklistView {
        items,
        completed,
        total,
        progress_percent,
        status: progress_status(completed, total, progress_percent),
    }
}

fn progress_status(completed: usize, total: usize, progress_percent: f64) -> String {
    if completed == total {
        CHECKLIST_COMPLETE.to_string()
    } else if progress_percent >= HALFWAY_PERCENT {
        format!(
            "More than halfway there. {} item(s) left to review.",
            total - completed
        )
    } else {
        CHECKLIST_GETTING_STARTED.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemorySessionRepository;
    use crate::test_utils::fixtures::test_profile;

    fn checked(indices: &[usize]) -> BTreeSet<usize> {
        indices.iter().copied().collect()
    }

    #[test]
    fn progress_tiers() {
        let all = checklist_view(&checked(&[0, 1, 2, 3, 4, 5, 6]));
        assert_eq!(all.progress_percent, 100.0);
        assert_eq!(all.status, CHECKLIST_COMPLETE);

        let four = checklist_view(&checked(&[0, 1, 2, 3]));
        assert_eq!(four.completed, 4);
        assert!(four.status.contains("3 item(s) left"));

        let three = checklist_view(&checked(&[0, 1, 2]));
        assert_eq!(three.status, CHECKLIST_GETTING_STARTED);
    }

    #[tokio::test]
    async fn items_can_be_checked_and_cleared() {
        let sessions = Arc::new(SessionService::new(Arc::new(InMemorySessionRepository::new())));
        let id = sessions.start_session().await.unwrap().session_id;
        let service = ChecklistService::new(Arc::clone(&sessions));

        assert!(matches!(service.view(&id).await, Err(AppError::Forbidden(_))));
        sessions.submit_profile(&id, test_profile()).await.unwrap();
        assert!(matches!(
            service.set_item(&id, 2, true).await,
            Err(AppError::Forbidden(_))
        ));
        sessions.handle(&id).await.unwrap().lock().await.pre_completed = true;

        service.set_item(&id, 2, true).await.unwrap();
        service.set_item(&id, 2, true).await.unwrap();
        let view = service.set_item(&id, 5, true).await.unwrap();
        assert_eq!(view.completed, 2);

        let view = service.set_item(&id, 2, false).await.unwrap();
        assert_eq!(view.completed, 1);
        assert!(view.items[5].checked);

        assert!(matches!(
            service.set_item(&id, 7, true).await,
            Err(AppError::NotFound(_))
        ));
    }
}
