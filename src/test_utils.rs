#[cfg(test)]
pub mod fixtures {
    use uuid::Uuid;

    use crate::models::domain::{
        profile::{AgeBand, EducationLevel, Gender, SurgeryCategory},
        Profile, Session,
    };
    use crate::services::SessionService;

    /// Standard profile used across tests
    pub fn test_profile() -> Profile {
        Profile {
            age_band: AgeBand::Fifties,
            gender: Gender::Male,
            education: EducationLevel::University,
            surgery_category: SurgeryCategory::Urology,
        }
    }

    /// Session that has already passed the profile gate
    pub fn session_with_profile() -> Session {
        let mut session = Session::new();
        session
            .set_profile(test_profile())
            .expect("fresh session accepts a profile");
        session
    }

    /// Starts a session, submits the standard profile and marks the pre quiz
    /// as submitted, unlocking content, counselor and checklist routes.
    pub async fn unlocked_session(sessions: &SessionService) -> Uuid {
        let id = sessions
            .start_session()
            .await
            .expect("session starts")
            .session_id;
        sessions
            .submit_profile(&id, test_profile())
            .await
            .expect("fresh session accepts a profile");
        sessions
            .handle(&id)
            .await
            .expect("session exists")
            .lock()
            .await
            .pre_completed = true;
        id
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::Page;

    #[test]
    fn test_fixtures_session_with_profile() {
        let session = session_with_profile();
        assert_eq!(session.profile(), Some(&test_profile()));
        assert_eq!(session.page, Page::PreQuiz);
    }
}
