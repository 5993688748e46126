use std::sync::Arc;

use crate::{
    config::Config,
    repositories::{InMemoryAttemptRepository, InMemorySessionRepository},
    services::{
        AttemptService, ChecklistService, CounselorService, LlmClient, OpenAiClient, QuestionBank,
        QuizService, SessionService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub session_service: Arc<SessionService>,
    pub quiz_service: Arc<QuizService>,
    pub counselor_service: Arc<CounselorService>,
    pub checklist_service: Arc<ChecklistService>,
    pub attempt_service: Arc<AttemptService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let llm = Arc::new(OpenAiClient::from_config(&config));
        Self::with_llm(config, llm)
    }

    /// Wires every service around the given model client.
    pub fn with_llm(config: Config, llm: Arc<dyn LlmClient>) -> Self {
        let config = Arc::new(config);
        let bank = QuestionBank::standard();

        let session_repository = Arc::new(InMemorySessionRepository::new());
        let session_service = Arc::new(SessionService::new(session_repository));

        let quiz_service = Arc::new(QuizService::new(Arc::clone(&session_service), bank));
        let counselor_service = Arc::new(CounselorService::new(
            Arc::clone(&session_service),
            llm,
            Arc::clone(&config),
        ));
        let checklist_service = Arc::new(ChecklistService::new(Arc::clone(&session_service)));

        let attempt_repository = Arc::new(InMemoryAttemptRepository::new());
        let attempt_service = Arc::new(AttemptService::new(
            attempt_repository,
            Arc::clone(&session_service),
            bank,
        ));

        Self {
            session_service,
            quiz_service,
            counselor_service,
            checklist_service,
            attempt_service,
            config,
        }
    }
}
