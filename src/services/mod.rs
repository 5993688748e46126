pub mod attempt_service;
pub mod checklist_service;
pub mod counselor_service;
pub mod csv_export;
pub mod grading_service;
pub mod llm_client;
pub mod question_bank;
pub mod quiz_service;
pub mod session_service;

pub use attempt_service::AttemptService;
pub use checklist_service::ChecklistService;
pub use counselor_service::CounselorService;
pub use llm_client::{LlmClient, OpenAiClient};
pub use question_bank::QuestionBank;
pub use quiz_service::QuizService;
pub use session_service::SessionService;
