use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::constants::content::{CONSENT_SECTIONS, PRACTICE_TOPICS};
use crate::models::domain::{Page, ProfileField};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RecordAnswerRequest {
    #[validate(length(min = 1, max = 16))]
    pub question_id: String,
    pub option_index: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NavigateRequest {
    pub page: Page,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1, max = 2000, message = "Question must be 1-2000 characters"))]
    pub question: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ExplanationRequest {
    #[validate(range(max = 6, message = "Unknown consent section"))]
    pub section_index: usize,
}

impl ExplanationRequest {
    pub fn topic(&self) -> &'static str {
        CONSENT_SECTIONS[self.section_index.min(CONSENT_SECTIONS.len() - 1)]
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PracticeQuestionRequest {
    #[validate(range(max = 3, message = "Unknown practice topic"))]
    pub topic_index: usize,
}

impl PracticeQuestionRequest {
    pub fn topic(&self) -> &'static str {
        PRACTICE_TOPICS[self.topic_index.min(PRACTICE_TOPICS.len() - 1)]
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EvaluationRequest {
    #[validate(length(min = 1, max = 1000))]
    pub question: String,
    #[validate(length(min = 1, max = 4000))]
    pub answer: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChecklistUpdateRequest {
    pub checked: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardQuery {
    pub session_id: Option<Uuid>,
    #[serde(default)]
    pub field: ProfileField,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<usize>,
}

impl HistoryQuery {
    pub const DEFAULT_LIMIT: usize = 5;
    pub const MAX_LIMIT: usize = 50;

    pub fn limit(&self) -> usize {
        self.limit.unwrap_or(Self::DEFAULT_LIMIT).clamp(1, Self::MAX_LIMIT)
    }
}
