use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::{
    profile::ProfileGate, AnswerSet, ChatMessage, Page, Profile, QuizVariant, Session,
};
use crate::services::grading_service::{AnswerFeedback, Grade, ScoreTier};

#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub page: Page,
    pub profile: ProfileGate,
    pub section_position: usize,
    pub pre_quiz_completed: bool,
    pub post_quiz_completed: bool,
    pub post_quiz_score: f64,
}

impl From<&Session> for SessionView {
    fn from(session: &Session) -> Self {
        SessionView {
            session_id: session.id,
            created_at: session.created_at,
            page: session.page,
            profile: session.gate,
            section_position: session.cursor.position(),
            pre_quiz_completed: session.pre_completed,
            post_quiz_completed: session.post_completed,
            post_quiz_score: session.post_score_percent,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub id: String,
    pub text: String,
    pub options: Vec<String>,
    pub selected_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<AnswerFeedback>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionView {
    pub variant: QuizVariant,
    pub position: usize,
    pub section_count: usize,
    pub title: String,
    pub questions: Vec<QuestionView>,
    pub can_previous: bool,
    pub can_next: bool,
    pub can_submit: bool,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnswerOutcome {
    pub question_id: String,
    pub selected_index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<AnswerFeedback>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GradeView {
    pub correct_count: usize,
    pub total_count: usize,
    pub percent: f64,
    pub tier: ScoreTier,
    pub title: &'static str,
    pub message: &'static str,
}

impl From<Grade> for GradeView {
    fn from(grade: Grade) -> Self {
        let tier = grade.tier();
        GradeView {
            correct_count: grade.correct_count,
            total_count: grade.total_count,
            percent: grade.percent,
            tier,
            title: tier.title(),
            message: tier.message(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmissionResult {
    pub variant: QuizVariant,
    pub grade: GradeView,
    pub next_page: Page,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatReply {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub history: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExplanationView {
    pub topic: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub suggested_questions: Vec<String>,
}

/// Generated multiple-choice question, returned as the model wrote it.
#[derive(Debug, Clone, Serialize)]
pub struct PracticeQuestionView {
    pub topic: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Structured understanding rating returned by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct UnderstandingEvaluation {
    /// Understanding score from 1 to 10.
    pub score: u8,
    pub feedback: String,
    #[serde(default)]
    pub areas_to_improve: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChecklistItemView {
    pub index: usize,
    pub title: &'static str,
    pub checked: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChecklistView {
    pub items: Vec<ChecklistItemView>,
    pub completed: usize,
    pub total: usize,
    pub progress_percent: f64,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub label: &'static str,
    pub count: usize,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_attempts: usize,
    pub completed_pre_quiz: usize,
    pub completed_post_quiz: usize,
    pub mean_post_score: Option<f64>,
    pub distribution: Vec<CategoryShare>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub recorded_current_session: bool,
    pub stats: DashboardStats,
}

#[derive(Debug, Clone, Serialize)]
pub struct AttemptSummary {
    pub index: usize,
    pub recorded_at: DateTime<Utc>,
    pub session_id: Uuid,
    pub profile: Profile,
    pub pre_quiz_completed: bool,
    pub post_quiz_completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_quiz_score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerChange {
    pub question_number: usize,
    pub pre_index: usize,
    pub post_index: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct AttemptDetail {
    pub summary: AttemptSummary,
    pub pre_answers: AnswerSet,
    pub post_answers: AnswerSet,
    pub pre_grade: GradeView,
    pub post_grade: GradeView,
    pub answer_changes: Vec<AnswerChange>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_view_carries_tier_messages() {
        let view = GradeView::from(Grade {
            correct_count: 6,
            total_count: 10,
            percent: 60.0,
        });

        assert_eq!(view.tier, ScoreTier::Middle);
        assert_eq!(view.title, ScoreTier::Middle.title());
    }

    #[test]
    fn evaluation_tolerates_missing_areas() {
        let parsed: UnderstandingEvaluation =
            serde_json::from_str(r#"{"score": 7, "feedback": "Good"}"#).unwrap();
        assert_eq!(parsed.score, 7);
        assert!(parsed.areas_to_improve.is_empty());
    }

    #[test]
    fn session_view_reflects_new_session() {
        let session = Session::new();
        let view = SessionView::from(&session);

        assert_eq!(view.session_id, session.id);
        assert_eq!(view.page, Page::ProfileSetup);
        assert!(!view.pre_quiz_completed);
    }
}
