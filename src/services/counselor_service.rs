use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;
use validator::Validate;

use crate::{
    config::Config,
    constants::{
        messages::{
            EVALUATION_FALLBACK_FEEDBACK, EVALUATION_FALLBACK_SCORE, EVALUATION_MAX_SCORE,
            EVALUATION_MIN_SCORE,
        },
        prompts::{
            COUNSELOR_SYSTEM_PROMPT, EVALUATION_PROMPT, EXPLANATION_REQUEST_PROMPT,
            PRACTICE_QUESTION_PROMPT, SUGGESTED_QUESTIONS,
        },
    },
    errors::AppResult,
    models::{
        domain::{ChatMessage, Profile},
        dto::{
            request::{ChatRequest, EvaluationRequest, ExplanationRequest, PracticeQuestionRequest},
            response::{ChatReply, ExplanationView, PracticeQuestionView, UnderstandingEvaluation},
        },
    },
    services::{
        llm_client::{truncate_chars, CompletionRequest, LlmClient},
        SessionService,
    },
};

const EXPLANATION_MAX_TOKENS: u32 = 1000;
const EVALUATION_MAX_TOKENS: u32 = 300;
const EVALUATION_TEMPERATURE: f32 = 0.2;

pub struct CounselorService {
    sessions: Arc<SessionService>,
    llm: Arc<dyn LlmClient>,
    config: Arc<Config>,
}

impl CounselorService {
    pub fn new(sessions: Arc<SessionService>, llm: Arc<dyn LlmClient>, config: Arc<Config>) -> Self {
        Self {
            sessions,
            llm,
            config,
        }
    }

    /// Asks the counselor one question. Provider failures come back inline,
    /// never as an HTTP error.
    pub async fn ask(&self, id: &Uuid, request: ChatRequest, history_limit: usize) -> AppResult<ChatReply> {
        request.validate()?;
        let cap = self.config.chat_history_cap;

        let handle = self.sessions.handle(id).await?;
        let profile = {
            let mut session = handle.lock().await;
            let profile = *session.ensure_pre_quiz_completed()?;
            session.push_chat(ChatMessage::user(request.question.clone()), cap);
            profile
        };

        let completion = CompletionRequest::new(&self.config.chat_model, request.question)
            .with_system(self.persona_prompt(&profile))
            .with_max_tokens(self.config.chat_max_tokens);

        // Session lock is released while the provider call is in flight.
        let result = self.llm.complete(completion).await;

        let mut session = handle.lock().await;
        let (answer, error) = match result {
            Ok(text) => {
                let answer = truncate_chars(&text, self.config.answer_char_limit);
                session.push_chat(ChatMessage::assistant(answer.clone()), cap);
                (Some(answer), None)
            }
            Err(err) => {
                log::warn!("Chat completion failed for session {}: {}", session.id, err);
                (None, Some(err.user_message().to_string()))
            }
        };

        Ok(ChatReply {
            answer,
            error,
            history: recent(&session.chat_history, history_limit),
        })
    }

    pub async fn history(&self, id: &Uuid, limit: usize) -> AppResult<Vec<ChatMessage>> {
        let handle = self.sessions.handle(id).await?;
        let session = handle.lock().await;
        session.ensure_pre_quiz_completed()?;

        Ok(recent(&session.chat_history, limit))
    }

    pub async fn explain(&self, id: &Uuid, request: ExplanationRequest) -> AppResult<ExplanationView> {
        request.validate()?;
        let profile = self.profile_of(id).await?;
        let topic = request.topic();

        let prompt = fill_prompt(
            EXPLANATION_REQUEST_PROMPT,
            &[
                ("topic", topic),
                ("surgery_category", profile.surgery_category.label()),
            ],
        );
        let completion = CompletionRequest::new(&self.config.explanation_model, prompt)
            .with_system(self.persona_prompt(&profile))
            .with_max_tokens(EXPLANATION_MAX_TOKENS);

        let (explanation, error) = match self.llm.complete(completion).await {
            Ok(text) => (Some(text), None),
            Err(err) => {
                log::warn!("Explanation of '{}' failed for session {}: {}", topic, id, err);
                (None, Some(err.user_message().to_string()))
            }
        };

        Ok(ExplanationView {
            topic,
            explanation,
            error,
            suggested_questions: suggested_questions(&profile),
        })
    }

    /// One multiple-choice question on `topic`, pitched at the patient's level.
    pub async fn practice_question(
        &self,
        id: &Uuid,
        request: PracticeQuestionRequest,
    ) -> AppResult<PracticeQuestionView> {
        request.validate()?;
        let profile = self.profile_of(id).await?;
        let topic = request.topic();

        let prompt = fill_prompt(
            PRACTICE_QUESTION_PROMPT,
            &[
                ("topic", topic),
                ("surgery_category", profile.surgery_category.label()),
                ("education", profile.education.label()),
                ("age_band", profile.age_band.label()),
            ],
        );
        let completion = CompletionRequest::new(&self.config.explanation_model, prompt)
            .with_system(self.persona_prompt(&profile))
            .with_max_tokens(EXPLANATION_MAX_TOKENS);

        let (question, error) = match self.llm.complete(completion).await {
            Ok(text) => (Some(text), None),
            Err(err) => {
                log::warn!("Practice question on '{}' failed for session {}: {}", topic, id, err);
                (None, Some(err.user_message().to_string()))
            }
        };

        Ok(PracticeQuestionView {
            topic,
            question,
            error,
        })
    }

    /// Rates a free-text answer from 1 to 10. Any failure yields the neutral default.
    pub async fn evaluate(&self, id: &Uuid, request: EvaluationRequest) -> AppResult<UnderstandingEvaluation> {
        request.validate()?;
        self.profile_of(id).await?;

        let schema = evaluation_schema();
        let prompt = fill_prompt(
            EVALUATION_PROMPT,
            &[
                ("question", request.question.as_str()),
                ("answer", request.answer.as_str()),
                ("schema", schema.as_str()),
            ],
        );
        let completion = CompletionRequest::new(&self.config.explanation_model, prompt)
            .with_max_tokens(EVALUATION_MAX_TOKENS)
            .with_temperature(EVALUATION_TEMPERATURE)
            .json();

        let evaluation = match self.llm.complete(completion).await {
            Ok(text) => parse_evaluation(&text).unwrap_or_else(|| {
                log::warn!("Unparseable evaluation for session {}", id);
                fallback_evaluation()
            }),
            Err(err) => {
                log::warn!("Evaluation failed for session {}: {}", id, err);
                fallback_evaluation()
            }
        };

        Ok(evaluation)
    }

    fn persona_prompt(&self, profile: &Profile) -> String {
        let char_limit = self.config.answer_char_limit.to_string();
        fill_prompt(
            COUNSELOR_SYSTEM_PROMPT,
            &[
                ("age_band", profile.age_band.label()),
                ("education", profile.education.label()),
                ("surgery_category", profile.surgery_category.label()),
                ("char_limit", char_limit.as_str()),
            ],
        )
    }

    async fn profile_of(&self, id: &Uuid) -> AppResult<Profile> {
        let handle = self.sessions.handle(id).await?;
        let session = handle.lock().await;
        session.ensure_pre_quiz_completed().copied()
    }
}

/// Replaces each `{key}` in `template` in a single pass. Substituted values
/// are never scanned again, so user text containing `{schema}` stays literal.
pub fn fill_prompt(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let hit = tail.find('}').and_then(|end| {
            let key = &tail[1..end];
            values
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (end, *value))
        });

        match hit {
            Some((end, value)) => {
                out.push_str(value);
                rest = &tail[end + 1..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn recent(history: &[ChatMessage], limit: usize) -> Vec<ChatMessage> {
    history[history.len().saturating_sub(limit)..].to_vec()
}

fn suggested_questions(profile: &Profile) -> Vec<String> {
    SUGGESTED_QUESTIONS
        .iter()
        .map(|q| fill_prompt(q, &[("surgery_category", profile.surgery_category.label())]))
        .collect()
}

fn evaluation_schema() -> String {
    let schema = schemars::schema_for!(UnderstandingEvaluation);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}

/// Model output before the score is normalized.
#[derive(Deserialize)]
struct RawEvaluation {
    score: Value,
    feedback: String,
    #[serde(default)]
    areas_to_improve: Vec<String>,
}

/// Accepts integers, floats and numeric strings; rounds, then clamps to 1..=10.
fn normalize_score(score: &Value) -> Option<u8> {
    let raw = match score {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if !raw.is_finite() {
        return None;
    }

    let clamped = raw
        .round()
        .clamp(f64::from(EVALUATION_MIN_SCORE), f64::from(EVALUATION_MAX_SCORE));
    Some(clamped as u8)
}

/// Parses the model's JSON reply. Tolerates a fenced code block around it.
pub fn parse_evaluation(text: &str) -> Option<UnderstandingEvaluation> {
    let trimmed = text.trim();
    let body = match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(start), Some(end)) if start < end => &trimmed[start..=end],
        _ => return None,
    };

    let raw: RawEvaluation = serde_json::from_str(body).ok()?;
    Some(UnderstandingEvaluation {
        score: normalize_score(&raw.score)?,
        feedback: raw.feedback,
        areas_to_improve: raw.areas_to_improve,
    })
}

pub fn fallback_evaluation() -> UnderstandingEvaluation {
    UnderstandingEvaluation {
        score: EVALUATION_FALLBACK_SCORE,
        feedback: EVALUATION_FALLBACK_FEEDBACK.to_string(),
        areas_to_improve: Vec::new(),
    }
}
