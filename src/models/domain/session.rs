use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::domain::{
    answer_set::AnswerSet,
    chat::ChatMessage,
    cursor::SectionCursor,
    page::{Page, RouteContext},
    profile::{Profile, ProfileGate},
    question::QuizVariant,
};

/// Everything one patient's visit accumulates. Owned by the session store.
#[derive(Clone, Debug)]
pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
    pub gate: ProfileGate,
    pub page: Page,
    pub cursor: SectionCursor,
    pub pre_answers: AnswerSet,
    pub post_answers: AnswerSet,
    pub pre_completed: bool,
    pub post_completed: bool,
    pub post_score_percent: f64,
    pub chat_history: Vec<ChatMessage>,
    pub checklist: BTreeSet<usize>,
}

impl Session {
    pub fn new() -> Self {
        let now = Utc::now();
        Session {
            id: Uuid::new_v4(),
            created_at: now,
            last_active: now,
            gate: ProfileGate::NoProfile,
            page: Page::ProfileSetup,
            cursor: SectionCursor::new(),
            pre_answers: AnswerSet::new(),
            post_answers: AnswerSet::new(),
            pre_completed: false,
            post_completed: false,
            post_score_percent: 0.0,
            chat_history: Vec::new(),
            checklist: BTreeSet::new(),
        }
    }

    pub fn touch(&mut self) {
        self.last_active = Utc::now();
    }

    pub fn is_idle_since(&self, cutoff: DateTime<Utc>) -> bool {
        self.last_active < cutoff
    }

    /// Appends to the chat log, dropping the oldest messages beyond `cap`.
    pub fn push_chat(&mut self, message: ChatMessage, cap: usize) {
        self.chat_history.push(message);
        let overflow = self.chat_history.len().saturating_sub(cap.max(1));
        if overflow > 0 {
            self.chat_history.drain(..overflow);
        }
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.gate.profile()
    }

    pub fn require_profile(&self) -> AppResult<&Profile> {
        self.gate.profile().ok_or_else(AppError::profile_required)
    }

    /// Moves the gate to `ProfileSet`. The gate has no edit path.
    pub fn set_profile(&mut self, profile: Profile) -> AppResult<()> {
        if self.gate.is_set() {
            return Err(AppError::AlreadyExists(
                "A profile has already been submitted for this session".to_string(),
            ));
        }
        self.gate = ProfileGate::ProfileSet(profile);
        self.navigate(Page::PreQuiz);
        Ok(())
    }

    pub fn route_context(&self) -> RouteContext {
        RouteContext {
            profile_set: self.gate.is_set(),
            pre_quiz_completed: self.pre_completed,
        }
    }

    pub fn navigate(&mut self, requested: Page) -> Page {
        self.page = Page::resolve(requested, self.route_context());
        self.page
    }

    pub fn answers(&self, variant: QuizVariant) -> &AnswerSet {
        match variant {
            QuizVariant::Pre => &self.pre_answers,
            QuizVariant::Post => &self.post_answers,
        }
    }

    pub fn answers_mut(&mut self, variant: QuizVariant) -> &mut AnswerSet {
        match variant {
            QuizVariant::Pre => &mut self.pre_answers,
            QuizVariant::Post => &mut self.post_answers,
        }
    }

    /// Quiz routes need a profile; the post quiz also needs a submitted pre quiz.
    pub fn ensure_quiz_open(&self, variant: QuizVariant) -> AppResult<()> {
        match variant {
            QuizVariant::Pre => self.require_profile().map(|_| ()),
            QuizVariant::Post => self.ensure_pre_quiz_completed().map(|_| ()),
        }
    }

    /// Everything past the pre quiz (content, counselor, checklist, post quiz)
    /// stays closed until the pre quiz has been submitted.
    pub fn ensure_pre_quiz_completed(&self) -> AppResult<&Profile> {
        let profile = self.require_profile()?;
        if !self.pre_completed {
            return Err(AppError::Forbidden(
                "Submit the pre-quiz before continuing".to_string(),
            ));
        }
        Ok(profile)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
