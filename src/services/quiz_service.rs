use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{NavAction, NavOutcome, Page, QuizVariant, Session},
        dto::{
            request::RecordAnswerRequest,
            response::{AnswerOutcome, GradeView, QuestionView, SectionView, SubmissionResult},
        },
    },
    services::{grading_service::GradingService, question_bank::QuestionBank, SessionService},
};

pub struct QuizService {
    sessions: Arc<SessionService>,
    bank: &'static QuestionBank,
}

impl QuizService {
    pub fn new(sessions: Arc<SessionService>, bank: &'static QuestionBank) -> Self {
        Self { sessions, bank }
    }

    pub async fn current_section(&self, id: &Uuid, variant: QuizVariant) -> AppResult<SectionView> {
        let handle = self.sessions.handle(id).await?;
        let session = handle.lock().await;
        session.ensure_quiz_open(variant)?;

        Self::section_view(&session, self.bank, variant)
    }

    pub async fn record_answer(
        &self,
        id: &Uuid,
        variant: QuizVariant,
        request: RecordAnswerRequest,
    ) -> AppResult<AnswerOutcome> {
        request.validate()?;

        let handle = self.sessions.handle(id).await?;
        let mut session = handle.lock().await;
        Self::apply_answer(&mut session, self.bank, variant, &request)
    }

    pub async fn navigate(
        &self,
        id: &Uuid,
        variant: QuizVariant,
        action: NavAction,
    ) -> AppResult<SectionView> {
        let handle = self.sessions.handle(id).await?;
        let mut session = handle.lock().await;
        Self::apply_navigation(&mut session, self.bank, variant, action)
    }

    pub async fn submit(&self, id: &Uuid, variant: QuizVariant) -> AppResult<SubmissionResult> {
        let handle = self.sessions.handle(id).await?;
        let mut session = handle.lock().await;
        let result = Self::apply_submit(&mut session, self.bank, variant)?;

        log::info!(
            "Session {} submitted {} quiz: {}/{} correct",
            session.id,
            variant,
            result.grade.correct_count,
            result.grade.total_count
        );
        Ok(result)
    }

    /// Records one answer for a question in the section currently shown.
    pub fn apply_answer(
        session: &mut Session,
        bank: &QuestionBank,
        variant: QuizVariant,
        request: &RecordAnswerRequest,
    ) -> AppResult<AnswerOutcome> {
        session.ensure_quiz_open(variant)?;

        let section = bank
            .section(variant, session.cursor.position())
            .ok_or_else(|| AppError::InternalError(format!("{} quiz has no sections", variant)))?;
        let question = section
            .question(&request.question_id)
            .ok_or_else(|| {
                AppError::ValidationError(format!(
                    "Question '{}' is not part of the current section",
                    request.question_id
                ))
            })?;

        if !question.is_valid_option(request.option_index) {
            return Err(AppError::ValidationError(format!(
                "Option {} is out of range for question '{}'",
                request.option_index, question.id
            )));
        }

        session
            .answers_mut(variant)
            .record(&question.id, request.option_index);

        let feedback = match variant {
            QuizVariant::Post => Some(GradingService::feedback(question, request.option_index)),
            QuizVariant::Pre => None,
        };

        Ok(AnswerOutcome {
            question_id: question.id.clone(),
            selected_index: request.option_index,
            feedback,
        })
    }

    /// Next/previous. Boundary presses leave the cursor where it is.
    pub fn apply_navigation(
        session: &mut Session,
        bank: &QuestionBank,
        variant: QuizVariant,
        action: NavAction,
    ) -> AppResult<SectionView> {
        session.ensure_quiz_open(variant)?;

        if action == NavAction::Submit {
            return Err(AppError::ValidationError(
                "Use the submit route to finish a quiz".to_string(),
            ));
        }
        session.cursor.apply(action, bank.section_count(variant));

        Self::section_view(session, bank, variant)
    }

    pub fn apply_submit(
        session: &mut Session,
        bank: &QuestionBank,
        variant: QuizVariant,
    ) -> AppResult<SubmissionResult> {
        session.ensure_quiz_open(variant)?;

        let outcome = session.cursor.apply(NavAction::Submit, bank.section_count(variant));
        if let NavOutcome::SubmitUnavailable { position } = outcome {
            return Err(AppError::Conflict(format!(
                "Submit is only available on the last section (currently on section {})",
                position + 1
            )));
        }

        let grade = GradingService::grade(session.answers(variant), bank.questions(variant));
        match variant {
            QuizVariant::Pre => session.pre_completed = true,
            QuizVariant::Post => {
                session.post_completed = true;
                session.post_score_percent = grade.percent;
            }
        }
        let next_page = session.navigate(Page::Home);

        Ok(SubmissionResult {
            variant,
            grade: GradeView::from(grade),
            next_page,
        })
    }

    pub fn section_view(
        session: &Session,
        bank: &QuestionBank,
        variant: QuizVariant,
    ) -> AppResult<SectionView> {
        let section_count = bank.section_count(variant);
        let position = session.cursor.position();
        let section = bank
            .section(variant, position)
            .ok_or_else(|| AppError::InternalError(format!("{} quiz has no sections", variant)))?;
        let answers = session.answers(variant);

        let questions = section
            .questions
            .iter()
            .map(|question| {
                let selected_index = answers.get(&question.id);
                let feedback = match variant {
                    QuizVariant::Post => {
                        selected_index.map(|selected| GradingService::feedback(question, selected))
                    }
                    QuizVariant::Pre => None,
                };
                QuestionView {
                    id: question.id.clone(),
                    text: question.text.clone(),
                    options: question.options.clone(),
                    selected_index,
                    feedback,
                }
            })
            .collect();

        Ok(SectionView {
            variant,
            position,
            section_count,
            title: section.title.clone(),
            questions,
            can_previous: session.cursor.can_previous(),
            can_next: session.cursor.can_next(section_count),
            can_submit: session.cursor.can_submit(section_count),
            completed: match variant {
                QuizVariant::Pre => session.pre_completed,
                QuizVariant::Post => session.post_completed,
            },
        })
    }
}
