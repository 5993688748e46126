use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{AttemptRecord, AttemptSnapshot, ProfileField, QuizVariant},
        dto::{
            request::DashboardQuery,
            response::{
                AnswerChange, AttemptDetail, AttemptSummary, CategoryShare, DashboardStats,
                DashboardView, GradeView,
            },
        },
    },
    repositories::AttemptRepository,
    services::{csv_export, grading_service::GradingService, question_bank::QuestionBank, SessionService},
};

/// A finished CSV document ready to be served as a download.
pub struct CsvExport {
    pub filename: String,
    pub body: Vec<u8>,
}

pub struct AttemptService {
    repository: Arc<dyn AttemptRepository>,
    sessions: Arc<SessionService>,
    bank: &'static QuestionBank,
}

impl AttemptService {
    pub fn new(
        repository: Arc<dyn AttemptRepository>,
        sessions: Arc<SessionService>,
        bank: &'static QuestionBank,
    ) -> Self {
        Self {
            repository,
            sessions,
            bank,
        }
    }

    /// Snapshots the session into the attempt collection. A session that has
    /// not passed the profile gate records nothing.
    pub async fn record_session(&self, id: &Uuid) -> AppResult<bool> {
        let handle = self.sessions.handle(id).await?;
        let snapshot = {
            let session = handle.lock().await;
            AttemptSnapshot::from_session(&session)
        };

        let Some(snapshot) = snapshot else {
            return Ok(false);
        };
        let appended = self.repository.append_if_new(AttemptRecord::new(snapshot)).await?;
        if appended {
            log::info!("Recorded attempt for session {}", id);
        }
        Ok(appended)
    }

    pub async fn dashboard(&self, query: &DashboardQuery) -> AppResult<DashboardView> {
        let recorded_current_session = match &query.session_id {
            Some(id) => self.record_session(id).await?,
            None => false,
        };

        let records = self.repository.find_all().await?;
        Ok(DashboardView {
            recorded_current_session,
            stats: dashboard_stats(&records, query.field),
        })
    }

    pub async fn list(&self) -> AppResult<Vec<AttemptSummary>> {
        let records = self.repository.find_all().await?;
        Ok(records
            .iter()
            .enumerate()
            .map(|(index, record)| summarize(index, record))
            .collect())
    }

    pub async fn detail(&self, index: usize) -> AppResult<AttemptDetail> {
        let record = self
            .repository
            .find_by_index(index)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Attempt {} not found", index)))?;

        let snapshot = &record.snapshot;
        let pre_grade = GradingService::grade(&snapshot.pre_answers, self.bank.questions(QuizVariant::Pre));
        let post_grade = GradingService::grade(&snapshot.post_answers, self.bank.questions(QuizVariant::Post));

        Ok(AttemptDetail {
            summary: summarize(index, &record),
            pre_answers: snapshot.pre_answers.clone(),
            post_answers: snapshot.post_answers.clone(),
            pre_grade: GradeView::from(pre_grade),
            post_grade: GradeView::from(post_grade),
            answer_changes: answer_changes(snapshot, self.bank),
        })
    }

    pub async fn export_csv(&self) -> AppResult<CsvExport> {
        let records = self.repository.find_all().await?;
        if records.is_empty() {
            return Err(AppError::NotFound("No attempts have been recorded yet".to_string()));
        }

        let body = csv_export::write_attempts(&records, self.bank)?;
        log::info!("Exported {} attempts to CSV", records.len());
        Ok(CsvExport {
            filename: csv_export::export_filename(Utc::now()),
            body,
        })
    }
}

fn summarize(index: usize, record: &AttemptRecord) -> AttemptSummary {
    let snapshot = &record.snapshot;
    AttemptSummary {
        index,
        recorded_at: record.recorded_at,
        session_id: snapshot.session_id,
        profile: snapshot.profile,
        pre_quiz_completed: snapshot.pre_completed,
        post_quiz_completed: snapshot.post_completed,
        post_quiz_score: snapshot.post_completed.then_some(snapshot.post_score_percent),
    }
}

pub fn dashboard_stats(records: &[AttemptRecord], field: ProfileField) -> DashboardStats {
    let total_attempts = records.len();
    let completed_pre_quiz = records.iter().filter(|r| r.snapshot.pre_completed).count();
    let post_scores: Vec<f64> = records
        .iter()
        .filter(|r| r.snapshot.post_completed)
        .map(|r| r.snapshot.post_score_percent)
        .collect();

    let mean_post_score = if post_scores.is_empty() {
        None
    } else {
        Some(post_scores.iter().sum::<f64>() / post_scores.len() as f64)
    };

    DashboardStats {
        total_attempts,
        completed_pre_quiz,
        completed_post_quiz: post_scores.len(),
        mean_post_score,
        distribution: distribution(records, field),
    }
}

/// Share of attempts per label of `field`, largest first.
fn distribution(records: &[AttemptRecord], field: ProfileField) -> Vec<CategoryShare> {
    let mut counts: Vec<(&'static str, usize)> = Vec::new();
    for record in records {
        let label = field.label_of(&record.snapshot.profile);
        match counts.iter_mut().find(|(existing, _)| *existing == label) {
            Some((_, count)) => *count += 1,
            None => counts.push((label, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

    let total = records.len() as f64;
    counts
        .into_iter()
        .map(|(label, count)| CategoryShare {
            label,
            count,
            percent: 100.0 * count as f64 / total,
        })
        .collect()
}

/// Questions answered in both quizzes with a different choice, by position in the catalog.
pub fn answer_changes(snapshot: &AttemptSnapshot, bank: &QuestionBank) -> Vec<AnswerChange> {
    bank.questions(QuizVariant::Pre)
        .zip(bank.questions(QuizVariant::Post))
        .enumerate()
        .filter_map(|(position, (pre, post))| {
            let pre_index = snapshot.pre_answers.get(&pre.id)?;
            let post_index = snapshot.post_answers.get(&post.id)?;
            (pre_index != post_index).then_some(AnswerChange {
                question_number: position + 1,
                pre_index,
                post_index,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::domain::{profile::Gender, Session},
        repositories::{InMemoryAttemptRepository, InMemorySessionRepository},
        test_utils::fixtures::{session_with_profile, test_profile},
    };

    fn record(configure: impl FnOnce(&mut Session)) -> AttemptRecord {
        let mut session = session_with_profile();
        configure(&mut session);
        AttemptRecord::new(AttemptSnapshot::from_session(&session).unwrap())
    }

    async fn service() -> (AttemptService, Arc<SessionService>) {
        let sessions = Arc::new(SessionService::new(Arc::new(InMemorySessionRepository::new())));
        let service = AttemptService::new(
            Arc::new(InMemoryAttemptRepository::new()),
            Arc::clone(&sessions),
            QuestionBank::standard(),
        );
        (service, sessions)
    }

    #[test]
    fn stats_over_three_attempts() {
        let records = vec![
            record(|s| {
                s.pre_completed = true;
                s.post_completed = true;
                s.post_score_percent = 80.0;
            }),
            record(|s| {
                s.pre_completed = true;
                s.post_completed = true;
                s.post_score_percent = 60.0;
            }),
            record(|s| s.pre_completed = true),
        ];

        let stats = dashboard_stats(&records, ProfileField::Gender);

        assert_eq!(stats.total_attempts, 3);
        assert_eq!(stats.completed_pre_quiz, 3);
        assert_eq!(stats.completed_post_quiz, 2);
        assert_eq!(stats.mean_post_score, Some(70.0));
    }

    #[test]
    fn mean_is_absent_without_post_attempts() {
        let stats = dashboard_stats(&[record(|_| {})], ProfileField::Gender);
        assert_eq!(stats.mean_post_score, None);
        assert!(dashboard_stats(&[], ProfileField::Gender).distribution.is_empty());
    }

    #[test]
    fn distribution_counts_each_label() {
        let records = vec![
            record(|_| {}),
            record(|_| {}),
            record(|s| {
                let mut profile = test_profile();
                profile.gender = Gender::Female;
                s.gate = crate::models::domain::profile::ProfileGate::ProfileSet(profile);
            }),
        ];

        let shares = dashboard_stats(&records, ProfileField::Gender).distribution;

        assert_eq!(shares.len(), 2);
        assert_eq!(shares[0].count, 2);
        assert!((shares[0].percent - 66.666).abs() < 0.01);
        assert_eq!(shares[1].label, Gender::Female.label());
    }

    #[test]
    fn answer_changes_compare_by_question_number() {
        let snapshot = record(|s| {
            s.pre_answers.record("q1", 0);
            s.post_answers.record("pq1", 2);
            s.pre_answers.record("q2", 2);
            s.post_answers.record("pq2", 2);
            s.pre_answers.record("q3", 1);
        })
        .snapshot;

        let changes = answer_changes(&snapshot, QuestionBank::standard());

        assert_eq!(
            changes,
            vec![AnswerChange {
                question_number: 1,
                pre_index: 0,
                post_index: 2,
            }]
        );
    }

    #[tokio::test]
    async fn dashboard_records_session_once() {
        let (service, sessions) = service().await;
        let id = sessions.start_session().await.unwrap().session_id;

        let query = DashboardQuery {
            session_id: Some(id),
            field: ProfileField::Gender,
        };
        let view = service.dashboard(&query).await.unwrap();
        assert!(!view.recorded_current_session);
        assert_eq!(view.stats.total_attempts, 0);

        sessions.submit_profile(&id, test_profile()).await.unwrap();
        assert!(service.dashboard(&query).await.unwrap().recorded_current_session);
        let view = service.dashboard(&query).await.unwrap();
        assert!(!view.recorded_current_session);
        assert_eq!(view.stats.total_attempts, 1);
    }

    #[tokio::test]
    async fn export_requires_attempts() {
        let (service, sessions) = service().await;
        assert!(matches!(service.export_csv().await, Err(AppError::NotFound(_))));

        let id = sessions.start_session().await.unwrap().session_id;
        sessions.submit_profile(&id, test_profile()).await.unwrap();
        service.record_session(&id).await.unwrap();

        let export = service.export_csv().await.unwrap();
        assert!(export.filename.starts_with("robot_surgery_quiz_data_"));
        assert!(String::from_utf8(export.body).unwrap().starts_with("timestamp,age"));
    }

    #[tokio::test]
    async fn detail_of_missing_attempt_is_not_found() {
        let (service, _) = service().await;
        assert!(matches!(service.detail(0).await, Err(AppError::NotFound(_))));
    }
}
