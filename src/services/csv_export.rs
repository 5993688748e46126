use chrono::{DateTime, Utc};

use crate::{
    errors::{AppError, AppResult},
    models::domain::{AnswerSet, AttemptRecord, QuizVariant},
    services::question_bank::QuestionBank,
};

const FIXED_COLUMNS: [&str; 8] = [
    "timestamp",
    "age",
    "gender",
    "education",
    "surgery_category",
    "pre_quiz_completed",
    "post_quiz_completed",
    "post_quiz_score",
];

pub fn export_filename(now: DateTime<Utc>) -> String {
    format!("robot_surgery_quiz_data_{}.csv", now.format("%Y%m%d_%H%M%S"))
}

/// Header row: fixed columns, then `pre_qN, post_qN` pairs per question number.
pub fn header(bank: &QuestionBank) -> Vec<String> {
    let mut columns: Vec<String> = FIXED_COLUMNS.iter().map(|c| c.to_string()).collect();
    for number in 1..=bank.question_count(QuizVariant::Pre) {
        columns.push(format!("pre_q{}", number));
        columns.push(format!("post_q{}", number));
    }
    columns
}

fn answer_cell(answers: &AnswerSet, question_id: Option<&str>) -> String {
    question_id
        .and_then(|id| answers.get(id))
        .map(|index| index.to_string())
        .unwrap_or_default()
}

fn row(record: &AttemptRecord, bank: &QuestionBank) -> Vec<String> {
    let snapshot = &record.snapshot;
    let profile = &snapshot.profile;

    let mut cells = vec![
        record.recorded_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        profile.age_band.label().to_string(),
        profile.gender.label().to_string(),
        profile.education.label().to_string(),
        profile.surgery_category.label().to_string(),
        snapshot.pre_completed.to_string(),
        snapshot.post_completed.to_string(),
        format!("{:.1}", snapshot.post_score_percent),
    ];

    let pre_ids: Vec<&str> = bank.questions(QuizVariant::Pre).map(|q| q.id.as_str()).collect();
    let post_ids: Vec<&str> = bank.questions(QuizVariant::Post).map(|q| q.id.as_str()).collect();
    for number in 0..pre_ids.len() {
        cells.push(answer_cell(&snapshot.pre_answers, pre_ids.get(number).copied()));
        cells.push(answer_cell(&snapshot.post_answers, post_ids.get(number).copied()));
    }
    cells
}

/// Serializes the attempt collection. Unanswered questions are blank cells.
pub fn write_attempts(records: &[AttemptRecord], bank: &QuestionBank) -> AppResult<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(header(bank))?;
    for record in records {
        writer.write_record(row(record, bank))?;
    }

    writer
        .into_inner()
        .map_err(|e| AppError::InternalError(format!("Failed to finish CSV export: {}", e)))
}
