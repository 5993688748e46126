use serde::Serialize;

use crate::{
    constants::messages,
    models::domain::{AnswerSet, Question},
};

/// Feedback band for an aggregate score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    Top,
    Middle,
    Lowest,
}

impl ScoreTier {
    pub const TOP_THRESHOLD: f64 = 80.0;
    pub const MIDDLE_THRESHOLD: f64 = 60.0;

    pub fn from_percent(percent: f64) -> Self {
        if percent >= Self::TOP_THRESHOLD {
            ScoreTier::Top
        } else if percent >= Self::MIDDLE_THRESHOLD {
            ScoreTier::Middle
        } else {
            ScoreTier::Lowest
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ScoreTier::Top => messages::TIER_TOP_TITLE,
            ScoreTier::Middle => messages::TIER_MIDDLE_TITLE,
            ScoreTier::Lowest => messages::TIER_LOW_TITLE,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ScoreTier::Top => messages::TIER_TOP_MESSAGE,
            ScoreTier::Middle => messages::TIER_MIDDLE_MESSAGE,
            ScoreTier::Lowest => messages::TIER_LOW_MESSAGE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Grade {
    pub correct_count: usize,
    pub total_count: usize,
    pub percent: f64,
}

impl Grade {
    pub fn tier(&self) -> ScoreTier {
        ScoreTier::from_percent(self.percent)
    }
}

/// Immediate result for one recorded answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AnswerFeedback {
    pub question_id: String,
    pub selected_index: usize,
    pub correct: bool,
    pub headline: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

pub struct GradingService;

impl GradingService {
    /// Grade an answer set against an ordered question list.
    /// Unanswered questions count as incorrect.
    pub fn grade<'a, I>(answers: &AnswerSet, questions: I) -> Grade
    where
        I: IntoIterator<Item = &'a Question>,
    {
        let mut correct_count = 0;
        let mut total_count = 0;

        for question in questions {
            total_count += 1;
            if answers
                .get(&question.id)
                .is_some_and(|selected| question.is_correct(selected))
            {
                correct_count += 1;
            }
        }

        let percent = if total_count == 0 {
            0.0
        } else {
            100.0 * correct_count as f64 / total_count as f64
        };

        Grade {
            correct_count,
            total_count,
            percent,
        }
    }

    /// Feedback shown as soon as an answer is recorded.
    pub fn feedback(question: &Question, selected_index: usize) -> AnswerFeedback {
        let correct = question.is_correct(selected_index);
        AnswerFeedback {
            question_id: question.id.clone(),
            selected_index,
            correct,
            headline: if correct {
                messages::FEEDBACK_CORRECT
            } else {
                messages::FEEDBACK_INCORRECT
            },
            explanation: question.explanation.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: [usize; 10] = [2, 2, 2, 3, 1, 2, 0, 1, 2, 0];

    fn bank() -> Vec<Question> {
        KEY.iter()
            .enumerate()
            .map(|(i, &correct)| {
                Question::new(&format!("q{}", i + 1), "?", &["a", "b", "c", "d"], correct)
            })
            .collect()
    }

    fn matching_answers() -> AnswerSet {
        let mut answers = AnswerSet::new();
        for (i, &correct) in KEY.iter().enumerate() {
            answers.record(&format!("q{}", i + 1), correct);
        }
        answers
    }

    #[test]
    fn all_but_one_correct_scores_ninety_percent() {
        let mut answers = matching_answers();
        answers.record("q4", 1);

        let grade = GradingService::grade(&answers, &bank());

        assert_eq!(grade.correct_count, 9);
        assert_eq!(grade.total_count, 10);
        assert_eq!(grade.percent, 90.0);
        assert_eq!(grade.tier(), ScoreTier::Top);
    }

    #[test]
    fn empty_answer_set_scores_zero() {
        let grade = GradingService::grade(&AnswerSet::new(), &bank());

        assert_eq!(grade.correct_count, 0);
        assert_eq!(grade.percent, 0.0);
        assert_eq!(grade.tier(), ScoreTier::Lowest);
    }

    #[test]
    fn correct_count_matches_direct_count() {
        let questions = bank();
        let answers = AnswerSet::from([("q1", 2), ("q2", 0), ("q7", 0), ("q10", 3), ("zz", 1)]);

        let expected = questions
            .iter()
            .filter(|q| answers.get(&q.id) == Some(q.correct_index))
            .count();
        let grade = GradingService::grade(&answers, &questions);

        assert_eq!(grade.correct_count, expected);
        assert_eq!(grade.correct_count, 2);
        assert!((0.0..=100.0).contains(&grade.percent));
    }

    #[test]
    fn empty_bank_grades_zero_percent() {
        let grade = GradingService::grade(&matching_answers(), &Vec::<Question>::new());
        assert_eq!(grade.total_count, 0);
        assert_eq!(grade.percent, 0.0);
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(ScoreTier::from_percent(80.0), ScoreTier::Top);
        assert_eq!(ScoreTier::from_percent(79.9), ScoreTier::Middle);
        assert_eq!(ScoreTier::from_percent(60.0), ScoreTier::Middle);
        assert_eq!(ScoreTier::from_percent(59.9), ScoreTier::Lowest);
        assert_eq!(ScoreTier::from_percent(100.0), ScoreTier::Top);
    }

    #[test]
    fn tiers_have_distinct_messages() {
        assert_eq!(ScoreTier::Top.title(), "Excellent!");
        assert_ne!(ScoreTier::Middle.message(), ScoreTier::Lowest.message());
    }

    #[test]
    fn feedback_reports_correctness_and_explanation() {
        let question = Question::new("pq9", "Who decides?", &["Doctor", "Family", "Patient"], 2)
            .with_explanation("The patient decides.");

        let right = GradingService::feedback(&question, 2);
        assert!(right.correct);
        assert_eq!(right.headline, messages::FEEDBACK_CORRECT);
        assert_eq!(right.explanation.as_deref(), Some("The patient decides."));

        let wrong = GradingService::feedback(&question, 0);
        assert!(!wrong.correct);
        assert_eq!(wrong.selected_index, 0);
    }
}
