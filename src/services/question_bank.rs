use once_cell::sync::Lazy;

use crate::{
    constants::questions::{post_quiz_sections, pre_quiz_sections},
    models::domain::{Question, QuizVariant, Section},
};

static STANDARD_BANK: Lazy<QuestionBank> =
    Lazy::new(|| QuestionBank::new(pre_quiz_sections(), post_quiz_sections()));

/// Read-only pre and post quiz catalogs.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    pre: Vec<Section>,
    post: Vec<Section>,
}

impl QuestionBank {
    pub fn new(pre: Vec<Section>, post: Vec<Section>) -> Self {
        Self { pre, post }
    }

    pub fn standard() -> &'static QuestionBank {
        &STANDARD_BANK
    }

    pub fn sections(&self, variant: QuizVariant) -> &[Section] {
        match variant {
            QuizVariant::Pre => &self.pre,
            QuizVariant::Post => &self.post,
        }
    }

    pub fn section(&self, variant: QuizVariant, position: usize) -> Option<&Section> {
        self.sections(variant).get(position)
    }

    pub fn section_count(&self, variant: QuizVariant) -> usize {
        self.sections(variant).len()
    }

    pub fn questions(&self, variant: QuizVariant) -> impl Iterator<Item = &Question> {
        self.sections(variant).iter().flat_map(|s| s.questions.iter())
    }

    pub fn question_count(&self, variant: QuizVariant) -> usize {
        self.questions(variant).count()
    }

    /// Checks the catalog invariants; returns every violation found.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut problems = Vec::new();

        for variant in [QuizVariant::Pre, QuizVariant::Post] {
            let mut seen = std::collections::HashSet::new();
            for question in self.questions(variant) {
                if question.options.len() < 2 {
                    problems.push(format!("{} has fewer than two options", question.id));
                }
                if !question.is_valid_option(question.correct_index) {
                    problems.push(format!(
                        "{} correct index {} is out of range",
                        question.id, question.correct_index
                    ));
                }
                if !seen.insert(question.id.as_str()) {
                    problems.push(format!("duplicate question id {} in {} quiz", question.id, variant));
                }
            }
        }

        let shape = |variant: QuizVariant| -> Vec<usize> {
            self.sections(variant).iter().map(|s| s.questions.len()).collect()
        };
        if shape(QuizVariant::Pre) != shape(QuizVariant::Post) {
            problems.push("pre and post quizzes have different section shapes".to_string());
        }

        let keys = |variant: QuizVariant| -> Vec<usize> { self.questions(variant).map(|q| q.correct_index).collect() };
        if keys(QuizVariant::Pre) != keys(QuizVariant::Post) {
            problems.push("pre and post quizzes have different answer keys".to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems)
        }
    }
}
