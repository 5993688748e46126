use serde::{Deserialize, Serialize};

/// Which of the two quiz catalogs a request refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizVariant {
    Pre,
    Post,
}

impl QuizVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuizVariant::Pre => "pre",
            QuizVariant::Post => "post",
        }
    }
}

impl std::fmt::Display for QuizVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl Question {
    pub fn new(id: &str, text: &str, options: &[&str], correct_index: usize) -> Self {
        Question {
            id: id.to_string(),
            text: text.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_index,
            explanation: None,
        }
    }

    pub fn with_explanation(mut self, explanation: &str) -> Self {
        self.explanation = Some(explanation.to_string());
        self
    }

    pub fn is_valid_option(&self, index: usize) -> bool {
        index < self.options.len()
    }

    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_index
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Section {
    pub title: String,
    pub questions: Vec<Question>,
}

impl Section {
    pub fn new(title: &str, questions: Vec<Question>) -> Self {
        Section {
            title: title.to_string(),
            questions,
        }
    }

    pub fn question(&self, question_id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }
}
