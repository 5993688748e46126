use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Selected option index per question id for one quiz variant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<String, usize>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites any previous choice for `question_id`.
    pub fn record(&mut self, question_id: &str, option_index: usize) {
        self.answers.insert(question_id.to_string(), option_index);
    }

    pub fn get(&self, question_id: &str) -> Option<usize> {
        self.answers.get(question_id).copied()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

}

impl<const N: usize> From<[(&str, usize); N]> for AnswerSet {
    fn from(pairs: [(&str, usize); N]) -> Self {
        let mut set = AnswerSet::new();
        for (id, idx) in pairs {
            set.record(id, idx);
        }
        set
    }
}
