use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::{answer_set::AnswerSet, profile::Profile, session::Session};

/// Field values that decide whether two recorded attempts are the same.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct AttemptSnapshot {
    pub session_id: Uuid,
    pub profile: Profile,
    pub pre_answers: AnswerSet,
    pub post_answers: AnswerSet,
    pub pre_completed: bool,
    pub post_completed: bool,
    pub post_score_percent: f64,
}

impl AttemptSnapshot {
    /// `None` while the session has not passed the profile gate.
    pub fn from_session(session: &Session) -> Option<Self> {
        let profile = *session.profile()?;
        Some(AttemptSnapshot {
            session_id: session.id,
            profile,
            pre_answers: session.pre_answers.clone(),
            post_answers: session.post_answers.clone(),
            pre_completed: session.pre_completed,
            post_completed: session.post_completed,
            post_score_percent: session.post_score_percent,
        })
    }
}

/// One entry in the admin attempt collection.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AttemptRecord {
    pub recorded_at: DateTime<Utc>,
    #[serde(flatten)]
    pub snapshot: AttemptSnapshot,
}

impl AttemptRecord {
    pub fn new(snapshot: AttemptSnapshot) -> Self {
        Self {
            recorded_at: Utc::now(),
            snapshot,
        }
    }

    /// Same attempt regardless of when it was recorded.
    pub fn same_attempt(&self, other: &AttemptRecord) -> bool {
        self.snapshot == other.snapshot
    }
}
