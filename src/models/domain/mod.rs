pub mod answer_set;
pub mod attempt;
pub mod chat;
pub mod cursor;
pub mod page;
pub mod profile;
pub mod question;
pub mod session;

pub use answer_set::AnswerSet;
pub use attempt::{AttemptRecord, AttemptSnapshot};
pub use chat::{ChatMessage, ChatRole};
pub use cursor::{NavAction, NavOutcome, SectionCursor};
pub use page::Page;
pub use profile::{Profile, ProfileField};
pub use question::{Question, QuizVariant, Section};
pub use session::Session;
