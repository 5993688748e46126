pub mod attempt_repository;
pub mod session_repository;

pub use attempt_repository::{AttemptRepository, InMemoryAttemptRepository};
pub use session_repository::{InMemorySessionRepository, SessionHandle, SessionRepository};
