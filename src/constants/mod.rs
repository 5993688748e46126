pub mod content;
pub mod messages;
pub mod prompts;
pub mod questions;
