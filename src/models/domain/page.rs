use serde::{Deserialize, Serialize};

/// Top-level screen a session is on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    ProfileSetup,
    PreQuiz,
    Home,
    Info,
    PostQuiz,
    Chat,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct RouteContext {
    pub profile_set: bool,
    pub pre_quiz_completed: bool,
}

impl Page {
    /// Page actually shown when `requested` is asked for in `ctx`.
    pub fn resolve(requested: Page, ctx: RouteContext) -> Page {
        if !ctx.profile_set {
            return Page::ProfileSetup;
        }
        if !ctx.pre_quiz_completed {
            return Page::PreQuiz;
        }
        match requested {
            Page::ProfileSetup => Page::Home,
            other => other,
        }
    }
}
