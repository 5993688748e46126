// Fixed user-facing strings.

pub const TIER_TOP_TITLE: &str = "Excellent!";
pub const TIER_TOP_MESSAGE: &str = "Your understanding of robotic surgery is very high. You can go into your operation with confidence.";
pub const TIER_MIDDLE_TITLE: &str = "Well done!";
pub const TIER_MIDDLE_MESSAGE: &str = "You have a good basic understanding of robotic surgery. Ask anytime if you have more questions.";
pub const TIER_LOW_TITLE: &str = "Keep studying";
pub const TIER_LOW_MESSAGE: &str = "Read the robotic surgery information again or ask a question to deepen your understanding.";

pub const FEEDBACK_CORRECT: &str = "Correct!";
pub const FEEDBACK_INCORRECT: &str = "Not quite.";

pub const LLM_MISSING_CREDENTIAL: &str = "The question service is not configured. Please contact the administrator.";
pub const LLM_QUOTA_EXCEEDED: &str = "The question service has reached its usage limit. Please try again later.";
pub const LLM_INVALID_REQUEST: &str = "Your question could not be processed. Please rephrase it and try again.";
pub const LLM_INVALID_CREDENTIAL: &str = "The question service credentials are invalid. Please contact the administrator.";
pub const LLM_GENERIC_FAILURE: &str = "Something went wrong while generating an answer. Please try again.";

pub const EVALUATION_FALLBACK_FEEDBACK: &str = "Your understanding could not be evaluated right now.";
pub const EVALUATION_FALLBACK_SCORE: u8 = 5;
pub const EVALUATION_MIN_SCORE: u8 = 1;
pub const EVALUATION_MAX_SCORE: u8 = 10;

pub const CHECKLIST_COMPLETE: &str = "All items are complete. You understand the consent form well.";
pub const CHECKLIST_GETTING_STARTED: &str = "Go through each item of the consent form one at a time.";
