use serde::{Deserialize, Serialize};

/// Navigation request coming from the section controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavAction {
    Next,
    Previous,
    Submit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavOutcome {
    Moved { position: usize },
    /// Boundary reached; position unchanged.
    Clamped { position: usize },
    /// Submit accepted; cursor is back at the first section.
    Submitted,
    /// Submit requested away from the last section.
    SubmitUnavailable { position: usize },
}

/// Position into the ordered sections of the open quiz variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SectionCursor {
    position: usize,
}

impl SectionCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn can_previous(&self) -> bool {
        self.position > 0
    }

    pub fn can_next(&self, section_count: usize) -> bool {
        self.position + 1 < section_count
    }

    pub fn can_submit(&self, section_count: usize) -> bool {
        section_count > 0 && self.position + 1 == section_count
    }

    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// Applies one control press. Out-of-range moves are clamped, never errors.
    pub fn apply(&mut self, action: NavAction, section_count: usize) -> NavOutcome {
        if section_count > 0 && self.position >= section_count {
            self.position = section_count - 1;
        }

        match action {
            NavAction::Next if self.can_next(section_count) => {
                self.position += 1;
                NavOutcome::Moved { position: self.position }
            }
            NavAction::Previous if self.can_previous() => {
                self.position -= 1;
                NavOutcome::Moved { position: self.position }
            }
            NavAction::Next | NavAction::Previous => NavOutcome::Clamped { position: self.position },
            NavAction::Submit if self.can_submit(section_count) => {
                self.reset();
                NavOutcome::Submitted
            }
            NavAction::Submit => NavOutcome::SubmitUnavailable { position: self.position },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECTIONS: usize = 3;

    #[test]
    fn previous_at_first_section_is_clamped() {
        let mut cursor = SectionCursor::new();

        assert_eq!(
            cursor.apply(NavAction::Previous, SECTIONS),
            NavOutcome::Clamped { position: 0 }
        );
        assert_eq!(cursor.position(), 0);
        assert!(!cursor.can_previous());
    }

    #[test]
    fn next_at_last_section_is_clamped() {
        let mut cursor = SectionCursor::new();
        cursor.apply(NavAction::Next, SECTIONS);
        cursor.apply(NavAction::Next, SECTIONS);
        assert_eq!(cursor.position(), 2);

        assert_eq!(
            cursor.apply(NavAction::Next, SECTIONS),
            NavOutcome::Clamped { position: 2 }
        );
        assert_eq!(cursor.position(), 2);
        assert!(!cursor.can_next(SECTIONS));
    }

    #[test]
    fn forward_and_back_moves_one_step() {
        let mut cursor = SectionCursor::new();
        assert_eq!(cursor.apply(NavAction::Next, SECTIONS), NavOutcome::Moved { position: 1 });
        assert_eq!(
            cursor.apply(NavAction::Previous, SECTIONS),
            NavOutcome::Moved { position: 0 }
        );
    }

    #[test]
    fn submit_only_from_last_section_and_resets() {
        let mut cursor = SectionCursor::new();
        assert_eq!(
            cursor.apply(NavAction::Submit, SECTIONS),
            NavOutcome::SubmitUnavailable { position: 0 }
        );

        cursor.apply(NavAction::Next, SECTIONS);
        cursor.apply(NavAction::Next, SECTIONS);
        assert!(cursor.can_submit(SECTIONS));
        assert_eq!(cursor.apply(NavAction::Submit, SECTIONS), NavOutcome::Submitted);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn empty_catalog_never_submits() {
        let mut cursor = SectionCursor::new();
        assert!(!cursor.can_submit(0));
        assert_eq!(
            cursor.apply(NavAction::Next, 0),
            NavOutcome::Clamped { position: 0 }
        );
    }
}
