//! Delete confirmation decision.

#[cfg(test)]
#[path = "confirm_test.rs"]
mod confirm_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteDecision {
    /// Let the link navigate or the form submit.
    Proceed,
    /// Cancel the element's default action.
    Cancel,
}

impl DeleteDecision {
    /// `None` means the prompt could not be shown; treat it as declined.
    pub fn from_answer(answer: Option<bool>) -> Self {
        if answer == Some(true) { Self::Proceed } else { Self::Cancel }
    }

    pub fn blocks_default(self) -> bool {
        self == Self::Cancel
    }
}
