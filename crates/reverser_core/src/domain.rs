/// Longest reversed text (in chars) still shown in the inline label; longer
/// results go through the blocking modal channel instead.
pub const INLINE_DISPLAY_MAX_CHARS: usize = 10;

/// One user-triggered line of input. Created fresh per trigger and discarded
/// after processing; it has no identity beyond the current interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRecord {
    pub raw_text: String,
}

impl InputRecord {
    pub fn new(raw_text: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
        }
    }

    /// View with leading/trailing whitespace removed; validation and
    /// reversal both operate on this.
    pub fn trimmed(&self) -> &str {
        self.raw_text.trim()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReversalResult {
    pub original: String,
    pub reversed: String,
}

impl ReversalResult {
    /// Reverses the code-point sequence of `original`. Not grapheme-aware.
    pub fn compute(original: &str) -> Self {
        Self {
            original: original.to_string(),
            reversed: original.chars().rev().collect(),
        }
    }
}

/// Presentation channel for a reversal result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayChannel {
    /// Non-blocking in-window label; overwrites the previous inline text.
    Inline,
    /// Blocking dialog that must be acknowledged before interaction resumes.
    Modal,
}

impl DisplayChannel {
    pub fn for_text(text: &str) -> Self {
        if text.chars().count() > INLINE_DISPLAY_MAX_CHARS {
            Self::Modal
        } else {
            Self::Inline
        }
    }
}
