use std::fmt::{Display, Formatter};

/// How a split was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Both designators matched the vocabulary.
    Resolved,
    /// No vocabulary-backed split exists; the last two tokens were taken as
    /// designators verbatim. Code resolution decides whether to reject them.
    Fallback,
}

/// Result of segmenting an argument list: the free-form text, the source
/// designator and the target designator. Designators from a resolved split
/// are case-folded; fallback designators keep the caller's spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    pub text: String,
    pub from: String,
    pub to: String,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitError {
    /// Fewer than two tokens supplied, so there is no position for both
    /// designators.
    InsufficientTokens(usize),
}

impl Display for SplitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SplitError::InsufficientTokens(got) => write!(
                f,
                "expected at least two tokens (<text> <from> <to>), got {}",
                got
            ),
        }
    }
}

impl std::error::Error for SplitError {}
