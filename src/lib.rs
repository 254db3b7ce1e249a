pub mod config;
pub mod core;
pub mod dict;

use once_cell::sync::Lazy;

pub use crate::core::arg_segmenter::ArgSegmenter;
pub use crate::core::resolver::{resolve, ResolveError, TranslationRequest};
pub use crate::core::split::{Outcome, Split, SplitError};
pub use crate::dict::vocabulary::{VocabError, Vocabulary};

/// Process-wide segmenter over the built-in language table. Built on first
/// use, immutable afterwards; segmentation takes `&self`, so no lock is
/// needed for concurrent callers.
pub static GLOBAL_SEGMENTER: Lazy<ArgSegmenter> = Lazy::new(ArgSegmenter::default);

/// Segment an argument list against the built-in language table.
pub fn split_args<S: AsRef<str>>(tokens: &[S]) -> Result<Split, SplitError> {
    GLOBAL_SEGMENTER.segment(tokens)
}
