use std::fmt::{Display, Formatter};

use crate::core::split::Split;
use crate::dict::vocabulary::Vocabulary;

/// A validated request: the text to translate plus canonical language codes,
/// ready for whatever backend performs the translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Designator matched neither a code nor a display name.
    UnknownLanguage(String),
    /// Both designators resolve to the same code.
    SameLanguage(String),
    /// Everything before the designators was consumed by them.
    EmptyText,
}

impl Display for ResolveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolveError::UnknownLanguage(designator) => {
                write!(f, "'{}' is not a recognized language code or name", designator)
            }
            ResolveError::SameLanguage(code) => write!(
                f,
                "'from' and 'to' languages must be different, both resolve to '{}'",
                code
            ),
            ResolveError::EmptyText => write!(f, "no text left to translate"),
        }
    }
}

impl std::error::Error for ResolveError {}

/// Map a split's designators back to canonical codes and validate the whole
/// request. This is where fallback splits with made-up designators get
/// rejected.
pub fn resolve(vocab: &Vocabulary, split: &Split) -> Result<TranslationRequest, ResolveError> {
    let from = vocab
        .resolve_code(&split.from)
        .ok_or_else(|| ResolveError::UnknownLanguage(split.from.clone()))?;
    let to = vocab
        .resolve_code(&split.to)
        .ok_or_else(|| ResolveError::UnknownLanguage(split.to.clone()))?;
    if from == to {
        return Err(ResolveError::SameLanguage(from.to_string()));
    }
    if split.text.is_empty() {
        return Err(ResolveError::EmptyText);
    }
    Ok(TranslationRequest {
        text: split.text.clone(),
        from: from.to_string(),
        to: to.to_string(),
    })
}
