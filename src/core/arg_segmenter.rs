use log::debug;

use crate::core::char_util::fold;
use crate::core::split::{Outcome, Split, SplitError};
use crate::dict::vocabulary::Vocabulary;

/// Splits a flat argument list into free-form text, a source-language
/// designator and a target-language designator, where a designator may span
/// several tokens ("scots gaelic").
///
/// The target candidate starts at the last token and grows leftwards; for
/// each matching target, the source candidate starts just before it and also
/// grows leftwards. The first pair of vocabulary members wins and the search
/// stops. A single trailing token that is itself an entry therefore shadows
/// a longer suffix that would also match. Known limitation, kept so that
/// existing command lines keep splitting the same way.
pub struct ArgSegmenter {
    vocab: Vocabulary,
}

impl Default for ArgSegmenter {
    fn default() -> Self {
        Self::new(Vocabulary::builtin())
    }
}

impl ArgSegmenter {
    pub fn new(vocab: Vocabulary) -> Self {
        ArgSegmenter { vocab }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    pub fn segment<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Split, SplitError> {
        let n = tokens.len();
        if n < 2 {
            return Err(SplitError::InsufficientTokens(n));
        }
        let folded: Vec<String> = tokens.iter().map(|t| fold(t.as_ref())).collect();

        // try every start position for the target span, shortest suffix first
        for i in (1..n).rev() {
            if !self.member(&folded[i..]) {
                continue;
            }
            for j in (1..i).rev() {
                if self.member(&folded[j..i]) {
                    return Ok(Split {
                        text: join(&tokens[..j]),
                        from: folded[j..i].join(" "),
                        to: folded[i..].join(" "),
                        outcome: Outcome::Resolved,
                    });
                }
            }
        }

        // no validated split; hand the last two tokens over untouched and
        // let code resolution reject them
        debug!("no vocabulary-backed split over {} tokens, falling back", n);
        Ok(Split {
            text: join(&tokens[..n - 2]),
            from: tokens[n - 2].as_ref().to_string(),
            to: tokens[n - 1].as_ref().to_string(),
            outcome: Outcome::Fallback,
        })
    }

    fn member(&self, span: &[String]) -> bool {
        self.vocab.contains_span(span.iter().map(|word| word.as_str()))
    }
}

fn join<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(|t| t.as_ref())
        .collect::<Vec<_>>()
        .join(" ")
}
