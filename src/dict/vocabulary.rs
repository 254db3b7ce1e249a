use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::{debug, info};

use crate::config::configuration::Configuration;
use crate::core::char_util::fold;
use crate::dict::lang_table::LANGUAGES;
use crate::dict::trie::Trie;

#[derive(Debug)]
pub enum VocabError {
    Io(std::io::Error),
    Parse(serde_yaml::Error),
}

impl Display for VocabError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            VocabError::Io(e) => write!(f, "language table io error: {}", e),
            VocabError::Parse(e) => write!(f, "language table parse error: {}", e),
        }
    }
}

impl std::error::Error for VocabError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VocabError::Io(e) => Some(e),
            VocabError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for VocabError {
    fn from(e: std::io::Error) -> Self {
        VocabError::Io(e)
    }
}

impl From<serde_yaml::Error> for VocabError {
    fn from(e: serde_yaml::Error) -> Self {
        VocabError::Parse(e)
    }
}

/// Language table manager: the code -> display-name mapping plus the derived
/// lookup trie over folded designator tokens. Codes and display names are
/// both valid designators.
///
/// Mutation (`add_entry`, `disable_entry`, `load_ext_table`) is meant for the
/// construction phase; once a vocabulary is handed to a segmenter it stays
/// as-is for the process lifetime.
#[derive(Default)]
pub struct Vocabulary {
    // folded code -> display name as supplied
    table: BTreeMap<String, String>,
    lookup: Trie,
}

impl Vocabulary {
    /// Vocabulary over the compiled-in language table.
    pub fn builtin() -> Self {
        let mut vocab = Vocabulary::default();
        for (code, name) in LANGUAGES.entries() {
            vocab.add_entry(code, name);
        }
        debug!("builtin language table, {} entries", vocab.len());
        vocab
    }

    /// Vocabulary over an explicit (code, display name) table.
    pub fn from_pairs<I, C, N>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (C, N)>,
        C: AsRef<str>,
        N: AsRef<str>,
    {
        let mut vocab = Vocabulary::default();
        for (code, name) in pairs {
            vocab.add_entry(code.as_ref(), name.as_ref());
        }
        vocab
    }

    /// Built-in table plus every extension table the configuration lists.
    pub fn with_config(cfg: &dyn Configuration) -> Result<Self, VocabError> {
        let mut vocab = Self::builtin();
        for path in cfg.ext_tables() {
            vocab.load_ext_table(&path)?;
        }
        Ok(vocab)
    }

    pub fn add_entry(&mut self, code: &str, name: &str) {
        let code = fold(code);
        let folded_name = fold(name);
        self.lookup.insert(code.split_whitespace());
        self.lookup.insert(folded_name.split_whitespace());
        self.table.insert(code, name.to_string());
    }

    /// Mask an entry. Its code and display name stop matching as designators.
    pub fn disable_entry(&mut self, code: &str) {
        let code = fold(code);
        if let Some(name) = self.table.remove(&code) {
            self.lookup.delete(code.split_whitespace());
            let folded_name = fold(&name);
            self.lookup.delete(folded_name.split_whitespace());
        }
    }

    /// Merge an extension table, a YAML mapping of code to display name.
    pub fn load_ext_table<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, VocabError> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        let table: BTreeMap<String, String> = serde_yaml::from_reader(reader)?;
        let total = table.len();
        for (code, name) in table {
            self.add_entry(&code, &name);
        }
        info!(
            "ext language table {}, {} entries",
            path.as_ref().display(),
            total
        );
        Ok(total)
    }

    /// Case-folded designator membership.
    pub fn contains(&self, designator: &str) -> bool {
        let folded = fold(designator);
        self.lookup.exist(folded.split_whitespace())
    }

    /// Membership for a span of already-folded tokens.
    pub fn contains_span<'a, W: Iterator<Item = &'a str>>(&self, words: W) -> bool {
        self.lookup.exist(words)
    }

    /// Map a designator back to its canonical code: a folded code matches
    /// directly, otherwise the first entry (in code order) whose folded
    /// display name matches wins. Display-name collisions therefore resolve
    /// deterministically, but not necessarily to the entry the caller meant.
    pub fn resolve_code(&self, designator: &str) -> Option<&str> {
        let folded = fold(designator);
        if let Some((code, _)) = self.table.get_key_value(&folded) {
            return Some(code.as_str());
        }
        self.table
            .iter()
            .find(|(_, name)| fold(name) == folded)
            .map(|(code, _)| code.as_str())
    }

    pub fn display_name(&self, code: &str) -> Option<&str> {
        self.table.get(&fold(code)).map(|name| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn builtin_membership() {
        let vocab = Vocabulary::builtin();
        assert!(vocab.contains("en"));
        assert!(vocab.contains("English"));
        assert!(vocab.contains("scots gaelic"));
        assert!(vocab.contains("Scots Gaelic"));
        assert!(!vocab.contains("klingon"));
        assert!(!vocab.contains("gaelic"));
    }

    #[test]
    fn resolve_codes_and_names() {
        let vocab = Vocabulary::builtin();
        assert_eq!(vocab.resolve_code("it"), Some("it"));
        assert_eq!(vocab.resolve_code("IT"), Some("it"));
        assert_eq!(vocab.resolve_code("italian"), Some("it"));
        assert_eq!(vocab.resolve_code("Scots Gaelic"), Some("gd"));
        assert_eq!(vocab.resolve_code("klingon"), None);
        assert_eq!(vocab.display_name("gd"), Some("Scots Gaelic"));
    }

    #[test]
    fn add_and_disable_entries() {
        let mut vocab = Vocabulary::from_pairs([("en", "English"), ("it", "Italian")]);
        assert_eq!(vocab.len(), 2);

        vocab.add_entry("tlh", "Klingon");
        assert!(vocab.contains("tlh"));
        assert!(vocab.contains("Klingon"));

        vocab.disable_entry("tlh");
        assert!(!vocab.contains("tlh"));
        assert!(!vocab.contains("Klingon"));
        assert_eq!(vocab.resolve_code("tlh"), None);
    }

    #[test]
    fn rebuild_is_idempotent() {
        let first = Vocabulary::builtin();
        let second = Vocabulary::builtin();
        assert_eq!(first.len(), second.len());
        for designator in ["en", "english", "scots gaelic", "it", "klingon"] {
            assert_eq!(first.contains(designator), second.contains(designator));
            assert_eq!(
                first.resolve_code(designator),
                second.resolve_code(designator)
            );
        }
    }

    #[test]
    fn ext_table_merge() {
        let path = std::env::temp_dir().join(format!("langseg-ext-{}.yml", std::process::id()));
        std::fs::write(&path, "tlh: Klingon\nsjn: Sindarin\n").unwrap();

        let mut vocab = Vocabulary::builtin();
        assert!(!vocab.contains("klingon"));
        let total = vocab.load_ext_table(&path).unwrap();
        assert_eq!(total, 2);
        assert!(vocab.contains("klingon"));
        assert_eq!(vocab.resolve_code("Sindarin"), Some("sjn"));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_ext_table_is_an_error() {
        let mut vocab = Vocabulary::builtin();
        let err = vocab.load_ext_table("/no/such/table.yml").unwrap_err();
        assert!(matches!(err, VocabError::Io(_)));
    }
}
