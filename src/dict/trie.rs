use std::collections::HashMap;
use std::fmt::{Display, Formatter};

/// Word-level trie node. Designator entries are stored one token per level,
/// so a multi-word display name such as "scots gaelic" occupies two nodes.
#[derive(Debug, Default)]
pub struct TrieNode {
    value: Option<String>,
    final_state: bool,
    child_nodes: HashMap<String, TrieNode>,
}

impl Display for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "TrieNode[value:{:?}, final_state:{}, childs:{}]",
            self.value,
            self.final_state,
            self.child_nodes.len()
        )
    }
}

impl TrieNode {
    pub fn new(word: &str, final_state: bool) -> Self {
        TrieNode {
            value: Some(word.to_string()),
            final_state,
            child_nodes: HashMap::new(),
        }
    }

    pub fn insert<'a, W: Iterator<Item = &'a str>>(&mut self, words: W) {
        let word_list: Vec<&str> = words.collect();
        let mut current_node = self;
        for (idx, word) in word_list.iter().enumerate() {
            current_node = current_node
                .child_nodes
                .entry((*word).to_string())
                .or_insert_with(|| TrieNode::new(word, false));
            if idx == word_list.len() - 1 {
                current_node.final_state = true;
            }
        }
    }

    pub fn delete<'a, W: Iterator<Item = &'a str>>(&mut self, words: W) -> bool {
        let mut current_node = self;
        for word in words {
            match current_node.child_nodes.get_mut(word) {
                Some(node) => current_node = node,
                None => return true,
            }
        }
        current_node.final_state = false;
        true
    }

    pub fn exist<'a, W: Iterator<Item = &'a str>>(&self, words: W) -> bool {
        let mut current_node = self;
        for word in words {
            match current_node.child_nodes.get(word) {
                Some(node) => current_node = node,
                None => return false,
            }
        }
        current_node.final_state
    }
}

#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    pub fn insert<'a, W: Iterator<Item = &'a str>>(&mut self, words: W) {
        let current_node = &mut self.root;
        current_node.insert(words)
    }

    pub fn delete<'a, W: Iterator<Item = &'a str>>(&mut self, words: W) -> bool {
        let current_node = &mut self.root;
        current_node.delete(words)
    }

    pub fn exist<'a, W: Iterator<Item = &'a str>>(&self, words: W) -> bool {
        let current_node = &self.root;
        current_node.exist(words)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn trie_exist() {
        let mut trie = Trie::default();
        trie.insert("scots gaelic".split_whitespace());
        trie.insert("scots".split_whitespace());
        trie.insert("haitian creole".split_whitespace());
        trie.insert("italian".split_whitespace());

        assert!(trie.exist("scots gaelic".split_whitespace()));
        assert!(trie.exist("scots".split_whitespace()));
        assert!(trie.exist("italian".split_whitespace()));
        // prefix of an entry is not itself an entry
        assert!(!trie.exist("haitian".split_whitespace()));
        assert!(!trie.exist("gaelic".split_whitespace()));
        assert!(!trie.exist("scots gaelic italian".split_whitespace()));
    }

    #[test]
    fn trie_delete() {
        let mut trie = Trie::default();
        trie.insert("italian".split_whitespace());
        trie.insert("haitian creole".split_whitespace());

        assert!(trie.exist("italian".split_whitespace()));
        trie.delete("italian".split_whitespace());
        assert!(!trie.exist("italian".split_whitespace()));
        assert!(trie.exist("haitian creole".split_whitespace()));
    }

    #[test]
    fn empty_span_never_matches() {
        let mut trie = Trie::default();
        trie.insert("english".split_whitespace());
        assert!(!trie.exist("".split_whitespace()));
    }
}
