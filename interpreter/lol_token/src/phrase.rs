//! The keyword phrase trie.
//!
//! Multi-word keywords (`I HAS A`, `SUM OF`, ...) are recognized by
//! longest match over word fragments. The trie is built once by
//! [`phrases`] (or [`PhraseTrie::build`] for a custom vocabulary) and is
//! read-only afterwards; nodes carry the terminal token kind and the
//! canonical phrase text used in diagnostics.

use rustc_hash::FxHashMap;

use crate::fragment::EOL_PHRASE;
use crate::kind::{self, TokenKind};

/// The reserved phrase vocabulary, in canonical spelling.
const PHRASES: &[(TokenKind, &str)] = &[
    (kind::EOL, EOL_PHRASE),
    (kind::HAI, "HAI"),
    (kind::KTHXBYE, "KTHXBYE"),
    (kind::I_HAS_A, "I HAS A"),
    (kind::ITZ, "ITZ"),
    (kind::R, "R"),
    (kind::MAEK, "MAEK"),
    (kind::IS_NOW, "IS NOW"),
    (kind::A_NOOB, "A NOOB"),
    (kind::A_TROOF, "A TROOF"),
    (kind::A_NUMBR, "A NUMBR"),
    (kind::A_NUMBAR, "A NUMBAR"),
    (kind::A_YARN, "A YARN"),
    (kind::I_IZ, "I IZ"),
    (kind::BOTH_SAEM, "BOTH SAEM"),
    (kind::DIFFRINT, "DIFFRINT"),
    (kind::BIGGR_OF, "BIGGR OF"),
    (kind::SMALLR_OF, "SMALLR OF"),
    (kind::SUM_OF, "SUM OF"),
    (kind::DIFF_OF, "DIFF OF"),
    (kind::PRODUKT_OF, "PRODUKT OF"),
    (kind::QUOSHUNT_OF, "QUOSHUNT OF"),
    (kind::MOD_OF, "MOD OF"),
    (kind::NOT, "NOT"),
    (kind::BOTH_OF, "BOTH OF"),
    (kind::EITHER_OF, "EITHER OF"),
    (kind::WON_OF, "WON OF"),
    (kind::ALL_OF, "ALL OF"),
    (kind::ANY_OF, "ANY OF"),
    (kind::SMOOSH, "SMOOSH"),
    (kind::AN, "AN"),
    (kind::MKAY, "MKAY"),
];

/// Build the language's phrase trie.
pub fn phrases() -> PhraseTrie {
    PhraseTrie::build(PHRASES)
}

/// A trie keyed by successive word fragments.
#[derive(Debug, Default)]
pub struct PhraseTrie {
    root: Node,
    canonical: FxHashMap<TokenKind, &'static str>,
}

#[derive(Debug, Default)]
pub(crate) struct Node {
    terminal: Option<(TokenKind, &'static str)>,
    edges: FxHashMap<&'static str, Node>,
}

impl Node {
    /// Follow the edge for one fragment.
    pub(crate) fn step(&self, word: &str) -> Option<&Node> {
        self.edges.get(word)
    }

    /// The token this node completes, if it completes one.
    pub(crate) fn terminal(&self) -> Option<(TokenKind, &'static str)> {
        self.terminal
    }
}

impl PhraseTrie {
    /// Build a trie from `(kind, phrase)` entries. Later entries for the
    /// same word path overwrite earlier ones.
    pub fn build(entries: &[(TokenKind, &'static str)]) -> Self {
        let mut trie = PhraseTrie::default();
        for &(kind, phrase) in entries {
            trie.insert(kind, phrase);
        }
        trie
    }

    fn insert(&mut self, kind: TokenKind, phrase: &'static str) {
        let mut node = &mut self.root;
        for word in phrase.split_whitespace() {
            node = node.edges.entry(word).or_default();
        }
        node.terminal = Some((kind, phrase));
        self.canonical.entry(kind).or_insert(phrase);
    }

    /// Enter the trie with the first fragment of a candidate phrase.
    pub(crate) fn enter(&self, word: &str) -> Option<&Node> {
        self.root.step(word)
    }

    /// The canonical phrase text for a kind, for diagnostics. Only kinds
    /// registered in the trie have one.
    pub fn canonical(&self, kind: TokenKind) -> Option<&'static str> {
        self.canonical.get(&kind).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longest_phrase_is_reachable() {
        let trie = phrases();
        let node = trie.enter("I").and_then(|n| n.step("HAS")).and_then(|n| n.step("A"));
        assert_eq!(
            node.and_then(Node::terminal),
            Some((kind::I_HAS_A, "I HAS A"))
        );
    }

    #[test]
    fn prefixes_are_not_terminals() {
        let trie = phrases();
        let node = trie.enter("I").and_then(|n| n.step("HAS"));
        assert!(node.is_some());
        assert_eq!(node.and_then(Node::terminal), None);
    }

    #[test]
    fn canonical_text_by_kind() {
        let trie = phrases();
        assert_eq!(trie.canonical(kind::SUM_OF), Some("SUM OF"));
        assert_eq!(trie.canonical(kind::EOL), Some(EOL_PHRASE));
        assert_eq!(trie.canonical(kind::LITERAL), None);
    }
}
