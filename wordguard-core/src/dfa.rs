// wordguard-core/src/dfa.rs
//! Brute-force matcher over the same trie: no failure links, one forward
//! walk per start position.
//!
//! Worst case is O(n·m) for input length `n` and longest word `m`, but there
//! is nothing to build, so it suits small inputs or dictionaries that change
//! between almost every match. Exclusion and folding behave exactly as in the
//! [`Automaton`](crate::Automaton); only the order of results differs (start
//! position instead of end position).

use crate::exclude::Exclude;
use crate::matcher::Matcher;
use crate::trie::{Trie, ROOT};

#[derive(Debug, Clone, Default)]
pub struct Dfa {
    trie: Trie,
}

impl Dfa {
    pub fn new() -> Self {
        Self::with_fold(false)
    }

    pub fn with_fold(fold: bool) -> Self {
        Self { trie: Trie::new(fold) }
    }

    pub fn fold(&self) -> bool {
        self.trie.fold()
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }
}

impl Matcher for Dfa {
    fn add(&mut self, word: &str) {
        self.trie.insert(word);
    }

    fn delete(&mut self, word: &str) {
        self.trie.remove(word);
    }

    /// Nothing to prepare.
    fn build(&mut self) {}

    fn find_literal(
        &self,
        text: &str,
        exclude: Option<Exclude<'_>>,
        on_match: &mut dyn FnMut(usize, usize, &str),
    ) {
        let trie = &self.trie;
        let mut chars: Vec<char> = Vec::with_capacity(text.len());
        // Original byte span of each surviving character.
        let mut spans: Vec<(usize, usize)> = Vec::with_capacity(text.len());
        for (i, ch) in text.char_indices() {
            if exclude.is_some_and(|ex| ex(ch)) {
                continue;
            }
            spans.push((i, i + ch.len_utf8()));
            chars.push(trie.normalize(ch));
        }

        for i in 0..chars.len() {
            let mut n = ROOT;
            for j in i..chars.len() {
                n = match trie.node(n).child(chars[j]) {
                    Some(next) => next,
                    None => break,
                };
                if let Some(word) = trie.node(n).word() {
                    on_match(spans[i].0, spans[j].1, word);
                }
            }
        }
    }

    fn node_count(&self) -> usize {
        self.trie.node_count()
    }

    fn words(&self) -> Vec<String> {
        self.trie.words()
    }
}
