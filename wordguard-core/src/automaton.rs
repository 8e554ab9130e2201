// wordguard-core/src/automaton.rs
//! The Aho-Corasick automaton.
//!
//! Words are added to and deleted from the shared [`Trie`]. [`Automaton::build`]
//! then computes failure links breadth-first, and matching streams the input
//! once, falling back along failure links on a mismatch.
//!
//! Any add or delete invalidates every failure link. Links are not repaired
//! incrementally: call `build` again before the next match. Matching against
//! stale links never panics, but may miss or misreport words.
//!
//! License: MIT OR APACHE 2.0

use std::collections::VecDeque;

use log::{debug, warn};

use crate::exclude::Exclude;
use crate::matcher::Matcher;
use crate::trie::{NodeId, Trie, ROOT};

/// Aho-Corasick automaton over Unicode code points.
#[derive(Debug, Clone, Default)]
pub struct Automaton {
    trie: Trie,
    stale: bool,
}

impl Automaton {
    /// Creates an empty, case-sensitive automaton.
    pub fn new() -> Self {
        Self::with_fold(false)
    }

    /// Creates an empty automaton. With `fold` set, words and input are
    /// compared case-insensitively; reported spans and literals still refer
    /// to the original input.
    pub fn with_fold(fold: bool) -> Self {
        Self {
            trie: Trie::new(fold),
            stale: false,
        }
    }

    pub fn fold(&self) -> bool {
        self.trie.fold()
    }

    /// True when words changed since the last [`build`](Self::build).
    pub fn needs_build(&self) -> bool {
        self.stale
    }

    /// Read access to the underlying node store.
    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// The failure link of `id` as computed by the last build.
    pub fn failure_link(&self, id: NodeId) -> Option<NodeId> {
        self.trie.node(id).fail()
    }

    fn compute_failure_links(&mut self) {
        let trie = &mut self.trie;
        let mut queue: VecDeque<NodeId> = VecDeque::with_capacity(trie.node_count());
        let mut edges: Vec<(char, NodeId)> = Vec::new();

        trie.node_mut(ROOT).fail = None;
        queue.push_back(ROOT);

        while let Some(n) = queue.pop_front() {
            edges.clear();
            edges.extend(trie.node(n).children());

            for &(ch, child) in &edges {
                queue.push_back(child);

                let mut link = ROOT;
                let mut p = trie.node(n).fail();
                while let Some(pid) = p {
                    if let Some(next) = trie.node(pid).child(ch) {
                        link = next;
                        break;
                    }
                    p = trie.node(pid).fail();
                }
                trie.node_mut(child).fail = Some(link);
            }
        }
    }
}

impl Matcher for Automaton {
    fn add(&mut self, word: &str) {
        self.trie.insert(word);
        self.stale = true;
    }

    fn delete(&mut self, word: &str) {
        if self.trie.remove(word) {
            self.stale = true;
        }
    }

    /// Recomputes every failure link from scratch.
    fn build(&mut self) {
        self.compute_failure_links();
        self.stale = false;
        debug!("Built failure links for {} node(s)", self.trie.node_count());
    }

    fn find_literal(
        &self,
        text: &str,
        exclude: Option<Exclude<'_>>,
        on_match: &mut dyn FnMut(usize, usize, &str),
    ) {
        if self.stale {
            warn!("Matching with stale failure links; call build() after add/delete");
        }

        let trie = &self.trie;
        let mut current = ROOT;
        // Original byte offset of each character that survived exclusion.
        let mut index: Vec<usize> = Vec::with_capacity(text.len());

        for (i, original) in text.char_indices() {
            if exclude.is_some_and(|ex| ex(original)) {
                continue;
            }
            index.push(i);
            let ch = trie.normalize(original);

            while current != ROOT && trie.node(current).child(ch).is_none() {
                current = trie.node(current).fail().unwrap_or(ROOT);
            }
            current = match trie.node(current).child(ch) {
                Some(next) => next,
                None => {
                    current = ROOT;
                    continue;
                }
            };

            let end = i + original.len_utf8();
            let mut t = current;
            while t != ROOT {
                let node = trie.node(t);
                if let Some(word) = node.word() {
                    let k = node.word_len();
                    if k > 0 && k <= index.len() {
                        on_match(index[index.len() - k], end, word);
                    }
                }
                t = node.fail().unwrap_or(ROOT);
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
