// wordguard-core/src/matcher.rs
//! Defines the `Matcher` trait shared by the Aho-Corasick [`Automaton`] and
//! the brute-force [`Dfa`].
//!
//! Both engines use the same trie and the same add/delete semantics; they
//! differ only in how text is walked. Callers that do not care which one
//! they hold work through `Box<dyn Matcher>`.
//!
//! Mutation takes `&mut self` and matching takes `&self`, so any number of
//! readers may match concurrently against an engine nobody is mutating.
//!
//! [`Automaton`]: crate::Automaton
//! [`Dfa`]: crate::Dfa
//!
//! License: MIT OR APACHE 2.0

use std::fmt::Debug;

use crate::block::{log_block_debug, Block};
use crate::exclude::Exclude;

/// A dictionary-driven multi-word matcher.
pub trait Matcher: Send + Sync + Debug {
    /// Adds `word` to the dictionary. A rebuild is required before matching.
    fn add(&mut self, word: &str);

    /// Removes `word` from the dictionary; absent words are ignored.
    /// A rebuild is required before matching.
    fn delete(&mut self, word: &str);

    /// Prepares the engine for matching after any add or delete.
    fn build(&mut self);

    /// Walks `text` and calls `on_match(start, end, word)` for every
    /// occurrence of a dictionary word.
    ///
    /// `start..end` is a byte range into `text`. Characters for which
    /// `exclude` returns true are skipped without breaking a match in
    /// progress.
    fn find_literal(
        &self,
        text: &str,
        exclude: Option<Exclude<'_>>,
        on_match: &mut dyn FnMut(usize, usize, &str),
    );

    /// Number of live trie nodes, root included.
    fn node_count(&self) -> usize;

    /// Lists the dictionary words.
    fn words(&self) -> Vec<String>;

    /// Returns the matched dictionary words. Duplicates are kept, in the
    /// same order as [`find_blocks`](Matcher::find_blocks).
    fn find_exclude(&self, text: &str, exclude: Option<Exclude<'_>>) -> Vec<String> {
        let mut matches = Vec::new();
        self.find_literal(text, exclude, &mut |_, _, word| matches.push(word.to_string()));
        matches
    }

    fn find(&self, text: &str) -> Vec<String> {
        self.find_exclude(text, None)
    }

    /// Returns every occurrence as a [`Block`].
    ///
    /// Order depends on the engine. The [`Automaton`](crate::Automaton)
    /// reports by ascending end offset, longest match first among equal ends.
    /// The [`Dfa`](crate::Dfa) reports by ascending start offset, shortest
    /// match first among equal starts. Both return the same set of blocks;
    /// sort by `(start, end)` when a canonical order is needed.
    fn find_blocks(&self, text: &str, exclude: Option<Exclude<'_>>) -> Vec<Block> {
        let mut blocks = Vec::new();
        self.find_literal(text, exclude, &mut |start, end, word| {
            let block = Block {
                start,
                end,
                literal: text[start..end].to_string(),
                matched: word.to_string(),
            };
            log_block_debug(module_path!(), &block);
            blocks.push(block);
        });
        blocks
    }
}
