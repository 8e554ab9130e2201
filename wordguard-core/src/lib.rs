// wordguard-core/src/lib.rs
//! # WordGuard Core Library
//!
//! `wordguard-core` finds every occurrence of any word from a dictionary in a
//! text, in a single pass, and reports each occurrence with its exact byte
//! span. Typical uses are sensitive-word filtering, keyword tagging and text
//! redaction.
//!
//! ## Modules
//!
//! * `trie`: the arena-backed node store and the add/delete (mutation) logic.
//! * `automaton`: the Aho-Corasick automaton (failure links + streaming match).
//! * `dfa`: a brute-force alternative that walks the trie from every start.
//! * `matcher`: the `Matcher` trait both engines implement.
//! * `exclude`: character classifiers for skipping input during matching.
//! * `block`: match records and the merge/replace helpers built on them.
//! * `config`: dictionary configuration (YAML or plain word lists).
//! * `headless`: one-shot scan/redact wrappers.
//! * `errors`: the library error type.
//!
//! ## Usage Example
//!
//! ```rust
//! use wordguard_core::{Automaton, Matcher, exclude_space};
//!
//! let mut a = Automaton::with_fold(true);
//! for word in ["say", "she", "shr", "he", "her"] {
//!     a.add(word);
//! }
//! a.delete("shr");
//! a.build();
//!
//! assert_eq!(a.find("yasherhs"), vec!["she", "he", "her"]);
//!
//! let blocks = a.find_blocks("S H E", Some(&exclude_space));
//! assert_eq!(blocks[0].literal, "S H E");
//! assert_eq!(blocks[0].matched, "she");
//! ```
//!
//! ## Contract
//!
//! Every `add`/`delete` invalidates the automaton's failure links; call
//! `build` before the next `find*`. Matching with stale links never panics
//! but its results are unspecified. The [`Dfa`] has nothing to build.
//!
//! Matching itself never fails. Loading dictionaries does, and reports
//! through `anyhow::Error` with [`WordguardError`] for the specific cases.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod automaton;
pub mod block;
pub mod config;
pub mod dfa;
pub mod errors;
pub mod exclude;
pub mod headless;
pub mod matcher;
pub mod trie;

/// Re-exports the two engines and the trait they share.
pub use automaton::Automaton;
pub use dfa::Dfa;
pub use matcher::Matcher;

/// Re-exports the match record and its post-processing helpers.
pub use block::{
    redact_sensitive, replace_all, summarize_blocks, union_blocks, Block, BlockSummaryItem,
};

/// Re-exports the shipped exclusion predicates.
pub use exclude::{
    exclude_control, exclude_none_digit, exclude_none_letter, exclude_none_letter_or_digit,
    exclude_punct, exclude_space, exclude_symbol, Exclude, ExcludeKind, ExcludeSet,
};

/// Re-exports the dictionary configuration types.
pub use config::{merge_dictionaries, DictionaryConfig, EngineKind, MAX_WORD_LENGTH};

pub use errors::WordguardError;

/// Re-exports types and functions for one-shot, non-interactive use.
pub use headless::{build_matcher, headless_redact_string, headless_scan, redact_with, scan_with};
