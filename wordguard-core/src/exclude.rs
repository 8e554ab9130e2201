// wordguard-core/src/exclude.rs
//! Character classifiers for skipping input during matching.
//!
//! An excluded character produces no state transition, so a dictionary word
//! still matches when excluded characters are interleaved with its letters
//! (`"f u c k"` matches `fuck` when spaces are excluded). The reported span
//! still covers the skipped characters.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::WordguardError;

/// A borrowed exclusion predicate, as accepted by the matchers.
pub type Exclude<'a> = &'a dyn Fn(char) -> bool;

lazy_static! {
    static ref PUNCT: Regex = Regex::new(r"^\p{P}$").expect("valid punctuation class");
    static ref SYMBOL: Regex = Regex::new(r"^\p{S}$").expect("valid symbol class");
    static ref LETTER: Regex = Regex::new(r"^\p{L}$").expect("valid letter class");
    static ref DIGIT: Regex = Regex::new(r"^\p{Nd}$").expect("valid digit class");
}

fn in_class(class: &Regex, ch: char) -> bool {
    let mut buf = [0u8; 4];
    class.is_match(ch.encode_utf8(&mut buf))
}

/// Control characters (general category Cc).
pub fn exclude_control(ch: char) -> bool {
    ch.is_control()
}

/// Unicode white space.
pub fn exclude_space(ch: char) -> bool {
    ch.is_whitespace()
}

/// Punctuation (general category P).
pub fn exclude_punct(ch: char) -> bool {
    in_class(&PUNCT, ch)
}

/// Symbols (general category S), e.g. `$`, `+`, `©`, emoji.
pub fn exclude_symbol(ch: char) -> bool {
    in_class(&SYMBOL, ch)
}

/// Everything that is not a letter.
pub fn exclude_none_letter(ch: char) -> bool {
    !in_class(&LETTER, ch)
}

/// Everything that is not a decimal digit.
pub fn exclude_none_digit(ch: char) -> bool {
    !in_class(&DIGIT, ch)
}

/// Everything that is neither a letter nor a decimal digit.
pub fn exclude_none_letter_or_digit(ch: char) -> bool {
    !(in_class(&LETTER, ch) || in_class(&DIGIT, ch))
}

/// Names the shipped classifiers so they can be selected from configuration
/// or the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExcludeKind {
    Control,
    Space,
    Punct,
    Symbol,
    NoneLetter,
    NoneDigit,
    NoneLetterOrDigit,
}

impl ExcludeKind {
    pub const ALL: [ExcludeKind; 7] = [
        ExcludeKind::Control,
        ExcludeKind::Space,
        ExcludeKind::Punct,
        ExcludeKind::Symbol,
        ExcludeKind::NoneLetter,
        ExcludeKind::NoneDigit,
        ExcludeKind::NoneLetterOrDigit,
    ];

    /// The classifier this kind names.
    pub fn predicate(self) -> fn(char) -> bool {
        match self {
            ExcludeKind::Control => exclude_control,
            ExcludeKind::Space => exclude_space,
            ExcludeKind::Punct => exclude_punct,
            ExcludeKind::Symbol => exclude_symbol,
            ExcludeKind::NoneLetter => exclude_none_letter,
            ExcludeKind::NoneDigit => exclude_none_digit,
            ExcludeKind::NoneLetterOrDigit => exclude_none_letter_or_digit,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExcludeKind::Control => "control",
            ExcludeKind::Space => "space",
            ExcludeKind::Punct => "punct",
            ExcludeKind::Symbol => "symbol",
            ExcludeKind::NoneLetter => "none_letter",
            ExcludeKind::NoneDigit => "none_digit",
            ExcludeKind::NoneLetterOrDigit => "none_letter_or_digit",
        }
    }
}

impl fmt::Display for ExcludeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExcludeKind {
    type Err = WordguardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        ExcludeKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| WordguardError::UnknownExclusion(s.to_string()))
    }
}

/// A union of several classifiers: a character is excluded if any member
/// excludes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExcludeSet {
    kinds: Vec<ExcludeKind>,
}

impl ExcludeSet {
    pub fn new(kinds: &[ExcludeKind]) -> Self {
        let mut set = Self::default();
        for &kind in kinds {
            if !set.kinds.contains(&kind) {
                set.kinds.push(kind);
            }
        }
        set
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn kinds(&self) -> &[ExcludeKind] {
        &self.kinds
    }

    pub fn excludes(&self, ch: char) -> bool {
        self.kinds.iter().any(|kind| (kind.predicate())(ch))
    }
}
