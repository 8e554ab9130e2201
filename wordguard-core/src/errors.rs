//! errors.rs - Custom error types for the wordguard-core library.
//!
//! The matchers themselves never fail; these errors cover dictionary loading
//! and validation, and parsing of user-supplied settings.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// All error types in the `wordguard-core` library.
///
/// `#[non_exhaustive]` so new variants can be added without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum WordguardError {
    #[error("Dictionary contains an empty word")]
    EmptyWord,

    #[error("Word '{0}': length ({1}) exceeds maximum allowed ({2})")]
    WordLengthExceeded(String, usize, usize),

    #[error("Unknown exclusion class '{0}' (expected one of: control, space, punct, symbol, none_letter, none_digit, none_letter_or_digit)")]
    UnknownExclusion(String),

    #[error("Unknown engine '{0}' (expected 'automaton' or 'dfa')")]
    UnknownEngine(String),
}
