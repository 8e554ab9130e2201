//! Dictionary configuration for `wordguard-core`.
//!
//! This module defines the serializable description of a dictionary: which
//! words to load, which to drop again, and how to match them (case folding,
//! excluded character classes, engine choice). It handles YAML files, plain
//! word lists, the embedded default dictionary and merging of user
//! dictionaries over the defaults.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::errors::WordguardError;
use crate::exclude::{ExcludeKind, ExcludeSet};

/// Maximum allowed length of a dictionary word, in code points.
pub const MAX_WORD_LENGTH: usize = 256;

/// Replacement character used when a dictionary does not set one.
pub const DEFAULT_REPLACEMENT: char = '*';

/// Which matcher to build from a dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineKind {
    /// Aho-Corasick automaton with failure links.
    #[default]
    Automaton,
    /// Trie walk from every start position.
    Dfa,
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineKind::Automaton => f.write_str("automaton"),
            EngineKind::Dfa => f.write_str("dfa"),
        }
    }
}

impl FromStr for EngineKind {
    type Err = WordguardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "automaton" | "aca" | "aho-corasick" => Ok(EngineKind::Automaton),
            "dfa" => Ok(EngineKind::Dfa),
            _ => Err(WordguardError::UnknownEngine(s.to_string())),
        }
    }
}

/// Top-level dictionary configuration.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Words to add, in order.
    pub words: Vec<String>,
    /// Words deleted after all `words` were added.
    pub deleted: Vec<String>,
    /// Case-insensitive matching. Unset means off, and leaves the other side
    /// of a merge in charge.
    pub fold: Option<bool>,
    /// Character classes skipped during matching. An explicit empty list
    /// clears the classes of a dictionary merged underneath.
    pub exclude: Option<Vec<ExcludeKind>>,
    /// Character substituted for each matched code point.
    pub replace_with: Option<char>,
    pub engine: Option<EngineKind>,
}

impl DictionaryConfig {
    /// Loads a dictionary from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading dictionary from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read dictionary file {}", path.display()))?;
        let config: DictionaryConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse dictionary file {}", path.display()))?;

        config.validate()?;
        info!("Loaded {} words from file {}.", config.words.len(), path.display());
        Ok(config)
    }

    /// Loads a plain word list: one word per line. Blank lines and lines
    /// starting with `#` are skipped; surrounding whitespace is trimmed.
    pub fn load_word_list<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading word list from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read word list {}", path.display()))?;
        let config = Self::from_word_list(&text);
        config.validate()?;
        info!("Loaded {} words from word list {}.", config.words.len(), path.display());
        Ok(config)
    }

    /// Parses word-list text into a dictionary with default settings.
    pub fn from_word_list(text: &str) -> Self {
        let words = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();
        Self {
            words,
            ..Self::default()
        }
    }

    /// Loads the dictionary embedded in the library.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default dictionary from embedded string...");
        let default_yaml = include_str!("../config/default_dictionary.yaml");
        let config: DictionaryConfig =
            serde_yml::from_str(default_yaml).context("Failed to parse default dictionary")?;

        debug!("Loaded {} default words.", config.words.len());
        Ok(config)
    }

    /// The replacement character, falling back to [`DEFAULT_REPLACEMENT`].
    pub fn replacement(&self) -> char {
        self.replace_with.unwrap_or(DEFAULT_REPLACEMENT)
    }

    pub fn fold_enabled(&self) -> bool {
        self.fold.unwrap_or(false)
    }

    pub fn engine_kind(&self) -> EngineKind {
        self.engine.unwrap_or_default()
    }

    pub fn exclude_set(&self) -> ExcludeSet {
        ExcludeSet::new(self.exclude.as_deref().unwrap_or(&[]))
    }

    /// Checks the dictionary for empty and oversized words. All problems are
    /// reported together; duplicates only produce a warning.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        let mut errors: Vec<WordguardError> = Vec::new();

        for word in self.words.iter().chain(self.deleted.iter()) {
            let len = word.chars().count();
            if len == 0 {
                errors.push(WordguardError::EmptyWord);
            } else if len > MAX_WORD_LENGTH {
                errors.push(WordguardError::WordLengthExceeded(
                    word.clone(),
                    len,
                    MAX_WORD_LENGTH,
                ));
            }
        }
        for word in &self.words {
            if !seen.insert(word.as_str()) {
                warn!("Word '{}' appears more than once in the dictionary.", word);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            let message = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("\n");
            Err(anyhow!("Dictionary validation failed:\n{}", message))
        }
    }
}

/// Merges a user dictionary over the defaults.
///
/// Words and deletions are unioned (defaults first, duplicates dropped).
/// Every setting the user dictionary sets (`fold`, `exclude`, `replace_with`,
/// `engine`) overrides the default; unset ones are inherited.
pub fn merge_dictionaries(
    default_config: DictionaryConfig,
    user_config: Option<DictionaryConfig>,
) -> DictionaryConfig {
    debug!(
        "merge_dictionaries called. Initial default words count: {}",
        default_config.words.len()
    );

    let Some(user_cfg) = user_config else {
        return default_config;
    };
    debug!("User dictionary provided. Merging {} user words.", user_cfg.words.len());

    let mut merged = default_config;
    let mut seen: HashSet<String> = merged.words.iter().cloned().collect();
    for word in user_cfg.words {
        if seen.insert(word.clone()) {
            merged.words.push(word);
        }
    }
    let mut seen_deleted: HashSet<String> = merged.deleted.iter().cloned().collect();
    for word in user_cfg.deleted {
        if seen_deleted.insert(word.clone()) {
            merged.deleted.push(word);
        }
    }

    if let Some(fold) = user_cfg.fold {
        debug!("Overriding fold with user value: {}", fold);
        merged.fold = Some(fold);
    }
    if let Some(exclude) = user_cfg.exclude {
        debug!("Overriding exclusion classes with user value: {:?}", exclude);
        merged.exclude = Some(exclude);
    }
    if let Some(replacement) = user_cfg.replace_with {
        debug!("Overriding replacement with user value: {:?}", replacement);
        merged.replace_with = Some(replacement);
    }
    if let Some(engine) = user_cfg.engine {
        debug!("Overriding engine with user value: {}", engine);
        merged.engine = Some(engine);
    }

    debug!("Final total words after merge: {}", merged.words.len());
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_list_skips_comments_and_blanks() {
        let config = DictionaryConfig::from_word_list("# header\nfoo\n\n  bar  \n#baz\n");
        assert_eq!(config.words, vec!["foo", "bar"]);
        assert!(!config.fold_enabled());
    }

    #[test]
    fn validate_collects_all_errors() {
        let config = DictionaryConfig {
            words: vec!["".into(), "x".repeat(MAX_WORD_LENGTH + 1), "ok".into()],
            ..Default::default()
        };
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("Dictionary validation failed"));
        assert!(err.contains("empty word"));
        assert!(err.contains("exceeds maximum allowed"));
    }

    #[test]
    fn engine_kind_parses() {
        assert_eq!("DFA".parse::<EngineKind>().unwrap(), EngineKind::Dfa);
        assert_eq!("aho-corasick".parse::<EngineKind>().unwrap(), EngineKind::Automaton);
        assert!("regex".parse::<EngineKind>().is_err());
    }

    #[test]
    fn explicit_user_settings_override_defaults() {
        let default_config = DictionaryConfig {
            words: vec!["hit".into()],
            fold: Some(true),
            exclude: Some(vec![ExcludeKind::Space, ExcludeKind::Punct]),
            ..Default::default()
        };
        let user_config: DictionaryConfig =
            serde_yml::from_str("fold: false\nexclude: []\n").unwrap();
        let merged = merge_dictionaries(default_config.clone(), Some(user_config));
        assert!(!merged.fold_enabled());
        assert!(merged.exclude_set().is_empty());

        let inherits = merge_dictionaries(default_config, Some(DictionaryConfig::default()));
        assert!(inherits.fold_enabled());
        assert_eq!(inherits.exclude_set().kinds(), &[ExcludeKind::Space, ExcludeKind::Punct]);
    }

    #[test]
    fn defaults_for_optional_settings() {
        let config = DictionaryConfig::default();
        assert!(!config.fold_enabled());
        assert_eq!(config.replacement(), '*');
        assert_eq!(config.engine_kind(), EngineKind::Automaton);
        assert!(config.exclude_set().is_empty());
    }
}
