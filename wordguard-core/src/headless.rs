// File: wordguard-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for using the matchers without a UI: build the
//! engine a [`DictionaryConfig`] asks for, scan a string, or redact it in one
//! call.

use anyhow::Result;
use log::debug;

use crate::automaton::Automaton;
use crate::block::{replace_all, Block};
use crate::config::{DictionaryConfig, EngineKind};
use crate::dfa::Dfa;
use crate::matcher::Matcher;

/// Builds the configured matcher: adds every word, then deletes every entry
/// of `deleted`, then builds.
pub fn build_matcher(config: &DictionaryConfig) -> Result<Box<dyn Matcher>> {
    config.validate()?;

    let mut matcher: Box<dyn Matcher> = match config.engine_kind() {
        EngineKind::Automaton => Box::new(Automaton::with_fold(config.fold_enabled())),
        EngineKind::Dfa => Box::new(Dfa::with_fold(config.fold_enabled())),
    };
    for word in &config.words {
        matcher.add(word);
    }
    for word in &config.deleted {
        matcher.delete(word);
    }
    matcher.build();

    debug!(
        "Built {} matcher with {} node(s), fold={}",
        config.engine_kind(),
        matcher.node_count(),
        config.fold_enabled()
    );
    Ok(matcher)
}

/// Finds every block in `content` using the dictionary's exclusion classes.
pub fn scan_with(matcher: &dyn Matcher, config: &DictionaryConfig, content: &str) -> Vec<Block> {
    let exclude = config.exclude_set();
    let predicate = |ch: char| exclude.excludes(ch);
    if exclude.is_empty() {
        matcher.find_blocks(content, None)
    } else {
        matcher.find_blocks(content, Some(&predicate))
    }
}

/// Replaces every match in `content` with the dictionary's replacement
/// character.
pub fn redact_with(matcher: &dyn Matcher, config: &DictionaryConfig, content: &str) -> String {
    let blocks = scan_with(matcher, config, content);
    replace_all(content, blocks, config.replacement())
}

/// One-shot scan: builds the matcher and returns the raw blocks.
pub fn headless_scan(config: &DictionaryConfig, content: &str) -> Result<Vec<Block>> {
    let matcher = build_matcher(config)?;
    Ok(scan_with(matcher.as_ref(), config, content))
}

/// One-shot redaction. This is the primary entry point for non-interactive
/// use.
pub fn headless_redact_string(config: &DictionaryConfig, content: &str) -> Result<String> {
    let matcher = build_matcher(config)?;
    Ok(redact_with(matcher.as_ref(), config, content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exclude::ExcludeKind;
    use anyhow::Result;

    fn sensitive_config(engine: EngineKind) -> DictionaryConfig {
        DictionaryConfig {
            words: ["fuck", "shit", "bitch", "艹", "就是", "傻X", "他奶奶的"]
                .iter()
                .map(|w| w.to_string())
                .collect(),
            deleted: vec!["就是".to_string()],
            engine: Some(engine),
            ..Default::default()
        }
    }

    #[test]
    fn test_headless_redact_string_automaton() -> Result<()> {
        let content = "我fuck你shit up, 艹他奶奶的个球嘞, you这个bitch，就是个傻X!";
        let redacted = headless_redact_string(&sensitive_config(EngineKind::Automaton), content)?;
        assert_eq!(redacted, "我****你**** up, *****个球嘞, you这个*****，就是个**!");
        Ok(())
    }

    #[test]
    fn test_headless_redact_string_dfa() -> Result<()> {
        let content = "我fuck你shit up, 艹他奶奶的个球嘞, you这个bitch，就是个傻X!";
        let redacted = headless_redact_string(&sensitive_config(EngineKind::Dfa), content)?;
        assert_eq!(redacted, "我****你**** up, *****个球嘞, you这个*****，就是个**!");
        Ok(())
    }

    #[test]
    fn test_headless_scan_uses_exclusions_and_fold() -> Result<()> {
        let config = DictionaryConfig {
            words: vec!["fuck".to_string()],
            fold: Some(true),
            exclude: Some(vec![ExcludeKind::Space, ExcludeKind::Punct]),
            replace_with: Some('#'),
            ..Default::default()
        };
        let blocks = headless_scan(&config, "F.U C-K off")?;
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].literal, "F.U C-K");
        assert_eq!(headless_redact_string(&config, "F.U C-K off")?, "####### off");
        Ok(())
    }

    #[test]
    fn test_build_matcher_rejects_invalid_dictionary() {
        let config = DictionaryConfig {
            words: vec![String::new()],
            ..Default::default()
        };
        assert!(build_matcher(&config).is_err());
    }
}
