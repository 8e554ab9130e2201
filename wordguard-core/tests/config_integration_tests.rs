// wordguard-core/tests/config_integration_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;

use wordguard_core::config::{merge_dictionaries, DictionaryConfig, EngineKind};
use wordguard_core::{headless_redact_string, ExcludeKind};

#[test]
fn test_load_default_dictionary() {
    let config = DictionaryConfig::load_default().unwrap();
    assert!(!config.words.is_empty());
    assert!(config.words.iter().any(|w| w == "fuck"));
    assert!(config.fold_enabled());
    assert_eq!(config.engine_kind(), EngineKind::Automaton);
    config.validate().unwrap();
}

#[test]
fn test_load_from_file() -> Result<()> {
    let yaml_content = r##"
words:
  - alpha
  - beta
  - 就是
deleted:
  - 就是
fold: true
exclude: [space, none_letter_or_digit]
replace_with: "#"
engine: dfa
"##;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    let config = DictionaryConfig::load_from_file(file.path())?;
    assert_eq!(config.words, vec!["alpha", "beta", "就是"]);
    assert_eq!(config.deleted, vec!["就是"]);
    assert!(config.fold_enabled());
    assert_eq!(
        config.exclude,
        Some(vec![ExcludeKind::Space, ExcludeKind::NoneLetterOrDigit])
    );
    assert_eq!(config.replacement(), '#');
    assert_eq!(config.engine_kind(), EngineKind::Dfa);
    Ok(())
}

#[test]
fn test_load_from_file_defaults() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"words: [gamma]\n")?;
    let config = DictionaryConfig::load_from_file(file.path())?;
    assert_eq!(config.fold, None);
    assert_eq!(config.exclude, None);
    assert_eq!(config.replacement(), '*');
    assert_eq!(config.engine, None);
    Ok(())
}

#[test]
fn test_load_from_file_rejects_empty_word() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"words: [\"ok\", \"\"]\n")?;
    let err = DictionaryConfig::load_from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("Dictionary validation failed"));
    Ok(())
}

#[test]
fn test_load_from_file_rejects_unknown_exclusion() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"words: [ok]\nexclude: [vowels]\n")?;
    assert!(DictionaryConfig::load_from_file(file.path()).is_err());
    Ok(())
}

#[test]
fn test_load_missing_file() {
    let err = DictionaryConfig::load_from_file("/definitely/not/here.yaml").unwrap_err();
    assert!(err.to_string().contains("Failed to read dictionary file"));
}

#[test]
fn test_load_word_list() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all("# blocked words\nfuck\n\n傻X\n  shit  \n".as_bytes())?;
    let config = DictionaryConfig::load_word_list(file.path())?;
    assert_eq!(config.words, vec!["fuck", "傻X", "shit"]);
    assert_eq!(headless_redact_string(&config, "oh shit, 傻X")?, "oh ****, **");
    Ok(())
}

#[test]
fn test_merge_no_user_config() {
    let default_config = DictionaryConfig {
        words: vec!["a".into()],
        ..Default::default()
    };
    let merged = merge_dictionaries(default_config.clone(), None);
    assert_eq!(merged, default_config);
}

#[test]
fn test_merge_with_user_config() {
    let default_config = DictionaryConfig {
        words: vec!["a".into(), "b".into()],
        exclude: Some(vec![ExcludeKind::Space]),
        replace_with: Some('*'),
        ..Default::default()
    };
    let user_config = DictionaryConfig {
        words: vec!["b".into(), "c".into()],
        deleted: vec!["a".into()],
        fold: Some(true),
        engine: Some(EngineKind::Dfa),
        ..Default::default()
    };
    let merged = merge_dictionaries(default_config, Some(user_config));
    assert_eq!(merged.words, vec!["a", "b", "c"]);
    assert_eq!(merged.deleted, vec!["a"]);
    assert!(merged.fold_enabled());
    assert_eq!(merged.exclude, Some(vec![ExcludeKind::Space]));
    assert_eq!(merged.replacement(), '*');
    assert_eq!(merged.engine_kind(), EngineKind::Dfa);
}

#[test]
fn test_merged_deletion_retracts_default_word() -> Result<()> {
    let default_config = DictionaryConfig::load_default()?;
    let user_config = DictionaryConfig {
        deleted: vec!["shit".into()],
        ..Default::default()
    };
    let merged = merge_dictionaries(default_config, Some(user_config));
    assert_eq!(headless_redact_string(&merged, "shit, F U C K")?, "shit, *******");
    Ok(())
}

#[test]
fn test_user_dictionary_can_disable_default_matching_options() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"fold: false\nexclude: []\n")?;
    let user_config = DictionaryConfig::load_from_file(file.path())?;
    assert_eq!(user_config.fold, Some(false));
    assert_eq!(user_config.exclude, Some(vec![]));

    let default_config = DictionaryConfig::load_default()?;
    assert_eq!(headless_redact_string(&default_config, "this hit list")?, "thi***** list");

    let merged = merge_dictionaries(default_config, Some(user_config));
    assert!(!merged.fold_enabled());
    assert!(merged.exclude_set().is_empty());
    assert_eq!(headless_redact_string(&merged, "this hit list")?, "this hit list");
    assert_eq!(headless_redact_string(&merged, "oh shit")?, "oh ****");
    Ok(())
}
