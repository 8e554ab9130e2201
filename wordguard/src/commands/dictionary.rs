// wordguard/src/commands/dictionary.rs
//! Resolves the dictionary a command runs with.
//!
//! Layers, later ones winning: the embedded default dictionary (unless
//! `--no-defaults`), the `--dict` YAML file, the `--words` list, then the
//! individual `--word`/`--delete` entries and the matching flags.

use anyhow::{bail, Result};
use log::{debug, info};

use wordguard_core::{merge_dictionaries, DictionaryConfig};

use crate::cli::DictionaryArgs;

pub fn resolve_dictionary(args: &DictionaryArgs) -> Result<DictionaryConfig> {
    let mut config = if args.no_defaults {
        debug!("Skipping the built-in dictionary.");
        DictionaryConfig::default()
    } else {
        DictionaryConfig::load_default()?
    };

    if let Some(path) = &args.dict {
        let user = DictionaryConfig::load_from_file(path)?;
        config = merge_dictionaries(config, Some(user));
    }
    if let Some(path) = &args.words {
        let list = DictionaryConfig::load_word_list(path)?;
        config = merge_dictionaries(config, Some(list));
    }

    let overrides = DictionaryConfig {
        words: args.word.clone(),
        deleted: args.delete.clone(),
        fold: match (args.fold, args.no_fold) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        },
        exclude: if args.no_exclude {
            Some(Vec::new())
        } else if args.exclude.is_empty() {
            None
        } else {
            Some(args.exclude.clone())
        },
        replace_with: args.replace_with,
        engine: args.engine,
    };
    config = merge_dictionaries(config, Some(overrides));

    if config.words.is_empty() {
        bail!("No words to match: the dictionary is empty. Use --word, --words or --dict.");
    }
    config.validate()?;

    info!(
        "Using {} word(s), {} deletion(s), engine={}, fold={}",
        config.words.len(),
        config.deleted.len(),
        config.engine_kind(),
        config.fold_enabled()
    );
    Ok(config)
}
