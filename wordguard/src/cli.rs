// wordguard/src/cli.rs
//! Command-line interface for the `wordguard` application.
//! License: MIT OR Apache-2.0

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use wordguard_core::{EngineKind, ExcludeKind};

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "wordguard",
    version = env!("CARGO_PKG_VERSION"),
    about = "Find and redact dictionary words in text",
    long_about = "WordGuard finds every occurrence of any word from a dictionary in a single pass over the input. It can redact the matches in place or report them as a summary. Matching can ignore case and skip characters such as spaces or punctuation, so 'F.U C-K' still matches 'fuck'.",
    arg_required_else_help = true,
)]
pub struct Cli {
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    #[arg(long = "disable-debug", global = true, help = "Disable debug logging, overriding RUST_LOG.")]
    pub disable_debug: bool,

    #[arg(long = "theme", value_name = "FILE", global = true, help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Redacts every dictionary word found in a file or stdin.
    #[command(about = "Redacts every dictionary word found in a file or stdin.")]
    Redact(RedactCommand),

    /// Reports dictionary words found in the input without changing it.
    #[command(about = "Reports dictionary words found in the input without changing it.")]
    Scan(ScanCommand),
}

/// Dictionary selection shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct DictionaryArgs {
    #[arg(long = "dict", value_name = "FILE", env = "WORDGUARD_DICT", help = "Path to a dictionary file (YAML).")]
    pub dict: Option<PathBuf>,

    #[arg(long = "words", value_name = "FILE", help = "Path to a plain word list, one word per line.")]
    pub words: Option<PathBuf>,

    #[arg(long = "word", short = 'w', value_name = "WORD", help = "Add a single word (repeatable).")]
    pub word: Vec<String>,

    #[arg(long = "delete", value_name = "WORD", help = "Remove a word after all others were added (repeatable).")]
    pub delete: Vec<String>,

    /// Skip the embedded default dictionary.
    #[arg(long = "no-defaults", help = "Do not load the built-in dictionary.")]
    pub no_defaults: bool,

    #[arg(long, help = "Match case-insensitively.")]
    pub fold: bool,

    #[arg(long = "no-fold", conflicts_with = "fold", help = "Match case-sensitively, even if the dictionary folds.")]
    pub no_fold: bool,

    #[arg(
        long,
        short = 'x',
        value_name = "CLASS",
        value_delimiter = ',',
        help = "Character classes to skip while matching (comma-separated): control, space, punct, symbol, none_letter, none_digit, none_letter_or_digit."
    )]
    pub exclude: Vec<ExcludeKind>,

    #[arg(long = "no-exclude", conflicts_with = "exclude", help = "Skip no characters, even if the dictionary excludes some.")]
    pub no_exclude: bool,

    #[arg(long = "engine", short = 'e', value_name = "ENGINE", help = "Matching engine: 'automaton' or 'dfa'.")]
    pub engine: Option<EngineKind>,

    #[arg(long = "replace-with", value_name = "CHAR", help = "Character written over each matched character.")]
    pub replace_with: Option<char>,
}

/// Arguments for the `redact` command.
#[derive(Parser, Debug)]
pub struct RedactCommand {
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Process input line by line (useful for streaming data from pipes).
    #[arg(long = "line-buffered", help = "Process stdin line by line, flushing after each line.")]
    pub line_buffered: bool,

    #[arg(long = "no-summary", help = "Suppress the redaction summary.")]
    pub no_summary: bool,

    #[command(flatten)]
    pub dictionary: DictionaryArgs,
}

/// Arguments for the `scan` command.
#[derive(Parser, Debug)]
pub struct ScanCommand {
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    #[arg(long = "json-stdout", help = "Print the scan report as JSON on stdout.")]
    pub json_stdout: bool,

    /// Exit with code 1 when more matches than this are found.
    #[arg(long = "fail-over-threshold", value_name = "N", help = "Exit with a non-zero status if the total number of matches exceeds N.")]
    pub fail_over_threshold: Option<usize>,

    #[command(flatten)]
    pub dictionary: DictionaryArgs,
}
