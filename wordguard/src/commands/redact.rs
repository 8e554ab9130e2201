//! `redact` command: writes the input with every dictionary word overwritten.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io::{self, BufRead, Write};

use wordguard_core::{build_matcher, replace_all, scan_with, summarize_blocks, Block, DictionaryConfig, Matcher};

use crate::cli::RedactCommand;
use crate::commands::dictionary::resolve_dictionary;
use crate::commands::read_input;
use crate::ui::output_format;
use crate::ui::summary;
use crate::ui::theme::ThemeMap;

pub struct RedactOptions {
    pub quiet: bool,
}

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let supports_color = io::stderr().is_terminal();
    let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), theme, supports_color);
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let supports_color = io::stderr().is_terminal();
    let _ = output_format::print_warn_message(&mut io::stderr(), msg.as_ref(), theme, supports_color);
}

pub fn run_redact(cmd: &RedactCommand, opts: RedactOptions, theme: &ThemeMap) -> Result<()> {
    info!("Starting redact operation.");
    let config = resolve_dictionary(&cmd.dictionary)?;
    let matcher = build_matcher(&config)?;

    let streaming = cmd.line_buffered && cmd.input_file.is_none() && cmd.output.is_none();
    if cmd.line_buffered && !streaming && !opts.quiet {
        warn_msg("--line-buffered only applies to stdin and stdout; processing the whole input at once.", theme);
    }

    let blocks = if streaming {
        redact_lines(matcher.as_ref(), &config, io::stdin().lock(), &mut io::stdout().lock())?
    } else {
        let input = read_input(cmd.input_file.as_deref())?;
        let (redacted, blocks) = redact_content(matcher.as_ref(), &config, &input);
        debug!(
            "Content redacted. Original length: {}, redacted length: {}",
            input.len(),
            redacted.len()
        );
        write_output(cmd, &redacted, opts.quiet, theme)?;
        blocks
    };

    if !cmd.no_summary && !opts.quiet {
        let items = summarize_blocks(&blocks);
        let supports_color = io::stderr().is_terminal();
        summary::print_summary("Redaction Summary:", &items, &mut io::stderr(), theme, supports_color)?;
    }
    info!("Redact operation completed.");
    Ok(())
}

/// Redacts one string, returning the output and the blocks found in it.
pub fn redact_content(
    matcher: &dyn Matcher,
    config: &DictionaryConfig,
    input: &str,
) -> (String, Vec<Block>) {
    let blocks = scan_with(matcher, config, input);
    let redacted = replace_all(input, blocks.clone(), config.replacement());
    (redacted, blocks)
}

/// Streams `reader` line by line, flushing after each line so piped output
/// appears as soon as its line is complete. Matches never span lines.
pub fn redact_lines<R: BufRead, W: Write>(
    matcher: &dyn Matcher,
    config: &DictionaryConfig,
    reader: R,
    writer: &mut W,
) -> Result<Vec<Block>> {
    let mut all_blocks = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read line from stdin")?;
        let (redacted, blocks) = redact_content(matcher, config, &line);
        writeln!(writer, "{redacted}")?;
        writer.flush()?;
        all_blocks.extend(blocks);
    }
    Ok(all_blocks)
}

fn write_output(cmd: &RedactCommand, redacted: &str, quiet: bool, theme: &ThemeMap) -> Result<()> {
    match &cmd.output {
        Some(path) => {
            if !quiet {
                info_msg(format!("Writing redacted content to file: {}", path.display()), theme);
            }
            fs::write(path, redacted)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
        }
        None => {
            let mut writer = io::stdout().lock();
            writer.write_all(redacted.as_bytes())?;
            writer.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use test_log::test;

    fn config(words: &[&str]) -> DictionaryConfig {
        DictionaryConfig {
            words: words.iter().map(|w| w.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn redact_content_keeps_unmatched_text() {
        let config = config(&["shit", "艹"]);
        let matcher = build_matcher(&config).unwrap();
        let (out, blocks) = redact_content(matcher.as_ref(), &config, "oh shit, 艹!\n");
        assert_eq!(out, "oh ****, *!\n");
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn redact_lines_processes_each_line() {
        let config = config(&["he", "she"]);
        let matcher = build_matcher(&config).unwrap();
        let mut out = Vec::new();
        let blocks = redact_lines(
            matcher.as_ref(),
            &config,
            Cursor::new("she said\nno\nhe\n"),
            &mut out,
        )
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "*** said\nno\n**\n");
        assert_eq!(blocks.len(), 3);
    }
}
