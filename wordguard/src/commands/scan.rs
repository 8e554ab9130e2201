//! `scan` command: reports matches without changing the input.

use anyhow::Result;
use is_terminal::IsTerminal;
use log::info;
use serde::Serialize;
use std::io::{self, Write};

use wordguard_core::{build_matcher, scan_with, summarize_blocks, BlockSummaryItem, EngineKind};

use crate::cli::ScanCommand;
use crate::commands::dictionary::resolve_dictionary;
use crate::commands::read_input;
use crate::ui::output_format;
use crate::ui::summary;
use crate::ui::theme::ThemeMap;

/// Machine-readable scan result printed by `--json-stdout`.
#[derive(Debug, Serialize)]
pub struct ScanReport {
    pub engine: EngineKind,
    pub total_matches: usize,
    pub words: Vec<BlockSummaryItem>,
}

/// What the caller should do after a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    Clean,
    Found,
    ThresholdExceeded,
}

pub fn run_scan(cmd: &ScanCommand, theme: &ThemeMap) -> Result<ScanOutcome> {
    info!("Starting scan operation.");
    let config = resolve_dictionary(&cmd.dictionary)?;
    let matcher = build_matcher(&config)?;
    let input = read_input(cmd.input_file.as_deref())?;

    let blocks = scan_with(matcher.as_ref(), &config, &input);
    let report = ScanReport {
        engine: config.engine_kind(),
        total_matches: blocks.len(),
        words: summarize_blocks(&blocks),
    };

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    if cmd.json_stdout {
        serde_json::to_writer_pretty(&mut writer, &report)?;
        writeln!(writer)?;
    } else {
        let supports_color = stdout.is_terminal();
        summary::print_summary("Scan Summary:", &report.words, &mut writer, theme, supports_color)?;
    }
    writer.flush()?;

    let outcome = evaluate_threshold(report.total_matches, cmd.fail_over_threshold);
    if outcome == ScanOutcome::ThresholdExceeded {
        let supports_color = io::stderr().is_terminal();
        let msg = format!(
            "Found {} match(es), exceeding the threshold of {}.",
            report.total_matches,
            cmd.fail_over_threshold.unwrap_or_default()
        );
        let _ = output_format::print_error_message(&mut io::stderr(), &msg, theme, supports_color);
    }
    info!("Scan operation completed.");
    Ok(outcome)
}

pub fn evaluate_threshold(total: usize, threshold: Option<usize>) -> ScanOutcome {
    match threshold {
        Some(limit) if total > limit => ScanOutcome::ThresholdExceeded,
        _ if total > 0 => ScanOutcome::Found,
        _ => ScanOutcome::Clean,
    }
}
