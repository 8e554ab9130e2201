// wordguard/src/main.rs
//! WordGuard entry point.

use anyhow::{Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;
use log::LevelFilter;
use std::io;
use std::process::ExitCode;

use wordguard::cli::{Cli, Commands};
use wordguard::commands::redact::{run_redact, RedactOptions};
use wordguard::commands::scan::{run_scan, ScanOutcome};
use wordguard::logger;
use wordguard::ui::output_format;
use wordguard::ui::theme::{build_theme_map, ThemeStyle};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.quiet {
        Some(LevelFilter::Off)
    } else if cli.debug {
        Some(LevelFilter::Debug)
    } else if cli.disable_debug {
        Some(LevelFilter::Info)
    } else {
        None
    };
    logger::init_logger(level);

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            let theme = ThemeStyle::default_theme_map();
            let supports_color = io::stderr().is_terminal();
            let _ = output_format::print_error_message(
                &mut io::stderr(),
                &format!("{err:#}"),
                &theme,
                supports_color,
            );
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let theme = build_theme_map(cli.theme.as_deref()).context("Theme error")?;

    match &cli.command {
        Commands::Redact(cmd) => {
            run_redact(cmd, RedactOptions { quiet: cli.quiet }, &theme)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Scan(cmd) => match run_scan(cmd, &theme)? {
            ScanOutcome::ThresholdExceeded => Ok(ExitCode::FAILURE),
            ScanOutcome::Clean | ScanOutcome::Found => Ok(ExitCode::SUCCESS),
        },
    }
}
