// wordguard/src/logger.rs
//! Logger setup for the `wordguard` binary.
//!
//! Log lines go to stderr so they never mix with redacted output on stdout.

use env_logger::{Builder, Env};
use log::LevelFilter;
use std::io::Write;

/// Installs `env_logger`, honouring `RUST_LOG` unless `level` overrides it.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format(|buf, record| {
        writeln!(buf, "[{} {}] {}", record.level(), record.target(), record.args())
    });
    let _ = builder.try_init();
}
