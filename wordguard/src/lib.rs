// wordguard/src/lib.rs
//! # WordGuard CLI Application
//!
//! Terminal front end for `wordguard-core`: loads a dictionary, then redacts
//! or scans text from stdin or a file.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
