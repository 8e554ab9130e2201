// wordguard-core/src/block.rs
//! Match reporting types and the post-processing helpers built on them.
//!
//! A [`Block`] is one reported occurrence. The matchers emit blocks as-is,
//! overlaps and duplicates included; [`union_blocks`] and [`replace_all`] are
//! the collaborators that turn that raw stream into redacted text.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use log::debug;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Whether matched text may appear verbatim in debug logs.
    static ref PII_DEBUG_ALLOWED: bool = {
        std::env::var("WORDGUARD_ALLOW_DEBUG_PII")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// A single match occurrence.
///
/// `start..end` is a half-open byte range into the original input, so
/// `&text[block.start..block.end] == block.literal` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Block {
    pub start: usize,
    pub end: usize,
    /// The input text covered by the span, including any excluded characters.
    pub literal: String,
    /// The dictionary word that matched. Differs from `literal` under case
    /// folding or when excluded characters sit inside the span.
    pub matched: String,
}

/// Per-word tally of the blocks found in one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockSummaryItem {
    pub matched: String,
    pub occurrences: usize,
    pub literals: Vec<String>,
}

/// Groups blocks by matched word, ordered by word.
pub fn summarize_blocks(blocks: &[Block]) -> Vec<BlockSummaryItem> {
    let mut grouped: BTreeMap<&str, Vec<&Block>> = BTreeMap::new();
    for b in blocks {
        grouped.entry(b.matched.as_str()).or_default().push(b);
    }
    grouped
        .into_iter()
        .map(|(matched, bs)| BlockSummaryItem {
            matched: matched.to_string(),
            occurrences: bs.len(),
            literals: bs.iter().map(|b| b.literal.clone()).collect(),
        })
        .collect()
}

/// Sorts blocks by position and merges every block overlapping its
/// predecessor into one span covering both.
///
/// The merged block's literal is re-sliced from `text`; its `matched` word is
/// the one from the block that opened the run (the longest at the leftmost
/// start).
pub fn union_blocks(text: &str, mut blocks: Vec<Block>) -> Vec<Block> {
    if blocks.is_empty() {
        return blocks;
    }
    blocks.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

    let mut merged: Vec<Block> = Vec::with_capacity(blocks.len());
    for b in blocks {
        match merged.last_mut() {
            Some(last) if b.start < last.end => {
                if b.end > last.end {
                    last.end = b.end;
                    last.literal = text[last.start..last.end].to_string();
                }
            }
            _ => merged.push(b),
        }
    }
    debug!("Merged blocks into {} span(s)", merged.len());
    merged
}

/// Replaces every matched span with `replacement`, one per code point of the
/// span, leaving the rest of `text` untouched.
pub fn replace_all(text: &str, blocks: Vec<Block>, replacement: char) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_end = 0usize;
    for b in union_blocks(text, blocks) {
        out.push_str(&text[last_end..b.start]);
        out.extend(std::iter::repeat(replacement).take(b.literal.chars().count()));
        last_end = b.end;
        log_redaction_action_debug(module_path!(), &b);
    }
    out.push_str(&text[last_end..]);
    out
}

/// Masks a sensitive string for logging.
pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    if s.len() <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", s.chars().count())
    }
}

fn get_loggable_content(sensitive_content: &str) -> String {
    if *PII_DEBUG_ALLOWED {
        sensitive_content.to_string()
    } else {
        redact_sensitive(sensitive_content)
    }
}

pub fn log_block_debug(module_path: &str, block: &Block) {
    debug!(
        "{} Found Block: {}..{} Literal='{}', Matched='{}'",
        module_path,
        block.start,
        block.end,
        get_loggable_content(&block.literal),
        get_loggable_content(&block.matched)
    );
}

pub fn log_redaction_action_debug(module_path: &str, block: &Block) {
    debug!(
        "{} Redaction action: {}..{} Original='{}'",
        module_path,
        block.start,
        block.end,
        get_loggable_content(&block.literal)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(text: &str, start: usize, end: usize) -> Block {
        Block {
            start,
            end,
            literal: text[start..end].to_string(),
            matched: text[start..end].to_string(),
        }
    }

    #[test]
    fn test_redact_sensitive_short_string() {
        assert_eq!(redact_sensitive("abc"), "[REDACTED]".to_string());
    }

    #[test]
    fn test_redact_sensitive_long_string() {
        assert_eq!(redact_sensitive("123456789"), "[REDACTED: 9 chars]".to_string());
    }

    #[test]
    fn union_merges_overlaps_and_nesting() {
        let text = "ushers and more";
        let blocks = vec![block(text, 2, 5), block(text, 1, 4), block(text, 3, 5), block(text, 7, 10)];
        let merged = union_blocks(text, blocks);
        assert_eq!(merged.len(), 2);
        assert_eq!((merged[0].start, merged[0].end), (1, 5));
        assert_eq!(merged[0].literal, "sher");
        assert_eq!(merged[0].matched, "she");
        assert_eq!((merged[1].start, merged[1].end), (7, 10));
    }

    #[test]
    fn union_keeps_adjacent_spans_apart() {
        let text = "abcdef";
        let merged = union_blocks(text, vec![block(text, 3, 6), block(text, 0, 3)]);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].start, 0);
    }

    #[test]
    fn replace_all_masks_per_code_point() {
        let text = "我fuck你";
        let blocks = vec![block(text, 3, 7)];
        assert_eq!(replace_all(text, blocks, '*'), "我****你");

        let text = "他奶奶的个球";
        let blocks = vec![block(text, 0, 12)];
        assert_eq!(replace_all(text, blocks, '#'), "####个球");
    }

    #[test]
    fn replace_all_without_blocks_is_identity() {
        assert_eq!(replace_all("nothing here", Vec::new(), '*'), "nothing here");
    }

    #[test]
    fn summarize_groups_by_word() {
        let text = "he she he";
        let blocks = vec![block(text, 0, 2), block(text, 3, 6), block(text, 7, 9)];
        let summary = summarize_blocks(&blocks);
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].matched, "he");
        assert_eq!(summary[0].occurrences, 2);
        assert_eq!(summary[1].matched, "she");
    }
}
