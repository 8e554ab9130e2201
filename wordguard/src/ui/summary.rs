// wordguard/src/ui/summary.rs
//! Summary tables for `redact` and `scan`.

use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::{ContentArrangement, Table};
use std::io::{self, Write};

use wordguard_core::BlockSummaryItem;

use crate::ui::output_format::paint;
use crate::ui::theme::{ThemeEntry, ThemeMap};

/// Distinct literals shown per word before the list is elided.
const MAX_LITERALS_SHOWN: usize = 5;

/// Builds the table body. UTF-8 borders are used only for terminals.
pub fn build_summary_table(
    items: &[BlockSummaryItem],
    theme: &ThemeMap,
    enable_colors: bool,
) -> Table {
    let mut table = Table::new();
    table
        .load_preset(if enable_colors { UTF8_FULL } else { ASCII_FULL })
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Word", "Occurrences", "Seen as"]);

    for item in items {
        let mut literals: Vec<&str> = Vec::new();
        for literal in &item.literals {
            if !literals.contains(&literal.as_str()) {
                literals.push(literal);
            }
        }
        let mut seen_as = literals
            .iter()
            .take(MAX_LITERALS_SHOWN)
            .map(|l| format!("{l:?}"))
            .collect::<Vec<_>>()
            .join(", ");
        if literals.len() > MAX_LITERALS_SHOWN {
            seen_as.push_str(&format!(", … (+{})", literals.len() - MAX_LITERALS_SHOWN));
        }
        table.add_row(vec![
            paint(&item.matched, ThemeEntry::SummaryWord, theme, enable_colors),
            paint(&item.occurrences.to_string(), ThemeEntry::SummaryOccurrences, theme, enable_colors),
            seen_as,
        ]);
    }
    table
}

/// Prints a titled summary, or a one-line notice when nothing matched.
pub fn print_summary<W: Write>(
    title: &str,
    items: &[BlockSummaryItem],
    writer: &mut W,
    theme: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    writeln!(writer, "{}", paint(title, ThemeEntry::Header, theme, enable_colors))?;
    if items.is_empty() {
        writeln!(writer, "No dictionary words found.")?;
        return Ok(());
    }
    writeln!(writer, "{}", build_summary_table(items, theme, enable_colors))?;
    let total: usize = items.iter().map(|i| i.occurrences).sum();
    writeln!(writer, "Total matches: {total}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;

    fn item(word: &str, literals: &[&str]) -> BlockSummaryItem {
        BlockSummaryItem {
            matched: word.to_string(),
            occurrences: literals.len(),
            literals: literals.iter().map(|l| l.to_string()).collect(),
        }
    }

    #[test]
    fn summary_lists_words_and_totals() {
        let theme = ThemeStyle::default_theme_map();
        let items = vec![item("fuck", &["fuck", "F U C K"]), item("shit", &["shit"])];
        let mut buf = Vec::new();
        print_summary("Redaction Summary:", &items, &mut buf, &theme, false).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.starts_with("Redaction Summary:\n"));
        assert!(out.contains("fuck"));
        assert!(out.contains("\"F U C K\""));
        assert!(out.contains("Total matches: 3"));
    }

    #[test]
    fn empty_summary_prints_notice() {
        let theme = ThemeStyle::default_theme_map();
        let mut buf = Vec::new();
        print_summary("Scan Summary:", &[], &mut buf, &theme, false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Scan Summary:\nNo dictionary words found.\n");
    }

    #[test]
    fn duplicate_literals_are_collapsed() {
        let theme = ThemeStyle::default_theme_map();
        let table = build_summary_table(&[item("a", &["a", "a", "A"])], &theme, false);
        let out = table.to_string();
        assert_eq!(out.matches("\"a\"").count(), 1);
        assert!(out.contains("\"A\""));
    }
}
