//! Markdown table extraction, interpreted as flashcards.
//!
//! The first table in the response (header row, separator row, then data
//! rows) is read as term/definition pairs in row order.

use crate::extractor::scan::{lines_with_offsets, Line};
use crate::types::Flashcard;

/// A table recovered from a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableBlock {
    /// Text before the table, trimmed.
    pub intro_text: String,
    /// One card per usable data row, in row order. Never empty.
    pub flashcards: Vec<Flashcard>,
    /// Byte offset of the header row's first `|`.
    pub start: usize,
}

/// Extract the first Markdown table in `text` as flashcards.
///
/// A table is a `| ... |` row, immediately followed by a separator row whose
/// cells hold only dashes, colons, and whitespace, followed by zero or more
/// `| ... |` data rows. Each data row contributes a card when it has at least
/// two non-empty cells: the first is the term, the second the definition.
/// Rows with fewer cells are dropped.
///
/// Returns `None` when no table exists, or when the first table yields no
/// cards (including a table with only a header and separator).
///
/// # Examples
///
/// ```
/// use response_extract::extractor::extract_table;
///
/// let text = "Study these:\n| Term | Meaning |\n|---|---|\n| CPU | Processor |\n";
/// let table = extract_table(text).unwrap();
/// assert_eq!(table.intro_text, "Study these:");
/// assert_eq!(table.flashcards[0].term, "CPU");
/// assert_eq!(table.flashcards[0].definition, "Processor");
/// ```
pub fn extract_table(text: &str) -> Option<TableBlock> {
    let lines: Vec<Line<'_>> = lines_with_offsets(text).collect();

    let header = (0..lines.len().saturating_sub(1))
        .find(|&i| is_row(lines[i].text) && is_separator(lines[i + 1].text))?;

    let flashcards: Vec<Flashcard> = lines[header + 2..]
        .iter()
        .take_while(|line| is_row(line.text))
        .filter_map(|line| row_to_card(line.text))
        .collect();

    if flashcards.is_empty() {
        tracing::trace!("table matched but produced no cards");
        return None;
    }

    let header_line = lines[header];
    let start = header_line.start + header_line.text.find('|').unwrap_or(0);

    Some(TableBlock {
        intro_text: text[..start].trim().to_string(),
        flashcards,
        start,
    })
}

/// `| ... |` after trimming surrounding whitespace.
fn is_row(line: &str) -> bool {
    let t = line.trim();
    t.len() >= 2 && t.starts_with('|') && t.ends_with('|')
}

/// `|---|:---:|` style row: only pipes, dashes, colons, and whitespace.
/// Dashes are not required, so `|   |   |` also qualifies.
fn is_separator(line: &str) -> bool {
    is_row(line)
        && line
            .trim()
            .chars()
            .all(|c| matches!(c, '|' | '-' | ':') || c.is_whitespace())
}

fn row_to_card(line: &str) -> Option<Flashcard> {
    let mut cells = line.split('|').map(str::trim).filter(|c| !c.is_empty());
    let term = cells.next()?;
    let definition = cells.next()?;
    Some(Flashcard::new(term, definition))
}
