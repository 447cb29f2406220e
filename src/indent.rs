//! Tab-based auto-indent for newline and closing-brace insertion.

use crate::document::{Document, TextEdit};

/// Number of leading tab characters on the line.
pub fn count_indents(line: &str) -> usize {
    line.chars().take_while(|&c| c == '\t').count()
}

/// True when the line is non-empty and contains only tabs.
pub fn is_all_tabs(line: &str) -> bool {
    !line.is_empty() && line.chars().all(|c| c == '\t')
}

/// Edit for pressing Enter: a newline plus the current line's indent,
/// deepened by one level when the cursor sits directly after `{`.
pub fn newline_edit(doc: &Document) -> TextEdit {
    let cursor = doc.cursor();
    let line_start = doc.line_start(cursor);
    let line = doc.slice(line_start, cursor);
    let mut indents = count_indents(&line);
    if cursor > 0 && doc.char_at(cursor - 1) == Some('{') {
        indents += 1;
    }
    let mut text = String::with_capacity(indents + 1);
    text.push('\n');
    for _ in 0..indents {
        text.push('\t');
    }
    TextEdit {
        start: cursor,
        end: cursor,
        text,
    }
}

/// Edit for typing `}`: on a tabs-only line the whole leading indent is
/// rewritten one level shallower so the brace lines up with its opener;
/// anywhere else the brace is inserted as-is.
pub fn closing_brace_edit(doc: &Document) -> TextEdit {
    let cursor = doc.cursor();
    let line_start = doc.line_start(cursor);
    let line = doc.slice(line_start, cursor);
    if !is_all_tabs(&line) {
        return TextEdit {
            start: cursor,
            end: cursor,
            text: "}".to_owned(),
        };
    }
    let indents = count_indents(&line).saturating_sub(1);
    let mut text = String::with_capacity(indents + 1);
    for _ in 0..indents {
        text.push('\t');
    }
    text.push('}');
    TextEdit {
        start: line_start,
        end: cursor,
        text,
    }
}
