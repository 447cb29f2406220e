//! Word boundaries around the cursor.
//!
//! The tracker keeps the identifier the cursor currently sits in, plus a
//! snapshot of what it was before the last edit, so the session can reconcile
//! the dictionary after each change.

use ropey::Rope;

use crate::predict::tokenizer::is_symbol_char;

/// Where the cursor sits relative to identifier text.
///
/// Char indices into the document, `start..end` half-open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordSpan {
    /// Not inside identifier text, or a selection is active.
    #[default]
    None,
    /// Inside a run that starts with a digit. Tracked so the run is not
    /// mistaken for an identifier, but never suggested on or recorded.
    Numeric { start: usize },
    /// Inside an identifier.
    Word { start: usize, end: usize },
}

/// Computes the identifier span containing `cursor`.
///
/// An active selection yields [`WordSpan::None`]: completion while a range is
/// selected would be ambiguous about what gets replaced. The cursor may sit
/// anywhere inside the run, including at either edge.
pub fn word_span_at(text: &Rope, cursor: usize, selection: Option<(usize, usize)>) -> WordSpan {
    if selection.is_some() {
        return WordSpan::None;
    }
    let len = text.len_chars();
    let cursor = cursor.min(len);

    let mut start = cursor;
    while start > 0 && is_symbol_char(text.char(start - 1)) {
        start -= 1;
    }
    let mut end = cursor;
    while end < len && is_symbol_char(text.char(end)) {
        end += 1;
    }

    if start == end {
        return WordSpan::None;
    }
    if text.char(start).is_ascii_digit() {
        return WordSpan::Numeric { start };
    }
    WordSpan::Word { start, end }
}

/// Tracks the word under the cursor across edits.
#[derive(Debug, Default)]
pub struct WordTracker {
    span: WordSpan,
    current_word: String,
    prev_word: String,
}

impl WordTracker {
    pub fn span(&self) -> WordSpan {
        self.span
    }

    /// The identifier currently under the cursor, empty when there is none.
    pub fn current_word(&self) -> &str {
        &self.current_word
    }

    /// The identifier that was under the cursor at the last snapshot.
    pub fn prev_word(&self) -> &str {
        &self.prev_word
    }

    /// Captures the pre-edit word. Call immediately before applying an edit;
    /// [`refresh`](Self::refresh) afterwards gives the post-edit word and the
    /// pair drives dictionary reconciliation.
    pub fn snapshot(&mut self) {
        self.prev_word = self.current_word.clone();
    }

    /// Recomputes the span and current word from the document state.
    pub fn refresh(&mut self, text: &Rope, cursor: usize, selection: Option<(usize, usize)>) {
        self.span = word_span_at(text, cursor, selection);
        self.current_word = match self.span {
            WordSpan::Word { start, end } => text.slice(start..end).to_string(),
            _ => String::new(),
        };
    }

    pub fn clear(&mut self) {
        self.span = WordSpan::None;
        self.current_word.clear();
        self.prev_word.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rope(s: &str) -> Rope {
        Rope::from_str(s)
    }

    #[test]
    fn cursor_inside_an_identifier() {
        let text = rope("let alpha = beta;");
        assert_eq!(
            word_span_at(&text, 6, None),
            WordSpan::Word { start: 4, end: 9 }
        );
    }

    #[test]
    fn cursor_at_either_edge_of_an_identifier() {
        let text = rope("alpha beta");
        assert_eq!(
            word_span_at(&text, 0, None),
            WordSpan::Word { start: 0, end: 5 }
        );
        assert_eq!(
            word_span_at(&text, 5, None),
            WordSpan::Word { start: 0, end: 5 }
        );
        assert_eq!(
            word_span_at(&text, 10, None),
            WordSpan::Word { start: 6, end: 10 }
        );
    }

    #[test]
    fn cursor_between_words_has_no_span() {
        let text = rope("a = b;");
        assert_eq!(word_span_at(&text, 2, None), WordSpan::None);
        assert_eq!(word_span_at(&rope(""), 0, None), WordSpan::None);
    }

    #[test]
    fn selection_suppresses_the_span() {
        let text = rope("alpha");
        assert_eq!(word_span_at(&text, 3, Some((1, 4))), WordSpan::None);
    }

    #[test]
    fn digit_led_runs_are_numeric() {
        let text = rope("x = 123abc;");
        assert_eq!(word_span_at(&text, 6, None), WordSpan::Numeric { start: 4 });
    }

    #[test]
    fn out_of_range_cursor_is_clamped() {
        let text = rope("word");
        assert_eq!(
            word_span_at(&text, 99, None),
            WordSpan::Word { start: 0, end: 4 }
        );
    }

    #[test]
    fn tracker_snapshot_then_refresh() {
        let mut tracker = WordTracker::default();
        let before = rope("alp");
        tracker.refresh(&before, 3, None);
        assert_eq!(tracker.current_word(), "alp");

        tracker.snapshot();
        let after = rope("alph");
        tracker.refresh(&after, 4, None);
        assert_eq!(tracker.prev_word(), "alp");
        assert_eq!(tracker.current_word(), "alph");

        tracker.clear();
        assert_eq!(tracker.span(), WordSpan::None);
        assert_eq!(tracker.current_word(), "");
        assert_eq!(tracker.prev_word(), "");
    }
}
