//! One open buffer: rope-backed text, a cursor and an optional selection.
//!
//! All positions are char indices. Mutation goes through [`Document::replace`]
//! so every change is representable as a [`TextEdit`].

use ropey::Rope;

/// A single applied edit: `start..end` was replaced by `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct Document {
    text: Rope,
    cursor: usize,
    selection: Option<(usize, usize)>,
}

impl Document {
    pub fn new(contents: &str) -> Self {
        Self {
            text: Rope::from_str(contents),
            cursor: 0,
            selection: None,
        }
    }

    pub fn text(&self) -> &Rope {
        &self.text
    }

    pub fn contents(&self) -> String {
        self.text.to_string()
    }

    pub fn len_chars(&self) -> usize {
        self.text.len_chars()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Moves the cursor, clamping into bounds. Dismisses any selection.
    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.text.len_chars());
        self.selection = None;
    }

    /// Normalized `(start, end)` with `start < end`, if a selection is active.
    pub fn selection(&self) -> Option<(usize, usize)> {
        self.selection
    }

    /// Selects `anchor..head` (either order), leaving the cursor at the end
    /// the head landed on. An empty range clears the selection.
    pub fn select(&mut self, anchor: usize, head: usize) {
        let len = self.text.len_chars();
        let anchor = anchor.min(len);
        let head = head.min(len);
        if anchor == head {
            self.selection = None;
            self.cursor = head;
            return;
        }
        let (start, end) = if anchor < head { (anchor, head) } else { (head, anchor) };
        self.selection = Some((start, end));
        self.cursor = head;
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Replaces `start..end` with `text`, leaving the cursor after the
    /// inserted text. Bounds are clamped; the selection is dismissed.
    pub fn replace(&mut self, start: usize, end: usize, text: &str) -> TextEdit {
        let len = self.text.len_chars();
        let start = start.min(len);
        let end = end.clamp(start, len);
        self.text.remove(start..end);
        self.text.insert(start, text);
        self.cursor = start + text.chars().count();
        self.selection = None;
        TextEdit {
            start,
            end,
            text: text.to_owned(),
        }
    }

    /// Char index of the first character of the line containing `pos`.
    pub fn line_start(&self, pos: usize) -> usize {
        let pos = pos.min(self.text.len_chars());
        let line = self.text.char_to_line(pos);
        self.text.line_to_char(line)
    }

    pub fn char_at(&self, pos: usize) -> Option<char> {
        (pos < self.text.len_chars()).then(|| self.text.char(pos))
    }

    pub fn slice(&self, start: usize, end: usize) -> String {
        let len = self.text.len_chars();
        let start = start.min(len);
        let end = end.clamp(start, len);
        self.text.slice(start..end).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_moves_the_cursor_after_the_insertion() {
        let mut doc = Document::new("hello world");
        let edit = doc.replace(6, 11, "there");
        assert_eq!(doc.contents(), "hello there");
        assert_eq!(doc.cursor(), 11);
        assert_eq!(
            edit,
            TextEdit {
                start: 6,
                end: 11,
                text: "there".to_owned()
            }
        );
    }

    #[test]
    fn replace_clamps_out_of_range_bounds() {
        let mut doc = Document::new("abc");
        doc.replace(10, 20, "x");
        assert_eq!(doc.contents(), "abcx");
    }

    #[test]
    fn select_normalizes_and_empty_ranges_clear() {
        let mut doc = Document::new("abcdef");
        doc.select(4, 1);
        assert_eq!(doc.selection(), Some((1, 4)));
        assert_eq!(doc.cursor(), 1);
        doc.select(2, 2);
        assert_eq!(doc.selection(), None);
    }

    #[test]
    fn set_cursor_dismisses_the_selection() {
        let mut doc = Document::new("abcdef");
        doc.select(1, 4);
        doc.set_cursor(0);
        assert_eq!(doc.selection(), None);
        assert_eq!(doc.cursor(), 0);
    }

    #[test]
    fn line_start_walks_back_to_the_line_head() {
        let doc = Document::new("one\ntwo\nthree");
        assert_eq!(doc.line_start(0), 0);
        assert_eq!(doc.line_start(5), 4);
        assert_eq!(doc.line_start(13), 8);
    }

    #[test]
    fn char_at_is_none_past_the_end() {
        let doc = Document::new("ab");
        assert_eq!(doc.char_at(1), Some('b'));
        assert_eq!(doc.char_at(2), None);
    }
}
