//! Editing session: open documents, the shared dictionary and the word
//! tracker, wired so every text change reconciles the dictionary.
//!
//! Reconciliation compares the word under the cursor before and after each
//! edit. When it changed, one occurrence of the old word is removed and one
//! of the new word is added. This keeps intermediate prefixes from lingering
//! while typing, at the cost of occurrence counts drifting when edits touch
//! words the cursor is not in. The drift is accepted: counts only gate entry
//! removal and nudge scores, and a full rescan per keystroke would defeat the
//! incremental design.

use std::path::Path;

use rustc_hash::FxHashMap;
use tracing::{debug, info};

use crate::document::{Document, TextEdit};
use crate::indent;
use crate::predict::natives::{self, DeclarationRecord};
use crate::predict::suggest::{self, Suggestion};
use crate::predict::tokenizer;
use crate::predict::word::{WordSpan, WordTracker};
use crate::predict::SymbolDictionary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(u64);

#[derive(Debug, Default)]
pub struct EditorSession {
    dictionary: SymbolDictionary,
    documents: FxHashMap<u64, Document>,
    active: Option<u64>,
    next_id: u64,
    tracker: WordTracker,
    natives: Vec<DeclarationRecord>,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session over a pre-populated dictionary.
    pub fn with_dictionary(dictionary: SymbolDictionary) -> Self {
        Self {
            dictionary,
            ..Self::default()
        }
    }

    pub fn dictionary(&self) -> &SymbolDictionary {
        &self.dictionary
    }

    /// Loads `native` declarations from every file under `dir` with the
    /// given extension (`inc` or `*.inc`), seeding the dictionary. The
    /// records are retained for the function list.
    pub fn seed_from_declaration_files(
        &mut self,
        dir: &Path,
        extension: &str,
    ) -> &[DeclarationRecord] {
        let records = natives::load_declaration_files(&mut self.dictionary, dir, extension);
        let headings = records.iter().filter(|r| r.is_heading).count();
        info!(
            "Loaded {} declarations ({} headings) from {}",
            records.len(),
            headings,
            dir.display()
        );
        self.natives = records;
        &self.natives
    }

    pub fn natives(&self) -> &[DeclarationRecord] {
        &self.natives
    }

    /// Opens a document, adds every symbol it contains to the dictionary and
    /// makes it active.
    pub fn open_document(&mut self, contents: &str) -> DocumentId {
        tokenizer::scan_symbols(contents, |symbol| self.dictionary.add(symbol));
        let id = self.next_id;
        self.next_id += 1;
        self.documents.insert(id, Document::new(contents));
        self.active = Some(id);
        self.refresh_tracker();
        debug!("Opened document {} ({} symbols live)", id, self.dictionary.len());
        DocumentId(id)
    }

    /// Closes a document, removing one occurrence of every symbol it still
    /// contains. Symbols whose last occurrence was here disappear from the
    /// suggestion pool.
    pub fn close_document(&mut self, id: DocumentId) {
        let Some(doc) = self.documents.remove(&id.0) else {
            return;
        };
        let contents = doc.contents();
        tokenizer::scan_symbols(&contents, |symbol| self.dictionary.remove(symbol));
        if self.active == Some(id.0) {
            self.active = self.documents.keys().next().copied();
        }
        self.refresh_tracker();
        debug!("Closed document {} ({} symbols live)", id.0, self.dictionary.len());
    }

    /// Switches the active document. Returns false if `id` is not open.
    pub fn set_active(&mut self, id: DocumentId) -> bool {
        if !self.documents.contains_key(&id.0) {
            return false;
        }
        self.active = Some(id.0);
        self.refresh_tracker();
        true
    }

    pub fn active_document(&self) -> Option<&Document> {
        self.active.and_then(|id| self.documents.get(&id))
    }

    pub fn word_span(&self) -> WordSpan {
        self.tracker.span()
    }

    /// Moves the cursor in the active document. Treated as an edit boundary:
    /// leaving a half-typed word commits it as-is.
    pub fn move_cursor(&mut self, cursor: usize) {
        self.tracker.snapshot();
        if let Some(doc) = self.active.and_then(|id| self.documents.get_mut(&id)) {
            doc.set_cursor(cursor);
        }
        self.refresh_tracker();
    }

    pub fn select(&mut self, anchor: usize, head: usize) {
        self.tracker.snapshot();
        if let Some(doc) = self.active.and_then(|id| self.documents.get_mut(&id)) {
            doc.select(anchor, head);
        }
        self.refresh_tracker();
    }

    /// Inserts `text` at the cursor, replacing the selection if one is
    /// active, then reconciles the dictionary.
    pub fn type_text(&mut self, text: &str) {
        self.tracker.snapshot();
        if let Some(doc) = self.active.and_then(|id| self.documents.get_mut(&id)) {
            let (start, end) = match doc.selection() {
                Some(range) => range,
                None => (doc.cursor(), doc.cursor()),
            };
            doc.replace(start, end, text);
        }
        self.handle_text_changed();
    }

    /// Deletes `start..end` from the active document, reconciling as an edit.
    pub fn delete_range(&mut self, start: usize, end: usize) {
        self.tracker.snapshot();
        if let Some(doc) = self.active.and_then(|id| self.documents.get_mut(&id)) {
            doc.replace(start, end, "");
        }
        self.handle_text_changed();
    }

    /// Enter keypress: newline plus auto-indent.
    pub fn insert_newline(&mut self) {
        self.tracker.snapshot();
        if let Some(doc) = self.active.and_then(|id| self.documents.get_mut(&id)) {
            let edit = indent::newline_edit(doc);
            doc.replace(edit.start, edit.end, &edit.text);
        }
        self.handle_text_changed();
    }

    /// `}` keypress: outdents a tabs-only line before inserting the brace.
    pub fn insert_closing_brace(&mut self) {
        self.tracker.snapshot();
        if let Some(doc) = self.active.and_then(|id| self.documents.get_mut(&id)) {
            let edit = indent::closing_brace_edit(doc);
            doc.replace(edit.start, edit.end, &edit.text);
        }
        self.handle_text_changed();
    }

    /// Ranked completions for the word being typed, using the text from the
    /// word start up to the cursor as the query.
    pub fn suggestions(&self) -> Vec<Suggestion<'_>> {
        let WordSpan::Word { start, .. } = self.tracker.span() else {
            return Vec::new();
        };
        let Some(doc) = self.active_document() else {
            return Vec::new();
        };
        let typed = doc.slice(start, doc.cursor());
        suggest::suggestions(&self.dictionary, &typed)
    }

    /// Replaces the typed prefix with `name` and rewards the pick. Returns
    /// the applied edit so the surrounding widget can mirror it, or `None`
    /// when there is no word under the cursor to complete.
    ///
    /// The replacement runs through the same reconciliation as typing, so the
    /// half-typed prefix leaves the dictionary and the accepted name gains an
    /// occurrence. The rank bump comes after, on the settled entry.
    pub fn accept_suggestion(&mut self, name: &str) -> Option<TextEdit> {
        let WordSpan::Word { start, .. } = self.tracker.span() else {
            return None;
        };
        self.tracker.snapshot();
        let doc = self.active.and_then(|id| self.documents.get_mut(&id))?;
        let cursor = doc.cursor();
        let edit = doc.replace(start, cursor, name);
        self.handle_text_changed();
        self.dictionary.bump(name);
        debug!("Accepted suggestion {}", name);
        Some(edit)
    }

    fn handle_text_changed(&mut self) {
        let prev = self.tracker.prev_word().to_owned();
        self.refresh_tracker();
        let current = self.tracker.current_word();
        if prev != current {
            let current = current.to_owned();
            // Transfer an occurrence only when the word was edited into a
            // different word. A word the cursor left behind (current empty)
            // stays committed.
            if !current.is_empty() {
                if !prev.is_empty() {
                    self.dictionary.remove(&prev);
                }
                self.dictionary.add(&current);
            }
        }
    }

    fn refresh_tracker(&mut self) {
        if let Some(doc) = self.active.and_then(|id| self.documents.get(&id)) {
            self.tracker
                .refresh(doc.text(), doc.cursor(), doc.selection());
        } else {
            self.tracker.clear();
        }
    }
}
