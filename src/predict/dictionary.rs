//! Shared symbol dictionary backing the prediction engine.
//!
//! One instance is shared by every open document in a session. `count`
//! tracks live occurrences so an entry can be dropped when its last
//! occurrence disappears; `rank` is bumped on suggestion acceptance and
//! lowers a candidate's sort score. Counts are best-effort: file-load
//! tokenization and live-typing reconciliation can drift, and that drift is
//! part of the contract (see the session notes), not something to correct.

use rustc_hash::FxHashMap;

/// Names shorter than this never enter the dictionary.
pub const MIN_SYMBOL_LEN: usize = 3;

/// Per-symbol bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolEntry {
    /// Priority, bumped each time the user accepts this symbol. Subtracted
    /// from the match score, so higher ranks sort earlier.
    pub rank: i32,
    /// Live occurrences across all open documents. Only used to decide
    /// whether removing an occurrence erases the entry or decrements it.
    pub count: i32,
}

/// Symbol name -> (rank, count), case-sensitive storage.
#[derive(Debug, Default)]
pub struct SymbolDictionary {
    entries: FxHashMap<String, SymbolEntry>,
}

impl SymbolDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Startup-time insert used by the static declaration loader. Identical
    /// to [`add`](Self::add); the separate name keeps the seeding path
    /// explicit.
    pub fn seed(&mut self, name: &str) {
        self.add(name);
    }

    /// Records one occurrence of `name`. Names shorter than
    /// [`MIN_SYMBOL_LEN`] are ignored.
    pub fn add(&mut self, name: &str) {
        if name.chars().count() < MIN_SYMBOL_LEN {
            return;
        }
        self.entries
            .entry(name.to_owned())
            .and_modify(|e| e.count += 1)
            .or_insert(SymbolEntry { rank: 1, count: 1 });
    }

    /// Drops one occurrence of `name`, erasing the entry when its last
    /// occurrence goes away. A live entry's count never reaches zero.
    pub fn remove(&mut self, name: &str) {
        if name.chars().count() < MIN_SYMBOL_LEN {
            return;
        }
        if let Some(entry) = self.entries.get_mut(name) {
            if entry.count < 2 {
                self.entries.remove(name);
            } else {
                entry.count -= 1;
            }
        }
    }

    /// Rewards an accepted suggestion. Does not touch the count.
    pub fn bump(&mut self, name: &str) {
        if let Some(entry) = self.entries.get_mut(name) {
            entry.rank += 1;
        }
    }

    pub fn get(&self, name: &str) -> Option<SymbolEntry> {
        self.entries.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Linear scan over all entries. No index structure: the corpus is
    /// bounded by realistic source-file symbol counts (low thousands).
    pub fn iter(&self) -> impl Iterator<Item = (&str, SymbolEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), *entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::{QuickCheck, TestResult};

    #[test]
    fn short_names_are_never_stored() {
        let mut dict = SymbolDictionary::new();
        dict.add("ab");
        dict.add("x");
        dict.remove("ab");
        assert!(dict.is_empty());
    }

    #[test]
    fn add_increments_count_and_keeps_rank() {
        let mut dict = SymbolDictionary::new();
        dict.add("SetPlayerPos");
        dict.add("SetPlayerPos");
        assert_eq!(
            dict.get("SetPlayerPos"),
            Some(SymbolEntry { rank: 1, count: 2 })
        );
    }

    #[test]
    fn remove_erases_on_last_occurrence() {
        let mut dict = SymbolDictionary::new();
        dict.add("SetPlayerPos");
        dict.add("SetPlayerPos");
        dict.remove("SetPlayerPos");
        assert_eq!(dict.get("SetPlayerPos").map(|e| e.count), Some(1));
        dict.remove("SetPlayerPos");
        assert!(!dict.contains("SetPlayerPos"));
        // Removing an absent name is a no-op.
        dict.remove("SetPlayerPos");
        assert!(dict.is_empty());
    }

    #[test]
    fn bump_raises_rank_only() {
        let mut dict = SymbolDictionary::new();
        dict.add("OnPlayerConnect");
        dict.bump("OnPlayerConnect");
        dict.bump("OnPlayerConnect");
        assert_eq!(
            dict.get("OnPlayerConnect"),
            Some(SymbolEntry { rank: 3, count: 1 })
        );
        dict.bump("NotThere");
        assert!(!dict.contains("NotThere"));
    }

    #[test]
    fn seed_behaves_like_add() {
        let mut dict = SymbolDictionary::new();
        dict.seed("GetPlayerHealth");
        dict.add("GetPlayerHealth");
        assert_eq!(
            dict.get("GetPlayerHealth"),
            Some(SymbolEntry { rank: 1, count: 2 })
        );
    }

    #[test]
    fn balanced_add_remove_leaves_no_entry() {
        fn prop(name: String, times: u8) -> TestResult {
            let mut dict = SymbolDictionary::new();
            for _ in 0..times {
                dict.add(&name);
            }
            for _ in 0..times {
                dict.remove(&name);
            }
            TestResult::from_bool(!dict.contains(&name))
        }
        QuickCheck::new().quickcheck(prop as fn(String, u8) -> TestResult);
    }

    #[test]
    fn live_entries_never_drop_below_count_one() {
        fn prop(name: String, adds: u8, removes: u8) -> TestResult {
            let mut dict = SymbolDictionary::new();
            for _ in 0..adds {
                dict.add(&name);
            }
            for _ in 0..removes {
                dict.remove(&name);
            }
            TestResult::from_bool(dict.get(&name).is_none_or(|e| e.count >= 1))
        }
        QuickCheck::new().quickcheck(prop as fn(String, u8, u8) -> TestResult);
    }
}
