//! Fuzzy subsequence matching and ranking over the symbol dictionary.
//!
//! The typed prefix matches a candidate when its characters appear in the
//! candidate, in order, case-insensitively. Among matches the compactness of
//! the first greedy alignment (the index of the last matched character)
//! competes with the candidate's rank and count: lower scores surface first.

use crate::predict::dictionary::SymbolDictionary;

/// Typed prefixes shorter than this produce no suggestions.
pub const MIN_PREFIX_LEN: usize = 3;

/// One ranked completion candidate, borrowing its name from the dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion<'d> {
    pub name: &'d str,
    pub score: i64,
}

/// Greedy left-to-right alignment of `typed` against `candidate`.
///
/// Each candidate character is compared against the next unmatched typed
/// character, ignoring ASCII case. Returns the candidate index of the final
/// match when every typed character was consumed.
fn subsequence_match(candidate: &str, typed: &[char]) -> Option<usize> {
    let mut next = 0;
    let mut last = 0;
    for (j, c) in candidate.chars().enumerate() {
        if c.eq_ignore_ascii_case(&typed[next]) {
            last = j;
            next += 1;
            if next == typed.len() {
                return Some(last);
            }
        }
    }
    None
}

/// Ranks every dictionary symbol matching `typed`.
///
/// Score is `j_final - rank - count`: a tighter alignment, a higher rank or
/// more live occurrences all pull a candidate toward the front. Ties sort
/// alphabetically so the ordering is deterministic.
pub fn suggestions<'d>(dict: &'d SymbolDictionary, typed: &str) -> Vec<Suggestion<'d>> {
    let typed: Vec<char> = typed.chars().collect();
    if typed.len() < MIN_PREFIX_LEN {
        return Vec::new();
    }

    let mut matches: Vec<Suggestion<'d>> = dict
        .iter()
        .filter(|(name, _)| name.chars().count() >= typed.len())
        .filter_map(|(name, entry)| {
            subsequence_match(name, &typed).map(|j_final| Suggestion {
                name,
                score: j_final as i64 - i64::from(entry.rank) - i64::from(entry.count),
            })
        })
        .collect();

    matches.sort_by(|a, b| a.score.cmp(&b.score).then_with(|| a.name.cmp(b.name)));
    matches
}
