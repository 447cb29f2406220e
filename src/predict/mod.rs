//! The incremental symbol-prediction engine.
//!
//! Architecture, leaves first:
//! - [`tokenizer`]: streams a text blob, emitting complete identifier tokens
//!   outside comments, literals and preprocessor lines.
//! - [`dictionary`]: symbol name -> (rank, count) pool shared by all open
//!   documents in a session.
//! - [`word`]: bounds of the identifier currently being typed.
//! - [`suggest`]: fuzzy subsequence matching and ranking over the dictionary.
//! - [`natives`]: one-shot declaration-file scan that seeds the dictionary
//!   at startup.

pub mod dictionary;
pub mod natives;
pub mod suggest;
pub mod tokenizer;
pub mod word;

pub use dictionary::{MIN_SYMBOL_LEN, SymbolDictionary, SymbolEntry};
pub use natives::DeclarationRecord;
pub use suggest::{MIN_PREFIX_LEN, Suggestion, suggestions};
pub use word::{WordSpan, WordTracker};
