//! Core of a lightweight Pawn-script editor: an incremental symbol
//! prediction engine (tokenizer, shared symbol dictionary, word-boundary
//! tracking, fuzzy subsequence suggestions, a static declaration loader)
//! plus the session glue that keeps the dictionary consistent as documents
//! open, close and change.

pub mod config;
pub mod document;
pub mod indent;
pub mod logging;
pub mod predict;
pub mod session;
