//! Lexical scanner for Pawn source text.
//!
//! Streams through a block of text, classifying every character into an
//! exclusive lexical state, and emits each complete identifier token exactly
//! once when its run closes. Identifiers inside line comments, block
//! comments, string literals, character literals and preprocessor directives
//! are never emitted.

/// First character of an identifier: a letter, `_` or `@` (never a digit).
pub fn is_symbol_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_' || ch == '@'
}

/// Continuation character of an identifier.
pub fn is_symbol_char(ch: char) -> bool {
    is_symbol_start(ch) || ch.is_ascii_digit()
}

/// Exclusive lexical states of the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Unknown,
    Symbol,
    Number,
    LineComment,
    BlockComment,
    CharLiteral,
    StringLiteral,
    Preprocessor,
    /// A `\` was seen inside a preprocessor line; a newline arriving next
    /// continues the directive instead of ending it.
    PreprocessorCont,
}

/// Calls `sink` once for every complete identifier token in `text`.
///
/// A marker that starts an excluded region (`//`, `/*`, `#`, `"`, `'`)
/// force-closes any pending symbol first, so no symbol ever spans a state
/// boundary. End of input while accumulating still emits the pending token.
/// Number runs are tracked only so their trailing characters are not taken
/// for symbols; they never produce a token themselves.
pub fn scan_symbols<F: FnMut(&str)>(text: &str, mut sink: F) {
    let mut state = State::Unknown;
    let mut pending = String::new();
    let mut escaped = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        state = match state {
            State::Unknown | State::Symbol | State::Number => {
                if ch == '/' && matches!(chars.peek(), Some('/')) {
                    close_token(state, &mut pending, &mut sink);
                    chars.next();
                    State::LineComment
                } else if ch == '/' && matches!(chars.peek(), Some('*')) {
                    close_token(state, &mut pending, &mut sink);
                    chars.next();
                    State::BlockComment
                } else if ch == '#' {
                    close_token(state, &mut pending, &mut sink);
                    State::Preprocessor
                } else if ch == '"' {
                    close_token(state, &mut pending, &mut sink);
                    escaped = false;
                    State::StringLiteral
                } else if ch == '\'' {
                    close_token(state, &mut pending, &mut sink);
                    escaped = false;
                    State::CharLiteral
                } else {
                    match state {
                        State::Symbol if is_symbol_char(ch) => {
                            pending.push(ch);
                            State::Symbol
                        }
                        // From Unknown or a number run, an identifier-first
                        // character begins a fresh symbol.
                        _ if is_symbol_start(ch) => {
                            close_token(state, &mut pending, &mut sink);
                            pending.push(ch);
                            State::Symbol
                        }
                        State::Number if ch.is_ascii_digit() => State::Number,
                        State::Unknown if ch.is_ascii_digit() => State::Number,
                        _ => {
                            close_token(state, &mut pending, &mut sink);
                            State::Unknown
                        }
                    }
                }
            }
            State::LineComment => {
                if ch == '\n' {
                    State::Unknown
                } else {
                    State::LineComment
                }
            }
            State::BlockComment => {
                if ch == '*' && matches!(chars.peek(), Some('/')) {
                    chars.next();
                    State::Unknown
                } else {
                    State::BlockComment
                }
            }
            State::StringLiteral => {
                if escaped {
                    escaped = false;
                    State::StringLiteral
                } else if ch == '\\' {
                    escaped = true;
                    State::StringLiteral
                } else if ch == '"' {
                    State::Unknown
                } else {
                    State::StringLiteral
                }
            }
            State::CharLiteral => {
                if escaped {
                    escaped = false;
                    State::CharLiteral
                } else if ch == '\\' {
                    escaped = true;
                    State::CharLiteral
                } else if ch == '\'' {
                    State::Unknown
                } else {
                    State::CharLiteral
                }
            }
            State::Preprocessor => match ch {
                '\n' => State::Unknown,
                '\\' => State::PreprocessorCont,
                _ => State::Preprocessor,
            },
            State::PreprocessorCont => match ch {
                // The continuation consumed this line break; the directive
                // keeps going on the next line. A `\r` is transparent so
                // CRLF endings continue too.
                '\n' => State::Preprocessor,
                '\\' | '\r' => State::PreprocessorCont,
                _ => State::Preprocessor,
            },
        };
    }

    close_token(state, &mut pending, &mut sink);
}

fn close_token<F: FnMut(&str)>(state: State, pending: &mut String, sink: &mut F) {
    if state == State::Symbol && !pending.is_empty() {
        sink(pending.as_str());
    }
    pending.clear();
}

/// Convenience wrapper collecting emitted tokens in order.
pub fn collect_symbols(text: &str) -> Vec<String> {
    let mut symbols = Vec::new();
    scan_symbols(text, |s| symbols.push(s.to_owned()));
    symbols
}
