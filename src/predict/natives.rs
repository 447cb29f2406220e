//! Static declaration loader.
//!
//! Walks an include directory once at startup, parsing `native` declaration
//! lines out of every matching file. Parsed names seed the shared dictionary
//! and the full records feed a browsable function list. Lines whose name
//! starts with `#` are decorative section headings in that list and are not
//! seeded.

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::predict::dictionary::SymbolDictionary;
use crate::predict::tokenizer::{is_symbol_char, is_symbol_start};

const DECLARATION_KEYWORD: &str = "native";

/// One parsed declaration line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeclarationRecord {
    /// Bare symbol name, or the heading text including its leading `#`.
    pub display_name: String,
    /// Name plus parameter list, empty for headings.
    pub full_signature: String,
    pub is_heading: bool,
}

/// Recursively loads every file under `dir` with the given extension,
/// seeding `dict` with each declared name.
///
/// The extension may be written bare (`inc`) or as `*.inc` / `.inc`. Files
/// are filtered by extension only, not by a general glob; anything else in
/// `extension` is warned about and will match no files.
///
/// Unreadable entries and files are logged and skipped; a missing directory
/// yields an empty list. Records are returned in walk order.
pub fn load_declaration_files(
    dict: &mut SymbolDictionary,
    dir: &Path,
    extension: &str,
) -> Vec<DeclarationRecord> {
    let extension = extension.trim_start_matches("*.").trim_start_matches('.');
    if extension.contains(['*', '?', '[']) {
        warn!(
            "Declaration file filter {:?} is not expanded as a glob; only a bare extension is honored",
            extension
        );
    }
    let mut records = Vec::new();

    for entry in WalkDir::new(dir) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("Skipping unreadable directory entry: {}", err);
                continue;
            }
        };
        let path = entry.path();
        if !entry.file_type().is_file()
            || path.extension().is_none_or(|ext| ext != extension)
        {
            continue;
        }
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) => {
                warn!("Skipping unreadable file {}: {}", path.display(), err);
                continue;
            }
        };
        scan_declarations(dict, &contents, &mut records);
        debug!("Scanned declarations in {}", path.display());
    }

    records
}

fn scan_declarations(
    dict: &mut SymbolDictionary,
    contents: &str,
    records: &mut Vec<DeclarationRecord>,
) {
    for line in contents.lines() {
        if let Some(record) = parse_declaration_line(line) {
            if !record.is_heading {
                dict.seed(&record.display_name);
            }
            records.push(record);
        }
    }
}

/// Parses one `native Name(params)` line.
///
/// The name is taken after the last `:` so tagged returns (`Float:Name`)
/// resolve to the bare name. Returns `None` for anything malformed: a
/// missing parameter list, unbalanced parentheses or an invalid name.
fn parse_declaration_line(line: &str) -> Option<DeclarationRecord> {
    let trimmed = line.trim_start();
    let rest = trimmed.strip_prefix(DECLARATION_KEYWORD)?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let close = rest.rfind(')')?;
    let open = rest[..close].find('(')?;
    let name_part = rest[..open].trim();
    if name_part.is_empty() {
        debug!("Ignoring declaration with empty name: {}", trimmed);
        return None;
    }

    // Decorative section heading, e.g. `native #Vehicles();`.
    if name_part.starts_with('#') {
        return Some(DeclarationRecord {
            display_name: name_part.to_owned(),
            full_signature: String::new(),
            is_heading: true,
        });
    }

    let name = match name_part.rfind(':') {
        Some(colon) => &name_part[colon + 1..],
        None => name_part,
    };
    if !is_identifier(name) {
        debug!("Ignoring declaration with invalid name: {}", trimmed);
        return None;
    }

    let params = &rest[open..=close];
    Some(DeclarationRecord {
        display_name: name.to_owned(),
        full_signature: format!("{name}{params}"),
        is_heading: false,
    })
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_symbol_start(first) => chars.all(is_symbol_char),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_declaration_parses() {
        let record = parse_declaration_line("native SetPlayerPos(playerid, Float:x);");
        assert_eq!(
            record,
            Some(DeclarationRecord {
                display_name: "SetPlayerPos".to_owned(),
                full_signature: "SetPlayerPos(playerid, Float:x)".to_owned(),
                is_heading: false,
            })
        );
    }

    #[test]
    fn tagged_return_resolves_to_the_bare_name() {
        let record = parse_declaration_line("native Float:GetPlayerHealth(playerid);");
        let record = record.expect("tagged declaration should parse");
        assert_eq!(record.display_name, "GetPlayerHealth");
        assert_eq!(record.full_signature, "GetPlayerHealth(playerid)");
    }

    #[test]
    fn leading_whitespace_is_tolerated() {
        let record = parse_declaration_line("\tnative IsPlayerConnected(playerid);");
        assert_eq!(
            record.map(|r| r.display_name),
            Some("IsPlayerConnected".to_owned())
        );
    }

    #[test]
    fn heading_lines_become_heading_records() {
        let record = parse_declaration_line("native #Vehicles();");
        assert_eq!(
            record,
            Some(DeclarationRecord {
                display_name: "#Vehicles".to_owned(),
                full_signature: String::new(),
                is_heading: true,
            })
        );
    }

    #[test]
    fn malformed_lines_are_rejected() {
        assert_eq!(parse_declaration_line("native Broken("), None);
        assert_eq!(parse_declaration_line("native ();"), None);
        assert_eq!(parse_declaration_line("native 1Bad(x);"), None);
        assert_eq!(parse_declaration_line("nativeNotAKeyword(x);"), None);
        assert_eq!(parse_declaration_line("#define FOO 1"), None);
        assert_eq!(parse_declaration_line("stock Helper(x) { }"), None);
    }

    #[test]
    fn seeding_skips_headings() {
        let mut dict = SymbolDictionary::new();
        let mut records = Vec::new();
        let source = "native #Players();\nnative SetPlayerPos(playerid);\n";
        scan_declarations(&mut dict, source, &mut records);
        assert_eq!(records.len(), 2);
        assert_eq!(dict.len(), 1);
        assert!(dict.contains("SetPlayerPos"));
    }
}
