//! Parsers turning one dictionary line into a `(key, value)` pair.

use crate::error::{PalimpsestError, Result};

/// Splits a dictionary line into the key it is sorted by and its value.
///
/// Lines are handed over without their terminating newline.
pub trait EntryParser: Send + Sync {
    /// Parse one line.
    fn parse<'a>(&self, line: &'a str) -> Result<(&'a str, &'a str)>;

    /// Get the name of this parser.
    fn name(&self) -> &'static str;
}

/// Parser for symmetric-deletion dictionary lines: `key<TAB>value`.
///
/// The line must contain exactly one tab. The value is trimmed; spaces inside
/// it are kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct DelDictEntryParser;

impl EntryParser for DelDictEntryParser {
    fn parse<'a>(&self, line: &'a str) -> Result<(&'a str, &'a str)> {
        key_for_del_dict_entry(line)
    }

    fn name(&self) -> &'static str {
        "del_dict_entry"
    }
}

/// Parser for one-word-per-line dictionaries; key and value are the word.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleWordParser;

impl EntryParser for SingleWordParser {
    fn parse<'a>(&self, line: &'a str) -> Result<(&'a str, &'a str)> {
        Ok(key_for_single_word(line))
    }

    fn name(&self) -> &'static str {
        "single_word"
    }
}

/// Parse a `key<TAB>value` line.
pub fn key_for_del_dict_entry(line: &str) -> Result<(&str, &str)> {
    let mut parts = line.split('\t');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(key), Some(value), None) => Ok((key, value.trim())),
        _ => Err(PalimpsestError::parse(format!(
            "expected exactly one tab in dictionary line {line:?}"
        ))),
    }
}

/// Parse a bare-word line.
pub fn key_for_single_word(line: &str) -> (&str, &str) {
    let word = line.trim();
    (word, word)
}

/// Split a deletion-dictionary value into its words.
pub fn parse_del_dict_value(value: &str) -> Vec<String> {
    value
        .split(' ')
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}
