//! Script identification over Unicode ranges.
//!
//! Ranges are assumed not to overlap; a codepoint that falls into none of the
//! requested ranges is simply not counted.

use std::collections::HashMap;

use unicode_normalization::char::decompose_canonical;

use crate::analysis::script_range::{GREEK, ScriptRange, is_diacritic};
use crate::error::{PalimpsestError, Result};

/// Count how many codepoints of `text` fall into each range.
///
/// Every requested label is present in the result, with zero when no
/// codepoint matched.
///
/// # Examples
///
/// ```
/// use palimpsest::analysis::script::identify;
/// use palimpsest::analysis::script_range::{ASCII, GREEK_AND_COPTIC};
///
/// let counts = identify("Πλ\u{03AC}των plato", &[ASCII, GREEK_AND_COPTIC]);
/// assert_eq!(counts["Ascii"], 6);
/// assert_eq!(counts["Greek Coptic"], 6);
/// ```
pub fn identify(text: &str, blocks: &[ScriptRange]) -> HashMap<String, usize> {
    let mut counts: HashMap<String, usize> = blocks
        .iter()
        .map(|block| (block.label().to_string(), 0))
        .collect();

    for c in text.chars() {
        for block in blocks {
            if block.contains(c) {
                *counts.entry(block.label().to_string()).or_insert(0) += 1;
            }
        }
    }

    counts
}

/// Decide whether at least `threshold` of the codepoints of `text` belong to
/// the given ranges.
///
/// `threshold` must lie in `(0, 1]`. Empty text is never considered to be in
/// any language.
pub fn islang(text: &str, blocks: &[ScriptRange], threshold: f64) -> Result<bool> {
    if !(threshold > 0.0 && threshold <= 1.0) {
        return Err(PalimpsestError::validation(format!(
            "threshold must be > 0.0 and <= 1.0, got {threshold}"
        )));
    }

    let total = text.chars().count();
    if total == 0 {
        return Ok(false);
    }

    let in_blocks = text
        .chars()
        .filter(|&c| blocks.iter().any(|block| block.contains(c)))
        .count();

    Ok(in_blocks as f64 / total as f64 >= threshold)
}

/// Whether every codepoint of `text` is Greek (polytonic marks included).
pub fn is_greek(text: &str) -> bool {
    // The threshold is a valid constant.
    islang(text, &GREEK, 1.0).unwrap_or(false)
}

/// Keep only codepoints from the Greek ranges.
pub fn greek_filter(text: &str) -> String {
    text.chars()
        .filter(|&c| GREEK.iter().any(|block| block.contains(c)))
        .collect()
}

/// Remove every Greek tone mark and combining diacritic, leaving base letters.
///
/// Precomposed letters are canonically decomposed first, so the input does
/// not have to be in NFD already.
pub fn strip_diacritics(text: &str) -> String {
    let mut stripped = String::with_capacity(text.len());
    for c in text.chars() {
        if is_diacritic(c) {
            continue;
        }
        decompose_canonical(c, |d| {
            if !is_diacritic(d) {
                stripped.push(d);
            }
        });
    }
    stripped
}
