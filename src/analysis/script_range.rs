//! Named Unicode codepoint intervals used for script classification.

use std::fmt;

/// A labelled, inclusive interval of Unicode scalar values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScriptRange {
    label: &'static str,
    low: char,
    high: char,
}

impl ScriptRange {
    /// Create a range covering `low..=high`.
    pub const fn new(label: &'static str, low: char, high: char) -> Self {
        ScriptRange { label, low, high }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn low(&self) -> char {
        self.low
    }

    pub fn high(&self) -> char {
        self.high
    }

    /// Whether `c` lies inside the interval.
    pub fn contains(&self, c: char) -> bool {
        self.low <= c && c <= self.high
    }

    /// Every scalar value of the interval in ascending order.
    ///
    /// Surrogate codepoints are skipped.
    pub fn chars(&self) -> impl Iterator<Item = char> {
        self.low..=self.high
    }
}

impl fmt::Display for ScriptRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (U+{:04X}..U+{:04X})",
            self.label, self.low as u32, self.high as u32
        )
    }
}

pub const ASCII: ScriptRange = ScriptRange::new("Ascii", '\u{0000}', '\u{007F}');

pub const GREEK_AND_COPTIC: ScriptRange =
    ScriptRange::new("Greek Coptic", '\u{0370}', '\u{03FF}');

pub const EXTENDED_GREEK: ScriptRange =
    ScriptRange::new("Extended Greek", '\u{1F00}', '\u{1FFF}');

pub const COMBINING_DIACRITICAL_MARKS: ScriptRange =
    ScriptRange::new("Combining Diacritical", '\u{0300}', '\u{036F}');

/// The ranges that make up Greek text, polytonic marks included.
pub const GREEK: [ScriptRange; 3] = [GREEK_AND_COPTIC, EXTENDED_GREEK, COMBINING_DIACRITICAL_MARKS];

/// Spacing tone marks of the Greek and Coptic block.
pub const GREEK_AND_COPTIC_DIACRITICS: [char; 3] = ['\u{037A}', '\u{0384}', '\u{0385}'];

/// Spacing tone marks of the Extended Greek block.
pub const EXTENDED_GREEK_DIACRITICS: [char; 16] = [
    '\u{1FBD}', '\u{1FBE}', '\u{1FBF}', '\u{1FC0}', '\u{1FC1}', '\u{1FCD}', '\u{1FCE}', '\u{1FCF}',
    '\u{1FDD}', '\u{1FDE}', '\u{1FDF}', '\u{1FED}', '\u{1FEE}', '\u{1FEF}', '\u{1FFD}', '\u{1FFE}',
];

/// Whether `c` is a combining diacritical mark or a Greek spacing tone mark.
pub fn is_diacritic(c: char) -> bool {
    COMBINING_DIACRITICAL_MARKS.contains(c)
        || GREEK_AND_COPTIC_DIACRITICS.contains(&c)
        || EXTENDED_GREEK_DIACRITICS.contains(&c)
}

/// Enumerate every character of a range.
pub fn block_chars(range: &ScriptRange) -> Vec<char> {
    range.chars().collect()
}
