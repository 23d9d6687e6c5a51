//! Word segmentation for word-level alignment.
//!
//! Splits text on Unicode word boundaries (UAX #29) and keeps only the word
//! segments, so punctuation and whitespace never become alignment units.
//!
//! # Examples
//!
//! ```
//! use palimpsest::analysis::tokenizer::tokenize_words;
//!
//! assert_eq!(tokenize_words("Hello, world!"), vec!["Hello", "world"]);
//! ```

use unicode_segmentation::UnicodeSegmentation;

/// Split `text` into its words.
pub fn tokenize_words(text: &str) -> Vec<&str> {
    text.unicode_words().collect()
}

/// Split `text` into words together with their byte offsets.
pub fn tokenize_words_with_offsets(text: &str) -> Vec<(usize, &str)> {
    text.split_word_bound_indices()
        .filter(|(_, segment)| segment.chars().any(char::is_alphanumeric))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_words() {
        assert_eq!(tokenize_words("café résumé"), vec!["café", "résumé"]);
        assert_eq!(tokenize_words("ἄνδρα μοι ἔννεπε, μοῦσα"), vec![
            "ἄνδρα", "μοι", "ἔννεπε", "μοῦσα"
        ]);
        assert!(tokenize_words(" \n\t ").is_empty());
    }

    #[test]
    fn test_tokenize_words_with_offsets() {
        let words = tokenize_words_with_offsets("one, two");
        assert_eq!(words, vec![(0, "one"), (5, "two")]);
    }
}
