//! Ranking of spelling suggestions.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::alignment::distance::char_distance;
use crate::spelling::dictionary::WordDictionary;

/// A ranked spelling suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested word.
    pub word: String,
    /// Edit distance from the original word.
    pub distance: usize,
    /// Frequency of the suggested word in the dictionary.
    pub frequency: u32,
}

impl Suggestion {
    pub fn new(word: String, distance: usize, frequency: u32) -> Self {
        Suggestion {
            word,
            distance,
            frequency,
        }
    }
}

/// Tie-break order of suggestions: shorter strings first, then
/// lexicographic order.
pub fn string_order(a: &str, b: &str) -> Ordering {
    a.chars()
        .count()
        .cmp(&b.chars().count())
        .then_with(|| a.cmp(b))
}

/// Comparator form of [`string_order`]: `1` when `a` sorts before `b`,
/// `-1` when it sorts after, `0` when equal.
pub fn compare_strings(a: &str, b: &str) -> i32 {
    match string_order(a, b) {
        Ordering::Less => 1,
        Ordering::Greater => -1,
        Ordering::Equal => 0,
    }
}

/// Sort `candidates` by edit distance from `original`, breaking ties with
/// [`string_order`]. Duplicates are kept.
///
/// # Examples
///
/// ```
/// use palimpsest::spelling::suggest::suggestions;
///
/// let ranked = suggestions("aaaa", &["cccc", "aabb", "aaaa", "baaa"]);
/// assert_eq!(ranked, vec!["aaaa", "baaa", "aabb", "cccc"]);
/// ```
pub fn suggestions<S: AsRef<str>>(original: &str, candidates: &[S]) -> Vec<String> {
    let mut ranked: Vec<(usize, &str)> = candidates
        .iter()
        .map(|c| (char_distance(original, c.as_ref()), c.as_ref()))
        .collect();
    ranked.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| string_order(a.1, b.1)));
    ranked.into_iter().map(|(_, word)| word.to_string()).collect()
}

/// Sort `candidates` by edit distance, then by descending dictionary
/// frequency, then by [`string_order`].
pub fn suggestions_by_frequency<S: AsRef<str>>(
    original: &str,
    candidates: &[S],
    dictionary: &WordDictionary,
) -> Vec<Suggestion> {
    let mut ranked: Vec<Suggestion> = candidates
        .iter()
        .map(|c| {
            let word = c.as_ref();
            Suggestion::new(
                word.to_string(),
                char_distance(original, word),
                dictionary.frequency(word),
            )
        })
        .collect();

    ranked.sort_by(|a, b| {
        a.distance
            .cmp(&b.distance)
            .then_with(|| b.frequency.cmp(&a.frequency))
            .then_with(|| string_order(&a.word, &b.word))
    });
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_strings() {
        assert_eq!(compare_strings("a", "b"), 1);
        assert_eq!(compare_strings("b", "a"), -1);
        assert_eq!(compare_strings("a", "a"), 0);
        assert_eq!(compare_strings("a", "aaaaa"), 1);
        assert_eq!(compare_strings("aaaaa", "a"), -1);
        assert_eq!(compare_strings("zz", "aaa"), 1);
    }

    #[test]
    fn test_suggestions_order() {
        let candidates = [
            "ccccc", "ccccc", "aabb", "aacc", "aaaa", "baaa", "caaa", "cccc",
        ];
        assert_eq!(suggestions("aaaa", &candidates), vec![
            "aaaa", "baaa", "caaa", "aabb", "aacc", "cccc", "ccccc", "ccccc"
        ]);
    }

    #[test]
    fn test_suggestions_empty() {
        let none: [&str; 0] = [];
        assert!(suggestions("aaaa", &none).is_empty());
    }

    #[test]
    fn test_suggestions_by_frequency() {
        let mut dictionary = WordDictionary::new();
        dictionary.add_word("baaa".to_string(), 1);
        dictionary.add_word("caaa".to_string(), 10);
        dictionary.add_word("aabb".to_string(), 5);

        let ranked = suggestions_by_frequency("aaaa", &["aabb", "baaa", "caaa", "daaa"], &dictionary);
        let words: Vec<&str> = ranked.iter().map(|s| s.word.as_str()).collect();
        assert_eq!(words, vec!["caaa", "baaa", "daaa", "aabb"]);
        assert_eq!(ranked[0].frequency, 10);
        assert_eq!(ranked[3].distance, 2);
    }
}
