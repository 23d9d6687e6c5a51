//! Deletion variants and the symmetric-deletion index.
//!
//! A word and a misspelling of it that are within `k` edits share at least
//! one string obtained by deleting at most `k` characters from each. The
//! index maps every such variant of every dictionary word back to the words
//! that produced it.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use ahash::AHashMap;
use log::debug;
use parking_lot::RwLock;

use crate::error::{PalimpsestError, Result};

/// One deletion step: every distinct string formed by removing one
/// character from any string of `words`.
fn delete_one(words: &BTreeSet<String>) -> BTreeSet<String> {
    let mut next = BTreeSet::new();
    for word in words {
        for (index, c) in word.char_indices() {
            let mut variant = String::with_capacity(word.len() - c.len_utf8());
            variant.push_str(&word[..index]);
            variant.push_str(&word[index + c.len_utf8()..]);
            next.insert(variant);
        }
    }
    next
}

/// The distinct strings formed by deleting exactly `k` characters from
/// `word`, in ascending order.
///
/// Returns `[word]` for `k == 0` and nothing when `k` exceeds the length.
///
/// # Examples
///
/// ```
/// use palimpsest::spelling::deletion::strings_by_deletion;
///
/// assert_eq!(strings_by_deletion("ape", 2), vec!["a", "e", "p"]);
/// assert!(strings_by_deletion("aaa", 10).is_empty());
/// ```
pub fn strings_by_deletion(word: &str, k: usize) -> Vec<String> {
    if k > word.chars().count() {
        return Vec::new();
    }

    let mut level = BTreeSet::from([word.to_string()]);
    for _ in 0..k {
        level = delete_one(&level);
    }
    level.into_iter().collect()
}

/// The distinct strings formed by deleting between 1 and `max_depth`
/// characters from `word`, in ascending order.
pub fn deletion_neighborhood(word: &str, max_depth: usize) -> Vec<String> {
    let mut neighborhood = BTreeSet::new();
    let mut level = BTreeSet::from([word.to_string()]);

    for _ in 0..max_depth {
        level = delete_one(&level);
        if level.is_empty() {
            break;
        }
        neighborhood.extend(level.iter().cloned());
    }

    neighborhood.into_iter().collect()
}

/// Map from deletion variant to the dictionary words it was derived from.
///
/// Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct DeletionIndex {
    entries: AHashMap<String, Vec<String>>,
    max_depth: usize,
}

impl DeletionIndex {
    /// Build the index over every word at deletion depths `1..=max_depth`.
    pub fn build<I, S>(words: I, max_depth: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: AHashMap<String, Vec<String>> = AHashMap::new();
        let mut word_count = 0;

        for word in words {
            let word = word.as_ref();
            word_count += 1;
            for variant in deletion_neighborhood(word, max_depth) {
                let origins = entries.entry(variant).or_default();
                if !origins.iter().any(|origin| origin == word) {
                    origins.push(word.to_string());
                }
            }
        }

        for origins in entries.values_mut() {
            origins.sort();
        }

        debug!(
            "built deletion index: {word_count} words, {} variants, depth {max_depth}",
            entries.len()
        );
        DeletionIndex { entries, max_depth }
    }

    /// Words that produce `variant`, in ascending order.
    pub fn get(&self, variant: &str) -> Option<&[String]> {
        self.entries.get(variant).map(Vec::as_slice)
    }

    /// Number of distinct variants.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deletion depth the index was built with.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Write the index as `variant<TAB>word1 word2 ...` lines sorted by
    /// variant bytes, the format read by the memory-mapped dictionary.
    ///
    /// The empty variant cannot be represented as a key and is skipped.
    /// Keys containing a tab or line break, and words that also contain a
    /// space, would not read back and fail with a validation error before
    /// the file is created.
    pub fn write_sorted<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut lines: Vec<(&String, &Vec<String>)> = self
            .entries
            .iter()
            .filter(|(key, _)| !key.is_empty())
            .collect();
        lines.sort_by(|a, b| a.0.cmp(b.0));

        for (key, origins) in &lines {
            if key.contains(['\t', '\n', '\r']) {
                return Err(PalimpsestError::validation(format!(
                    "deletion variant {key:?} cannot be written as a dictionary key"
                )));
            }
            if let Some(word) = origins
                .iter()
                .find(|word| word.contains(['\t', '\n', '\r', ' ']))
            {
                return Err(PalimpsestError::validation(format!(
                    "word {word:?} cannot be written to a deletion dictionary"
                )));
            }
        }

        let mut writer = BufWriter::new(File::create(path.as_ref())?);
        for (key, origins) in lines {
            writeln!(writer, "{key}\t{}", origins.join(" "))?;
        }
        writer.flush()?;

        debug!("wrote deletion index to {}", path.as_ref().display());
        Ok(())
    }
}

/// A deletion index shared between readers and an occasional rebuilder.
///
/// Readers take an `Arc` snapshot and never see a half-built index; a rebuild
/// happens outside the lock and only the pointer swap is serialised.
#[derive(Debug, Default)]
pub struct SharedDeletionIndex {
    current: RwLock<Arc<DeletionIndex>>,
}

impl SharedDeletionIndex {
    pub fn new(index: DeletionIndex) -> Self {
        SharedDeletionIndex {
            current: RwLock::new(Arc::new(index)),
        }
    }

    /// The index as of now.
    pub fn snapshot(&self) -> Arc<DeletionIndex> {
        self.current.read().clone()
    }

    /// Build a fresh index and publish it, returning the previous one.
    pub fn rebuild<I, S>(&self, words: I, max_depth: usize) -> Arc<DeletionIndex>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let fresh = Arc::new(DeletionIndex::build(words, max_depth));
        debug!("publishing rebuilt deletion index ({} variants)", fresh.len());
        std::mem::replace(&mut *self.current.write(), fresh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strings_by_deletion() {
        assert_eq!(strings_by_deletion("abcde", 1), vec![
            "abcd", "abce", "abde", "acde", "bcde"
        ]);
        assert_eq!(strings_by_deletion("ape", 2), vec!["a", "e", "p"]);
        assert_eq!(strings_by_deletion("aaa", 1), vec!["aa"]);
        assert_eq!(strings_by_deletion("abc", 0), vec!["abc"]);
        assert_eq!(strings_by_deletion("abc", 3), vec![""]);
        assert!(strings_by_deletion("aaa", 10).is_empty());
        assert!(strings_by_deletion("", 1).is_empty());
    }

    #[test]
    fn test_strings_by_deletion_multibyte() {
        assert_eq!(strings_by_deletion("λ\u{03CC}γ", 1), vec![
            "λγ",
            "λ\u{03CC}",
            "\u{03CC}γ"
        ]);
    }

    #[test]
    fn test_deletion_neighborhood() {
        assert_eq!(deletion_neighborhood("abc", 2), vec![
            "a", "ab", "ac", "b", "bc", "c"
        ]);
        assert_eq!(deletion_neighborhood("ab", 5), vec!["", "a", "b"]);
        assert!(deletion_neighborhood("ab", 0).is_empty());
    }

    #[test]
    fn test_build_index() {
        let index = DeletionIndex::build(["cart", "card"], 1);
        assert_eq!(index.max_depth(), 1);
        assert_eq!(index.get("car").unwrap(), &["card", "cart"]);
        assert_eq!(index.get("art").unwrap(), &["cart"]);
        assert!(index.get("cart").is_none());
    }

    #[test]
    fn test_write_sorted() {
        let index = DeletionIndex::build(["ab", "b"], 1);
        let file = tempfile::NamedTempFile::new().unwrap();
        index.write_sorted(file.path()).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(content, "a\tab\nb\tab\n");
    }

    #[test]
    fn test_write_sorted_rejects_unwritable_words() {
        let dir = tempfile::tempdir().unwrap();

        for words in [vec!["new york"], vec!["ab\nzz", "b"], vec!["a\tb"], vec!["ab\r"]] {
            let path = dir.path().join("deletes.txt");
            let index = DeletionIndex::build(words.iter().copied(), 1);
            let result = index.write_sorted(&path);
            assert!(
                matches!(result, Err(PalimpsestError::Validation(_))),
                "{words:?} should be rejected"
            );
            assert!(!path.exists());
        }
    }

    #[test]
    fn test_shared_index_rebuild() {
        let shared = SharedDeletionIndex::new(DeletionIndex::build(["one"], 1));
        let before = shared.snapshot();
        assert!(before.get("on").is_some());

        let previous = shared.rebuild(["two"], 1);
        assert!(Arc::ptr_eq(&previous, &before));
        assert!(shared.snapshot().get("tw").is_some());
        assert!(before.get("tw").is_none());
    }
}
