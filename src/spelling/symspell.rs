//! Symmetric-deletion spelling correction against an in-memory index.

use std::collections::BTreeSet;
use std::sync::Arc;

use log::{debug, trace};
use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};

use crate::spelling::deletion::{DeletionIndex, deletion_neighborhood};
use crate::spelling::dictionary::WordDictionary;
use crate::spelling::suggest::{Suggestion, suggestions_by_frequency};

/// Configuration for [`SymSpell`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymSpellConfig {
    /// Maximum number of deletions applied to query and dictionary words.
    pub max_distance: usize,
    /// Maximum number of suggestions to return; 0 means unlimited.
    pub max_suggestions: usize,
}

impl Default for SymSpellConfig {
    fn default() -> Self {
        SymSpellConfig {
            max_distance: 2,
            max_suggestions: 0,
        }
    }
}

/// Candidate corrections for `query`, sorted and deduplicated.
///
/// A dictionary word is returned on its own. Otherwise the result is the
/// union of the words indexed under the query itself, the deletion variants
/// of the query (up to `max_distance` deletions) that are dictionary words,
/// and the words indexed under each variant.
///
/// Candidates are not checked against their real edit distance: the result
/// is only as good as `index`, which must have been built with a depth of at
/// least `max_distance`.
pub fn sym_suggest(
    query: &str,
    dictionary: &WordDictionary,
    index: &DeletionIndex,
    max_distance: usize,
) -> Vec<String> {
    if dictionary.contains(query) {
        return vec![query.to_string()];
    }

    let mut found: BTreeSet<String> = BTreeSet::new();
    if let Some(words) = index.get(query) {
        found.extend(words.iter().cloned());
    }

    for variant in deletion_neighborhood(query, max_distance) {
        if dictionary.contains(&variant) {
            found.insert(variant.clone());
        }
        if let Some(words) = index.get(&variant) {
            found.extend(words.iter().cloned());
        }
    }

    trace!("{} candidates for {query:?}", found.len());
    found.into_iter().collect()
}

/// A dictionary and the deletion index built from it, published together.
#[derive(Debug, Clone, Default)]
pub struct SymSpellSnapshot {
    dictionary: WordDictionary,
    index: DeletionIndex,
}

impl SymSpellSnapshot {
    fn build(dictionary: WordDictionary, max_distance: usize) -> Self {
        let index = DeletionIndex::build(dictionary.words(), max_distance);
        SymSpellSnapshot { dictionary, index }
    }

    pub fn dictionary(&self) -> &WordDictionary {
        &self.dictionary
    }

    pub fn index(&self) -> &DeletionIndex {
        &self.index
    }
}

/// A spelling corrector that can grow while it is being queried.
///
/// Queries work on an `Arc` snapshot of the dictionary and its index, so a
/// query never sees a dictionary without the matching index. Additions build
/// the next snapshot outside the read lock and then swap it in; concurrent
/// additions are serialised so none is lost.
#[derive(Debug)]
pub struct SymSpell {
    current: RwLock<Arc<SymSpellSnapshot>>,
    writer: Mutex<()>,
    config: SymSpellConfig,
}

impl SymSpell {
    /// Index `dictionary` with the default configuration.
    pub fn new(dictionary: WordDictionary) -> Self {
        Self::with_config(dictionary, SymSpellConfig::default())
    }

    pub fn with_config(dictionary: WordDictionary, config: SymSpellConfig) -> Self {
        SymSpell {
            current: RwLock::new(Arc::new(SymSpellSnapshot::build(
                dictionary,
                config.max_distance,
            ))),
            writer: Mutex::new(()),
            config,
        }
    }

    pub fn config(&self) -> &SymSpellConfig {
        &self.config
    }

    /// The dictionary and index as of now.
    pub fn snapshot(&self) -> Arc<SymSpellSnapshot> {
        self.current.read().clone()
    }

    /// Add words with frequency 1 (existing words keep theirs) and publish a
    /// rebuilt index.
    pub fn add_words<I, S>(&self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let _writer = self.writer.lock();

        let mut dictionary = self.snapshot().dictionary.clone();
        for word in words {
            let word = word.into();
            let frequency = dictionary.frequency(&word).max(1);
            dictionary.add_word(word, frequency);
        }

        let next = Arc::new(SymSpellSnapshot::build(dictionary, self.config.max_distance));
        debug!(
            "publishing symspell snapshot: {} words, {} variants",
            next.dictionary.len(),
            next.index.len()
        );
        *self.current.write() = next;
    }

    /// Unranked candidates, see [`sym_suggest`].
    pub fn candidates(&self, query: &str) -> Vec<String> {
        let snapshot = self.snapshot();
        sym_suggest(
            query,
            &snapshot.dictionary,
            &snapshot.index,
            self.config.max_distance,
        )
    }

    /// Ranked suggestions, capped at `max_suggestions`.
    pub fn suggest(&self, query: &str) -> Vec<Suggestion> {
        let snapshot = self.snapshot();
        let candidates = sym_suggest(
            query,
            &snapshot.dictionary,
            &snapshot.index,
            self.config.max_distance,
        );
        let mut ranked = suggestions_by_frequency(query, &candidates, &snapshot.dictionary);
        if self.config.max_suggestions > 0 {
            ranked.truncate(self.config.max_suggestions);
        }
        ranked
    }
}
