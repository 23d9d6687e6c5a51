//! Categorised suggestions resolved through an on-disk deletion dictionary.
//!
//! Unlike [`crate::spelling::symspell::sym_suggest`] this works at exactly one
//! deletion depth and reads the deletion index from a sorted file written by
//! [`crate::spelling::deletion::DeletionIndex::write_sorted`], so the index
//! never has to fit in memory.

use std::collections::BTreeSet;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::alignment::distance::char_distance;
use crate::error::Result;
use crate::spelling::deletion::strings_by_deletion;
use crate::spelling::dictionary::WordDictionary;
use crate::storage::entry_parser::{DelDictEntryParser, parse_del_dict_value};
use crate::storage::mmap_dictionary::MappedDictionary;

/// Suggestions for one query, grouped by how they relate to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappedSuggestions {
    /// The query itself, when it is a dictionary word.
    pub exact: BTreeSet<String>,
    /// Words reachable by adding characters to the query.
    pub insertions: BTreeSet<String>,
    /// Words reachable by deleting characters from the query.
    pub deletions: BTreeSet<String>,
    /// Words sharing a deletion variant with the query at the same distance.
    pub substitutions: BTreeSet<String>,
    /// Words sharing a deletion variant with the query but further away.
    pub insertions_and_deletions: BTreeSet<String>,
}

impl MappedSuggestions {
    /// Whether no category holds a word.
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty()
            && self.insertions.is_empty()
            && self.deletions.is_empty()
            && self.substitutions.is_empty()
            && self.insertions_and_deletions.is_empty()
    }

    /// Total number of words over all categories.
    pub fn len(&self) -> usize {
        self.exact.len()
            + self.insertions.len()
            + self.deletions.len()
            + self.substitutions.len()
            + self.insertions_and_deletions.len()
    }

    /// All suggested words, deduplicated and sorted.
    pub fn all(&self) -> BTreeSet<String> {
        self.exact
            .iter()
            .chain(&self.insertions)
            .chain(&self.deletions)
            .chain(&self.substitutions)
            .chain(&self.insertions_and_deletions)
            .cloned()
            .collect()
    }
}

/// Classify suggestions for `query` using the deletion dictionary at `path`.
///
/// The dictionary file stays mapped for the whole call.
pub fn mapped_sym_suggest<P: AsRef<Path>>(
    query: &str,
    path: P,
    dictionary: &WordDictionary,
    depth: usize,
) -> Result<MappedSuggestions> {
    let mapped = MappedDictionary::open(path)?;
    let parser = DelDictEntryParser;
    let mut result = MappedSuggestions::default();

    if dictionary.contains(query) {
        result.exact.insert(query.to_string());
    }

    if let Some(value) = mapped.lookup(query, &parser)? {
        result.insertions.extend(parse_del_dict_value(value));
    }

    for variant in strings_by_deletion(query, depth) {
        if dictionary.contains(&variant) {
            result.deletions.insert(variant.clone());
        }

        let Some(value) = mapped.lookup(&variant, &parser)? else {
            continue;
        };
        for word in parse_del_dict_value(value) {
            let distance = char_distance(&word, query);
            if distance == depth {
                result.substitutions.insert(word);
            } else if distance > depth {
                result.insertions_and_deletions.insert(word);
            }
        }
    }

    debug!(
        "mapped suggestions for {query:?} at depth {depth}: {} words",
        result.len()
    );
    Ok(result)
}
