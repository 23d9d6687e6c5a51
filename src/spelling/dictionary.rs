//! Word dictionaries for spelling correction.
//!
//! Words are stored exactly as given: OCR correction of polytonic Greek or
//! historical orthography must not fold case or strip marks behind the
//! caller's back.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use ahash::AHashMap;

use crate::error::Result;

/// A set of correct words with optional frequencies.
#[derive(Debug, Clone, Default)]
pub struct WordDictionary {
    words: AHashMap<String, u32>,
    total_count: u64,
}

impl WordDictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary where every word has frequency 1.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut dictionary = WordDictionary::new();
        for word in words {
            dictionary.add_word(word.into(), 1);
        }
        dictionary
    }

    /// Add a word, replacing its frequency if already present.
    pub fn add_word(&mut self, word: String, frequency: u32) {
        let old = self.words.insert(word, frequency).unwrap_or(0);
        self.total_count = self.total_count - old as u64 + frequency as u64;
    }

    /// Increment the frequency of a word by 1.
    pub fn increment_word(&mut self, word: &str) {
        let current = self.frequency(word);
        self.add_word(word.to_string(), current + 1);
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// Frequency of `word`, 0 when absent.
    pub fn frequency(&self, word: &str) -> u32 {
        self.words.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Sum of all frequencies.
    pub fn total_frequency(&self) -> u64 {
        self.total_count
    }

    /// Iterate over the words in arbitrary order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.keys().map(String::as_str)
    }

    /// Load a dictionary with one word per line; blank lines are skipped and
    /// repeated words accumulate frequency.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut dictionary = WordDictionary::new();
        let reader = BufReader::new(File::open(path)?);

        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                dictionary.increment_word(word);
            }
        }

        Ok(dictionary)
    }

    /// Load a dictionary from `word frequency` lines. Lines whose frequency
    /// does not parse are skipped.
    pub fn load_from_frequency_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut dictionary = WordDictionary::new();
        let reader = BufReader::new(File::open(path)?);

        for line in reader.lines() {
            let line = line?;
            let mut parts = line.split_whitespace();
            if let (Some(word), Some(frequency)) = (parts.next(), parts.next())
                && let Ok(frequency) = frequency.parse::<u32>()
            {
                dictionary.add_word(word.to_string(), frequency);
            }
        }

        Ok(dictionary)
    }

    /// Write `word frequency` lines, most frequent first.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        let mut entries: Vec<(&String, &u32)> = self.words.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

        for (word, frequency) in entries {
            writeln!(writer, "{word} {frequency}")?;
        }
        writer.flush()?;

        Ok(())
    }
}
