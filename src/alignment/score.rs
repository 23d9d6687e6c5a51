//! Accuracy scores for OCR output measured against a ground truth.

use serde::{Deserialize, Serialize};

use crate::alignment::align::{EditOp, align};
use crate::alignment::cost::{EditCosts, Unit};
use crate::analysis::tokenizer::tokenize_words;

/// Operation counts of one alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditSummary {
    /// Units equal in both sequences.
    pub matches: usize,
    /// Units replaced by a different one.
    pub substitutions: usize,
    /// Units present only in the second sequence (OCR output).
    pub insertions: usize,
    /// Units present only in the first sequence (ground truth).
    pub deletions: usize,
}

impl EditSummary {
    /// Count the operations of an alignment.
    pub fn from_ops(ops: &[EditOp]) -> Self {
        let mut summary = EditSummary::default();
        for op in ops {
            match op {
                EditOp::Match => summary.matches += 1,
                EditOp::Substitute => summary.substitutions += 1,
                EditOp::Insert => summary.insertions += 1,
                EditOp::Delete => summary.deletions += 1,
            }
        }
        summary
    }

    /// Number of non-matching operations.
    pub fn errors(&self) -> usize {
        self.substitutions + self.insertions + self.deletions
    }

    /// Accuracy relative to a reference of `truth_len` units, clamped to `[0, 1]`.
    ///
    /// An empty reference scores 1.0 only when nothing was inserted.
    pub fn accuracy(&self, truth_len: usize) -> f64 {
        if truth_len == 0 {
            return if self.errors() == 0 { 1.0 } else { 0.0 };
        }
        let correct = truth_len as f64 - self.errors() as f64;
        (correct / truth_len as f64).max(0.0)
    }
}

/// Align a unit sequence against its ground truth and summarise the result.
pub fn summarize<T: Unit>(truth: &[T], ocr: &[T], costs: &EditCosts<T>) -> EditSummary {
    EditSummary::from_ops(&align(truth, ocr, costs))
}

/// Character accuracy of `ocr` against `truth` under unit costs.
pub fn character_accuracy(truth: &str, ocr: &str) -> f64 {
    let truth: Vec<char> = truth.chars().collect();
    let ocr: Vec<char> = ocr.chars().collect();

    summarize(&truth, &ocr, &EditCosts::default()).accuracy(truth.len())
}

/// Word accuracy of `ocr` against `truth`, using Unicode word segmentation.
pub fn word_accuracy(truth: &str, ocr: &str) -> f64 {
    let truth = tokenize_words(truth);
    let ocr = tokenize_words(ocr);

    summarize(&truth, &ocr, &EditCosts::default()).accuracy(truth.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::align::parse_ops;

    #[test]
    fn test_summary_counts() {
        let summary = EditSummary::from_ops(&parse_ops("smmmsmd").unwrap());
        assert_eq!(summary.matches, 4);
        assert_eq!(summary.substitutions, 2);
        assert_eq!(summary.deletions, 1);
        assert_eq!(summary.insertions, 0);
        assert_eq!(summary.errors(), 3);
    }

    #[test]
    fn test_character_accuracy() {
        assert_eq!(character_accuracy("abcd", "abcd"), 1.0);
        assert_eq!(character_accuracy("abcd", "abxd"), 0.75);
        assert_eq!(character_accuracy("ab", "xxxxxxxx"), 0.0);
        assert_eq!(character_accuracy("", ""), 1.0);
        assert_eq!(character_accuracy("", "a"), 0.0);
    }

    #[test]
    fn test_word_accuracy() {
        assert_eq!(word_accuracy("the quick brown fox", "the quick brown fox"), 1.0);
        assert_eq!(word_accuracy("the quick brown fox", "the quack brown fox"), 0.75);
    }
}
