//! Text analysis: script classification, sanitization and segmentation.
//!
//! Text reaching the alignment and spelling modules is expected to have gone
//! through [`sanitize`] first, so that composed and decomposed spellings of the
//! same letter compare equal.

pub mod char_filter;
pub mod sanitize;
pub mod script;
pub mod script_range;
pub mod tokenizer;
