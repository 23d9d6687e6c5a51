//! Edit distance and sequence alignment.
//!
//! Everything in this module is generic over the unit type, so the same code
//! aligns characters of a line, words of a page or any other token sequence
//! whose units implement `Eq + Hash + Clone`.
//!
//! - [`cost`]: scalar costs and per-pair overrides
//! - [`distance`]: two-row edit distance
//! - [`matrix`]: full scoring and operation matrices
//! - [`align`]: global and semi-global operation reconstruction
//! - [`score`]: character and word accuracy
//!
//! # Example
//!
//! ```
//! use palimpsest::alignment::{EditCosts, align, distance, ops_to_string};
//!
//! let truth: Vec<char> = "sunday".chars().collect();
//! let ocr: Vec<char> = "saturday".chars().collect();
//! let costs = EditCosts::default();
//!
//! assert_eq!(distance(&truth, &ocr, &costs), 3.0);
//! assert_eq!(ops_to_string(&align(&truth, &ocr, &costs)), "miimsmmm");
//! ```

pub mod align;
pub mod cost;
pub mod distance;
pub mod matrix;
pub mod score;

pub use align::{
    EditOp, align, apply_edit_ops, backtrace, ops_to_string, parse_ops, semi_global_align,
};
pub use cost::{Cost, CostOverrides, EditCosts, Unit};
pub use distance::{char_distance, distance, similarity};
pub use matrix::{AlignmentMode, FullDistance, full_distance, full_distance_with_mode};
pub use score::{EditSummary, character_accuracy, word_accuracy};
