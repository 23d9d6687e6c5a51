//! # Palimpsest
//!
//! Text alignment and fuzzy dictionary lookup for OCR post-correction.
//!
//! ## Features
//!
//! - Edit distance over any token sequence (characters, words, glyph ids)
//! - Global and semi-global alignment with per-pair cost overrides
//! - Character and word accuracy scoring
//! - Unicode script identification and Greek diacritic handling
//! - Text sanitization (decoding, trimming, normalization)
//! - Symmetric-deletion spelling correction, in memory or over a
//!   memory-mapped sorted dictionary

pub mod alignment;
pub mod analysis;
pub mod error;
pub mod spelling;
pub mod storage;

pub mod prelude {
    pub use crate::alignment::{
        AlignmentMode, Cost, CostOverrides, EditCosts, EditOp, align, distance, full_distance,
        semi_global_align,
    };
    pub use crate::analysis::sanitize::{RawText, SanitizeConfig, sanitize};
    pub use crate::analysis::script::{identify, is_greek, islang, strip_diacritics};
    pub use crate::error::{PalimpsestError, Result};
    pub use crate::spelling::dictionary::WordDictionary;
    pub use crate::spelling::mapped::{MappedSuggestions, mapped_sym_suggest};
    pub use crate::spelling::symspell::{SymSpell, SymSpellConfig, SymSpellSnapshot, sym_suggest};
    pub use crate::storage::mmap_dictionary::{MappedDictionary, mmap_bin_search};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
