//! Char filters applied to whole strings before classification or alignment.
//!
//! # Available Filters
//!
//! - [`unicode_normalize::UnicodeNormalizationCharFilter`] - Unicode normalization (NFC, NFD, etc.)
//! - [`diacritic_strip::DiacriticStripCharFilter`] - Greek tone mark and combining diacritic removal
//!
//! # Examples
//!
//! ```
//! use palimpsest::analysis::char_filter::{CharFilter, apply_filters};
//! use palimpsest::analysis::char_filter::diacritic_strip::DiacriticStripCharFilter;
//! use palimpsest::analysis::char_filter::unicode_normalize::{
//!     NormalizationForm, UnicodeNormalizationCharFilter,
//! };
//!
//! let filters: Vec<Box<dyn CharFilter>> = vec![
//!     Box::new(UnicodeNormalizationCharFilter::new(NormalizationForm::NFD)),
//!     Box::new(DiacriticStripCharFilter::new()),
//! ];
//! assert_eq!(apply_filters("\u{03AC}", &filters), "\u{03B1}");
//! ```

/// Trait for filters that transform text as a whole.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

/// Run `input` through every filter in order.
pub fn apply_filters(input: &str, filters: &[Box<dyn CharFilter>]) -> String {
    filters
        .iter()
        .fold(input.to_string(), |text, filter| filter.filter(&text))
}

pub mod diacritic_strip;
pub mod unicode_normalize;
