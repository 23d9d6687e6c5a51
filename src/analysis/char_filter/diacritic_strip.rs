use super::CharFilter;
use crate::analysis::script::strip_diacritics;

/// A char filter that removes combining diacritics and Greek tone marks.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiacriticStripCharFilter;

impl DiacriticStripCharFilter {
    pub fn new() -> Self {
        DiacriticStripCharFilter
    }
}

impl CharFilter for DiacriticStripCharFilter {
    fn filter(&self, input: &str) -> String {
        strip_diacritics(input)
    }

    fn name(&self) -> &'static str {
        "diacritic_strip"
    }
}
