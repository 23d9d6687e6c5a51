use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use super::CharFilter;

/// Supported Unicode normalization forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NormalizationForm {
    NFC,
    #[default]
    NFD,
    NFKC,
    NFKD,
}

impl NormalizationForm {
    /// Normalize `input` into this form.
    pub fn apply(self, input: &str) -> String {
        match self {
            NormalizationForm::NFC => input.nfc().collect(),
            NormalizationForm::NFD => input.nfd().collect(),
            NormalizationForm::NFKC => input.nfkc().collect(),
            NormalizationForm::NFKD => input.nfkd().collect(),
        }
    }
}

/// A char filter that performs Unicode normalization.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeNormalizationCharFilter {
    form: NormalizationForm,
}

impl UnicodeNormalizationCharFilter {
    pub fn new(form: NormalizationForm) -> Self {
        Self { form }
    }

    pub fn form(&self) -> NormalizationForm {
        self.form
    }
}

impl CharFilter for UnicodeNormalizationCharFilter {
    fn filter(&self, input: &str) -> String {
        self.form.apply(input)
    }

    fn name(&self) -> &'static str {
        "unicode_normalization"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nfd_decomposes_greek() {
        let filter = UnicodeNormalizationCharFilter::new(NormalizationForm::NFD);
        // GREEK SMALL LETTER ALPHA WITH TONOS
        assert_eq!(filter.filter("\u{03AC}"), "\u{03B1}\u{0301}");
        // GREEK SMALL LETTER UPSILON WITH DIALYTIKA AND TONOS
        assert_eq!(filter.filter("\u{03B0}"), "\u{03C5}\u{0308}\u{0301}");
    }

    #[test]
    fn test_nfc_recomposes() {
        let filter = UnicodeNormalizationCharFilter::new(NormalizationForm::NFC);
        assert_eq!(filter.filter("\u{03B1}\u{0301}"), "\u{03AC}");
        assert_eq!(filter.filter("Am\u{0065}\u{0301}lie"), "Am\u{00e9}lie");
    }

    #[test]
    fn test_nfkc_normalization() {
        let filter = UnicodeNormalizationCharFilter::new(NormalizationForm::NFKC);
        // Fullwidth "Ａ" to halfwidth "A"
        assert_eq!(filter.filter("\u{ff21}"), "A");
        assert_eq!(filter.name(), "unicode_normalization");
    }

    #[test]
    fn test_default_form_is_nfd() {
        assert_eq!(UnicodeNormalizationCharFilter::default().form(), NormalizationForm::NFD);
    }
}
