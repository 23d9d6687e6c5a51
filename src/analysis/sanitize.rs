//! Text sanitization: decode, trim and normalize.
//!
//! Core APIs of this crate accept only `&str`. Raw bytes enter through
//! [`RawText`] and are decoded here, once, with an explicit encoding.

use serde::{Deserialize, Serialize};

use crate::analysis::char_filter::CharFilter;
use crate::analysis::char_filter::unicode_normalize::{
    NormalizationForm, UnicodeNormalizationCharFilter,
};
use crate::error::{PalimpsestError, Result};

/// Text as it arrives from the surrounding pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawText<'a> {
    /// Already decoded text.
    Text(&'a str),
    /// Undecoded bytes.
    Bytes(&'a [u8]),
}

impl<'a> RawText<'a> {
    /// Return the decoded text, rejecting raw bytes (even empty ones).
    ///
    /// `argument` names the parameter in the error.
    pub fn require_text(self, argument: &str) -> Result<&'a str> {
        match self {
            RawText::Text(text) => Ok(text),
            RawText::Bytes(_) => Err(PalimpsestError::undecoded_text(argument)),
        }
    }
}

impl<'a> From<&'a str> for RawText<'a> {
    fn from(text: &'a str) -> Self {
        RawText::Text(text)
    }
}

impl<'a> From<&'a [u8]> for RawText<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        RawText::Bytes(bytes)
    }
}

/// Encodings accepted for raw bytes.
///
/// `Utf16` and `Utf32` honour a byte-order mark and fall back to little endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextEncoding {
    #[default]
    Utf8,
    Utf16,
    Utf16Le,
    Utf16Be,
    Utf32,
    Utf32Le,
    Utf32Be,
}

impl TextEncoding {
    /// Decode `bytes` into a string.
    pub fn decode(self, bytes: &[u8]) -> Result<String> {
        match self {
            TextEncoding::Utf8 => std::str::from_utf8(bytes)
                .map(str::to_string)
                .map_err(|e| PalimpsestError::encoding(format!("invalid UTF-8: {e}"))),
            TextEncoding::Utf16 => match bytes {
                [0xFF, 0xFE, rest @ ..] => decode_utf16(rest, false),
                [0xFE, 0xFF, rest @ ..] => decode_utf16(rest, true),
                _ => decode_utf16(bytes, false),
            },
            TextEncoding::Utf16Le => decode_utf16(bytes, false),
            TextEncoding::Utf16Be => decode_utf16(bytes, true),
            TextEncoding::Utf32 => match bytes {
                [0xFF, 0xFE, 0x00, 0x00, rest @ ..] => decode_utf32(rest, false),
                [0x00, 0x00, 0xFE, 0xFF, rest @ ..] => decode_utf32(rest, true),
                _ => decode_utf32(bytes, false),
            },
            TextEncoding::Utf32Le => decode_utf32(bytes, false),
            TextEncoding::Utf32Be => decode_utf32(bytes, true),
        }
    }
}

fn decode_utf16(bytes: &[u8], big_endian: bool) -> Result<String> {
    if bytes.len() % 2 != 0 {
        return Err(PalimpsestError::encoding(format!(
            "UTF-16 input has odd length {}",
            bytes.len()
        )));
    }

    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| {
            let pair = [pair[0], pair[1]];
            if big_endian {
                u16::from_be_bytes(pair)
            } else {
                u16::from_le_bytes(pair)
            }
        })
        .collect();

    String::from_utf16(&units).map_err(|e| PalimpsestError::encoding(format!("invalid UTF-16: {e}")))
}

fn decode_utf32(bytes: &[u8], big_endian: bool) -> Result<String> {
    if bytes.len() % 4 != 0 {
        return Err(PalimpsestError::encoding(format!(
            "UTF-32 input length {} is not a multiple of 4",
            bytes.len()
        )));
    }

    bytes
        .chunks_exact(4)
        .map(|quad| {
            let quad = [quad[0], quad[1], quad[2], quad[3]];
            let value = if big_endian {
                u32::from_be_bytes(quad)
            } else {
                u32::from_le_bytes(quad)
            };
            char::from_u32(value).ok_or_else(|| {
                PalimpsestError::encoding(format!("invalid UTF-32 scalar value {value:#X}"))
            })
        })
        .collect()
}

/// Configuration for [`sanitize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SanitizeConfig {
    /// Encoding used when the input is raw bytes.
    pub encoding: TextEncoding,
    /// Normalization form applied after trimming.
    pub normalization: NormalizationForm,
}

impl SanitizeConfig {
    pub fn new(encoding: TextEncoding, normalization: NormalizationForm) -> Self {
        SanitizeConfig {
            encoding,
            normalization,
        }
    }
}

/// Decode (if needed), trim leading and trailing whitespace, then normalize.
///
/// Interior whitespace, newlines included, is preserved.
///
/// # Examples
///
/// ```
/// use palimpsest::analysis::sanitize::{RawText, SanitizeConfig, sanitize};
///
/// let clean = sanitize(RawText::Text("\n\t abcde \n\t fghij \n\t"), &SanitizeConfig::default()).unwrap();
/// assert_eq!(clean, "abcde \n\t fghij");
/// ```
pub fn sanitize(input: RawText<'_>, config: &SanitizeConfig) -> Result<String> {
    let decoded;
    let text = match input {
        RawText::Text(text) => text,
        RawText::Bytes(bytes) => {
            decoded = config.encoding.decode(bytes)?;
            decoded.as_str()
        }
    };

    let filter = UnicodeNormalizationCharFilter::new(config.normalization);
    Ok(filter.filter(text.trim()))
}

/// Sanitize already decoded text with the default configuration (NFD).
pub fn sanitize_str(text: &str) -> String {
    UnicodeNormalizationCharFilter::default().filter(text.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_outer_whitespace_only() {
        let clean = sanitize(
            RawText::Text("\n\t abcde \n\t fghij \n\t"),
            &SanitizeConfig::default(),
        )
        .unwrap();
        assert_eq!(clean, "abcde \n\t fghij");
    }

    #[test]
    fn test_nfd_is_default() {
        assert_eq!(sanitize_str("\u{03AC}"), "\u{03B1}\u{0301}");
        assert_eq!(sanitize_str(" \u{03B0} "), "\u{03C5}\u{0308}\u{0301}");
    }

    #[test]
    fn test_nfc_recomposes() {
        let config = SanitizeConfig::new(TextEncoding::Utf8, NormalizationForm::NFC);
        let clean = sanitize(RawText::Text("\u{03B1}\u{0301}"), &config).unwrap();
        assert_eq!(clean, "\u{03AC}");
    }

    #[test]
    fn test_decodes_bytes() {
        let config = SanitizeConfig::default();
        let clean = sanitize(RawText::Bytes("  ab\u{03AC} ".as_bytes()), &config).unwrap();
        assert_eq!(clean, "ab\u{03B1}\u{0301}");

        let utf16: Vec<u8> = [0xFF, 0xFE]
            .into_iter()
            .chain("hi".encode_utf16().flat_map(u16::to_le_bytes))
            .collect();
        let config = SanitizeConfig::new(TextEncoding::Utf16, NormalizationForm::NFC);
        assert_eq!(sanitize(RawText::Bytes(&utf16), &config).unwrap(), "hi");

        let utf16_be: Vec<u8> = "hi".encode_utf16().flat_map(u16::to_be_bytes).collect();
        assert_eq!(TextEncoding::Utf16Be.decode(&utf16_be).unwrap(), "hi");

        let utf32: Vec<u8> = "Πλ".chars().flat_map(|c| (c as u32).to_be_bytes()).collect();
        assert_eq!(TextEncoding::Utf32Be.decode(&utf32).unwrap(), "Πλ");
    }

    #[test]
    fn test_invalid_bytes() {
        let err = TextEncoding::Utf8.decode(&[0xFF, 0xFE, 0xFD]).unwrap_err();
        assert!(matches!(err, PalimpsestError::Encoding(_)));
        assert!(TextEncoding::Utf16Le.decode(&[0x61]).is_err());
        assert!(TextEncoding::Utf32Le.decode(&[0x00, 0xD8, 0x00, 0x00]).is_err());
    }

    #[test]
    fn test_require_text() {
        assert_eq!(RawText::Text("abc").require_text("query").unwrap(), "abc");

        let err = RawText::Bytes(b"").require_text("query").unwrap_err();
        assert!(matches!(err, PalimpsestError::UndecodedText { argument } if argument == "query"));
    }

    #[test]
    fn test_config_serde() {
        let config = SanitizeConfig::new(TextEncoding::Utf16Be, NormalizationForm::NFKC);
        let json = serde_json::to_string(&config).unwrap();
        let back: SanitizeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
