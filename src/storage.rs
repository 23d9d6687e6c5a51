//! On-disk dictionaries accessed through read-only memory maps.
//!
//! Dictionaries too large to load are kept as sorted text files and searched
//! in place. A [`mmap_dictionary::MappedDictionary`] owns one mapping; keep
//! it alive for a batch of lookups, or use
//! [`mmap_dictionary::mmap_bin_search`] for a single one.
//!
//! # Example
//!
//! ```
//! use std::io::Write;
//!
//! use palimpsest::storage::entry_parser::DelDictEntryParser;
//! use palimpsest::storage::mmap_dictionary::MappedDictionary;
//!
//! # fn main() -> palimpsest::error::Result<()> {
//! let mut file = tempfile::NamedTempFile::new()?;
//! writeln!(file, "akey\taval")?;
//! writeln!(file, "bkey\tbval1 bval2")?;
//! file.flush()?;
//!
//! let dictionary = MappedDictionary::open(file.path())?;
//! assert_eq!(dictionary.lookup("bkey", &DelDictEntryParser)?, Some("bval1 bval2"));
//! assert_eq!(dictionary.lookup("ckey", &DelDictEntryParser)?, None);
//! # Ok(())
//! # }
//! ```

pub mod entry_parser;
pub mod mmap_dictionary;
