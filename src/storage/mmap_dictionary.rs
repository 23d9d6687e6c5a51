//! Read-only, memory-mapped sorted dictionary with binary-search lookup.
//!
//! The file is a sequence of `\n`-terminated UTF-8 lines sorted ascending by
//! key in byte order. Nothing checks the sort order; lookups on an unsorted
//! file return arbitrary misses.

use std::cmp::Ordering;
use std::fs::File;
use std::path::{Path, PathBuf};

use log::{debug, trace};
use memmap2::{Mmap, MmapOptions};

use crate::error::{PalimpsestError, Result};
use crate::storage::entry_parser::EntryParser;

/// Start of the line containing `offset`: the byte after the closest newline
/// strictly before `offset`, or 0.
///
/// `offset` is clamped to the buffer length.
pub fn prev_newline(bytes: &[u8], offset: usize) -> usize {
    let offset = offset.min(bytes.len());
    bytes[..offset]
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |pos| pos + 1)
}

/// End (exclusive) of the line starting at or containing `offset`.
fn next_newline(bytes: &[u8], offset: usize) -> usize {
    bytes[offset..]
        .iter()
        .position(|&b| b == b'\n')
        .map_or(bytes.len(), |pos| offset + pos)
}

/// A dictionary file mapped into memory for the lifetime of the value.
///
/// The mapping is released when the value is dropped. Empty files are
/// accepted and never match.
#[derive(Debug)]
pub struct MappedDictionary {
    path: PathBuf,
    mmap: Option<Mmap>,
}

impl MappedDictionary {
    /// Map the file at `path` read-only.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path)?;
        let len = file.metadata()?.len();

        // Mapping a zero-length file fails on some platforms.
        let mmap = if len == 0 {
            None
        } else {
            // The mapping is read-only and the file is treated as immutable
            // while it is mapped.
            Some(unsafe { MmapOptions::new().map(&file)? })
        };

        debug!("mapped dictionary {} ({len} bytes)", path.display());
        Ok(MappedDictionary { path, mmap })
    }

    /// Path of the mapped file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw bytes of the file.
    pub fn bytes(&self) -> &[u8] {
        self.mmap.as_deref().unwrap_or(&[])
    }

    /// Size of the file in bytes.
    pub fn len(&self) -> usize {
        self.bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Binary-search the value stored under `key`.
    ///
    /// Each probe snaps the midpoint to the start of its line, parses that
    /// line and compares its key byte-wise with `key`. Blank lines sort before
    /// every key. A miss is `Ok(None)`; a line the parser rejects is an error.
    pub fn lookup<P: EntryParser + ?Sized>(&self, key: &str, parser: &P) -> Result<Option<&str>> {
        let bytes = self.bytes();
        let target = key.as_bytes();
        let (mut lo, mut hi) = (0, bytes.len());

        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let start = prev_newline(bytes, mid);
            let end = next_newline(bytes, start);
            let line = decode_line(&bytes[start..end], start)?;

            let ordering = if line.is_empty() {
                Ordering::Less
            } else {
                let (candidate, value) = parser.parse(line)?;
                trace!("probe at {start}: {candidate:?}");
                match candidate.as_bytes().cmp(target) {
                    Ordering::Equal => return Ok(Some(value)),
                    other => other,
                }
            };

            if ordering == Ordering::Less {
                lo = end + 1;
            } else {
                hi = start;
            }
        }

        Ok(None)
    }

    /// Whether `key` is present.
    pub fn contains_key<P: EntryParser + ?Sized>(&self, key: &str, parser: &P) -> Result<bool> {
        Ok(self.lookup(key, parser)?.is_some())
    }
}

fn decode_line(raw: &[u8], offset: usize) -> Result<&str> {
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    std::str::from_utf8(raw).map_err(|e| {
        PalimpsestError::encoding(format!("dictionary line at byte {offset} is not UTF-8: {e}"))
    })
}

/// Open the dictionary at `path`, look up `key` and release the mapping.
///
/// # Examples
///
/// ```no_run
/// use palimpsest::storage::entry_parser::DelDictEntryParser;
/// use palimpsest::storage::mmap_dictionary::mmap_bin_search;
///
/// # fn main() -> palimpsest::error::Result<()> {
/// let value = mmap_bin_search("ckey", "/path/to/dictionary.txt", &DelDictEntryParser)?;
/// println!("{value:?}");
/// # Ok(())
/// # }
/// ```
pub fn mmap_bin_search<P, E>(key: &str, path: P, parser: &E) -> Result<Option<String>>
where
    P: AsRef<Path>,
    E: EntryParser + ?Sized,
{
    let dictionary = MappedDictionary::open(path)?;
    Ok(dictionary.lookup(key, parser)?.map(str::to_string))
}
