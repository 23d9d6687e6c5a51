//! Integration tests for the memory-mapped dictionary and spelling correction.

use std::io::Write;
use std::sync::Arc;
use std::thread;

use palimpsest::error::Result;
use palimpsest::spelling::deletion::{DeletionIndex, SharedDeletionIndex};
use palimpsest::spelling::dictionary::WordDictionary;
use palimpsest::spelling::mapped::mapped_sym_suggest;
use palimpsest::spelling::suggest::suggestions;
use palimpsest::spelling::symspell::{SymSpell, sym_suggest};
use palimpsest::storage::entry_parser::{DelDictEntryParser, SingleWordParser};
use palimpsest::storage::mmap_dictionary::{MappedDictionary, mmap_bin_search};
use tempfile::NamedTempFile;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn write_lines(lines: &[&str]) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    for line in lines {
        writeln!(file, "{line}")?;
    }
    file.flush()?;
    Ok(file)
}

#[test]
fn test_six_line_dictionary() -> Result<()> {
    init_logger();
    let file = write_lines(&[
        "akey\taval",
        "bkey\tbval",
        "ckey\tcval",
        "dkey\tdval",
        "ekey\teval",
        "fkey\tfval",
    ])?;

    assert_eq!(
        mmap_bin_search("ckey", file.path(), &DelDictEntryParser)?,
        Some("cval".to_string())
    );
    assert_eq!(mmap_bin_search("gkey", file.path(), &DelDictEntryParser)?, None);
    assert_eq!(
        mmap_bin_search("akey", file.path(), &DelDictEntryParser)?,
        Some("aval".to_string())
    );
    assert_eq!(
        mmap_bin_search("fkey", file.path(), &DelDictEntryParser)?,
        Some("fval".to_string())
    );

    Ok(())
}

#[test]
fn test_large_sorted_word_list() -> Result<()> {
    let words: Vec<String> = (0..2000).map(|i| format!("word{i:05}")).collect();
    let lines: Vec<&str> = words.iter().map(String::as_str).collect();
    let file = write_lines(&lines)?;

    let dictionary = MappedDictionary::open(file.path())?;
    for word in words.iter().step_by(97) {
        assert_eq!(dictionary.lookup(word, &SingleWordParser)?, Some(word.as_str()));
    }
    assert_eq!(dictionary.lookup("word99999", &SingleWordParser)?, None);
    assert_eq!(dictionary.lookup("vord00000", &SingleWordParser)?, None);

    Ok(())
}

#[test]
fn test_mapping_shared_between_threads() -> Result<()> {
    let file = write_lines(&["alpha\t1", "beta\t2", "gamma\t3"])?;
    let dictionary = Arc::new(MappedDictionary::open(file.path())?);

    let handles: Vec<_> = ["alpha", "beta", "gamma"]
        .into_iter()
        .map(|key| {
            let dictionary = Arc::clone(&dictionary);
            thread::spawn(move || {
                dictionary
                    .lookup(key, &DelDictEntryParser)
                    .map(|value| value.map(str::to_string))
            })
        })
        .collect();

    let mut found = Vec::new();
    for handle in handles {
        found.push(handle.join().expect("lookup thread panicked")?);
    }
    assert_eq!(found, vec![
        Some("1".to_string()),
        Some("2".to_string()),
        Some("3".to_string())
    ]);

    Ok(())
}

#[test]
fn test_written_index_drives_mapped_suggestions() -> Result<()> {
    init_logger();
    let dictionary = WordDictionary::from_words(["aaaaa", "bbbbb", "1234"]);
    let index = DeletionIndex::build(dictionary.words(), 1);

    let file = NamedTempFile::new()?;
    index.write_sorted(file.path())?;

    let result = mapped_sym_suggest("aaaa", file.path(), &dictionary, 1)?;
    assert!(result.insertions.contains("aaaaa"));

    let result = mapped_sym_suggest("aaXaa", file.path(), &dictionary, 1)?;
    assert!(result.substitutions.contains("aaaaa"));

    let result = mapped_sym_suggest("Xbbbbb", file.path(), &dictionary, 1)?;
    assert!(result.deletions.contains("bbbbb"));

    Ok(())
}

#[test]
fn test_in_memory_and_ranked_suggestions() {
    let dictionary = WordDictionary::from_words(["λόγος", "λόγοι", "νόμος"]);
    let index = DeletionIndex::build(dictionary.words(), 1);

    let candidates = sym_suggest("λόγοσ", &dictionary, &index, 1);
    assert!(candidates.contains(&"λόγος".to_string()));
    assert!(candidates.contains(&"λόγοι".to_string()));

    let ranked = suggestions("λόγοσ", &candidates);
    assert_eq!(ranked.len(), candidates.len());
}

#[test]
fn test_shared_index_readers_during_rebuild() {
    let shared = Arc::new(SharedDeletionIndex::new(DeletionIndex::build(["first"], 1)));

    let reader = {
        let shared = Arc::clone(&shared);
        thread::spawn(move || {
            for _ in 0..100 {
                let snapshot = shared.snapshot();
                let complete = snapshot.get("irst").is_some() || snapshot.get("econd").is_some();
                assert!(complete);
            }
        })
    };

    shared.rebuild(["second"], 1);
    reader.join().expect("reader thread panicked");
    assert!(shared.snapshot().get("econd").is_some());
}

#[test]
fn test_engine_queries_during_add_words() {
    init_logger();
    let engine = Arc::new(SymSpell::new(WordDictionary::from_words(["first"])));

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                for _ in 0..100 {
                    let snapshot = engine.snapshot();
                    // Every published word is indexed in the same snapshot.
                    for word in snapshot.dictionary().words() {
                        let variant: String = word.chars().skip(1).collect();
                        let origins = snapshot.index().get(&variant).unwrap_or(&[]);
                        assert!(origins.iter().any(|origin| origin == word));
                    }
                    assert!(engine.candidates("firs").contains(&"first".to_string()));
                }
            })
        })
        .collect();

    let writers: Vec<_> = ["second", "third"]
        .into_iter()
        .map(|word| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || engine.add_words([word]))
        })
        .collect();

    for handle in readers.into_iter().chain(writers) {
        handle.join().expect("thread panicked");
    }

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.dictionary().len(), 3);
    assert_eq!(engine.candidates("secnd"), vec!["second"]);
}
