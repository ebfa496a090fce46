//! File-based word count tests.

use std::fs;

use pagesim::wordcount::count_words_in_files;
use pagesim::Error;
use tempfile::tempdir;

#[test]
fn test_count_from_files() {
    let dir = tempdir().unwrap();
    let dict = dir.path().join("dictionary.txt");
    let text = dir.path().join("text.txt");
    fs::write(&dict, "The\ncache\nmiss\n").unwrap();
    fs::write(
        &text,
        "The cache missed. The CACHE hit!\n\"Miss,\" said the cache?",
    )
    .unwrap();

    let counts = count_words_in_files(&dict, &text).unwrap();

    assert_eq!(counts.get("the"), Some(3));
    assert_eq!(counts.get("cache"), Some(3));
    assert_eq!(counts.get("miss"), Some(1));
    assert_eq!(counts.to_string(), "the: 3\ncache: 3\nmiss: 1\n");
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let dict = dir.path().join("dictionary.txt");
    fs::write(&dict, "word\n").unwrap();

    let err = count_words_in_files(&dict, dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
