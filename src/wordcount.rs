//! Dictionary word counting over a text.

use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::common::Result;

/// Characters stripped from both ends of every text token.
const TRIMMED_PUNCTUATION: &[char] = &['.', ',', '!', '?', '"'];

/// Words to look for, in file order.
///
/// Each line is one word, trimmed and lowercased. Blank lines are kept as
/// the empty word, which matches text tokens made only of trimmed
/// punctuation such as `...` or `!!`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .collect(),
        }
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let lines = reader.lines().collect::<std::io::Result<Vec<_>>>()?;
        Ok(Self::new(lines))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Occurrence counts for each dictionary word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCounts {
    order: Vec<String>,
    counts: HashMap<String, usize>,
}

impl WordCounts {
    /// Count for `word` (compared lowercase), or `None` if it is not in the dictionary.
    pub fn get(&self, word: &str) -> Option<usize> {
        self.counts.get(&word.to_lowercase()).copied()
    }

    /// `(word, count)` pairs in dictionary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.order
            .iter()
            .map(|w| (w.as_str(), self.counts.get(w).copied().unwrap_or(0)))
    }
}

impl fmt::Display for WordCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (word, count) in self.iter() {
            writeln!(f, "{}: {}", word, count)?;
        }
        Ok(())
    }
}

/// Count how often each dictionary word appears in `text`.
///
/// Matching is case-insensitive. Tokens are split on whitespace and lose
/// leading and trailing `. , ! ? "` before lookup.
///
/// # Example
/// ```
/// use pagesim::wordcount::{count_words, Dictionary};
///
/// let dict = Dictionary::new(["rust", "cache"]);
/// let counts = count_words(&dict, "Rust, rust! A cache.");
/// assert_eq!(counts.get("rust"), Some(2));
/// assert_eq!(counts.get("cache"), Some(1));
/// ```
pub fn count_words(dictionary: &Dictionary, text: &str) -> WordCounts {
    let mut counts: HashMap<String, usize> =
        dictionary.words.iter().map(|w| (w.clone(), 0)).collect();

    let text = text.to_lowercase();
    for token in text.split_whitespace() {
        let word = token.trim_matches(TRIMMED_PUNCTUATION);
        if let Some(count) = counts.get_mut(word) {
            *count += 1;
        }
    }

    WordCounts {
        order: dictionary.words.clone(),
        counts,
    }
}

/// Load a dictionary file and a text file and count.
pub fn count_words_in_files(
    dictionary_path: impl AsRef<Path>,
    text_path: impl AsRef<Path>,
) -> Result<WordCounts> {
    let dictionary = Dictionary::from_path(dictionary_path)?;

    let mut text = String::new();
    File::open(text_path.as_ref())?.read_to_string(&mut text)?;
    debug!(
        words = dictionary.len(),
        text_bytes = text.len(),
        "counting dictionary words"
    );

    Ok(count_words(&dictionary, &text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_normalizes() {
        let dict = Dictionary::from_reader("  Apple \nBANANA\n".as_bytes()).unwrap();
        assert_eq!(dict.words(), &["apple".to_string(), "banana".to_string()]);
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn test_count_strips_punctuation() {
        let dict = Dictionary::new(["hello", "world"]);
        let counts = count_words(&dict, "\"Hello,\" said the WORLD. hello?! worlds");

        assert_eq!(counts.get("hello"), Some(2));
        assert_eq!(counts.get("world"), Some(1));
        assert_eq!(counts.get("said"), None);
    }

    #[test]
    fn test_inner_punctuation_kept() {
        let dict = Dictionary::new(["don't", "e.g"]);
        let counts = count_words(&dict, "don't e.g. (don't)");

        assert_eq!(counts.get("don't"), Some(1));
        assert_eq!(counts.get("e.g"), Some(1));
    }

    #[test]
    fn test_display_in_dictionary_order() {
        let dict = Dictionary::new(["zebra", "apple"]);
        let counts = count_words(&dict, "apple apple");

        assert_eq!(counts.to_string(), "zebra: 0\napple: 2\n");
    }

    #[test]
    fn test_blank_line_counts_punctuation_only_tokens() {
        let dict = Dictionary::from_reader("cat\n\n".as_bytes()).unwrap();
        let counts = count_words(&dict, "cat ... !! cat");

        assert_eq!(counts.get("cat"), Some(2));
        assert_eq!(counts.get(""), Some(2));
    }

    #[test]
    fn test_empty_dictionary() {
        let counts = count_words(&Dictionary::default(), "anything at all");
        assert_eq!(counts.iter().count(), 0);
        assert_eq!(counts.to_string(), "");
    }
}
