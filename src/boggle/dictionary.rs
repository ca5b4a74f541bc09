use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use fst::automaton::Str;
use fst::{Automaton, IntoStreamer, Set, Streamer};
use log::debug;

use crate::errors::DictionaryError;

/// Word validity and completion service consumed by the search.
///
/// Both queries are pure. A failing query must be reported as an error, never
/// as "no such word", so a flaky backend cannot silently drop results.
pub trait DictionaryOracle {
    /// Is `word` exactly a known word?
    fn is_real_word(&self, word: &str) -> Result<bool, DictionaryError>;

    /// Every known word starting with `partial` (the word itself included if known)
    fn words_with_prefix(&self, partial: &str) -> Result<Vec<String>, DictionaryError>;

    /// Does any known word start with `partial`? Implementations that can answer
    /// without listing every completion should override this.
    fn has_words_with_prefix(&self, partial: &str) -> Result<bool, DictionaryError> {
        Ok(!self.words_with_prefix(partial)?.is_empty())
    }
}

fn read_word_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, DictionaryError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        words.push(word.to_string());
    }
    Ok(words)
}

/// Dictionary backed by an in-memory FST set of lowercase words
pub struct FstDictionary {
    words: Set<Vec<u8>>,
}

impl FstDictionary {
    /// Builds the dictionary from any list of words. Words are lowercased, sorted and deduplicated first
    /// since the FST builder needs its input in lexicographic order.
    pub fn from_words<I, S>(words: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect::<Vec<_>>();
        words.sort_unstable();
        words.dedup();

        let words = Set::from_iter(words)?;
        debug!("built dictionary with {} words", words.len());
        Ok(Self { words })
    }

    /// Loads a word list with one word per line
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let words = read_word_file(path)?;
        Self::from_words(words)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl DictionaryOracle for FstDictionary {
    fn is_real_word(&self, word: &str) -> Result<bool, DictionaryError> {
        Ok(self.words.contains(word))
    }

    fn words_with_prefix(&self, partial: &str) -> Result<Vec<String>, DictionaryError> {
        let matcher = Str::new(partial).starts_with();
        let words = self.words.search(matcher).into_stream().into_strs()?;
        Ok(words)
    }

    fn has_words_with_prefix(&self, partial: &str) -> Result<bool, DictionaryError> {
        let matcher = Str::new(partial).starts_with();
        let mut stream = self.words.search(matcher).into_stream();
        Ok(stream.next().is_some())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn dict() -> FstDictionary {
        FstDictionary::from_words(vec!["Nota", "notaio", "noto", "fare", "nota", "cane"]).unwrap()
    }

    #[test]
    fn test_lookup() {
        let dict = dict();
        assert_eq!(dict.len(), 5);
        assert!(dict.is_real_word("nota").unwrap());
        assert!(dict.is_real_word("notaio").unwrap());
        assert!(!dict.is_real_word("not").unwrap());
        assert!(!dict.is_real_word("NOTA").unwrap());
    }

    #[test]
    fn test_prefix_search() {
        let dict = dict();
        assert_eq!(
            dict.words_with_prefix("not").unwrap(),
            vec!["nota", "notaio", "noto"]
        );
        assert_eq!(dict.words_with_prefix("nota").unwrap(), vec!["nota", "notaio"]);
        assert!(dict.words_with_prefix("x").unwrap().is_empty());
        assert!(dict.has_words_with_prefix("ca").unwrap());
        assert!(dict.has_words_with_prefix("cane").unwrap());
        assert!(!dict.has_words_with_prefix("canea").unwrap());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Ciao").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  mondo  ").unwrap();
        writeln!(file, "ciao").unwrap();

        let dict = FstDictionary::from_file(file.path()).unwrap();
        assert_eq!(dict.len(), 2);
        assert!(dict.is_real_word("ciao").unwrap());
        assert!(dict.is_real_word("mondo").unwrap());
    }

    #[test]
    fn test_missing_file() {
        let err = FstDictionary::from_file("/definitely/not/here.txt");
        assert!(matches!(err, Err(DictionaryError::Io(_))));
    }
}
