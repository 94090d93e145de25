//! Plain-text word-list loading: one word per line, `=` lines are metadata.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Error raised when a word list cannot be read.
#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    /// The file could not be opened or read.
    #[error("cannot read word list: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a word list from `path`, preserving line order.
///
/// Lines containing an `=` delimiter are treated as metadata and skipped,
/// as are blank lines. Whitespace around each word is trimmed.
pub fn read_words<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordListError> {
    let file = File::open(path)?;
    read_words_from(BufReader::new(file))
}

/// Parse a word list from any buffered reader. See [`read_words`].
pub fn read_words_from<R: BufRead>(reader: R) -> Result<Vec<String>, WordListError> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() || word.contains('=') {
            continue;
        }
        words.push(word.to_string());
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn skips_metadata_and_blank_lines() {
        let text = "jezik = slavenski\nnogomet\n\nfudbal\nblok = 8\nfutbal\n";
        let words = read_words_from(Cursor::new(text)).unwrap();
        assert_eq!(words, vec!["nogomet", "fudbal", "futbal"]);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let words = read_words_from(Cursor::new("  lopta  \n")).unwrap();
        assert_eq!(words, vec!["lopta"]);
    }

    #[test]
    fn missing_file_surfaces_io_error() {
        let err = read_words("no/such/wordlist.txt");
        assert!(matches!(err, Err(WordListError::Io(_))));
    }
}
