//! Word list loading.
//!
//! A word list starts with the number of words on its own line, followed by one word per line.
//! Blank lines are skipped, surrounding whitespace is trimmed, and words are lowercased.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Trims and lowercases a word or prefix so it compares equal to loaded words.
///
/// # Examples
///
/// ```
/// use completion_trie::words;
///
/// assert_eq!(words::normalize("  Bear\n"), "bear");
/// ```
pub fn normalize(line: &str) -> String {
    line.trim().to_lowercase()
}

/// Reads a word list from `reader`. Lines after the last counted word are ignored.
///
/// # Examples
///
/// ```
/// use completion_trie::words;
///
/// let words = words::parse("2\nBear\nbull\n".as_bytes()).unwrap();
/// assert_eq!(words, vec!["bear", "bull"]);
/// ```
pub fn parse<R>(reader: R) -> Result<Vec<String>>
where
    R: BufRead,
{
    let mut expected = None;
    let mut words = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match expected {
            None => {
                let count = line
                    .parse::<usize>()
                    .map_err(|_| Error::InvalidCount(line.to_string()))?;
                expected = Some(count);
            },
            Some(count) if words.len() < count => words.push(normalize(line)),
            Some(_) => break,
        }
    }

    let expected = expected.ok_or(Error::MissingCount)?;
    if words.len() != expected {
        return Err(Error::WordCountMismatch {
            expected,
            found: words.len(),
        });
    }
    debug!("read {} words", words.len());
    Ok(words)
}

/// Reads a word list from the file at `path`.
pub fn load<P>(path: P) -> Result<Vec<String>>
where
    P: AsRef<Path>,
{
    let file = File::open(path.as_ref())?;
    parse(BufReader::new(file))
}
