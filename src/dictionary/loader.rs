//! Word list loading utilities
//!
//! Reads newline-separated word lists and normalises them for the dictionary.

use std::fs;
use std::io;
use std::path::Path;

/// Load words of exactly `word_length` letters from a file
///
/// Blank lines, entries of the wrong length and entries with non-letter
/// characters are skipped. Returned words are uppercase.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use modle::dictionary::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, word_length: usize) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_word_list(&content, word_length))
}

/// Normalise an in-memory word list
#[must_use]
pub fn parse_word_list(content: &str, word_length: usize) -> Vec<String> {
    words_from_iter(content.lines(), word_length)
}

/// Keep only alphabetic entries of `word_length` letters, uppercased
pub fn words_from_iter<I, S>(words: I, word_length: usize) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .filter_map(|word| {
            let trimmed = word.as_ref().trim();
            let valid = trimmed.len() == word_length
                && trimmed.bytes().all(|b| b.is_ascii_alphabetic());
            valid.then(|| trimmed.to_ascii_uppercase())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_valid_words() {
        let words = parse_word_list("modal\nabout\nAloha\n", 5);
        assert_eq!(words, vec!["MODAL", "ABOUT", "ALOHA"]);
    }

    #[test]
    fn parse_skips_invalid() {
        let words = parse_word_list("modal\n\ntoolong\nabc\nmo-al\n  plant  \n", 5);
        assert_eq!(words, vec!["MODAL", "PLANT"]);
    }

    #[test]
    fn parse_respects_word_length() {
        let words = parse_word_list("cat\nmodal\ndog\n", 3);
        assert_eq!(words, vec!["CAT", "DOG"]);
    }

    #[test]
    fn load_missing_file_is_error() {
        assert!(load_from_file("/definitely/not/here.txt", 5).is_err());
    }

    #[test]
    fn load_from_temp_file() {
        let path = std::env::temp_dir().join(format!("modle-loader-{}.txt", std::process::id()));
        fs::write(&path, "modal\nplant\nxx\n").unwrap();

        let words = load_from_file(&path, 5).unwrap();
        assert_eq!(words, vec!["MODAL", "PLANT"]);

        fs::remove_file(&path).unwrap();
    }
}
