//! Word lists: one word per line, matched case-insensitively.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{anyhow, Result};
use log::info;

const BUILTIN_WORDS: &str = include_str!("../assets/words.txt");

/// Parse a word list. Blank lines, `#` comments and entries with anything
/// but ASCII letters are skipped; the rest are lowercased.
pub fn parse_word_list(text: &str) -> HashSet<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter(|line| line.chars().all(|c| c.is_ascii_alphabetic()))
        .map(str::to_ascii_lowercase)
        .collect()
}

/// Load a word list file.
pub fn load_word_list(path: &Path) -> Result<HashSet<String>> {
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow!("dictionary: read {} failed: {}", path.display(), e))?;
    let words = parse_word_list(&text);
    if words.is_empty() {
        return Err(anyhow!("dictionary: {} has no usable words", path.display()));
    }
    info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// The list bundled with the game.
pub fn builtin_words() -> HashSet<String> {
    parse_word_list(BUILTIN_WORDS)
}

/// Load `path` when given, the bundled list otherwise.
pub fn open_dictionary(path: Option<&Path>) -> Result<HashSet<String>> {
    match path {
        Some(path) => load_word_list(path),
        None => Ok(builtin_words()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_normalizes_and_skips_junk() {
        let words = parse_word_list("Cat\n\n  dog  \n# comment\nice-cream\nEEL\n");
        assert_eq!(words.len(), 3);
        assert!(words.contains("cat"));
        assert!(words.contains("dog"));
        assert!(words.contains("eel"));
    }

    #[test]
    fn test_builtin_list_has_common_words() {
        let words = builtin_words();
        for w in ["cat", "dog", "eel", "snake", "word"] {
            assert!(words.contains(w), "{w}");
        }
        assert!(words.iter().all(|w| w.chars().all(|c| c.is_ascii_lowercase())));
    }

    #[test]
    fn test_load_word_list_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "tac\nact").unwrap();
        let words = load_word_list(file.path()).unwrap();
        assert_eq!(words, HashSet::from(["tac".to_string(), "act".to_string()]));
    }

    #[test]
    fn test_missing_or_empty_file_is_an_error() {
        assert!(load_word_list(Path::new("/definitely/not/here.txt")).is_err());
        let file = NamedTempFile::new().unwrap();
        assert!(load_word_list(file.path()).is_err());
    }

    #[test]
    fn test_open_dictionary_falls_back_to_builtin() {
        let words = open_dictionary(None).unwrap();
        assert!(words.contains("cat"));
    }
}
