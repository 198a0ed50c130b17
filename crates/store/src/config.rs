use std::path::PathBuf;

pub const DEFAULT_SCORES_PATH: &str = "word_snake_scores.json";

/// Where persistent data lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub scores_path: PathBuf,
    /// `None` means the bundled word list.
    pub dictionary_path: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            scores_path: PathBuf::from(DEFAULT_SCORES_PATH),
            dictionary_path: None,
        }
    }
}

impl StoreConfig {
    /// Create from `WORD_SNAKE_SCORES` and `WORD_SNAKE_DICT`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let path = |name: &str| {
            lookup(name)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
        };

        Self {
            scores_path: path("WORD_SNAKE_SCORES").unwrap_or_else(|| PathBuf::from(DEFAULT_SCORES_PATH)),
            dictionary_path: path("WORD_SNAKE_DICT"),
        }
    }
}
