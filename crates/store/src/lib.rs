//! File-backed collaborators: the high-score table and word lists.

pub mod config;
pub mod dictionary;
pub mod high_scores;

pub use word_snake_engine as engine;
pub use word_snake_types as types;

pub use config::StoreConfig;
pub use dictionary::{builtin_words, load_word_list, open_dictionary, parse_word_list};
pub use high_scores::{qualifies, today, JsonScoreFile};
