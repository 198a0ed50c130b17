//! Word validation against the dictionary and the letters the snake carries.

use std::collections::{BTreeSet, HashSet};

use crate::types::MIN_WORD_LEN;

/// Set-membership test over lowercase words.
pub trait Dictionary {
    fn contains(&self, lowercase_word: &str) -> bool;
}

impl Dictionary for HashSet<String> {
    fn contains(&self, lowercase_word: &str) -> bool {
        HashSet::contains(self, lowercase_word)
    }
}

impl Dictionary for BTreeSet<String> {
    fn contains(&self, lowercase_word: &str) -> bool {
        BTreeSet::contains(self, lowercase_word)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Box<D> {
    fn contains(&self, lowercase_word: &str) -> bool {
        (**self).contains(lowercase_word)
    }
}

pub struct WordValidator<D> {
    dictionary: D,
}

impl<D: Dictionary> WordValidator<D> {
    pub fn new(dictionary: D) -> Self {
        Self { dictionary }
    }

    /// Check length, dictionary membership and letter availability.
    pub fn is_valid(&self, word: &str, available: &[char]) -> bool {
        word.chars().count() >= MIN_WORD_LEN
            && self.dictionary.contains(&word.to_lowercase())
            && claim_letters(word, available).is_some()
    }
}

/// Indices into `available` that spell `word`, one distinct index per letter.
///
/// Each letter claims the first unclaimed matching index, comparing exact
/// case. Returns `None` as soon as a letter has no unclaimed match, i.e. when
/// the word's letters are not a sub-multiset of `available`.
pub fn claim_letters(word: &str, available: &[char]) -> Option<Vec<usize>> {
    let mut claimed = vec![false; available.len()];
    let mut indices = Vec::with_capacity(word.len());
    for letter in word.chars() {
        let idx = available
            .iter()
            .enumerate()
            .position(|(i, &l)| l == letter && !claimed[i])?;
        claimed[idx] = true;
        indices.push(idx);
    }
    Some(indices)
}
