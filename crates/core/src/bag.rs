//! Letter bag - weighted letter draws without replacement
//!
//! One full bag holds every letter of [`LETTER_FREQUENCIES`] as many times as
//! its weight, shuffled. Draws pop from the end until the bag is empty; the
//! next draw refills and reshuffles it, so a draw always succeeds.

use crate::rng::SimpleRng;
use crate::types::{is_vowel, LETTER_FREQUENCIES};

/// Weighted-without-replacement letter source.
#[derive(Debug, Clone)]
pub struct LetterBag {
    letters: Vec<char>,
    rng: SimpleRng,
}

impl LetterBag {
    /// Create a full, shuffled bag.
    pub fn new(seed: u32) -> Self {
        let mut bag = Self {
            letters: Vec::with_capacity(100),
            rng: SimpleRng::new(seed),
        };
        bag.refill();
        bag
    }

    /// Rebuild the full bag from the frequency table and shuffle it.
    pub fn refill(&mut self) {
        self.letters.clear();
        for &(letter, count) in LETTER_FREQUENCIES.iter() {
            for _ in 0..count {
                self.letters.push(letter);
            }
        }
        self.rng.shuffle(&mut self.letters);
    }

    /// Draw the next letter, refilling first if the bag is empty.
    pub fn draw(&mut self) -> char {
        if self.letters.is_empty() {
            self.refill();
        }
        // Refill never leaves the bag empty.
        self.letters.pop().unwrap_or('E')
    }

    /// Take one vowel out of the bag, chosen uniformly among the vowels left.
    ///
    /// Refills first when no vowel remains.
    pub fn draw_vowel(&mut self) -> char {
        if !self.letters.iter().any(|&l| is_vowel(l)) {
            self.refill();
        }
        let vowel_slots: Vec<usize> = self
            .letters
            .iter()
            .enumerate()
            .filter(|&(_, &l)| is_vowel(l))
            .map(|(i, _)| i)
            .collect();
        let pick = vowel_slots[self.rng.next_range(vowel_slots.len() as u32) as usize];
        self.letters.remove(pick)
    }

    /// Letters left before the next refill.
    pub fn remaining(&self) -> usize {
        self.letters.len()
    }

    /// How many of `letter` are left in the bag.
    pub fn count(&self, letter: char) -> usize {
        self.letters.iter().filter(|&&l| l == letter).count()
    }

    /// The RNG state, for seeding a follow-up session.
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}
