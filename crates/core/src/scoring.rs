//! Scoring module - points awarded for accepted words
//!
//! Quadratic in the letters beyond the minimum length:
//! `points = 100 * (len - 3)^2` for words longer than three letters, so
//! three-letter words clear letters off the snake but score nothing.
//!
//! | Length | Points |
//! |--------|--------|
//! | 3 | 0 |
//! | 4 | 100 |
//! | 5 | 400 |
//! | 6 | 900 |
//! | 7 | 1600 |

use crate::types::MIN_WORD_LEN;

/// Points per squared extra letter.
pub const WORD_SCORE_BASE: u32 = 100;

/// Points for an accepted word of `len` letters.
pub fn word_score(len: usize) -> u32 {
    if len <= MIN_WORD_LEN {
        return 0;
    }
    let extra = (len - MIN_WORD_LEN) as u32;
    WORD_SCORE_BASE.saturating_mul(extra.saturating_mul(extra))
}
