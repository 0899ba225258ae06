//! 한글 음절 조합/분해

pub mod jamo;
pub mod unicode;

pub use jamo::{classify, is_consonant, is_final, is_hangul, is_initial, is_vowel, FinalClass};
pub use unicode::{get_final, get_initial, get_vowel, join_char, split_char};
