pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod l10n;
pub mod morphology;

pub use config::{KoreanConfig, NumeralConfig};
pub use crate::core::{get_final, get_initial, get_vowel, is_hangul, join_char, split_char};
pub use engine::{format, korean, proofread, Korean};
pub use error::{GrammarError, Result};
pub use l10n::{Proofreader, Template, Value};
pub use morphology::{
    Formattable, Grammar, Loanword, Noun, NumberReader, NumberWord, Particle, ParticleRegistry,
    Predicate, Substantive,
};
