//! 형태소: 체언, 조사, 용언과 조사 선택

pub mod format_spec;
pub mod grammar;
pub mod inflection;
pub mod number;
pub mod particle;
pub mod predicate;
pub mod substantive;

pub use format_spec::FormatSpec;
pub use grammar::{Formattable, Grammar};
pub use inflection::{attach_form, merge_form, AllomorphPicker, InflectionTable};
pub use number::NumberReader;
pub use particle::{Particle, ParticleRegistry};
pub use predicate::{Predicate, PredicateKind};
pub use substantive::{
    has_final_consonant, Loanword, Noun, NumberWord, Substantive, SubstantiveKind, Transliterator,
};
