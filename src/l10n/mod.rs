//! 현지화 도구: 조사 교정과 템플릿

pub mod proofread;
pub mod template;

pub use proofread::{Proofreader, Token};
pub use template::{Template, Value};
