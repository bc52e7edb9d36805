//! 한글 음절 조합/분해/로마자 표기 핵심 모듈

pub mod compose;
pub mod jamo;
pub mod romanize;

pub use compose::{compose, compose_cv, decompose_lvt, decompose_syllable};
pub use romanize::{romanize_cv, romanize_text, RrResult, RrRole, RrSegment};
