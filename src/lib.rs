pub mod config;
pub mod core;
pub mod study;

pub use crate::core::compose::{compose, compose_cv, decompose_lvt, decompose_syllable};
pub use crate::core::romanize::{romanize_cv, romanize_text, RrResult, RrRole, RrSegment};
pub use crate::study::{
    block_type_for_pair, BlockType, PairStatus, ProgressionController, ProgressionMode,
};
