//! 학습 진도/분류 모듈

pub mod block;
pub mod order;
pub mod progression;
pub mod syllables;

pub use block::{block_type_for_pair, BlockType};
pub use order::JamoOrder;
pub use progression::{ProgressionController, ProgressionMode, ProgressionStep, SyllableLookup};
pub use syllables::{PairStatus, SyllableRepository};
