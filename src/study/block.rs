//! 모음이 결정하는 음절 블록 배치 유형
//!
//! 학습 화면의 배치 판단에 쓰이는 도메인 데이터이며 교육용 진도 순서와는
//! 무관하다. 매핑에 없는 모음은 보수적으로 가로형(D)으로 처리한다.

use serde::{Deserialize, Serialize};

/// 네 가지 모음 기반 블록 배치 템플릿
///
/// - A: 세로 모음이 오른쪽에 붙음 (ㅏ/ㅓ 계열)
/// - B: 모음이 위에 얹힘 (ㅗ 계열)
/// - C: 모음이 아래에 붙음 (ㅜ 계열)
/// - D: 가로/중앙 배치 (ㅡ/ㅣ/ㅢ 등)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockType {
    RightBranch,
    TopBranch,
    BottomBranch,
    Horizontal,
}

impl BlockType {
    /// 블록 계열 문자 (A/B/C/D)
    pub fn letter(self) -> char {
        match self {
            BlockType::RightBranch => 'A',
            BlockType::TopBranch => 'B',
            BlockType::BottomBranch => 'C',
            BlockType::Horizontal => 'D',
        }
    }

    /// 데이터 파일 키로 쓰는 전체 이름
    pub fn name(self) -> &'static str {
        match self {
            BlockType::RightBranch => "A_RightBranch",
            BlockType::TopBranch => "B_TopBranch",
            BlockType::BottomBranch => "C_BottomBranch",
            BlockType::Horizontal => "D_Horizontal",
        }
    }
}

/// (초성, 중성) 자모 쌍의 블록 유형 판별
///
/// 현재 규칙은 순수하게 모음으로만 결정된다. `lead`는 향후 규칙 확장을
/// 위해 인자로만 받아둔다.
pub fn block_type_for_pair(_lead: &str, vowel: &str) -> BlockType {
    match vowel.trim().chars().next() {
        Some('ㅏ' | 'ㅐ' | 'ㅑ' | 'ㅒ' | 'ㅓ' | 'ㅔ' | 'ㅕ' | 'ㅖ') => BlockType::RightBranch,
        Some('ㅗ' | 'ㅘ' | 'ㅙ' | 'ㅚ' | 'ㅛ') => BlockType::TopBranch,
        Some('ㅜ' | 'ㅝ' | 'ㅞ' | 'ㅠ') => BlockType::BottomBranch,
        _ => BlockType::Horizontal,
    }
}
