//! CV 쌍 상태 분류와 대표 음절 선택
//!
//! 데이터 파일(JSON)이 제공하는 후보와 상태 태그를 우선 사용하고,
//! 없으면 블록 계열별 고정 폴백을 쓴다. 로드 실패는 치명적이지 않다.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::core::compose::compose_cv;
use crate::study::block::{block_type_for_pair, BlockType};

/// 데이터 파일에서 오는 CV 쌍 상태 태그
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairStatus {
    Allowed,
    Rare,
    NotUsed,
    Impossible,
}

/// 쌍 상태 오버라이드 항목
#[derive(Deserialize)]
struct PairEntry {
    consonant: String,
    vowel: String,
    status: PairStatus,
}

/// 데이터 파일 형식
#[derive(Deserialize, Default)]
struct RepositoryFile {
    /// 블록 유형 키(전체 이름 또는 A/B/C/D) -> 대표 음절 후보
    #[serde(default)]
    blocks: HashMap<String, Vec<String>>,
    #[serde(default)]
    pairs: Vec<PairEntry>,
}

/// 대표 음절 후보와 CV 쌍 상태 저장소
#[derive(Debug, Clone, Default)]
pub struct SyllableRepository {
    blocks: HashMap<String, Vec<String>>,
    statuses: HashMap<(char, char), PairStatus>,
}

impl SyllableRepository {
    /// 빈 저장소 생성 (항상 폴백/기본 상태 사용)
    pub fn new() -> Self {
        Self::default()
    }

    /// JSON 파일에서 로드 (파일 없거나 파싱 실패 시 빈 저장소)
    pub fn load(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(_) => return Self::new(),
        };
        let file: RepositoryFile = match serde_json::from_str(&content) {
            Ok(f) => f,
            Err(e) => {
                log::warn!("음절 데이터 파일 파싱 실패 ({}): {}", path.display(), e);
                return Self::new();
            }
        };

        let mut statuses = HashMap::new();
        for entry in file.pairs {
            let c = entry.consonant.trim().chars().next();
            let v = entry.vowel.trim().chars().next();
            if let (Some(c), Some(v)) = (c, v) {
                statuses.insert((c, v), entry.status);
            }
        }

        Self {
            blocks: file.blocks,
            statuses,
        }
    }

    /// 블록 유형의 대표 음절 반환
    ///
    /// 전체 이름 키를 우선 찾고, 없으면 A/B/C/D 한 글자 키를 찾는다.
    /// 후보가 없으면 계열별 고정 폴백 (가/고/구/그).
    pub fn select_for_block(&self, block: BlockType) -> String {
        let candidates = self
            .blocks
            .get(block.name())
            .or_else(|| self.blocks.get(&block.letter().to_string()));

        if let Some(candidates) = candidates {
            for s in candidates {
                let cleaned = s.trim();
                if !cleaned.is_empty() {
                    return cleaned.to_string();
                }
            }
        }

        match block {
            BlockType::RightBranch => "가",
            BlockType::TopBranch => "고",
            BlockType::BottomBranch => "구",
            BlockType::Horizontal => "그",
        }
        .to_string()
    }

    /// CV 쌍의 상태 반환 (오버라이드 없으면 Allowed)
    pub fn pair_status(&self, consonant: char, vowel: char) -> PairStatus {
        self.statuses
            .get(&(consonant, vowel))
            .copied()
            .unwrap_or(PairStatus::Allowed)
    }

    /// 진도 엔진용 조회: (음절, 블록 유형, 상태)
    ///
    /// 음절은 조합 실패 시 빈 문자열 (호출자가 자리 표시로 대체).
    pub fn lookup(&self, consonant: char, vowel: char) -> (String, BlockType, PairStatus) {
        let c = consonant.to_string();
        let v = vowel.to_string();
        let glyph = compose_cv(&c, &v);
        let block = block_type_for_pair(&c, &v);
        let status = self.pair_status(consonant, vowel);
        (glyph, block, status)
    }
}
