//! 학습 진도용 자모 순서 (기본값 + JSON 오버라이드)
//!
//! 유니코드 조합용 테이블(`core::jamo`)과 달리 이 순서는 교육용이다.
//! 기본 자음 순서는 초성 표준 순서와 우연히 같으므로 테이블을 복제하지
//! 않고 그대로 가져온다.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::core::jamo::CHOSEONG;

/// 기본 자음 진도 순서
pub const DEFAULT_CONSONANT_ORDER: [char; 19] = CHOSEONG;

/// 기본 10모음 진도 순서
#[rustfmt::skip]
pub const DEFAULT_VOWEL_ORDER_BASIC10: [char; 10] = [
    'ㅏ', 'ㅑ', 'ㅓ', 'ㅕ', 'ㅗ', 'ㅛ', 'ㅜ', 'ㅠ', 'ㅡ', 'ㅣ',
];

/// 확장 모음 진도 순서 (복합 모음 포함)
#[rustfmt::skip]
pub const DEFAULT_VOWEL_ORDER_ADVANCED: [char; 11] = [
    'ㅐ', 'ㅔ', 'ㅒ', 'ㅖ',
    'ㅘ', 'ㅙ', 'ㅚ',
    'ㅝ', 'ㅞ', 'ㅟ',
    'ㅢ',
];

/// 순서 오버라이드 파일 형식
#[derive(Deserialize, Default)]
struct OrderFile {
    #[serde(default)]
    consonants: Option<Vec<String>>,
    #[serde(default)]
    vowels_basic10: Option<Vec<String>>,
    #[serde(default)]
    vowels_advanced: Option<Vec<String>>,
}

/// 진도용 자모 순서 묶음
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JamoOrder {
    consonants: Vec<char>,
    basic10: Vec<char>,
    advanced: Vec<char>,
}

impl JamoOrder {
    /// 기본 순서로 생성
    pub fn new() -> Self {
        Self {
            consonants: DEFAULT_CONSONANT_ORDER.to_vec(),
            basic10: DEFAULT_VOWEL_ORDER_BASIC10.to_vec(),
            advanced: DEFAULT_VOWEL_ORDER_ADVANCED.to_vec(),
        }
    }

    /// JSON 파일에서 순서 로드 (파일 없거나 파싱 실패 시 기본값)
    pub fn load(path: &Path) -> Self {
        let mut order = Self::new();

        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(_) => return order,
        };
        let file: OrderFile = match serde_json::from_str(&content) {
            Ok(f) => f,
            Err(e) => {
                log::warn!("자모 순서 파일 파싱 실패 ({}): {}", path.display(), e);
                return order;
            }
        };

        if let Some(consonants) = file.consonants {
            let cleaned = clean_jamo_list(&consonants);
            if !cleaned.is_empty() {
                order.consonants = cleaned;
            }
        }
        if let Some(basic10) = file.vowels_basic10 {
            let cleaned = clean_jamo_list(&basic10);
            // 기본 10모음 교체는 정확히 10개일 때만 인정
            if cleaned.len() == 10 {
                order.basic10 = cleaned;
            }
        }
        if let Some(advanced) = file.vowels_advanced {
            let cleaned = clean_jamo_list(&advanced);
            if !cleaned.is_empty() {
                order.advanced = cleaned;
            }
        }

        order
    }

    pub fn consonants(&self) -> &[char] {
        &self.consonants
    }

    pub fn vowels_basic10(&self) -> &[char] {
        &self.basic10
    }

    pub fn vowels_advanced(&self) -> &[char] {
        &self.advanced
    }
}

impl Default for JamoOrder {
    fn default() -> Self {
        Self::new()
    }
}

/// 문자열 목록에서 자모 문자만 추출 (공백 제거, 빈 항목 건너뜀)
fn clean_jamo_list(items: &[String]) -> Vec<char> {
    items
        .iter()
        .filter_map(|s| s.trim().chars().next())
        .collect()
}
