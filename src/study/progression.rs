//! CV 진도 엔진
//!
//! 자음×모음 공간을 진행 방향/고정 자모/포함 규칙에 따라 순회한다.
//! UI와 무관한 순수 로직이며, 음절 정보는 주입된 조회 콜백으로 얻는다.

use serde::{Deserialize, Serialize};

use crate::study::block::BlockType;
use crate::study::syllables::PairStatus;

/// 진행 방향
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressionMode {
    /// 자음 고정, 모음이 먼저 진행 (C→V)
    ConsonantToVowel,
    /// 모음 고정, 자음이 먼저 진행 (V→C)
    VowelToConsonant,
}

/// 진도 한 단계
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressionStep {
    pub consonant: char,
    pub vowel: char,
    pub glyph: String,
    pub block_type: BlockType,
    pub status: PairStatus,
    /// 현재 자음 순서에서의 인덱스
    pub index_c: usize,
    /// 현재 모음 순서에서의 인덱스
    pub index_v: usize,
}

/// CV 쌍 -> (음절, 블록 유형, 상태) 조회 콜백
pub type SyllableLookup = Box<dyn Fn(char, char) -> (String, BlockType, PairStatus)>;

/// 진도 컨트롤러
///
/// 건너뛰기 규칙:
/// - `Impossible` 쌍은 항상 건너뜀
/// - `Rare` 쌍은 포함 옵션이 꺼져 있으면 건너뜀
/// - `NotUsed` 쌍은 건너뛰지 않음
pub struct ProgressionController {
    consonant_order: Vec<char>,
    vowel_basic: Vec<char>,
    vowel_adv: Vec<char>,
    lookup: SyllableLookup,
    mode: ProgressionMode,
    anchor_c: Option<char>,
    anchor_v: Option<char>,
    include_rare: bool,
    use_advanced_vowels: bool,
    ci: usize,
    vi: usize,
}

impl ProgressionController {
    pub fn new(
        consonant_order: Vec<char>,
        vowel_basic: Vec<char>,
        vowel_adv: Vec<char>,
        lookup: SyllableLookup,
    ) -> Self {
        Self {
            consonant_order,
            vowel_basic,
            vowel_adv,
            lookup,
            mode: ProgressionMode::ConsonantToVowel,
            anchor_c: None,
            anchor_v: None,
            include_rare: false,
            use_advanced_vowels: false,
            ci: 0,
            vi: 0,
        }
    }

    pub fn set_mode(&mut self, mode: ProgressionMode) {
        self.mode = mode;
        self.align_to_anchors();
        self.clamp_indices();
    }

    pub fn set_anchor_consonant(&mut self, c: char) {
        self.anchor_c = Some(c);
        self.align_to_anchors();
        self.clamp_indices();
    }

    pub fn set_anchor_vowel(&mut self, v: char) {
        self.anchor_v = Some(v);
        self.align_to_anchors();
        self.clamp_indices();
    }

    pub fn set_include_rare(&mut self, include: bool) {
        self.include_rare = include;
    }

    pub fn set_use_advanced_vowels(&mut self, use_adv: bool) {
        self.use_advanced_vowels = use_adv;
        self.align_to_anchors();
        self.clamp_indices();
    }

    /// 처음으로 되돌림 (고정 자모는 유지)
    pub fn reset(&mut self) {
        self.ci = 0;
        self.vi = 0;
        self.align_to_anchors();
        self.clamp_indices();
    }

    /// 현재 단계 (진행하지 않음). 순서가 비어 있으면 None.
    pub fn current(&self) -> Option<ProgressionStep> {
        if self.consonant_order.is_empty() || self.active_vowels().is_empty() {
            return None;
        }
        Some(self.step_at(self.ci, self.vi))
    }

    /// 다음 허용 단계로 진행
    pub fn next(&mut self) -> Option<ProgressionStep> {
        self.advance(1)
    }

    /// 이전 허용 단계로 진행
    pub fn prev(&mut self) -> Option<ProgressionStep> {
        self.advance(-1)
    }

    /// 진행 방향 기준의 진척 요약 (예: "3/10 vowels")
    pub fn progress_summary(&self) -> String {
        if self.is_vowel_major() {
            let total = self.active_vowels().len().max(1);
            let current = (self.vi + 1).min(total);
            format!("{}/{} vowels", current, total)
        } else {
            let total = self.consonant_order.len().max(1);
            let current = (self.ci + 1).min(total);
            format!("{}/{} consonants", current, total)
        }
    }

    fn active_vowels(&self) -> &[char] {
        if self.use_advanced_vowels {
            &self.vowel_adv
        } else {
            &self.vowel_basic
        }
    }

    /// C→V 모드에서는 모음이 빠르게 도는 축
    fn is_vowel_major(&self) -> bool {
        matches!(self.mode, ProgressionMode::ConsonantToVowel)
    }

    fn align_to_anchors(&mut self) {
        if let Some(c) = self.anchor_c {
            if let Some(i) = self.consonant_order.iter().position(|&j| j == c) {
                self.ci = i;
            }
        }
        if let Some(v) = self.anchor_v {
            if let Some(i) = self.active_vowels().iter().position(|&j| j == v) {
                self.vi = i;
            }
        }
    }

    fn clamp_indices(&mut self) {
        if self.consonant_order.is_empty() {
            self.ci = 0;
        } else {
            self.ci = self.ci.min(self.consonant_order.len() - 1);
        }
        let v_count = self.active_vowels().len();
        if v_count == 0 {
            self.vi = 0;
        } else {
            self.vi = self.vi.min(v_count - 1);
        }
    }

    fn advance(&mut self, delta: i32) -> Option<ProgressionStep> {
        if self.consonant_order.is_empty() || self.active_vowels().is_empty() {
            return None;
        }

        // 모든 쌍이 건너뛰기 대상이어도 종료되도록 순회 횟수를 제한
        let max_guard = self.consonant_order.len() * self.active_vowels().len() + 5;
        let mut ci = self.ci;
        let mut vi = self.vi;

        for _ in 0..max_guard {
            let (next_ci, next_vi) = self.advance_indices(ci, vi, delta);
            ci = next_ci;
            vi = next_vi;

            let step = self.step_at(ci, vi);
            if self.is_step_allowed(&step) {
                self.ci = ci;
                self.vi = vi;
                return Some(step);
            }
        }

        // 허용되는 단계를 찾지 못하면 제자리
        self.current()
    }

    fn advance_indices(&self, ci: usize, vi: usize, delta: i32) -> (usize, usize) {
        let c_count = self.consonant_order.len() as i64;
        let v_count = self.active_vowels().len() as i64;
        let mut ci = ci as i64;
        let mut vi = vi as i64;
        let delta = i64::from(delta);

        if self.is_vowel_major() {
            vi += delta;
            if vi >= v_count {
                vi = 0;
                ci += 1;
            } else if vi < 0 {
                vi = v_count - 1;
                ci -= 1;
            }
            if ci >= c_count {
                ci = 0;
            } else if ci < 0 {
                ci = c_count - 1;
            }
        } else {
            ci += delta;
            if ci >= c_count {
                ci = 0;
                vi += 1;
            } else if ci < 0 {
                ci = c_count - 1;
                vi -= 1;
            }
            if vi >= v_count {
                vi = 0;
            } else if vi < 0 {
                vi = v_count - 1;
            }
        }

        (ci as usize, vi as usize)
    }

    fn is_step_allowed(&self, step: &ProgressionStep) -> bool {
        match step.status {
            PairStatus::Impossible => false,
            PairStatus::Rare => self.include_rare,
            _ => true,
        }
    }

    fn step_at(&self, ci: usize, vi: usize) -> ProgressionStep {
        let consonant = self.consonant_order[ci];
        let vowel = self.active_vowels()[vi];
        let (glyph, block_type, status) = (self.lookup)(consonant, vowel);
        ProgressionStep {
            consonant,
            vowel,
            glyph,
            block_type,
            status,
            index_c: ci,
            index_v: vi,
        }
    }
}
