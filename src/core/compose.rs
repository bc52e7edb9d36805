//! 유니코드 한글 음절 조합/분해
//!
//! 완성형 음절 코드포인트 산술:
//! `0xAC00 + (초성 * 21 + 중성) * 28 + 종성`

use crate::core::jamo::{
    choseong_index, jongseong_index, jungseong_index, CHOSEONG_COUNT, COMPAT_CHO, COMPAT_JUNG,
    HANGUL_SYLLABLE_BASE, HANGUL_SYLLABLE_LAST, JONGSEONG, JONGSEONG_COUNT, JUNGSEONG_COUNT,
};

/// 초성/중성/종성 인덱스로 완성형 한글 유니코드 생성
/// - choseong: 초성 인덱스 (0~18)
/// - jungseong: 중성 인덱스 (0~20)
/// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return None;
    }
    let code = HANGUL_SYLLABLE_BASE
        + (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT
        + jongseong;
    char::from_u32(code)
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_indices(c: char) -> Option<(u32, u32, u32)> {
    let code = c as u32;
    if !(HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&code) {
        return None;
    }
    let offset = code - HANGUL_SYLLABLE_BASE;
    let jongseong = offset % JONGSEONG_COUNT;
    let jungseong = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    Some((choseong, jungseong, jongseong))
}

/// 자모 문자로 완성형 음절 조합
///
/// 입력 앞뒤 공백은 무시한다. 초성/중성이 비었거나 어느 한 구성요소라도
/// 테이블에 없으면 빈 문자열을 반환한다 (오류가 아닌 복구 가능한 실패).
/// 종성은 빈 문자열이면 "종성 없음"으로 처리.
pub fn compose(lead: &str, vowel: &str, tail: &str) -> String {
    let l = lead.trim();
    let v = vowel.trim();
    let t = tail.trim();

    if l.is_empty() || v.is_empty() {
        return String::new();
    }

    let li = match single_char(l).and_then(choseong_index) {
        Some(i) => i,
        None => return String::new(),
    };
    let vi = match single_char(v).and_then(jungseong_index) {
        Some(i) => i,
        None => return String::new(),
    };
    let ti = match jongseong_index(t) {
        Some(i) => i,
        None => return String::new(),
    };

    match compose_syllable(li, vi, ti) {
        Some(c) => c.to_string(),
        None => String::new(),
    }
}

/// 초성 + 중성만으로 음절 조합 (종성 없음)
pub fn compose_cv(lead: &str, vowel: &str) -> String {
    compose(lead, vowel, "")
}

/// 완성형 음절에서 (초성, 중성) 호환용 자모 추출
///
/// 문자열이 들어오면 첫 문자만 본다. 완성형 한글이 아니거나 계산된
/// 인덱스가 테이블 범위를 벗어나면 None. 종성은 이 연산에서 버려진다
/// (종성까지 필요하면 `decompose_lvt` 사용).
pub fn decompose_syllable(s: &str) -> Option<(char, char)> {
    let c = s.chars().next()?;
    let (cho, jung, _jong) = decompose_indices(c)?;
    // 산술상 범위 안이지만 테이블 접근은 방어적으로
    let lead = *COMPAT_CHO.get(cho as usize)?;
    let vowel = *COMPAT_JUNG.get(jung as usize)?;
    Some((lead, vowel))
}

/// 완성형 음절을 (초성, 중성, 종성)으로 전체 분해
///
/// 종성이 없으면 세 번째 요소는 빈 문자열.
pub fn decompose_lvt(s: &str) -> Option<(char, char, &'static str)> {
    let c = s.chars().next()?;
    let (cho, jung, jong) = decompose_indices(c)?;
    let lead = *COMPAT_CHO.get(cho as usize)?;
    let vowel = *COMPAT_JUNG.get(jung as usize)?;
    let tail = *JONGSEONG.get(jong as usize)?;
    Some((lead, vowel, tail))
}

/// 정확히 한 문자인 경우 그 문자를 반환
fn single_char(s: &str) -> Option<char> {
    let mut it = s.chars();
    match (it.next(), it.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
