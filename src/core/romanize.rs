//! 국어의 로마자 표기법(RR) 근사 변환 및 발음 힌트
//!
//! 표기/힌트/예시 테이블은 프로세스 전역 불변 맵으로 한 번만 초기화된다.
//! 변환은 항상 성공한다: 테이블에 없는 입력은 원문 그대로 돌려준다.

use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;
use serde::Serialize;

use crate::core::compose::decompose_indices;
use crate::core::jamo::{COMPAT_CHO, COMPAT_JUNG};

/// 분절 역할 (자음 / 모음)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RrRole {
    Consonant,
    Vowel,
}

/// 로마자 표기 분절 (표시용 구조화 데이터)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RrSegment {
    pub text: String,
    pub role: RrRole,
}

/// 로마자 표기 결과
///
/// - `rr`: 이어붙인 로마자 표기
/// - `hint`: 사람이 읽는 설명 (구성요소별 설명이 없으면 `rr`로 대체)
/// - `details`: 구성요소별 설명 줄
/// - `segments`: 구성요소별 분절 (음절/자모 쌍 경로에서만 채워짐)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RrResult {
    pub rr: String,
    pub hint: String,
    pub details: Vec<String>,
    pub segments: Vec<RrSegment>,
}

impl RrResult {
    fn empty() -> Self {
        Self {
            rr: String::new(),
            hint: String::new(),
            details: Vec::new(),
            segments: Vec::new(),
        }
    }
}

lazy_static! {
    /// 자음 -> 로마자 표기 (ㅇ은 초성에서 무음)
    static ref CONS_RR: HashMap<char, &'static str> = HashMap::from([
        ('ㄱ', "g"),
        ('ㄴ', "n"),
        ('ㄷ', "d"),
        ('ㄹ', "r"),
        ('ㅁ', "m"),
        ('ㅂ', "b"),
        ('ㅅ', "s"),
        ('ㅇ', ""),
        ('ㅈ', "j"),
        ('ㅊ', "ch"),
        ('ㅋ', "k"),
        ('ㅌ', "t"),
        ('ㅍ', "p"),
        ('ㅎ', "h"),
        ('ㄲ', "kk"),
        ('ㄸ', "tt"),
        ('ㅃ', "pp"),
        ('ㅆ', "ss"),
        ('ㅉ', "jj"),
    ]);

    /// 모음 -> 로마자 표기
    static ref VOWEL_RR: HashMap<char, &'static str> = HashMap::from([
        ('ㅏ', "a"),
        ('ㅓ', "eo"),
        ('ㅗ', "o"),
        ('ㅜ', "u"),
        ('ㅡ', "eu"),
        ('ㅣ', "i"),
        ('ㅐ', "ae"),
        ('ㅔ', "e"),
        ('ㅚ', "oe"),
        ('ㅟ', "wi"),
        ('ㅘ', "wa"),
        ('ㅝ', "wo"),
        ('ㅙ', "wae"),
        ('ㅞ', "we"),
        ('ㅢ', "ui"),
        ('ㅑ', "ya"),
        ('ㅕ', "yeo"),
        ('ㅛ', "yo"),
        ('ㅠ', "yu"),
        ('ㅒ', "yae"),
        ('ㅖ', "ye"),
    ]);

    /// 자음 발음 힌트 (일부만 별도 설명이 필요함)
    static ref CONS_HINTS: HashMap<char, &'static str> = HashMap::from([
        ('ㄱ', "between g/k (unaspirated)"),
        ('ㄷ', "between d/t (unaspirated)"),
        ('ㅂ', "between b/p (unaspirated)"),
        ('ㄹ', "r/l (light tap)"),
        ('ㅅ', "s"),
        ('ㅇ', "silent at start"),
        ('ㅈ', "j (unaspirated)"),
    ]);

    /// 모음 발음 힌트
    static ref VOWEL_HINTS: HashMap<char, &'static str> = HashMap::from([
        ('ㅏ', "a"),
        ('ㅓ', "eo (uh, more open)"),
        ('ㅗ', "o"),
        ('ㅜ', "u"),
        ('ㅡ', "eu (close to \"uh\")"),
        ('ㅣ', "i"),
        ('ㅐ', "ae"),
        ('ㅔ', "e"),
        ('ㅚ', "oe"),
        ('ㅟ', "wi"),
        ('ㅘ', "wa"),
        ('ㅝ', "wo"),
        ('ㅙ', "wae"),
        ('ㅞ', "we"),
        ('ㅢ', "ui"),
        ('ㅑ', "ya"),
        ('ㅕ', "yeo"),
        ('ㅛ', "yo"),
        ('ㅠ', "yu"),
        ('ㅒ', "yae"),
        ('ㅖ', "ye"),
    ]);

    /// 자음 영어 예시 단어
    static ref CONS_EXAMPLES: HashMap<char, &'static str> = HashMap::from([
        ('ㄱ', "go"),
        ('ㄴ', "no"),
        ('ㄷ', "day"),
        ('ㄹ', "ladder"),
        ('ㅁ', "man"),
        ('ㅂ', "boy"),
        ('ㅅ', "see"),
        ('ㅈ', "jam"),
        ('ㅊ', "chat"),
        ('ㅋ', "kite"),
        ('ㅌ', "tea"),
        ('ㅍ', "pie"),
        ('ㅎ', "hat"),
        ('ㄲ', "skate"),
        ('ㄸ', "stop"),
        ('ㅃ', "spot"),
        ('ㅆ', "sea"),
        ('ㅉ', "jeep"),
    ]);

    /// 모음 영어 예시 단어
    static ref VOWEL_EXAMPLES: HashMap<char, &'static str> = HashMap::from([
        ('ㅏ', "father"),
        ('ㅓ', "sun"),
        ('ㅗ', "go"),
        ('ㅜ', "food"),
        ('ㅡ', "sofa"),
        ('ㅣ', "see"),
        ('ㅐ', "cat"),
        ('ㅔ', "bed"),
        ('ㅚ', "way"),
        ('ㅟ', "we"),
        ('ㅘ', "waffle"),
        ('ㅝ', "wonder"),
        ('ㅙ', "wax"),
        ('ㅞ', "wet"),
        ('ㅢ', "we"),
        ('ㅑ', "yard"),
        ('ㅕ', "yawn"),
        ('ㅛ', "yoga"),
        ('ㅠ', "you"),
        ('ㅒ', "yeah"),
        ('ㅖ', "yes"),
    ]);

    /// 앞의 ㅅ을 sh처럼 들리게 하는 모음 (i/y 계열)
    static ref S_LIKE_VOWELS: HashSet<char> = HashSet::from([
        'ㅣ', 'ㅑ', 'ㅕ', 'ㅛ', 'ㅠ', 'ㅖ', 'ㅒ',
    ]);
}

/// 자모 한 쌍(자음 + 모음)의 로마자 표기와 발음 힌트 생성
///
/// 입력은 자모 문자 또는 빈 문자열. `"∅"`는 빈 문자열과 동일하게 취급
/// (호출자가 "소리 없음"을 명시할 때 사용). 테이블에 없는 입력은 원문을
/// 그대로 표기로 쓴다. 종성 인자는 받기만 하고 아직 소리에 반영하지 않음.
pub fn romanize_cv(consonant: &str, vowel: &str, _tail: Option<&str>) -> RrResult {
    let cons = normalize_jamo(consonant);
    let vow = normalize_jamo(vowel);

    let cons_rr = rr_spelling(&cons, &CONS_RR);
    let vow_rr = rr_spelling(&vow, &VOWEL_RR);
    let rr = format!("{}{}", cons_rr, vow_rr);

    let mut details: Vec<String> = Vec::new();
    let mut segments: Vec<RrSegment> = Vec::new();

    if !cons_rr.is_empty() {
        segments.push(RrSegment {
            text: cons_rr.clone(),
            role: RrRole::Consonant,
        });
    }
    if !vow_rr.is_empty() {
        segments.push(RrSegment {
            text: vow_rr.clone(),
            role: RrRole::Vowel,
        });
    }

    if !cons.is_empty() {
        let mut cons_hint = hint_for(&cons, &CONS_HINTS, &cons_rr);
        if cons == "ㅅ" && exactly_one_char(&vow).is_some_and(|v| S_LIKE_VOWELS.contains(&v)) {
            cons_hint = "s (can sound sh-like before i/y)".to_string();
        }
        details.push(detail_line(&cons, &cons_hint, &CONS_EXAMPLES));
    }
    if !vow.is_empty() {
        let vowel_hint = hint_for(&vow, &VOWEL_HINTS, &vow_rr);
        details.push(detail_line(&vow, &vowel_hint, &VOWEL_EXAMPLES));
    }

    let hint = if details.is_empty() {
        rr.clone()
    } else {
        details.join("; ")
    };

    RrResult {
        rr,
        hint,
        details,
        segments,
    }
}

/// 임의 문자열의 로마자 표기 생성
///
/// 코드포인트 단위로 처리한다. 완성형 한글은 초성/중성으로 분해해
/// 표기하고, 그 외 문자(공백, 문장부호 포함)는 그대로 통과시킨다.
/// 이 연산의 힌트는 음절별 상세가 아닌 두 줄 요약이며 분절은 비워둔다.
pub fn romanize_text(text: &str) -> RrResult {
    if text.is_empty() {
        return RrResult::empty();
    }

    let mut rr = String::new();
    for ch in text.chars() {
        match syllable_jamo_pair(ch) {
            Some((cons, vow)) => {
                rr.push_str(&romanize_cv(&cons.to_string(), &vow.to_string(), None).rr);
            }
            None => rr.push(ch),
        }
    }

    let details = vec![
        format!("RR spelling: {}", rr),
        format!("Pronunciation hint: {}", rr),
    ];
    let hint = details.join("\n");
    RrResult {
        rr,
        hint,
        details,
        segments: Vec::new(),
    }
}

/// 완성형 음절이면 (초성, 중성) 호환 자모 반환
fn syllable_jamo_pair(ch: char) -> Option<(char, char)> {
    let (cho, jung, _jong) = decompose_indices(ch)?;
    let cons = *COMPAT_CHO.get(cho as usize)?;
    let vow = *COMPAT_JUNG.get(jung as usize)?;
    Some((cons, vow))
}

/// 공백 제거 + "∅"(명시적 무음)를 빈 문자열로
fn normalize_jamo(s: &str) -> String {
    let t = s.trim();
    if t == "∅" {
        String::new()
    } else {
        t.to_string()
    }
}

/// 테이블에서 로마자 표기 조회, 없으면 입력 그대로
fn rr_spelling(jamo: &str, table: &HashMap<char, &'static str>) -> String {
    match exactly_one_char(jamo) {
        Some(c) => match table.get(&c) {
            Some(spelling) => (*spelling).to_string(),
            None => jamo.to_string(),
        },
        None => jamo.to_string(),
    }
}

/// 힌트 조회: 힌트 테이블 -> 로마자 표기 -> 원문 순서로 대체
fn hint_for(jamo: &str, table: &HashMap<char, &'static str>, rr: &str) -> String {
    if let Some(c) = exactly_one_char(jamo) {
        if let Some(hint) = table.get(&c) {
            return (*hint).to_string();
        }
    }
    if !rr.is_empty() {
        rr.to_string()
    } else {
        jamo.to_string()
    }
}

/// "<자모> = <힌트>, as in '<예시>'" 형식의 설명 줄 (예시 없으면 생략)
fn detail_line(jamo: &str, hint: &str, examples: &HashMap<char, &'static str>) -> String {
    let example = exactly_one_char(jamo).and_then(|c| examples.get(&c).copied());
    match example {
        Some(word) => format!("{} = {}, as in '{}'", jamo, hint, word),
        None => format!("{} = {}", jamo, hint),
    }
}

fn exactly_one_char(s: &str) -> Option<char> {
    let mut it = s.chars();
    match (it.next(), it.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_romanize_cv_basic() {
        let result = romanize_cv("ㄱ", "ㅏ", None);
        assert_eq!(result.rr, "ga");
        assert!(result.hint.contains("ㄱ"));
        assert!(result.hint.contains("ㅏ"));
    }

    #[test]
    fn test_romanize_cv_details() {
        let result = romanize_cv("ㄱ", "ㅏ", None);
        assert_eq!(result.details.len(), 2);
        assert_eq!(result.details[0], "ㄱ = between g/k (unaspirated), as in 'go'");
        assert_eq!(result.details[1], "ㅏ = a, as in 'father'");
        assert_eq!(result.hint, result.details.join("; "));
    }

    #[test]
    fn test_romanize_cv_segments() {
        let result = romanize_cv("ㄱ", "ㅏ", None);
        assert_eq!(result.segments.len(), 2);
        assert_eq!(result.segments[0].text, "g");
        assert_eq!(result.segments[0].role, RrRole::Consonant);
        assert_eq!(result.segments[1].text, "a");
        assert_eq!(result.segments[1].role, RrRole::Vowel);
    }

    #[test]
    fn test_romanize_cv_silent_ieung() {
        // ㅇ은 초성에서 무음: 표기는 모음만, 분절도 모음만
        let result = romanize_cv("ㅇ", "ㅏ", None);
        assert_eq!(result.rr, "a");
        assert_eq!(result.segments.len(), 1);
        assert_eq!(result.segments[0].role, RrRole::Vowel);
        // 설명에는 ㅇ도 포함됨
        assert!(result.hint.contains("silent at start"));
    }

    #[test]
    fn test_romanize_cv_vowel_only() {
        let result = romanize_cv("", "ㅏ", None);
        assert_eq!(result.rr, "a");
        assert_eq!(result.details.len(), 1);
        assert_eq!(result.segments.len(), 1);
    }

    #[test]
    fn test_romanize_cv_empty_set_marker() {
        // "∅"는 빈 문자열과 동일
        let marked = romanize_cv("∅", "ㅏ", None);
        let empty = romanize_cv("", "ㅏ", None);
        assert_eq!(marked, empty);
    }

    #[test]
    fn test_romanize_cv_both_empty() {
        let result = romanize_cv("", "", None);
        assert_eq!(result.rr, "");
        assert_eq!(result.hint, ""); // 설명이 없으면 rr로 대체
        assert!(result.details.is_empty());
        assert!(result.segments.is_empty());
    }

    #[test]
    fn test_romanize_cv_unknown_falls_back_verbatim() {
        // 테이블에 없는 입력은 원문 그대로
        let result = romanize_cv("?", "ㅏ", None);
        assert_eq!(result.rr, "?a");
        assert!(result.hint.contains("? = ?"));
    }

    #[test]
    fn test_sh_like_override() {
        let before_i = romanize_cv("ㅅ", "ㅣ", None);
        assert!(before_i.hint.contains("can sound sh-like before i/y"));

        let before_a = romanize_cv("ㅅ", "ㅏ", None);
        assert!(!before_a.hint.contains("sh-like"));
        assert!(before_a.hint.contains("ㅅ = s"));
    }

    #[test]
    fn test_sh_like_override_all_glide_vowels() {
        for v in ["ㅣ", "ㅑ", "ㅕ", "ㅛ", "ㅠ", "ㅖ", "ㅒ"] {
            let result = romanize_cv("ㅅ", v, None);
            assert!(result.hint.contains("sh-like"), "ㅅ + {} 힌트 누락", v);
        }
    }

    #[test]
    fn test_romanize_text_basic() {
        assert_eq!(romanize_text("가나").rr, "gana");
        assert_eq!(romanize_text("한").rr, "ha"); // 종성은 아직 소리에 반영 안 함
    }

    #[test]
    fn test_romanize_text_passthrough() {
        assert_eq!(romanize_text("가 나!").rr, "ga na!");
        assert_eq!(romanize_text("abc 123").rr, "abc 123");
        assert_eq!(romanize_text("ㄱ").rr, "ㄱ"); // 낱자모는 그대로 통과
    }

    #[test]
    fn test_romanize_text_hint_lines() {
        let result = romanize_text("가나");
        assert_eq!(
            result.details,
            vec![
                "RR spelling: gana".to_string(),
                "Pronunciation hint: gana".to_string(),
            ]
        );
        assert_eq!(result.hint, "RR spelling: gana\nPronunciation hint: gana");
        assert!(result.segments.is_empty());
    }

    #[test]
    fn test_romanize_text_empty() {
        let result = romanize_text("");
        assert_eq!(result.rr, "");
        assert_eq!(result.hint, "");
        assert!(result.details.is_empty());
        assert!(result.segments.is_empty());
    }

    #[test]
    fn test_repeated_calls_value_equal() {
        // 테이블은 불변이므로 같은 입력은 항상 같은 값
        assert_eq!(romanize_cv("ㄱ", "ㅏ", None), romanize_cv("ㄱ", "ㅏ", None));
        assert_eq!(romanize_text("한글"), romanize_text("한글"));
    }
}
