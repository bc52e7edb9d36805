//! 통합 테스트 - 조합/분해/로마자 표기 핵심 로직

use std::collections::HashSet;

use ilki::core::compose::{compose, compose_syllable, decompose_indices};
use ilki::core::jamo::{COMPAT_CHO, COMPAT_JUNG, JONGSEONG};
use ilki::study::{ProgressionController, ProgressionMode};
use ilki::{
    block_type_for_pair, compose_cv, decompose_syllable, romanize_cv, romanize_text, BlockType,
    PairStatus,
};

#[test]
fn test_compose_decompose_round_trip() {
    // 전체 조합 공간에서 초성/중성이 되돌아오는지 확인.
    // 종성은 decompose_syllable이 의도적으로 버리므로 왕복 대상이 아님.
    for li in 0..19u32 {
        for vi in 0..21u32 {
            for ti in 0..28u32 {
                let lead = COMPAT_CHO[li as usize];
                let vowel = COMPAT_JUNG[vi as usize];
                let tail = JONGSEONG[ti as usize];

                let glyph = compose(&lead.to_string(), &vowel.to_string(), tail);
                assert!(!glyph.is_empty(), "조합 실패: {} {} {:?}", lead, vowel, tail);

                let (dl, dv) = decompose_syllable(&glyph).unwrap();
                assert_eq!(dl, lead);
                assert_eq!(dv, vowel);
            }
        }
    }
}

#[test]
fn test_codepoint_bijection() {
    // 유효 인덱스 전체 곱집합은 정확히 11172개의 서로 다른 코드포인트
    let mut seen = HashSet::new();
    for li in 0..19u32 {
        for vi in 0..21u32 {
            for ti in 0..28u32 {
                let c = compose_syllable(li, vi, ti).unwrap();
                let cp = c as u32;
                assert!((0xAC00..=0xD7A3).contains(&cp));
                assert!(seen.insert(cp), "코드포인트 충돌: {:#X}", cp);
                assert_eq!(decompose_indices(c), Some((li, vi, ti)));
            }
        }
    }
    assert_eq!(seen.len(), 11172);
    assert_eq!(seen.iter().min(), Some(&0xAC00));
    assert_eq!(seen.iter().max(), Some(&0xD7A3));
}

#[test]
fn test_invalid_composition() {
    assert_eq!(compose("", "ㅏ", ""), "");
    assert_eq!(compose("ㄱ", "", ""), "");
    assert_eq!(compose("x", "ㅏ", ""), ""); // 초성 아님
    assert_eq!(compose_cv("", ""), "");
}

#[test]
fn test_invalid_decomposition() {
    assert_eq!(decompose_syllable("a"), None);
    assert_eq!(decompose_syllable("ㄱ"), None); // 낱자모는 완성형 아님
    assert_eq!(decompose_syllable("1"), None);
}

#[test]
fn test_romanization_literals() {
    assert_eq!(compose_cv("ㄱ", "ㅏ"), "가");

    let cv = romanize_cv("ㄱ", "ㅏ", None);
    assert_eq!(cv.rr, "ga");
    assert!(cv.hint.contains("ㄱ"));

    assert_eq!(romanize_text("가나").rr, "gana");

    let empty = romanize_text("");
    assert_eq!(empty.rr, "");
    assert_eq!(empty.hint, "");
}

#[test]
fn test_romanize_text_mixed_passthrough() {
    assert_eq!(romanize_text("가 나다!").rr, "ga nada!");
    assert_eq!(romanize_text("hello").rr, "hello");
}

#[test]
fn test_sh_shift_override() {
    let si = romanize_cv("ㅅ", "ㅣ", None);
    assert!(si.hint.contains("can sound sh-like before i/y"));

    let sa = romanize_cv("ㅅ", "ㅏ", None);
    assert!(!sa.hint.contains("sh-like"));
}

#[test]
fn test_repeated_calls_are_value_equal() {
    assert_eq!(romanize_cv("ㄴ", "ㅗ", None), romanize_cv("ㄴ", "ㅗ", None));
    assert_eq!(romanize_text("안녕"), romanize_text("안녕"));
    assert_eq!(compose("ㅎ", "ㅏ", "ㄴ"), compose("ㅎ", "ㅏ", "ㄴ"));
}

#[test]
fn test_block_classification() {
    assert_eq!(block_type_for_pair("ㄱ", "ㅏ"), BlockType::RightBranch);
    assert_eq!(block_type_for_pair("ㄴ", "ㅛ"), BlockType::TopBranch);
    assert_eq!(block_type_for_pair("ㅁ", "ㅝ"), BlockType::BottomBranch);
    assert_eq!(block_type_for_pair("ㄱ", "ㅣ"), BlockType::Horizontal);
    assert_eq!(block_type_for_pair("ㅁ", "ㅚ"), BlockType::TopBranch);
}

#[test]
fn test_progression_walks_composed_syllables() {
    let mut ctrl = ProgressionController::new(
        vec!['ㄱ', 'ㄴ', 'ㄷ'],
        vec!['ㅏ', 'ㅗ'],
        vec![],
        Box::new(|c, v| {
            let glyph = compose_cv(&c.to_string(), &v.to_string());
            let block = block_type_for_pair(&c.to_string(), &v.to_string());
            (glyph, block, PairStatus::Allowed)
        }),
    );

    assert_eq!(ctrl.current().unwrap().glyph, "가");
    assert_eq!(ctrl.next().unwrap().glyph, "고");
    assert_eq!(ctrl.next().unwrap().glyph, "나");

    ctrl.set_mode(ProgressionMode::VowelToConsonant);
    ctrl.reset();
    assert_eq!(ctrl.next().unwrap().glyph, "나");
    assert_eq!(ctrl.next().unwrap().glyph, "다");
    assert_eq!(ctrl.next().unwrap().glyph, "고");
}

#[test]
fn test_progression_full_cycle_returns_home() {
    let mut ctrl = ProgressionController::new(
        vec!['ㄱ', 'ㄴ'],
        vec!['ㅏ', 'ㅗ'],
        vec![],
        Box::new(|c, v| {
            (
                compose_cv(&c.to_string(), &v.to_string()),
                block_type_for_pair(&c.to_string(), &v.to_string()),
                PairStatus::Allowed,
            )
        }),
    );

    let home = ctrl.current().unwrap();
    for _ in 0..4 {
        ctrl.next();
    }
    assert_eq!(ctrl.current().unwrap(), home);
}
