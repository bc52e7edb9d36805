//! Ilki - 한글 읽기/발음 학습 CLI
//!
//! 기본 동작은 입력 텍스트의 로마자 표기 출력.
//! `--details`는 음절별 발음 설명, `--drill N`은 진도 걷기.

use std::path::Path;
use std::process;

use ilki::config::load_config;
use ilki::core::compose::decompose_syllable;
use ilki::core::romanize::{romanize_cv, romanize_text};
use ilki::study::order::JamoOrder;
use ilki::study::progression::{ProgressionController, ProgressionStep};
use ilki::study::syllables::SyllableRepository;

fn usage() -> ! {
    eprintln!("사용법: ilki [--json|--details] <텍스트>");
    eprintln!("       ilki --drill <단계 수>");
    process::exit(1);
}

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        usage();
    }

    match args[0].as_str() {
        "--drill" => {
            let steps: usize = match args.get(1).and_then(|s| s.parse().ok()) {
                Some(n) => n,
                None => usage(),
            };
            run_drill(steps);
        }
        "--json" => {
            let text = join_text(&args[1..]);
            let result = romanize_text(&text);
            match serde_json::to_string_pretty(&result) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    log::error!("결과 직렬화 실패: {}", e);
                    process::exit(1);
                }
            }
        }
        "--details" => {
            let text = join_text(&args[1..]);
            run_details(&text);
        }
        _ => {
            let text = join_text(&args);
            println!("{}", romanize_text(&text).rr);
        }
    }
}

fn join_text(args: &[String]) -> String {
    if args.is_empty() {
        usage();
    }
    args.join(" ")
}

/// 음절별 발음 설명 출력
fn run_details(text: &str) {
    let config = load_config();

    for ch in text.chars() {
        let s = ch.to_string();
        match decompose_syllable(&s) {
            Some((cons, vow)) => {
                let result = romanize_cv(&cons.to_string(), &vow.to_string(), None);
                if config.show_rr_cues {
                    println!("{}: {} — {}", ch, result.rr, result.hint);
                } else {
                    println!("{}: {}", ch, result.rr);
                }
            }
            None => println!("{}: (한글 음절 아님)", ch),
        }
    }
}

/// 저장된 설정대로 진도를 걸어가며 출력
fn run_drill(steps: usize) {
    let config = load_config();
    let order = JamoOrder::load(Path::new("data/jamo_order.json"));
    let repo = SyllableRepository::load(Path::new("data/syllables.json"));

    let mut ctrl = ProgressionController::new(
        order.consonants().to_vec(),
        order.vowels_basic10().to_vec(),
        order.vowels_advanced().to_vec(),
        Box::new(move |c, v| repo.lookup(c, v)),
    );
    ctrl.set_mode(config.mode);
    ctrl.set_include_rare(config.include_rare);
    ctrl.set_use_advanced_vowels(config.use_advanced_vowels);

    let first = match ctrl.current() {
        Some(step) => step,
        None => {
            log::error!("자모 순서가 비어 있어 진도를 시작할 수 없습니다");
            process::exit(1);
        }
    };

    print_step(1, &first, &ctrl.progress_summary(), config.show_rr_cues);
    for n in 2..=steps {
        match ctrl.next() {
            Some(step) => print_step(n, &step, &ctrl.progress_summary(), config.show_rr_cues),
            None => break,
        }
    }
}

fn print_step(n: usize, step: &ProgressionStep, summary: &str, show_rr: bool) {
    let glyph = if step.glyph.is_empty() {
        "·"
    } else {
        step.glyph.as_str()
    };
    if show_rr {
        let rr = romanize_cv(&step.consonant.to_string(), &step.vowel.to_string(), None).rr;
        println!(
            "{:>3}. {} ({})  {}  [{}]",
            n,
            glyph,
            rr,
            step.block_type.name(),
            summary
        );
    } else {
        println!("{:>3}. {}  {}  [{}]", n, glyph, step.block_type.name(), summary);
    }
}
