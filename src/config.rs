//! 학습 설정 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::study::progression::ProgressionMode;

/// Ilki 학습 설정
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StudyConfig {
    /// 진도 진행 방향
    #[serde(default = "default_mode")]
    pub mode: ProgressionMode,
    /// 드문 CV 쌍도 진도에 포함할지
    #[serde(default)]
    pub include_rare: bool,
    /// 확장(복합) 모음 순서 사용 여부
    #[serde(default)]
    pub use_advanced_vowels: bool,
    /// 로마자 표기 힌트 표시 여부
    #[serde(default = "default_show_rr_cues")]
    pub show_rr_cues: bool,
}

fn default_mode() -> ProgressionMode {
    ProgressionMode::ConsonantToVowel
}

fn default_show_rr_cues() -> bool {
    true
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            include_rare: false,
            use_advanced_vowels: false,
            show_rr_cues: default_show_rr_cues(),
        }
    }
}

/// 설정 파일 경로: ~/.config/ilki/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백 (쓰기 가능, /tmp보다 안전)
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("ilki").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> StudyConfig {
    let path = config_path();
    match fs::read_to_string(&path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|_| StudyConfig::default()),
        Err(_) => StudyConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &StudyConfig) -> Result<(), String> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(&path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}
