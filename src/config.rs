//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 게임 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// 라운드당 추측 횟수
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
    /// 정답과 공유하는 자모가 하나도 없는 추측을 거부할지 여부
    #[serde(default)]
    pub reject_unrelated_guesses: bool,
    /// 단어 목록 파일 경로 (없으면 모든 두 음절 단어 허용)
    #[serde(default)]
    pub word_list_path: Option<String>,
}

fn default_max_attempts() -> usize {
    6
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            reject_unrelated_guesses: false,
            word_list_path: None,
        }
    }
}

impl GameConfig {
    /// 새 설정 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 추측 횟수 설정
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// 무관한 추측 거부 여부 설정
    pub fn with_reject_unrelated_guesses(mut self, reject: bool) -> Self {
        self.reject_unrelated_guesses = reject;
        self
    }

    /// 단어 목록 경로 설정
    pub fn with_word_list_path(mut self, path: impl Into<String>) -> Self {
        self.word_list_path = Some(path.into());
        self
    }
}

/// 설정 파일 경로: ~/.config/hanwordle/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("hanwordle").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> GameConfig {
    load_config_from(&config_path())
}

/// 지정한 경로에서 설정 로드
pub fn load_config_from(path: &Path) -> GameConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패, 기본값 사용: {}", e);
            GameConfig::default()
        }),
        Err(_) => GameConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &GameConfig) -> Result<PathBuf, String> {
    let path = config_path();
    save_config_to(&path, config)?;
    Ok(path)
}

/// 지정한 경로에 설정 저장 (상위 디렉토리 생성)
pub fn save_config_to(path: &Path, config: &GameConfig) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}
