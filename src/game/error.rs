//! 게임 진행 에러

/// 추측 평가/라운드 진행 에러
#[derive(Debug)]
pub enum GameError {
    /// 두 음절 완성형 한글 단어가 아님
    InvalidWordShape(String),
    /// 단어 목록에 없는 단어
    NotInWordList(String),
    /// 정답과 공유하는 자모가 하나도 없는 추측
    UnrelatedGuess(String),
    /// 이미 끝난 라운드
    RoundOver,
    /// 저장된 기록 형식 오류
    InvalidRecord(String),
    /// 파일 읽기 실패
    IoError(std::io::Error),
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::InvalidWordShape(s) => write!(f, "두 글자 한글 단어가 아닙니다: {:?}", s),
            GameError::NotInWordList(s) => write!(f, "단어 목록에 없는 단어입니다: {}", s),
            GameError::UnrelatedGuess(s) => write!(f, "정답과 겹치는 자모가 없습니다: {}", s),
            GameError::RoundOver => write!(f, "이미 끝난 게임입니다"),
            GameError::InvalidRecord(s) => write!(f, "기록 형식 오류: {}", s),
            GameError::IoError(e) => write!(f, "파일 읽기 오류: {}", e),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GameError {
    fn from(e: std::io::Error) -> Self {
        GameError::IoError(e)
    }
}
