//! 단어 목록 (사전 포함 여부 판정)

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::error::GameError;
use super::word::Word;

/// 추측 단어가 허용되는 단어인지 판정
pub trait WordList {
    fn is_valid_word(&self, word: &Word) -> bool;
}

/// 모든 두 음절 단어를 허용
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl WordList for AcceptAll {
    fn is_valid_word(&self, _word: &Word) -> bool {
        true
    }
}

impl WordList for HashSet<Word> {
    fn is_valid_word(&self, word: &Word) -> bool {
        self.contains(word)
    }
}

impl WordList for [Word] {
    fn is_valid_word(&self, word: &Word) -> bool {
        self.contains(word)
    }
}

/// 한 줄에 한 단어씩 적힌 텍스트에서 단어 목록 생성
/// 빈 줄과 `#` 주석, 두 음절이 아닌 줄은 건너뜀
pub fn parse_word_list(content: &str) -> HashSet<Word> {
    let mut words = HashSet::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match Word::parse(line) {
            Ok(word) => {
                words.insert(word);
            }
            Err(e) => log::debug!("단어 목록 항목 무시: {}", e),
        }
    }
    words
}

/// 단어 목록 파일 로드
pub fn load_word_list(path: impl AsRef<Path>) -> Result<HashSet<Word>, GameError> {
    let content = fs::read_to_string(path.as_ref())?;
    let words = parse_word_list(&content);
    log::info!(
        "단어 목록 로드: {} ({}개)",
        path.as_ref().display(),
        words.len()
    );
    Ok(words)
}
