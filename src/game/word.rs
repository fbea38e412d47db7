//! 두 음절 단어

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::GameError;
use crate::core::unicode::is_syllable;

/// 단어 음절 수
pub const WORD_LENGTH: usize = 2;

/// 완성형 한글 두 음절 단어
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word([char; WORD_LENGTH]);

impl Word {
    /// 문자열을 단어로 변환 (앞뒤 공백 무시)
    pub fn parse(s: &str) -> Result<Self, GameError> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(first), Some(second), None) if is_syllable(first) && is_syllable(second) => {
                Ok(Word([first, second]))
            }
            _ => Err(GameError::InvalidWordShape(trimmed.to_string())),
        }
    }

    /// 음절 배열
    pub fn syllables(&self) -> [char; WORD_LENGTH] {
        self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0[0], self.0[1])
    }
}

impl FromStr for Word {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Word::parse(s)
    }
}

impl TryFrom<String> for Word {
    type Error = GameError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Word::parse(&s)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.to_string()
    }
}
