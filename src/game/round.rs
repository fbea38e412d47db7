//! 게임 라운드 진행 상태
//!
//! 정답 하나에 대한 추측 기록과 남은 횟수, 승패 상태를 관리합니다.
//! 정답 선택, 단어 목록, 저장소는 호출 측에서 주입합니다.

use serde::{Deserialize, Serialize};

use super::dictionary::WordList;
use super::error::GameError;
use super::evaluator::{evaluate_word, is_all_wrong, HintCategory};
use super::word::{Word, WORD_LENGTH};
use crate::config::GameConfig;

/// 기록 문자열에서 단어와 힌트 코드 구분자
const RECORD_SEPARATOR: char = ':';

/// 라운드 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

/// 추측 한 번의 결과 (생성 후 변경 불가)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessResult {
    pub word: Word,
    pub hints: [HintCategory; WORD_LENGTH],
}

impl GuessResult {
    /// 두 음절 모두 일치하는지
    pub fn is_correct(&self) -> bool {
        self.hints.iter().all(|&hint| hint == HintCategory::Match)
    }

    /// 저장용 문자열 (예: `사과:ME`)
    pub fn to_record(&self) -> String {
        let codes: String = self.hints.iter().map(|hint| hint.code()).collect();
        format!("{}{}{}", self.word, RECORD_SEPARATOR, codes)
    }

    /// 저장용 문자열에서 복원
    pub fn from_record(record: &str) -> Result<Self, GameError> {
        let invalid = || GameError::InvalidRecord(record.to_string());

        let (word, codes) = record.split_once(RECORD_SEPARATOR).ok_or_else(invalid)?;
        let word = Word::parse(word).map_err(|_| invalid())?;

        let hints: Vec<HintCategory> = codes
            .trim()
            .chars()
            .map(HintCategory::from_code)
            .collect::<Option<_>>()
            .ok_or_else(invalid)?;
        let hints: [HintCategory; WORD_LENGTH] = hints.try_into().map_err(|_| invalid())?;

        Ok(GuessResult { word, hints })
    }
}

/// 게임 라운드
#[derive(Debug, Clone)]
pub struct GameRound {
    secret: Word,
    max_attempts: usize,
    reject_unrelated_guesses: bool,
    guesses: Vec<GuessResult>,
    status: RoundStatus,
}

impl GameRound {
    /// 정답과 설정으로 새 라운드 시작
    pub fn new(secret: &str, config: &GameConfig) -> Result<Self, GameError> {
        let secret = Word::parse(secret)?;
        Ok(Self {
            secret,
            max_attempts: config.max_attempts.max(1),
            reject_unrelated_guesses: config.reject_unrelated_guesses,
            guesses: Vec::new(),
            status: RoundStatus::InProgress,
        })
    }

    /// 저장된 기록으로 라운드 복원
    ///
    /// 각 기록을 다시 평가하여 저장된 힌트 코드와 다르면 [`GameError::InvalidRecord`].
    pub fn restore<S: AsRef<str>>(
        secret: &str,
        config: &GameConfig,
        records: &[S],
    ) -> Result<Self, GameError> {
        let mut round = Self::new(secret, config)?;
        for record in records {
            let record = record.as_ref();
            let stored = GuessResult::from_record(record)?;
            if round.is_over() {
                return Err(GameError::InvalidRecord(record.to_string()));
            }
            let replayed = round.apply(stored.word);
            if replayed.hints != stored.hints {
                log::warn!("기록 힌트 불일치: {} (재평가: {})", record, replayed.to_record());
                return Err(GameError::InvalidRecord(record.to_string()));
            }
        }
        Ok(round)
    }

    /// 추측 제출
    ///
    /// 거부된 추측은 횟수를 소모하지 않습니다.
    pub fn submit<W>(&mut self, guess: &str, words: &W) -> Result<&GuessResult, GameError>
    where
        W: WordList + ?Sized,
    {
        if self.is_over() {
            return Err(GameError::RoundOver);
        }

        let word = Word::parse(guess)?;
        if !words.is_valid_word(&word) {
            return Err(GameError::NotInWordList(word.to_string()));
        }
        if self.reject_unrelated_guesses
            && word
                .syllables()
                .iter()
                .all(|&syllable| is_all_wrong(syllable, &self.secret))
        {
            return Err(GameError::UnrelatedGuess(word.to_string()));
        }

        Ok(self.apply(word))
    }

    /// 검증된 추측을 평가하여 기록에 추가하고 상태 갱신
    fn apply(&mut self, word: Word) -> &GuessResult {
        let result = GuessResult {
            word,
            hints: evaluate_word(&word, &self.secret),
        };
        log::debug!("추측 {}/{}: {}", self.guesses.len() + 1, self.max_attempts, result.to_record());

        if result.is_correct() {
            self.status = RoundStatus::Won;
            log::info!("정답: {} ({}번째 시도)", self.secret, self.guesses.len() + 1);
        } else if self.guesses.len() + 1 >= self.max_attempts {
            self.status = RoundStatus::Lost;
            log::info!("실패: 정답은 {}", self.secret);
        }

        self.guesses.push(result);
        &self.guesses[self.guesses.len() - 1]
    }

    pub fn secret(&self) -> &Word {
        &self.secret
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status != RoundStatus::InProgress
    }

    /// 지금까지의 추측 결과 (제출 순서)
    pub fn guesses(&self) -> &[GuessResult] {
        &self.guesses
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    pub fn attempts_remaining(&self) -> usize {
        self.max_attempts.saturating_sub(self.guesses.len())
    }

    /// 저장용 기록 목록
    pub fn records(&self) -> Vec<String> {
        self.guesses.iter().map(GuessResult::to_record).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::dictionary::AcceptAll;
    use std::collections::HashSet;

    fn round(secret: &str) -> GameRound {
        GameRound::new(secret, &GameConfig::default()).unwrap()
    }

    #[test]
    fn test_win() {
        let mut round = round("사랑");
        let result = *round.submit("사과", &AcceptAll).unwrap();
        assert_eq!(result.hints, [HintCategory::Match, HintCategory::Exists]);
        assert_eq!(round.status(), RoundStatus::InProgress);
        assert_eq!(round.attempts_remaining(), 5);

        let result = *round.submit("사랑", &AcceptAll).unwrap();
        assert!(result.is_correct());
        assert_eq!(round.status(), RoundStatus::Won);
        assert!(matches!(round.submit("사랑", &AcceptAll), Err(GameError::RoundOver)));
        assert_eq!(round.guesses().len(), 2);
    }

    #[test]
    fn test_lose_after_max_attempts() {
        let config = GameConfig::new().with_max_attempts(2);
        let mut round = GameRound::new("사랑", &config).unwrap();
        round.submit("두부", &AcceptAll).unwrap();
        assert_eq!(round.status(), RoundStatus::InProgress);
        round.submit("가수", &AcceptAll).unwrap();
        assert_eq!(round.status(), RoundStatus::Lost);
        assert_eq!(round.attempts_remaining(), 0);
        assert!(matches!(round.submit("사랑", &AcceptAll), Err(GameError::RoundOver)));
    }

    #[test]
    fn test_rejected_guess_does_not_consume_attempt() {
        let mut round = round("사랑");
        assert!(matches!(
            round.submit("사", &AcceptAll),
            Err(GameError::InvalidWordShape(_))
        ));

        let words: HashSet<Word> = [Word::parse("사과").unwrap()].into_iter().collect();
        assert!(matches!(
            round.submit("하늘", &words),
            Err(GameError::NotInWordList(_))
        ));
        assert!(round.submit("사과", &words).is_ok());
        assert_eq!(round.attempts_remaining(), 5);
    }

    #[test]
    fn test_reject_unrelated_guesses() {
        let config = GameConfig::new().with_reject_unrelated_guesses(true);
        let mut round = GameRound::new("사랑", &config).unwrap();
        assert!(matches!(
            round.submit("두부", &AcceptAll),
            Err(GameError::UnrelatedGuess(_))
        ));
        // 한 음절이라도 겹치면 허용
        assert!(round.submit("두사", &AcceptAll).is_ok());
        assert!(round.guesses().len() == 1);
    }

    #[test]
    fn test_huge_max_attempts() {
        let config: GameConfig =
            serde_json::from_str(r#"{"max_attempts": 18446744073709551615}"#).unwrap();
        let mut round = GameRound::new("사랑", &config).unwrap();
        assert_eq!(round.attempts_remaining(), usize::MAX);
        round.submit("사과", &AcceptAll).unwrap();
        assert_eq!(round.attempts_remaining(), usize::MAX - 1);
    }

    #[test]
    fn test_invalid_secret() {
        assert!(matches!(
            GameRound::new("사랑해", &GameConfig::default()),
            Err(GameError::InvalidWordShape(_))
        ));
    }

    #[test]
    fn test_record_round_trip() {
        let mut round = round("사랑");
        round.submit("가수", &AcceptAll).unwrap();
        round.submit("사과", &AcceptAll).unwrap();
        let records = round.records();
        assert_eq!(records, vec!["가수:EO".to_string(), "사과:ME".to_string()]);

        let restored = GameRound::restore("사랑", &GameConfig::default(), &records).unwrap();
        assert_eq!(restored.guesses(), round.guesses());
        assert_eq!(restored.attempts_remaining(), 4);
    }

    #[test]
    fn test_restore_rejects_tampered_record() {
        let records = ["사과:MM"];
        assert!(matches!(
            GameRound::restore("사랑", &GameConfig::default(), &records),
            Err(GameError::InvalidRecord(_))
        ));
    }

    #[test]
    fn test_restore_rejects_records_after_round_over() {
        let records = ["사랑:MM", "사과:ME"];
        assert!(matches!(
            GameRound::restore("사랑", &GameConfig::default(), &records),
            Err(GameError::InvalidRecord(_))
        ));
    }

    #[test]
    fn test_from_record_malformed() {
        for record in ["사과", "사과:M", "사과:MEX", "사:ME", "사과:ZZ"] {
            assert!(
                matches!(GuessResult::from_record(record), Err(GameError::InvalidRecord(_))),
                "{record}"
            );
        }
    }

    #[test]
    fn test_guess_result_serde() {
        let result = GuessResult {
            word: Word::parse("사과").unwrap(),
            hints: [HintCategory::Match, HintCategory::Exists],
        };
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"word":"사과","hints":["match","exists"]}"#);
        let parsed: GuessResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }
}
