//! 추측 단어 평가
//!
//! 추측 단어의 각 음절을 정답 단어와 비교하여 힌트를 만듭니다.
//! 음절을 단순 자모 시퀀스로 펼친 뒤, 정답 쪽 자모 개수를 넘지 않도록
//! 제한한 다중집합 교집합 크기로 유사도를 판단합니다.
//!
//! 판정 우선순위 (위치 i, 반대 위치 1-i):
//! 1. 음절이 같으면 [`HintCategory::Match`]
//! 2. 공통 자모 2개 이상 + 초성 일치 -> [`HintCategory::Similar`]
//! 3. 공통 자모 2개 이상 -> [`HintCategory::Many`]
//! 4. 공통 자모 1개 -> [`HintCategory::Exists`]
//! 5. 반대 위치 음절과 공통 자모가 있으면 [`HintCategory::Opposite`]
//! 6. 그 외 [`HintCategory::None`]

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::word::{Word, WORD_LENGTH};
use crate::core::unicode::to_component_sequence;

/// 음절별 힌트 (선언 순서가 판정 우선순위)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HintCategory {
    /// 같은 음절
    Match,
    /// 초성이 같고 자모 2개 이상 일치
    Similar,
    /// 자모 2개 이상 일치
    Many,
    /// 자모 1개 일치
    Exists,
    /// 반대 위치 음절과 자모 일치
    Opposite,
    /// 일치하는 자모 없음
    None,
}

impl HintCategory {
    pub const ALL: [HintCategory; 6] = [
        HintCategory::Match,
        HintCategory::Similar,
        HintCategory::Many,
        HintCategory::Exists,
        HintCategory::Opposite,
        HintCategory::None,
    ];

    /// 저장용 한 글자 코드
    pub fn code(self) -> char {
        match self {
            HintCategory::Match => 'M',
            HintCategory::Similar => 'S',
            HintCategory::Many => 'Y',
            HintCategory::Exists => 'E',
            HintCategory::Opposite => 'O',
            HintCategory::None => 'N',
        }
    }

    /// 한 글자 코드 -> 힌트
    pub fn from_code(code: char) -> Option<Self> {
        Self::ALL.into_iter().find(|hint| hint.code() == code)
    }
}

/// 자모 시퀀스 사이의 공통 자모 개수 (정답 쪽 개수로 제한)
///
/// 추측에 같은 자모가 여러 번 나와도 정답에 있는 개수만큼만 셉니다.
pub fn capped_match_count(guess: &[char], target: &[char]) -> usize {
    let mut available: HashMap<char, usize> = HashMap::with_capacity(target.len());
    for &jamo in target {
        *available.entry(jamo).or_insert(0) += 1;
    }

    let mut count = 0;
    for jamo in guess {
        if let Some(remaining) = available.get_mut(jamo) {
            if *remaining > 0 {
                *remaining -= 1;
                count += 1;
            }
        }
    }
    count
}

/// 두 음절 사이의 공통 자모 개수
fn syllable_match_count(guess: char, target: char) -> usize {
    capped_match_count(&to_component_sequence(guess), &to_component_sequence(target))
}

/// 위치 하나의 힌트 판정
fn evaluate_position(guess: &Word, secret: &Word, index: usize) -> HintCategory {
    let guess_syllable = guess.syllables()[index];
    let secret_syllable = secret.syllables()[index];

    if guess_syllable == secret_syllable {
        return HintCategory::Match;
    }

    let guess_components = to_component_sequence(guess_syllable);
    let secret_components = to_component_sequence(secret_syllable);
    let match_count = capped_match_count(&guess_components, &secret_components);

    let first_consonant_match = match (guess_components.first(), secret_components.first()) {
        (Some(g), Some(s)) => g == s,
        _ => false,
    };

    if match_count >= 2 && first_consonant_match {
        return HintCategory::Similar;
    }
    if match_count >= 2 {
        return HintCategory::Many;
    }
    if match_count == 1 {
        return HintCategory::Exists;
    }

    let opposite_syllable = secret.syllables()[WORD_LENGTH - 1 - index];
    if syllable_match_count(guess_syllable, opposite_syllable) > 0 {
        HintCategory::Opposite
    } else {
        HintCategory::None
    }
}

/// 검증된 두 단어를 비교하여 음절별 힌트 반환
pub fn evaluate_word(guess: &Word, secret: &Word) -> [HintCategory; WORD_LENGTH] {
    [
        evaluate_position(guess, secret, 0),
        evaluate_position(guess, secret, 1),
    ]
}

/// 추측 단어를 정답과 비교하여 음절별 힌트 반환
///
/// 두 음절 완성형 한글이 아니면 [`GameError::InvalidWordShape`].
/// 사전 검사를 거치지 않은 호출이므로 경고 로그를 남깁니다.
pub fn evaluate(guess: &str, secret: &str) -> Result<[HintCategory; WORD_LENGTH], GameError> {
    let guess = Word::parse(guess).inspect_err(|e| log::warn!("추측 단어 평가 실패: {}", e))?;
    let secret = Word::parse(secret).inspect_err(|e| log::warn!("정답 단어 평가 실패: {}", e))?;
    Ok(evaluate_word(&guess, &secret))
}

/// 추측 음절 하나가 정답의 어느 음절과도 공통 자모가 없는지 확인
pub fn is_all_wrong(guess_syllable: char, secret: &Word) -> bool {
    secret
        .syllables()
        .iter()
        .all(|&target| syllable_match_count(guess_syllable, target) == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::parse(s).unwrap()
    }

    #[test]
    fn test_match_and_exists() {
        assert_eq!(
            evaluate("사과", "사랑").unwrap(),
            [HintCategory::Match, HintCategory::Exists]
        );
    }

    #[test]
    fn test_many_with_different_initial() {
        // 위치별 공통 자모 개수로 판정하면 [Exists, Many]
        // 아(ㅇㅏ) vs 랑(ㄹㅏㅇ): ㅇ, ㅏ 공통, 초성 다름
        // 강(ㄱㅏㅇ) vs 사(ㅅㅏ): ㅏ만 공통
        assert_eq!(
            evaluate("강아", "사랑").unwrap(),
            [HintCategory::Exists, HintCategory::Many]
        );
    }

    #[test]
    fn test_similar() {
        // 상(ㅅㅏㅇ) vs 사(ㅅㅏ): 2개 공통 + 초성 일치
        assert_eq!(
            evaluate("상추", "사랑").unwrap(),
            [HintCategory::Similar, HintCategory::None]
        );
    }

    #[test]
    fn test_opposite() {
        // 수(ㅅㅜ) vs 랑: 공통 없음, 반대 위치 사(ㅅㅏ)와 ㅅ 공통
        assert_eq!(
            evaluate("가수", "사랑").unwrap(),
            [HintCategory::Exists, HintCategory::Opposite]
        );
    }

    #[test]
    fn test_none() {
        assert_eq!(
            evaluate("두부", "사랑").unwrap(),
            [HintCategory::None, HintCategory::None]
        );
    }

    #[test]
    fn test_reflexive() {
        for w in ["사랑", "닭발", "뷁뷁", "가가"] {
            assert_eq!(
                evaluate(w, w).unwrap(),
                [HintCategory::Match, HintCategory::Match]
            );
        }
    }

    #[test]
    fn test_exact_match_short_circuits() {
        // 같은 음절이면 자모 비교 없이 Match (자모로만 보면 Similar)
        assert_eq!(
            evaluate("사사", "사랑").unwrap(),
            [HintCategory::Match, HintCategory::Exists]
        );
    }

    #[test]
    fn test_capped_match_count() {
        // 각(ㄱㅏㄱ) vs 고(ㄱㅗ): ㄱ은 정답에 한 번뿐
        assert_eq!(capped_match_count(&['ㄱ', 'ㅏ', 'ㄱ'], &['ㄱ', 'ㅗ']), 1);
        assert_eq!(capped_match_count(&['ㄱ', 'ㄱ'], &['ㄱ', 'ㄱ', 'ㄱ']), 2);
        assert_eq!(capped_match_count(&[], &['ㄱ']), 0);
        assert_eq!(capped_match_count(&['ㄱ'], &[]), 0);
    }

    #[test]
    fn test_repeated_jamo_not_overcounted() {
        // 각 vs 고: 제한 없이 세면 2개로 Similar가 되지만 실제로는 1개
        assert_eq!(
            evaluate("각자", "고래").unwrap()[0],
            HintCategory::Exists
        );
    }

    #[test]
    fn test_capped_count_bounded_by_target() {
        let targets = ['가', '닭', '뷁', '아'];
        let guesses = ['깍', '갉', '읽', '앙'];
        for &t in &targets {
            let target = to_component_sequence(t);
            for &g in &guesses {
                let guess = to_component_sequence(g);
                assert!(capped_match_count(&guess, &target) <= target.len());
            }
        }
    }

    #[test]
    fn test_invalid_shape() {
        assert!(matches!(
            evaluate("사", "사랑"),
            Err(GameError::InvalidWordShape(_))
        ));
        assert!(matches!(
            evaluate("사랑", "ㅅㅏ"),
            Err(GameError::InvalidWordShape(_))
        ));
        assert!(matches!(
            evaluate("사과나무", "사랑"),
            Err(GameError::InvalidWordShape(_))
        ));
    }

    #[test]
    fn test_is_all_wrong() {
        let secret = word("사랑");
        assert!(is_all_wrong('두', &secret));
        assert!(!is_all_wrong('수', &secret)); // ㅅ
        assert!(!is_all_wrong('앙', &secret)); // ㅏ, ㅇ
    }

    #[test]
    fn test_hint_order_and_codes() {
        assert!(HintCategory::Match < HintCategory::Similar);
        assert!(HintCategory::Opposite < HintCategory::None);

        for hint in HintCategory::ALL {
            assert_eq!(HintCategory::from_code(hint.code()), Some(hint));
        }
        assert_eq!(HintCategory::from_code('x'), None);
    }

    #[test]
    fn test_hint_serde() {
        let json = serde_json::to_string(&HintCategory::Opposite).unwrap();
        assert_eq!(json, "\"opposite\"");
        let hint: HintCategory = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(hint, HintCategory::None);
    }
}
