//! 두 음절 단어 맞히기 게임
//!
//! # 사용 예시
//!
//! ```
//! use hanwordle::game::{evaluate, AcceptAll, GameRound, HintCategory, RoundStatus};
//! use hanwordle::config::GameConfig;
//!
//! assert_eq!(
//!     evaluate("사과", "사랑").unwrap(),
//!     [HintCategory::Match, HintCategory::Exists]
//! );
//!
//! let mut round = GameRound::new("사랑", &GameConfig::default()).unwrap();
//! round.submit("사과", &AcceptAll).unwrap();
//! round.submit("사랑", &AcceptAll).unwrap();
//! assert_eq!(round.status(), RoundStatus::Won);
//! ```

mod dictionary;
mod error;
mod evaluator;
mod round;
mod word;

// 공개 인터페이스
pub use dictionary::{load_word_list, parse_word_list, AcceptAll, WordList};
pub use error::GameError;
pub use evaluator::{capped_match_count, evaluate, evaluate_word, is_all_wrong, HintCategory};
pub use round::{GameRound, GuessResult, RoundStatus};
pub use word::{Word, WORD_LENGTH};
