//! 두 음절 한글 단어 맞히기 게임의 핵심 로직
//!
//! 음절 조합/분해, 자모 입력 조합기, 추측 평가, 라운드 진행을 제공합니다.

pub mod config;
pub mod core;
pub mod game;

pub use crate::core::composer::{ComposerOutput, ComposerState, HangulComposer};
pub use crate::core::converter::{compose_jamo, convert};
pub use crate::game::{evaluate, is_all_wrong, GameError, GameRound, HintCategory, Word};
