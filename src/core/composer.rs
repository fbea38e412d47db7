//! 한글 입력 조합기 (칸 하나 단위의 유한 상태 기계)
//!
//! 자모를 하나씩 받아 현재 칸에서 조합 중인 글자를 돌려줍니다.
//! 더 이상 붙을 수 없는 자모가 들어오면 현재 글자를 `overflow`로 밀어내고
//! 새 칸에서 조합을 이어갑니다.

use crate::core::unicode::{
    choseong_index, choseong_to_jamo_char, combine_choseong, combine_jongseong,
    combine_jungseong, compose_syllable, is_vowel, jongseong_index, jongseong_to_choseong,
    jongseong_to_jamo_char, jungseong_index, jungseong_to_jamo_char, split_choseong,
    split_jongseong, split_jungseong, to_compatibility_jamo,
};

/// 받침 없는 모음 입력 시 채워 넣는 초성 ㅇ
const PLACEHOLDER_CHOSEONG: u32 = 11;

/// FSM 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// 아무것도 없음
    Empty,
    /// 초성만 입력됨
    Choseong,
    /// 초성+중성
    ChoseongJungseong,
    /// 초성+중성+종성
    ChoseongJungseongJongseong,
}

/// 자모 입력/백스페이스 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComposerOutput {
    /// 현재 칸에서 조합 중인 글자 (None = 빈 칸)
    pub current: Option<char>,
    /// 조합할 수 없어 이전 칸으로 확정된 글자
    pub overflow: Option<char>,
    /// 현재 글자가 확정되었는지 여부
    pub completed: bool,
}

/// 조합기 상태 스냅샷 (호환용 자모 형태)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComposerState {
    pub initial: Option<char>,
    pub medial: Option<char>,
    pub r#final: Option<char>,
    pub completed: bool,
}

/// 한글 조합기
///
/// 입력 칸 하나당 하나씩 소유합니다. 내부 상태를 변경하므로
/// 여러 스레드에서 공유하려면 호출 측에서 직렬화해야 합니다.
#[derive(Debug, Clone)]
pub struct HangulComposer {
    state: State,
    /// 현재 초성 인덱스
    choseong: u32,
    /// 현재 중성 인덱스
    jungseong: u32,
    /// 현재 종성 인덱스 (0 = 없음)
    jongseong: u32,
    /// 초성 ㅇ이 모음 단독 입력으로 채워진 자리표시인지
    placeholder: bool,
    completed: bool,
}

impl HangulComposer {
    /// 빈 조합기 생성
    pub fn new() -> Self {
        Self {
            state: State::Empty,
            choseong: 0,
            jungseong: 0,
            jongseong: 0,
            placeholder: false,
            completed: false,
        }
    }

    /// 자모 하나를 입력
    ///
    /// 자모가 아닌 문자(또는 초성이 될 수 없는 겹받침 자모)는 상태를 바꾸지 않고
    /// 빈 결과를 돌려줍니다.
    pub fn input_jamo(&mut self, jamo: char) -> ComposerOutput {
        let jamo = to_compatibility_jamo(jamo);

        let overflow = if let Some(cho) = choseong_index(jamo) {
            self.feed_consonant(cho, jongseong_index(jamo))
        } else if is_vowel(jamo) {
            match jungseong_index(jamo) {
                Some(jung) => self.feed_vowel(jung),
                None => return ComposerOutput::default(),
            }
        } else {
            log::trace!("조합 불가 입력 무시: {:?}", jamo);
            return ComposerOutput::default();
        };

        if let Some(c) = overflow {
            log::debug!("글자 확정: {} (다음 칸: {:?})", c, self.current_char());
        }

        self.completed =
            overflow.is_some() || self.state == State::ChoseongJungseongJongseong;

        ComposerOutput {
            current: self.current_char(),
            overflow,
            completed: self.completed,
        }
    }

    /// 자음 입력 처리, 밀려난 글자를 반환
    fn feed_consonant(&mut self, cho_index: u32, jong_index: Option<u32>) -> Option<char> {
        match self.state {
            State::Empty => {
                self.start_choseong(cho_index);
                None
            }
            State::Choseong => {
                if let Some(double) = combine_choseong(self.choseong, cho_index) {
                    // 쌍자음
                    self.choseong = double;
                    None
                } else {
                    let flushed = self.current_char();
                    self.start_choseong(cho_index);
                    flushed
                }
            }
            State::ChoseongJungseong => {
                if let Some(jong) = jong_index {
                    self.jongseong = jong;
                    self.state = State::ChoseongJungseongJongseong;
                    None
                } else {
                    // 종성 불가 자음 (ㄸ, ㅃ, ㅉ)
                    let flushed = self.current_char();
                    self.start_choseong(cho_index);
                    flushed
                }
            }
            State::ChoseongJungseongJongseong => {
                let combined =
                    jong_index.and_then(|jong| combine_jongseong(self.jongseong, jong));
                if let Some(combined) = combined {
                    self.jongseong = combined;
                    None
                } else {
                    let flushed = self.current_char();
                    self.start_choseong(cho_index);
                    flushed
                }
            }
        }
    }

    /// 모음 입력 처리, 밀려난 글자를 반환
    fn feed_vowel(&mut self, jung_index: u32) -> Option<char> {
        match self.state {
            State::Empty => {
                self.start_vowel(jung_index);
                None
            }
            State::Choseong => {
                self.jungseong = jung_index;
                self.state = State::ChoseongJungseong;
                None
            }
            State::ChoseongJungseong => {
                if let Some(combined) = combine_jungseong(self.jungseong, jung_index) {
                    self.jungseong = combined;
                    None
                } else {
                    let flushed = self.current_char();
                    self.start_vowel(jung_index);
                    flushed
                }
            }
            State::ChoseongJungseongJongseong => {
                // 종성을 다음 초성으로 분리
                // 복합 종성이면 마지막 자음만 분리, 단일 종성이면 전체 분리
                let (remaining_jong, next_cho) = match split_jongseong(self.jongseong) {
                    Some(split) => split,
                    None => match jongseong_to_choseong(self.jongseong) {
                        Some(next_cho) => (0, next_cho),
                        None => {
                            // 변환 불가 (이론상 발생하지 않음)
                            let flushed = self.current_char();
                            self.start_vowel(jung_index);
                            return flushed;
                        }
                    },
                };
                self.jongseong = remaining_jong;
                let flushed = self.current_char();
                self.start_choseong(next_cho);
                self.jungseong = jung_index;
                self.state = State::ChoseongJungseong;
                flushed
            }
        }
    }

    /// 새 칸을 초성으로 시작
    fn start_choseong(&mut self, cho_index: u32) {
        self.reset();
        self.choseong = cho_index;
        self.state = State::Choseong;
    }

    /// 새 칸을 모음으로 시작 (초성 ㅇ 자리표시)
    fn start_vowel(&mut self, jung_index: u32) {
        self.reset();
        self.choseong = PLACEHOLDER_CHOSEONG;
        self.jungseong = jung_index;
        self.placeholder = true;
        self.state = State::ChoseongJungseong;
    }

    /// 마지막으로 입력된 자모 하나를 지움
    pub fn backspace(&mut self) -> ComposerOutput {
        match self.state {
            State::Empty => {}
            State::Choseong => match split_choseong(self.choseong) {
                Some(base) => self.choseong = base,
                None => self.reset(),
            },
            State::ChoseongJungseong => match split_jungseong(self.jungseong) {
                Some((first, _)) => self.jungseong = first,
                None if self.placeholder => self.reset(),
                None => {
                    self.jungseong = 0;
                    self.state = State::Choseong;
                }
            },
            State::ChoseongJungseongJongseong => match split_jongseong(self.jongseong) {
                Some((remaining, _)) => self.jongseong = remaining,
                None => {
                    self.jongseong = 0;
                    self.state = State::ChoseongJungseong;
                }
            },
        }

        self.completed = self.state == State::Empty;
        ComposerOutput {
            current: self.current_char(),
            overflow: None,
            completed: self.completed,
        }
    }

    /// 상태 초기화
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// 현재 조합 중인 글자 (초성만 있으면 호환용 자모)
    pub fn current_char(&self) -> Option<char> {
        match self.state {
            State::Empty => None,
            State::Choseong => choseong_to_jamo_char(self.choseong),
            State::ChoseongJungseong => compose_syllable(self.choseong, self.jungseong, 0),
            State::ChoseongJungseongJongseong => {
                compose_syllable(self.choseong, self.jungseong, self.jongseong)
            }
        }
    }

    /// 현재 상태 스냅샷
    pub fn state(&self) -> ComposerState {
        let has_vowel = matches!(
            self.state,
            State::ChoseongJungseong | State::ChoseongJungseongJongseong
        );
        ComposerState {
            initial: match self.state {
                State::Empty => None,
                _ => choseong_to_jamo_char(self.choseong),
            },
            medial: if has_vowel {
                jungseong_to_jamo_char(self.jungseong)
            } else {
                None
            },
            r#final: if self.state == State::ChoseongJungseongJongseong {
                jongseong_to_jamo_char(self.jongseong)
            } else {
                None
            },
            completed: self.completed,
        }
    }
}

impl Default for HangulComposer {
    fn default() -> Self {
        Self::new()
    }
}
