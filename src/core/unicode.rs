//! 유니코드 한글 조합/분해 유틸리티
//!
//! 완성형 음절(U+AC00 ~ U+D7A3)과 호환용 자모(U+3131 ~ U+3163) 사이의 변환,
//! 쌍자음/복합 모음/겹받침 조합 및 분리 테이블을 제공합니다.
//!
//! 인덱스 순서:
//! - 초성 (19개): ㄱ(0) ㄲ(1) ㄴ(2) ㄷ(3) ㄸ(4) ㄹ(5) ㅁ(6) ㅂ(7) ㅃ(8) ㅅ(9)
//!   ㅆ(10) ㅇ(11) ㅈ(12) ㅉ(13) ㅊ(14) ㅋ(15) ㅌ(16) ㅍ(17) ㅎ(18)
//! - 중성 (21개): ㅏ(0) ㅐ(1) ㅑ(2) ㅒ(3) ㅓ(4) ㅔ(5) ㅕ(6) ㅖ(7) ㅗ(8) ㅘ(9)
//!   ㅙ(10) ㅚ(11) ㅛ(12) ㅜ(13) ㅝ(14) ㅞ(15) ㅟ(16) ㅠ(17) ㅡ(18) ㅢ(19) ㅣ(20)
//! - 종성 (28개, 0 = 없음): ㄱ(1) ㄲ(2) ㄳ(3) ㄴ(4) ㄵ(5) ㄶ(6) ㄷ(7) ㄹ(8) ㄺ(9)
//!   ㄻ(10) ㄼ(11) ㄽ(12) ㄾ(13) ㄿ(14) ㅀ(15) ㅁ(16) ㅂ(17) ㅄ(18) ㅅ(19)
//!   ㅆ(20) ㅇ(21) ㅈ(22) ㅊ(23) ㅋ(24) ㅌ(25) ㅍ(26) ㅎ(27)

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 마지막 코드포인트 (힣)
const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 초성 개수
const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
const JONGSEONG_COUNT: u32 = 28;

/// 호환용 자모 자음 영역 (ㄱ ~ ㅎ)
const COMPAT_CONSONANT_FIRST: u32 = 0x3131;
const COMPAT_CONSONANT_LAST: u32 = 0x314E;
/// 호환용 자모 모음 영역 (ㅏ ~ ㅣ)
const COMPAT_VOWEL_FIRST: u32 = 0x314F;
const COMPAT_VOWEL_LAST: u32 = 0x3163;

/// 첫가끝 자모 영역 (초성 U+1100, 중성 U+1161, 종성 U+11A8 부터)
const CONJOINING_CHOSEONG_FIRST: u32 = 0x1100;
const CONJOINING_JUNGSEONG_FIRST: u32 = 0x1161;
const CONJOINING_JONGSEONG_FIRST: u32 = 0x11A8;

#[rustfmt::skip]
const CHOSEONG_JAMO: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

#[rustfmt::skip]
const JUNGSEONG_JAMO: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ',
    'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// 종성 자모 (인덱스 1부터, 0번 칸은 종성 없음 자리)
#[rustfmt::skip]
const JONGSEONG_JAMO: [char; 28] = [
    '\0', 'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ',
    'ㄻ', 'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ', 'ㅁ', 'ㅂ', 'ㅄ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 분해된 음절의 자모 (호환용 자모 형태)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SyllableJamo {
    /// 초성
    pub choseong: char,
    /// 중성
    pub jungseong: char,
    /// 종성 (받침 없으면 None)
    pub jongseong: Option<char>,
}

/// 완성형 한글 음절인지 확인 (가 ~ 힣)
pub fn is_syllable(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}

/// 첫가끝 자모를 호환용 자모로 변환
/// 이미 호환용 자모이거나 자모가 아닌 문자는 그대로 반환
pub fn to_compatibility_jamo(c: char) -> char {
    let code = c as u32;
    let mapped = if (CONJOINING_CHOSEONG_FIRST..CONJOINING_CHOSEONG_FIRST + CHOSEONG_COUNT)
        .contains(&code)
    {
        choseong_to_jamo_char(code - CONJOINING_CHOSEONG_FIRST)
    } else if (CONJOINING_JUNGSEONG_FIRST..CONJOINING_JUNGSEONG_FIRST + JUNGSEONG_COUNT)
        .contains(&code)
    {
        jungseong_to_jamo_char(code - CONJOINING_JUNGSEONG_FIRST)
    } else if (CONJOINING_JONGSEONG_FIRST..CONJOINING_JONGSEONG_FIRST + JONGSEONG_COUNT - 1)
        .contains(&code)
    {
        jongseong_to_jamo_char(code - CONJOINING_JONGSEONG_FIRST + 1)
    } else {
        None
    };
    mapped.unwrap_or(c)
}

/// 자음 자모인지 확인 (겹받침 포함)
pub fn is_consonant(c: char) -> bool {
    let code = to_compatibility_jamo(c) as u32;
    (COMPAT_CONSONANT_FIRST..=COMPAT_CONSONANT_LAST).contains(&code)
}

/// 모음 자모인지 확인 (복합 모음 포함)
pub fn is_vowel(c: char) -> bool {
    let code = to_compatibility_jamo(c) as u32;
    (COMPAT_VOWEL_FIRST..=COMPAT_VOWEL_LAST).contains(&code)
}

/// 자모인지 확인
pub fn is_jamo(c: char) -> bool {
    is_consonant(c) || is_vowel(c)
}

/// 복합 모음(ㅘ 등) 또는 겹받침(ㄳ 등)인지 확인
pub fn is_compound_jamo(c: char) -> bool {
    let c = to_compatibility_jamo(c);
    let compound_vowel = jungseong_index(c)
        .and_then(split_jungseong)
        .is_some();
    let compound_final = jongseong_index(c)
        .and_then(split_jongseong)
        .is_some();
    compound_vowel || compound_final
}

/// 초성/중성/종성 인덱스로 완성된 한글 유니코드 생성
/// - choseong: 초성 인덱스 (0~18)
/// - jungseong: 중성 인덱스 (0~20)
/// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return None;
    }
    let code = HANGUL_SYLLABLE_BASE
        + (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT
        + jongseong;
    char::from_u32(code)
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    if !is_syllable(c) {
        return None;
    }
    let offset = c as u32 - HANGUL_SYLLABLE_BASE;
    let jongseong = offset % JONGSEONG_COUNT;
    let jungseong = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    Some((choseong, jungseong, jongseong))
}

/// 완성형 한글을 자모로 분해
pub fn decompose(c: char) -> Option<SyllableJamo> {
    let (cho, jung, jong) = decompose_syllable(c)?;
    Some(SyllableJamo {
        choseong: choseong_to_jamo_char(cho)?,
        jungseong: jungseong_to_jamo_char(jung)?,
        jongseong: jongseong_to_jamo_char(jong),
    })
}

/// 자모로 완성형 한글 조합
/// 초성으로 쓸 수 없는 자음, 종성으로 쓸 수 없는 자음(ㄸ, ㅃ, ㅉ) 등은 None
pub fn compose(choseong: char, jungseong: char, jongseong: Option<char>) -> Option<char> {
    let cho = choseong_index(choseong)?;
    let jung = jungseong_index(jungseong)?;
    let jong = match jongseong {
        Some(c) => jongseong_index(c)?,
        None => 0,
    };
    compose_syllable(cho, jung, jong)
}

/// 음절을 단순 자모 시퀀스로 펼침
///
/// 복합 모음과 겹받침은 두 자모로 분리합니다 (쌍자음은 그대로).
/// 결과 길이는 2~4이고, 복합 모음과 겹받침이 함께 있는 음절(뷁 등)만 5입니다.
/// 한글 음절이 아니면 문자 하나를 그대로 반환합니다.
pub fn to_component_sequence(c: char) -> Vec<char> {
    let Some((cho, jung, jong)) = decompose_syllable(c) else {
        return vec![c];
    };

    let mut components = Vec::with_capacity(4);
    components.extend(choseong_to_jamo_char(cho));

    match split_jungseong(jung) {
        Some((first, second)) => {
            components.extend(jungseong_to_jamo_char(first));
            components.extend(jungseong_to_jamo_char(second));
        }
        None => components.extend(jungseong_to_jamo_char(jung)),
    }

    if jong != 0 {
        match split_jongseong(jong) {
            Some((remaining, next_cho)) => {
                components.extend(jongseong_to_jamo_char(remaining));
                components.extend(choseong_to_jamo_char(next_cho));
            }
            None => components.extend(jongseong_to_jamo_char(jong)),
        }
    }

    components
}

/// 자모 -> 초성 인덱스
pub fn choseong_index(c: char) -> Option<u32> {
    let c = to_compatibility_jamo(c);
    CHOSEONG_JAMO.iter().position(|&j| j == c).map(|i| i as u32)
}

/// 자모 -> 중성 인덱스
pub fn jungseong_index(c: char) -> Option<u32> {
    let c = to_compatibility_jamo(c);
    JUNGSEONG_JAMO.iter().position(|&j| j == c).map(|i| i as u32)
}

/// 자모 -> 종성 인덱스 (ㄸ, ㅃ, ㅉ는 종성 불가)
pub fn jongseong_index(c: char) -> Option<u32> {
    let c = to_compatibility_jamo(c);
    JONGSEONG_JAMO
        .iter()
        .skip(1)
        .position(|&j| j == c)
        .map(|i| i as u32 + 1)
}

/// 두 초성을 쌍자음으로 조합
pub fn combine_choseong(first: u32, second: u32) -> Option<u32> {
    match (first, second) {
        (0, 0) => Some(1),    // ㄱ + ㄱ = ㄲ
        (3, 3) => Some(4),    // ㄷ + ㄷ = ㄸ
        (7, 7) => Some(8),    // ㅂ + ㅂ = ㅃ
        (9, 9) => Some(10),   // ㅅ + ㅅ = ㅆ
        (12, 12) => Some(13), // ㅈ + ㅈ = ㅉ
        _ => None,
    }
}

/// 쌍자음 초성을 기본 자음으로 되돌림
pub fn split_choseong(cho: u32) -> Option<u32> {
    match cho {
        1 => Some(0),   // ㄲ -> ㄱ
        4 => Some(3),   // ㄸ -> ㄷ
        8 => Some(7),   // ㅃ -> ㅂ
        10 => Some(9),  // ㅆ -> ㅅ
        13 => Some(12), // ㅉ -> ㅈ
        _ => None,
    }
}

/// 두 중성을 복합 모음으로 조합
/// 반환: 복합 모음 인덱스 (실패 시 None)
pub fn combine_jungseong(first: u32, second: u32) -> Option<u32> {
    match (first, second) {
        (8, 0) => Some(9),    // ㅗ + ㅏ = ㅘ
        (8, 1) => Some(10),   // ㅗ + ㅐ = ㅙ
        (8, 20) => Some(11),  // ㅗ + ㅣ = ㅚ
        (13, 4) => Some(14),  // ㅜ + ㅓ = ㅝ
        (13, 5) => Some(15),  // ㅜ + ㅔ = ㅞ
        (13, 20) => Some(16), // ㅜ + ㅣ = ㅟ
        (18, 20) => Some(19), // ㅡ + ㅣ = ㅢ
        _ => None,
    }
}

/// 복합 모음을 두 단순 모음으로 분리
pub fn split_jungseong(jung: u32) -> Option<(u32, u32)> {
    match jung {
        9 => Some((8, 0)),    // ㅘ -> ㅗ + ㅏ
        10 => Some((8, 1)),   // ㅙ -> ㅗ + ㅐ
        11 => Some((8, 20)),  // ㅚ -> ㅗ + ㅣ
        14 => Some((13, 4)),  // ㅝ -> ㅜ + ㅓ
        15 => Some((13, 5)),  // ㅞ -> ㅜ + ㅔ
        16 => Some((13, 20)), // ㅟ -> ㅜ + ㅣ
        19 => Some((18, 20)), // ㅢ -> ㅡ + ㅣ
        _ => None,
    }
}

/// 두 종성을 복합 종성으로 조합
/// 반환: 복합 종성 인덱스 (실패 시 None)
pub fn combine_jongseong(first: u32, second: u32) -> Option<u32> {
    match (first, second) {
        (1, 19) => Some(3),   // ㄱ + ㅅ = ㄳ
        (4, 22) => Some(5),   // ㄴ + ㅈ = ㄵ
        (4, 27) => Some(6),   // ㄴ + ㅎ = ㄶ
        (8, 1) => Some(9),    // ㄹ + ㄱ = ㄺ
        (8, 16) => Some(10),  // ㄹ + ㅁ = ㄻ
        (8, 17) => Some(11),  // ㄹ + ㅂ = ㄼ
        (8, 19) => Some(12),  // ㄹ + ㅅ = ㄽ
        (8, 25) => Some(13),  // ㄹ + ㅌ = ㄾ
        (8, 26) => Some(14),  // ㄹ + ㅍ = ㄿ
        (8, 27) => Some(15),  // ㄹ + ㅎ = ㅀ
        (17, 19) => Some(18), // ㅂ + ㅅ = ㅄ
        _ => None,
    }
}

/// 복합 종성을 분리
/// 반환: (첫 번째 종성 인덱스, 두 번째 종성의 초성 인덱스)
/// 두 번째 값은 다음 글자의 초성으로 사용됨
pub fn split_jongseong(jong: u32) -> Option<(u32, u32)> {
    match jong {
        3 => Some((1, 9)),   // ㄳ -> ㄱ(종성1) + ㅅ(초성9)
        5 => Some((4, 12)),  // ㄵ -> ㄴ(종성4) + ㅈ(초성12)
        6 => Some((4, 18)),  // ㄶ -> ㄴ(종성4) + ㅎ(초성18)
        9 => Some((8, 0)),   // ㄺ -> ㄹ(종성8) + ㄱ(초성0)
        10 => Some((8, 6)),  // ㄻ -> ㄹ(종성8) + ㅁ(초성6)
        11 => Some((8, 7)),  // ㄼ -> ㄹ(종성8) + ㅂ(초성7)
        12 => Some((8, 9)),  // ㄽ -> ㄹ(종성8) + ㅅ(초성9)
        13 => Some((8, 16)), // ㄾ -> ㄹ(종성8) + ㅌ(초성16)
        14 => Some((8, 17)), // ㄿ -> ㄹ(종성8) + ㅍ(초성17)
        15 => Some((8, 18)), // ㅀ -> ㄹ(종성8) + ㅎ(초성18)
        18 => Some((17, 9)), // ㅄ -> ㅂ(종성17) + ㅅ(초성9)
        _ => None,
    }
}

/// 단일 종성을 초성 인덱스로 변환
/// 종성이 다음 글자의 초성으로 이동할 때 사용
pub fn jongseong_to_choseong(jong: u32) -> Option<u32> {
    match jong {
        1 => Some(0),   // ㄱ
        2 => Some(1),   // ㄲ
        4 => Some(2),   // ㄴ
        7 => Some(3),   // ㄷ
        8 => Some(5),   // ㄹ
        16 => Some(6),  // ㅁ
        17 => Some(7),  // ㅂ
        19 => Some(9),  // ㅅ
        20 => Some(10), // ㅆ
        21 => Some(11), // ㅇ
        22 => Some(12), // ㅈ
        23 => Some(14), // ㅊ
        24 => Some(15), // ㅋ
        25 => Some(16), // ㅌ
        26 => Some(17), // ㅍ
        27 => Some(18), // ㅎ
        _ => None,
    }
}

/// 초성 인덱스 -> 호환용 자모
pub fn choseong_to_jamo_char(cho: u32) -> Option<char> {
    CHOSEONG_JAMO.get(cho as usize).copied()
}

/// 중성 인덱스 -> 호환용 자모
pub fn jungseong_to_jamo_char(jung: u32) -> Option<char> {
    JUNGSEONG_JAMO.get(jung as usize).copied()
}

/// 종성 인덱스 -> 호환용 자모 (0 = 종성 없음 -> None)
pub fn jongseong_to_jamo_char(jong: u32) -> Option<char> {
    if jong == 0 {
        return None;
    }
    JONGSEONG_JAMO.get(jong as usize).copied()
}
