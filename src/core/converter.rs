//! 자모/키 입력열 -> 완성형 한글 변환기
//!
//! 조합기를 칸 단위로 이어 붙여, 밀려난 글자를 차례로 출력합니다.

use crate::core::composer::{ComposerOutput, HangulComposer};
use crate::core::jamo_mapper::map_to_jamo;

/// 자모 시퀀스를 조합하여 문자열로 변환
/// 조합기가 받지 않는 문자(자모 아님, 겹받침 자모 등)는 현재 글자를 확정시키고 그대로 유지
pub fn compose_jamo<I>(jamos: I) -> String
where
    I: IntoIterator<Item = char>,
{
    let mut composer = HangulComposer::new();
    let mut output = String::new();

    for c in jamos {
        let result = composer.input_jamo(c);
        if result == ComposerOutput::default() {
            // 조합기가 무시한 입력
            output.extend(composer.current_char());
            composer.reset();
            output.push(c);
        } else {
            output.extend(result.overflow);
        }
    }

    output.extend(composer.current_char());
    output
}

/// 두벌식 영문 키 입력을 한글 문자열로 변환
/// 매핑 없는 문자(숫자, 특수문자 등)는 그대로 유지
pub fn convert(input: &str) -> String {
    compose_jamo(input.chars().map(|c| map_to_jamo(c).unwrap_or(c)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_conversion() {
        assert_eq!(convert("rkskek"), "가나다");
        assert_eq!(convert("dkssudgktpdy"), "안녕하세요");
    }

    #[test]
    fn test_jongseong() {
        assert_eq!(convert("gksrmf"), "한글");
        assert_eq!(convert("dkswl"), "안지");
    }

    #[test]
    fn test_complex_vowel() {
        assert_eq!(convert("dhksfy"), "완료");
    }

    #[test]
    fn test_complex_jongseong() {
        assert_eq!(convert("dlfr"), "읽");
    }

    #[test]
    fn test_double_consonant() {
        assert_eq!(convert("Tks"), "싼");
        assert_eq!(convert("rrk"), "까");
    }

    #[test]
    fn test_mixed_input() {
        assert_eq!(convert("123rksk"), "123가나");
        assert_eq!(convert("rk!sk"), "가!나");
    }

    #[test]
    fn test_vowel_only() {
        assert_eq!(convert("k"), "아");
        assert_eq!(convert("kh"), "아오");
    }

    #[test]
    fn test_compose_jamo() {
        assert_eq!(compose_jamo("ㅅㅏㄱㅘ".chars()), "사과");
        assert_eq!(compose_jamo("ㄱㅏㅇㅇㅏ".chars()), "강아");
        assert_eq!(compose_jamo(std::iter::empty()), "");
    }

    #[test]
    fn test_compound_final_jamo_kept() {
        // 겹받침 자모는 초성이 될 수 없으므로 그대로 출력
        assert_eq!(compose_jamo("ㄱㅏㄳ".chars()), "가ㄳ");
        assert_eq!(compose_jamo("ㄳㄴㅏ".chars()), "ㄳ나");
    }

    #[test]
    fn test_jongseong_split() {
        assert_eq!(convert("rkrkrl"), "가가기");
    }
}
