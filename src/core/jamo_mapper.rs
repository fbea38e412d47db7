//! 두벌식 자판 영문 키 -> 한글 자모 매핑

/// 영문 키 하나를 호환용 자모로 변환
/// 매핑에 없는 문자(숫자, 특수문자 등)는 None 반환
pub fn map_to_jamo(key: char) -> Option<char> {
    let jamo = match key {
        // 자음
        'r' => 'ㄱ',
        'R' => 'ㄲ',
        's' => 'ㄴ',
        'e' => 'ㄷ',
        'E' => 'ㄸ',
        'f' => 'ㄹ',
        'a' => 'ㅁ',
        'q' => 'ㅂ',
        'Q' => 'ㅃ',
        't' => 'ㅅ',
        'T' => 'ㅆ',
        'd' => 'ㅇ',
        'w' => 'ㅈ',
        'W' => 'ㅉ',
        'c' => 'ㅊ',
        'z' => 'ㅋ',
        'x' => 'ㅌ',
        'v' => 'ㅍ',
        'g' => 'ㅎ',

        // 모음
        'k' => 'ㅏ',
        'o' => 'ㅐ',
        'i' => 'ㅑ',
        'O' => 'ㅒ',
        'j' => 'ㅓ',
        'p' => 'ㅔ',
        'u' => 'ㅕ',
        'P' => 'ㅖ',
        'h' => 'ㅗ',
        'y' => 'ㅛ',
        'n' => 'ㅜ',
        'b' => 'ㅠ',
        'm' => 'ㅡ',
        'l' => 'ㅣ',

        _ => return None,
    };
    Some(jamo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consonant_mapping() {
        assert_eq!(map_to_jamo('r'), Some('ㄱ'));
        assert_eq!(map_to_jamo('s'), Some('ㄴ'));
        assert_eq!(map_to_jamo('g'), Some('ㅎ'));

        // 쌍자음
        assert_eq!(map_to_jamo('R'), Some('ㄲ'));
        assert_eq!(map_to_jamo('T'), Some('ㅆ'));
        assert_eq!(map_to_jamo('E'), Some('ㄸ'));
    }

    #[test]
    fn test_vowel_mapping() {
        assert_eq!(map_to_jamo('k'), Some('ㅏ'));
        assert_eq!(map_to_jamo('h'), Some('ㅗ'));
        assert_eq!(map_to_jamo('l'), Some('ㅣ'));
    }

    #[test]
    fn test_unmapped_characters() {
        assert!(map_to_jamo('1').is_none());
        assert!(map_to_jamo('!').is_none());
        assert!(map_to_jamo(' ').is_none());
        assert!(map_to_jamo('X').is_none()); // 대문자 X는 매핑 없음
    }
}
