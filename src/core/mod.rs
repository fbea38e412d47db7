//! 한글 자모 처리 핵심 모듈
//!
//! - [`unicode`]: 음절 조합/분해, 자모 분류, 단순 자모 시퀀스
//! - [`composer`]: 자모를 하나씩 받아 글자를 조합하는 입력 상태 기계
//! - [`jamo_mapper`]: 두벌식 자판 키 매핑
//! - [`converter`]: 조합기를 이어 붙여 입력열 전체를 변환

pub mod composer;
pub mod converter;
pub mod jamo_mapper;
pub mod unicode;
