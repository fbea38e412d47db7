//! hanwordle - 두 음절 한글 단어 맞히기 (터미널)
//!
//! 표준 입력에서 한 줄씩 추측을 읽습니다. 완성형 한글이 있으면 그대로,
//! 없으면 두벌식 영문 키 입력으로 보고 조합합니다 (예: `tkfkd` -> 사랑).

use std::io::{self, BufRead};
use std::process::ExitCode;

use hanwordle::config::{load_config, save_config};
use hanwordle::convert;
use hanwordle::core::unicode::is_syllable;
use hanwordle::game::{load_word_list, AcceptAll, GameRound, HintCategory, RoundStatus, WordList};

/// 힌트 표시용 이모지
fn hint_emoji(hint: HintCategory) -> &'static str {
    match hint {
        HintCategory::Match => "🟩",
        HintCategory::Similar => "🟨",
        HintCategory::Many => "🟧",
        HintCategory::Exists => "🟪",
        HintCategory::Opposite => "🔄",
        HintCategory::None => "⬜",
    }
}

/// 입력 줄을 추측 단어 문자열로 변환
fn to_guess(line: &str) -> String {
    let line = line.trim();
    if line.chars().any(is_syllable) {
        line.to_string()
    } else {
        convert(line)
    }
}

fn main() -> ExitCode {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let Some(arg) = std::env::args().nth(1) else {
        eprintln!("사용법: hanwordle <정답 단어> | hanwordle --init-config");
        return ExitCode::from(2);
    };

    // 설정 로드
    let config = load_config();

    // 현재 설정(없으면 기본값)을 설정 파일로 기록
    if arg == "--init-config" {
        return match save_config(&config) {
            Ok(path) => {
                println!("설정 저장: {}", path.display());
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("{}", e);
                ExitCode::from(1)
            }
        };
    }
    let secret = arg;

    let words: Box<dyn WordList> = match &config.word_list_path {
        Some(path) => match load_word_list(path) {
            Ok(words) => Box::new(words),
            Err(e) => {
                log::error!("단어 목록 로드 실패, 모든 단어 허용: {}", e);
                Box::new(AcceptAll)
            }
        },
        None => Box::new(AcceptAll),
    };

    let mut round = match GameRound::new(&secret, &config) {
        Ok(round) => round,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(2);
        }
    };

    println!("두 글자 단어를 맞혀 보세요 ({}번 기회)", round.max_attempts());

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("입력 읽기 실패: {}", e);
                break;
            }
        };

        let guess = to_guess(&line);
        match round.submit(&guess, &*words) {
            Ok(result) => {
                let hints: String = result.hints.iter().map(|&h| hint_emoji(h)).collect();
                println!("{}  {}", result.word, hints);
            }
            Err(e) => {
                println!("{}", e);
                continue;
            }
        }

        if round.is_over() {
            break;
        }
        println!("남은 기회: {}", round.attempts_remaining());
    }

    match round.status() {
        RoundStatus::Won => {
            println!("정답! ({}번 만에)", round.guesses().len());
            ExitCode::SUCCESS
        }
        RoundStatus::Lost => {
            println!("아쉽네요. 정답은 {}", round.secret());
            ExitCode::from(1)
        }
        RoundStatus::InProgress => ExitCode::from(1),
    }
}
