// src/tokenizer.rs
//! プレーンテキストの単語/文字カウント
//!
//! 単語の形は2種類:
//! - `ignore_numbers` 有効: ASCII英字とハイフンの連続 (`[A-Za-z-]+`)
//! - 無効: 単語構成文字とハイフンの連続 (`[\w-]+`, Unicode対応)

use regex::Regex;
use std::sync::OnceLock;

use crate::stats::WordCount;

fn word_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\w-]+").unwrap())
}

fn alpha_word_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[A-Za-z-]+").unwrap())
}

/// テキストを左から走査し、単語数とトークン内文字数を数える。
///
/// `total_chars` は入力テキストそのものの文字数。空文字列は (0, 0, 0)。
#[must_use]
pub fn basic_count(text: &str, ignore_numbers: bool) -> WordCount {
    let pattern = if ignore_numbers {
        alpha_word_pattern()
    } else {
        word_pattern()
    };

    let mut words = 0;
    let mut chars = 0;
    for token in pattern.find_iter(text) {
        words += 1;
        chars += token.as_str().chars().count();
    }

    WordCount {
        words,
        chars,
        total_chars: text.chars().count(),
    }
}
