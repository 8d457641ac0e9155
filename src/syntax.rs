// src/syntax.rs
//! シンタックス記述子からシンタックス名を取り出す

use regex::Regex;
use std::sync::OnceLock;

fn descriptor_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([\w -]+)\.(?:tmLanguage|sublime-syntax)").unwrap())
}

/// 記述子 (例: `Packages/LaTeX/LaTeX.sublime-syntax`) から拡張子直前の
/// ベース名を取り出す。形が合わなければ `None` (呼び出し側は
/// プレーンテキスト扱いにする)。
#[must_use]
pub fn resolve(descriptor: &str) -> Option<String> {
    descriptor_pattern()
        .captures(descriptor)
        .map(|caps| caps[1].to_string())
}
