// src/registry.rs
//! シンタックス名 → カウント関数のレジストリ
//!
//! 起動時に一度だけ組み立て、以後は読み取り専用で使う。
//! 未登録のシンタックスは `lookup` が `None` を返し、呼び出し側が
//! プレーンテキスト扱いにフォールバックする。エラーにはしない。

use std::collections::HashMap;

use crate::latex;
use crate::settings::Settings;
use crate::stats::WordCount;
use crate::tokenizer;

/// カウント関数。設定スナップショットは呼び出し時点のものを受け取る。
pub type CountFn = Box<dyn Fn(&str, &Settings) -> WordCount + Send + Sync>;

/// 組み込みのプレーンテキスト用シンタックス名
pub const PLAIN_TEXT: &str = "Plain text";

pub struct CounterRegistry {
    counters: HashMap<String, CountFn>,
}

impl CounterRegistry {
    /// 空のレジストリを作る。
    #[must_use]
    pub fn new() -> Self {
        Self {
            counters: HashMap::new(),
        }
    }

    /// 組み込みカウンタ入りのレジストリを作る。
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(
            PLAIN_TEXT,
            Box::new(|text: &str, settings: &Settings| {
                tokenizer::basic_count(text, settings.ignore_numbers)
            }),
        );
        registry.register(
            "LaTeX",
            Box::new(|text: &str, settings: &Settings| latex::count_latex(text, settings)),
        );
        registry.register(
            "LaTeX+",
            Box::new(|text: &str, settings: &Settings| latex::count_latex(text, settings)),
        );
        registry
    }

    /// カウント関数を登録する。同名の登録は上書きになる。
    pub fn register(&mut self, syntax: impl Into<String>, counter: CountFn) {
        self.counters.insert(syntax.into(), counter);
    }

    /// シンタックス名は大文字小文字を区別した完全一致。
    #[must_use]
    pub fn lookup(&self, syntax: &str) -> Option<&CountFn> {
        self.counters.get(syntax)
    }
}

impl Default for CounterRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_are_registered() {
        let registry = CounterRegistry::with_builtins();
        assert!(registry.lookup(PLAIN_TEXT).is_some());
        assert!(registry.lookup("LaTeX").is_some());
        assert!(registry.lookup("LaTeX+").is_some());
    }

    #[test]
    fn unknown_syntax_yields_none() {
        let registry = CounterRegistry::with_builtins();
        assert!(registry.lookup("Markdown").is_none());
        // 大文字小文字は区別する
        assert!(registry.lookup("latex").is_none());
    }

    #[test]
    fn registration_overwrites() {
        let mut registry = CounterRegistry::new();
        registry.register(
            "Markdown",
            Box::new(|_: &str, _: &Settings| WordCount::default()),
        );
        registry.register(
            "Markdown",
            Box::new(|_: &str, _: &Settings| WordCount {
                words: 7,
                chars: 7,
                total_chars: 7,
            }),
        );
        let counter = registry.lookup("Markdown").unwrap();
        assert_eq!(counter("anything", &Settings::default()).words, 7);
    }

    #[test]
    fn plain_text_counter_matches_tokenizer() {
        let registry = CounterRegistry::with_builtins();
        let settings = Settings::default();
        let counter = registry.lookup(PLAIN_TEXT).unwrap();
        assert_eq!(
            counter("hello world", &settings),
            tokenizer::basic_count("hello world", settings.ignore_numbers)
        );
    }

    #[test]
    fn plain_text_counter_sees_current_snapshot() {
        // 登録時ではなく呼び出し時の設定が効く
        let registry = CounterRegistry::with_builtins();
        let counter = registry.lookup(PLAIN_TEXT).unwrap();
        let defaults = Settings::default();
        let ignoring = Settings {
            ignore_numbers: true,
            ..Settings::default()
        };
        assert_eq!(counter("42 words", &defaults).words, 2);
        assert_eq!(counter("42 words", &ignoring).words, 1);
    }
}
