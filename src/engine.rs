// src/engine.rs
//! カウント要求1回分の組み立て
//!
//! 記述子の解決 → レジストリ検索 → カウント関数呼び出し。
//! 未解決/未登録ならプレーンテキスト扱いで数える。

use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::registry::CounterRegistry;
use crate::settings::Settings;
use crate::stats::WordCount;
use crate::syntax;
use crate::tokenizer;

/// 1回のカウント結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    #[serde(flatten)]
    pub count: WordCount,
    pub lines: usize,
    /// 解決されたシンタックス名。フォールバック時は "plain text"
    pub language: String,
    /// 専用カウンタを使ったかどうか
    pub custom: bool,
}

/// ファイル1つ分のカウント結果
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub file: String,
    #[serde(flatten)]
    pub report: Report,
}

/// 実行結果。読めなかったファイルはエラーとして持ち回り、残りは処理する。
#[derive(Debug, Default)]
pub struct RunResult {
    pub reports: Vec<FileReport>,
    pub errors: Vec<(PathBuf, AppError)>,
}

/// テキストを記述子に応じたカウンタで数える。
#[must_use]
pub fn count_document(
    registry: &CounterRegistry,
    text: &str,
    descriptor: Option<&str>,
    settings: &Settings,
) -> Report {
    let resolved = descriptor.and_then(syntax::resolve);
    let (count, language, custom) = match resolved {
        Some(name) => match registry.lookup(&name) {
            Some(counter) => (counter(text, settings), name, true),
            None => (
                tokenizer::basic_count(text, settings.ignore_numbers),
                "plain text".to_string(),
                false,
            ),
        },
        None => (
            tokenizer::basic_count(text, settings.ignore_numbers),
            "plain text".to_string(),
            false,
        ),
    };

    Report {
        count,
        lines: text.lines().count(),
        language,
        custom,
    }
}

/// 設定を読み込み、対象ファイル (無ければ標準入力) を数える。
/// 設定スナップショットはこの呼び出しの先頭で一度だけ取得する。
pub fn run(config: &Config, registry: &CounterRegistry) -> Result<RunResult> {
    let settings = load_settings(config)?;
    let mut result = RunResult::default();

    if config.paths.is_empty() {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        result.reports.push(FileReport {
            file: "<stdin>".to_string(),
            report: count_document(registry, &text, config.syntax.as_deref(), &settings),
        });
        return Ok(result);
    }

    for path in &config.paths {
        match std::fs::read_to_string(path) {
            Ok(text) => {
                let descriptor = config
                    .syntax
                    .clone()
                    .or_else(|| descriptor_for_path(path));
                result.reports.push(FileReport {
                    file: path.display().to_string(),
                    report: count_document(registry, &text, descriptor.as_deref(), &settings),
                });
            }
            Err(e) => result.errors.push((path.clone(), e.into())),
        }
    }
    Ok(result)
}

/// 設定スナップショットを取得し、CLIの上書きフラグを反映する。
pub fn load_settings(config: &Config) -> Result<Settings> {
    let mut settings = Settings::load_or_default(config.settings_path.as_deref())?;
    if config.ignore_numbers {
        settings.ignore_numbers = true;
    }
    Ok(settings)
}

/// 拡張子からシンタックス記述子を推定する。
fn descriptor_for_path(path: &Path) -> Option<String> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("tex" | "ltx" | "latex") => Some("LaTeX.sublime-syntax".to_string()),
        _ => None,
    }
}
