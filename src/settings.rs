// src/settings.rs
//! カウント時に参照する設定スナップショット
//!
//! JSONの設定ファイルから読み込む。欠けているキーはすべて
//! 無効/空にフォールバックし、エラーにはしない。スナップショットは
//! 1回のカウント操作の間は不変として扱う。

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

/// 既定の設定ファイル名 (カレントディレクトリから読む)
pub const DEFAULT_SETTINGS_FILE: &str = "count_words.settings.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// 数字のみの語をカウントしない
    pub ignore_numbers: bool,
    /// LaTeX系シンタックス向けの設定
    #[serde(rename = "LaTeX")]
    pub latex: LatexSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatexSettings {
    pub exclude_appendices: bool,
    pub exclude_abstract: bool,
    pub exclude_headers: bool,
    pub exclude_footnotes: bool,
    /// 呼び出し部分だけ取り除き、引数テキストは残すコマンド名
    pub markup_commands: Vec<String>,
}

impl Settings {
    /// 指定パスの設定ファイルを読み込む。
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// パス指定があれば必ず読む (失敗はエラー)。指定がなければ
    /// 既定ファイルを探し、無ければデフォルト値を返す。
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default = Path::new(DEFAULT_SETTINGS_FILE);
                if default.exists() {
                    Self::load(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!settings.ignore_numbers);
        assert!(settings.latex.markup_commands.is_empty());
    }

    #[test]
    fn partial_keys_fill_in_defaults() {
        let raw = r#"{"LaTeX": {"exclude_abstract": true}}"#;
        let settings: Settings = serde_json::from_str(raw).unwrap();
        assert!(settings.latex.exclude_abstract);
        assert!(!settings.latex.exclude_headers);
        assert!(!settings.ignore_numbers);
    }

    #[test]
    fn full_settings_round_trip() {
        let raw = r#"{
            "ignore_numbers": true,
            "LaTeX": {
                "exclude_appendices": true,
                "exclude_abstract": true,
                "exclude_headers": false,
                "exclude_footnotes": true,
                "markup_commands": ["emph", "textbf"]
            }
        }"#;
        let settings: Settings = serde_json::from_str(raw).unwrap();
        assert!(settings.ignore_numbers);
        assert!(settings.latex.exclude_appendices);
        assert_eq!(settings.latex.markup_commands, vec!["emph", "textbf"]);
    }

    #[test]
    fn missing_default_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-settings.json");
        assert!(Settings::load(&missing).is_err());
        // パス未指定 + 既定ファイル無し → デフォルト値
        let settings = Settings::load_or_default(None).unwrap();
        assert_eq!(settings.latex, LatexSettings::default());
    }
}
