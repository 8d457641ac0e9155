// src/cli.rs
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Table,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "count_words",
    version,
    about = "マークアップ文書の単語数/文字数/行数の集計ツール"
)]
pub struct Args {
    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// シンタックス記述子 (例: "LaTeX.sublime-syntax")。未指定なら拡張子から推定
    #[arg(long)]
    pub syntax: Option<String>,

    /// 設定ファイル (JSON)
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// 数字のみの語を数えない
    #[arg(long)]
    pub ignore_numbers: bool,

    /// 出力先ファイル (未指定なら標準出力)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// 対象と設定ファイルの変更を監視して再集計
    #[arg(long)]
    pub watch: bool,

    /// 対象ファイル (未指定なら標準入力)
    pub paths: Vec<PathBuf>,
}
