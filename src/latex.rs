// src/latex.rs
//! LaTeX文書のカウント前処理
//!
//! コメント/数式/コマンドを取り除いてから tokenizer に渡す。
//! 変換は固定順のパイプラインで、各ステップは前段の出力に対して動く:
//!
//! 1. コメント除去 (エスケープされた `\%` は残す)
//! 2. `\begin{document}` までのプリアンブルを読み飛ばす
//! 3. `\appendix` 以降の切り捨て (設定による)
//! 4. ディスプレイ数式 `$$..$$` の除去 (単一`$`より先に処理する)
//! 5. インライン数式 `$..$` の除去
//! 6. abstract環境の除去 (設定による)
//! 7. ホワイトリストのコマンドは呼び出し部分だけ剥がす
//! 8. 見出しコマンドの救出 (設定による)
//! 9. 脚注トークンの救出 (設定による)
//! 10. 残りのコマンドを一括除去
//! 11. 記号の後始末 (`~`, `--`, 波かっこ, バックスラッシュ)
//!
//! 整形済みの出力を作るパーサではない。カウント目的の近似であり、
//! 壊れた入力でも落ちないことだけを保証する。同じ出力をもう一度
//! 通すと結果が変わりうる (冪等ではない)。

use regex::Regex;
use std::sync::OnceLock;

use crate::settings::Settings;
use crate::stats::WordCount;
use crate::tokenizer;

const BEGIN_DOCUMENT: &str = "\\begin{document}";
const APPENDIX: &str = "\\appendix";

fn display_formula() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)\$\$.*?\$\$").unwrap())
}

fn inline_formula() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\$.*?\$").unwrap())
}

fn abstract_block() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)\\begin\{abstract\}.*?\\end\{abstract\}").unwrap())
}

fn header_command() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\\(?:part|chapter|(?:sub)*section|paragraph)\*?\{").unwrap())
}

fn generic_command() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s)\\[A-Za-z]+((\s*\{[^}]*?\})?(\s*\[.*?\])?(\s*\{.*?\})+)?\s*").unwrap()
    })
}

/// LaTeX文書を掃除してから単語/文字を数える。
#[must_use]
pub fn count_latex(text: &str, settings: &Settings) -> WordCount {
    let latex = &settings.latex;

    let text = strip_comments(text);
    let text = skip_preamble(&text);
    let text = if latex.exclude_appendices {
        truncate_appendix(text)
    } else {
        text
    };

    let text = strip_display_formulas(text);
    let text = strip_inline_formulas(&text);

    let text = if latex.exclude_abstract {
        remove_abstract(&text)
    } else {
        text
    };

    let text = unwrap_markup_commands(&text, &latex.markup_commands);
    let text = if latex.exclude_headers {
        text
    } else {
        rescue_headers(&text)
    };
    let text = if latex.exclude_footnotes {
        text
    } else {
        rescue_footnotes(&text)
    };

    let text = strip_commands(&text);
    let text = clean_residual_symbols(&text);

    tokenizer::basic_count(text.trim(), settings.ignore_numbers)
}

/// エスケープされていない `%` から行末までを空白1つに置換する。
/// エスケープ判定は直前の1文字だけを見る。`%` の直前が改行なら
/// その改行ごと取り込む (行全体のコメントは行ごと消える)。
fn strip_comments(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut in_comment = false;
    for (idx, ch) in text.char_indices() {
        if in_comment {
            if ch == '\n' {
                in_comment = false;
                out.push('\n');
            }
            continue;
        }
        if ch == '%' && (idx == 0 || bytes[idx - 1] != b'\\') {
            if out.ends_with('\n') {
                out.pop();
            }
            out.push(' ');
            in_comment = true;
            continue;
        }
        out.push(ch);
    }
    out
}

/// 本文開始マーカー以前を読み飛ばす。マーカーが無ければ全文を返す。
fn skip_preamble(text: &str) -> &str {
    match text.find(BEGIN_DOCUMENT) {
        Some(pos) => &text[pos + BEGIN_DOCUMENT.len()..],
        None => text,
    }
}

/// 最初の `\appendix` 以降を捨てる。
fn truncate_appendix(text: &str) -> &str {
    match text.find(APPENDIX) {
        Some(pos) => &text[..pos],
        None => text,
    }
}

fn strip_display_formulas(text: &str) -> String {
    display_formula().replace_all(text, " ").into_owned()
}

fn strip_inline_formulas(text: &str) -> String {
    inline_formula().replace_all(text, " ").into_owned()
}

fn remove_abstract(text: &str) -> String {
    abstract_block().replace_all(text, "").into_owned()
}

/// ホワイトリストのコマンドは `\cmd{` の呼び出し部分だけ削る。
/// 引数テキストと閉じかっこは残る (閉じかっこは後段で消える)。
fn unwrap_markup_commands(text: &str, commands: &[String]) -> String {
    let mut text = text.to_string();
    for cmd in commands {
        let invocation = format!("\\{cmd}{{");
        text = text.replace(&invocation, "");
    }
    text
}

/// 見出しコマンドを開きかっこまで空白に置き換え、タイトル文字列を残す。
fn rescue_headers(text: &str) -> String {
    header_command().replace_all(text, " ").into_owned()
}

/// リテラルのトークン `\\footnote\{` だけを置換する。
fn rescue_footnotes(text: &str) -> String {
    text.replace(r"\\footnote\{", " ")
}

/// 残っているコマンド呼び出し (任意引数/必須引数つき、または裸) を
/// まとめて空白に置き換える。上の選択的なステップの後に走らせること。
fn strip_commands(text: &str) -> String {
    generic_command().replace_all(text, " ").into_owned()
}

fn clean_residual_symbols(text: &str) -> String {
    text.replace('~', " ")
        .replace("--", " ")
        .replace('{', " ")
        .replace('}', "")
        .replace('\\', "")
}
