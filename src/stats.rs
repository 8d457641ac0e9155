// src/stats.rs
use serde::{Deserialize, Serialize};

/// 単語数/文字数の集計結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct WordCount {
    pub words: usize,
    /// 単語トークンに含まれる文字数 (区切り空白は含まない)
    pub chars: usize,
    /// 入力テキスト全体の文字数
    pub total_chars: usize,
}

impl WordCount {
    /// 別の集計結果を加算する (複数ファイルの合計行用)
    pub fn accumulate(&mut self, other: Self) {
        self.words += other.words;
        self.chars += other.chars;
        self.total_chars += other.total_chars;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulate_sums_fields() {
        let mut total = WordCount {
            words: 2,
            chars: 10,
            total_chars: 11,
        };
        total.accumulate(WordCount {
            words: 1,
            chars: 4,
            total_chars: 5,
        });
        assert_eq!(
            total,
            WordCount {
                words: 3,
                chars: 14,
                total_chars: 16,
            }
        );
    }
}
