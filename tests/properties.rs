// tests/properties.rs
//! カウント不変条件のプロパティテスト

use count_words::latex;
use count_words::settings::{LatexSettings, Settings};
use count_words::tokenizer;
use proptest::prelude::*;

proptest! {
    #[test]
    fn chars_never_exceed_total_chars(text in "\\PC*", ignore_numbers in any::<bool>()) {
        let count = tokenizer::basic_count(&text, ignore_numbers);
        prop_assert!(count.chars <= count.total_chars);
    }

    #[test]
    fn words_never_exceed_chars(text in "\\PC*", ignore_numbers in any::<bool>()) {
        let count = tokenizer::basic_count(&text, ignore_numbers);
        prop_assert!(count.words <= count.chars);
    }

    #[test]
    fn latex_counting_never_panics(text in "\\PC*") {
        let settings = Settings::default();
        let count = latex::count_latex(&text, &settings);
        prop_assert!(count.words <= count.chars);
        prop_assert!(count.chars <= count.total_chars);
    }

    #[test]
    fn latex_counting_never_panics_with_all_exclusions(
        // LaTeXの特殊文字を多めに混ぜた入力
        text in "[a-zA-Z0-9 \\\\{}\\[\\]%$~\\n-]{0,120}",
    ) {
        let settings = Settings {
            ignore_numbers: true,
            latex: LatexSettings {
                exclude_appendices: true,
                exclude_abstract: true,
                exclude_headers: true,
                exclude_footnotes: true,
                markup_commands: vec!["emph".to_string()],
            },
        };
        let count = latex::count_latex(&text, &settings);
        prop_assert!(count.chars <= count.total_chars);
    }

    #[test]
    fn cleaned_text_is_never_longer_than_input(text in "\\PC{0,200}") {
        // 変換は削るだけなので、掃除後の全文字数は元の文字数を超えない
        let settings = Settings::default();
        let count = latex::count_latex(&text, &settings);
        prop_assert!(count.total_chars <= text.chars().count());
    }
}
