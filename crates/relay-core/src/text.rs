// SPDX-FileCopyrightText: 2026 Relay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Printable-character filtering for inbound message text.
//!
//! A character is printable when its Unicode general category is a letter,
//! mark, number, punctuation or symbol, or when it is the ASCII space.
//! Everything else is dropped: controls, format characters, private use,
//! surrogates, unassigned code points, and every separator except U+0020.

use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

/// Returns `true` if `c` is printable.
pub fn is_printable(c: char) -> bool {
    c == ' '
        || matches!(
            c.general_category_group(),
            GeneralCategoryGroup::Letter
                | GeneralCategoryGroup::Mark
                | GeneralCategoryGroup::Number
                | GeneralCategoryGroup::Punctuation
                | GeneralCategoryGroup::Symbol
        )
}

/// Removes every non-printable character from `input`, keeping the rest in order.
pub fn sanitize(input: &str) -> String {
    input.chars().filter(|&c| is_printable(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn strips_bell_character() {
        assert_eq!(sanitize("hi\u{0007}"), "hi");
    }

    #[test]
    fn keeps_ascii_space_but_drops_other_whitespace() {
        assert_eq!(sanitize("a b\tc\nd\u{00A0}e\u{2028}f"), "a bcdef");
    }

    #[test]
    fn drops_space_separators_other_than_ascii_space() {
        assert_eq!(sanitize("a\u{2003}b\u{3000}c\u{202F}d"), "abcd");
    }

    #[test]
    fn keeps_non_latin_text_and_emoji() {
        assert_eq!(sanitize("héllo wörld 日本 🎉"), "héllo wörld 日本 🎉");
    }

    #[test]
    fn keeps_marks_numbers_and_symbols() {
        // combining acute, superscript two, euro sign, arabic-indic digit
        assert_eq!(sanitize("e\u{0301}\u{00B2}\u{20AC}\u{0663}"), "e\u{0301}\u{00B2}\u{20AC}\u{0663}");
    }

    #[test]
    fn drops_format_characters() {
        assert_eq!(sanitize("a\u{200B}b\u{202E}c\u{FEFF}d\u{00AD}e\u{E0001}"), "abcde");
    }

    #[test]
    fn drops_unassigned_code_points() {
        assert_eq!(sanitize("a\u{0378}b\u{FFF0}c\u{E0080}d"), "abcd");
    }

    #[test]
    fn drops_private_use_and_noncharacters() {
        assert_eq!(sanitize("x\u{E000}y\u{F0000}z\u{FDD0}w\u{FFFF}"), "xyzw");
    }

    #[test]
    fn only_control_characters_sanitize_to_empty() {
        assert!(sanitize("\u{0000}\u{001B}\r\n").is_empty());
    }

    /// Characters never printable, whatever the text around them.
    const NON_PRINTABLE: &[char] = &[
        '\u{0000}', '\u{0007}', '\t', '\n', '\u{007F}', '\u{0085}', '\u{00A0}', '\u{00AD}',
        '\u{0378}', '\u{200B}', '\u{2028}', '\u{2029}', '\u{3000}', '\u{E000}', '\u{FEFF}',
        '\u{FFF0}', '\u{E0080}',
    ];

    proptest! {
        #[test]
        fn sanitized_text_is_all_printable(input in any::<String>()) {
            prop_assert!(sanitize(&input).chars().all(is_printable));
        }

        #[test]
        fn injected_non_printables_are_removed(
            text in "[a-zA-Z0-9 .,!?'\u{00C0}-\u{00FF}\u{4E00}-\u{4E80}-]{0,48}",
            picks in proptest::collection::vec((any::<prop::sample::Index>(), 0..NON_PRINTABLE.len()), 0..8),
        ) {
            let mut noisy: Vec<char> = text.chars().collect();
            for (at, which) in picks {
                let pos = at.index(noisy.len() + 1);
                noisy.insert(pos, NON_PRINTABLE[which]);
            }
            let noisy: String = noisy.into_iter().collect();
            prop_assert_eq!(sanitize(&noisy), text);
        }
    }
}
