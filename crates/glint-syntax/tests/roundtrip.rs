//! Property tests for the scanner's totality and round-trip guarantees.

use glint_syntax::{tokenize, TokenKind};
use proptest::prelude::*;

/// Rebuild the input from the emitted token lines.
fn rejoin(lines: &[Vec<glint_syntax::Token<'_>>]) -> String {
    lines
        .iter()
        .map(|line| line.iter().map(|t| t.text).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

proptest! {
    /// Concatenating token texts per line and rejoining with `\n` must
    /// reproduce the input byte for byte, for any input and language.
    #[test]
    fn round_trip_any_input(code in ".*", lang in "[a-z]{0,10}") {
        let lines = tokenize(&code, &lang);
        prop_assert_eq!(rejoin(&lines), code);
    }

    /// Multi-line inputs too, with quoting and comment markers thrown in.
    #[test]
    fn round_trip_snippet_like_input(
        code in r#"(?s)[a-zA-Z0-9_ \t"'`\\#/.*\n-]{0,200}"#,
        lang in prop::sample::select(vec!["javascript", "python", "css", "cobol"]),
    ) {
        let lines = tokenize(&code, lang);
        prop_assert_eq!(rejoin(&lines), code);
    }

    /// Tokens never span lines and are never empty.
    #[test]
    fn tokens_are_nonempty_and_newline_free(code in ".*") {
        for line in tokenize(&code, "javascript") {
            for token in line {
                prop_assert!(!token.text.is_empty());
                prop_assert!(!token.text.contains('\n'));
            }
        }
    }

    /// Comments only start where the line rules allow them to.
    #[test]
    fn comment_tokens_carry_a_marker(code in ".*") {
        for line in tokenize(&code, "python") {
            for token in line {
                if token.kind == TokenKind::Comment {
                    prop_assert!(
                        token.text.starts_with("//")
                            || token.text.starts_with('#')
                            || token.text.starts_with("/*")
                    );
                }
            }
        }
    }
}
