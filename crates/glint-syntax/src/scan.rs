//! The per-line scanner and the highlighter that drives it.
//!
//! Scanning is deliberately line-local: the input is split on `\n` and each
//! line is scanned from scratch, so no comment or string state survives a
//! line boundary. A `/*` with no `*/` on the same line produces a comment
//! token that ends at the line end, and the next line is scanned as plain
//! code. That matches the product's observed behavior and is kept as is.

use crate::language::{LanguageRegistry, LanguageSpec};
use crate::token::{Token, TokenKind};

/// Lazy token iterator over a single line.
///
/// Rules are tried in a fixed priority order at each position: line
/// comment, block comment, string, number, word, then a one-char fallback.
/// The first match wins and the cursor advances past it, so the scanner
/// always terminates and every character lands in exactly one token.
#[derive(Debug, Clone)]
pub struct LineScanner<'src, 'spec> {
    line: &'src str,
    pos: usize,
    spec: &'spec LanguageSpec,
}

impl<'src, 'spec> LineScanner<'src, 'spec> {
    pub fn new(line: &'src str, spec: &'spec LanguageSpec) -> Self {
        Self { line, pos: 0, spec }
    }

    /// The line being scanned.
    pub fn line(&self) -> &'src str {
        self.line
    }

    fn scan_at(&self, rest: &'src str, first: char) -> Token<'src> {
        // Comment checks come first. A `//` or (for hash languages) `#`
        // swallows the rest of the line, even when it sits inside what a
        // real lexer would treat as part of a string already underway on
        // a prior rule pass. The converse holds too: once the string rule
        // opens a quote, a `//` inside it is never reexamined.
        if rest.starts_with("//") || (self.spec.hash_line_comments() && rest.starts_with('#')) {
            return Token::new(TokenKind::Comment, rest);
        }

        if rest.starts_with("/*") {
            // Close on the same line or run to the line end; continuation
            // lines are not tracked.
            let end = match rest[2..].find("*/") {
                Some(i) => 2 + i + 2,
                None => rest.len(),
            };
            return Token::new(TokenKind::Comment, &rest[..end]);
        }

        if matches!(first, '"' | '\'' | '`') {
            let mut end = rest.len();
            let mut chars = rest.char_indices().skip(1);
            while let Some((i, c)) = chars.next() {
                if c == '\\' {
                    // Escape: the next char cannot close the literal.
                    chars.next();
                } else if c == first {
                    end = i + 1;
                    break;
                }
            }
            return Token::new(TokenKind::Str, &rest[..end]);
        }

        if first.is_ascii_digit() {
            // Maximal run of digits and dots. `3.14.15` is one token;
            // this is a highlighter, not a validator.
            let end = rest
                .find(|c: char| !c.is_ascii_digit() && c != '.')
                .unwrap_or(rest.len());
            return Token::new(TokenKind::Number, &rest[..end]);
        }

        if first.is_ascii_alphabetic() || first == '_' {
            let end = rest
                .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
                .unwrap_or(rest.len());
            let word = &rest[..end];
            let kind = if self.spec.is_keyword(word) {
                TokenKind::Keyword
            } else {
                TokenKind::Text
            };
            return Token::new(kind, word);
        }

        // Whitespace, punctuation, or any non-ASCII char: one char of text.
        Token::new(TokenKind::Text, &rest[..first.len_utf8()])
    }
}

impl<'src, 'spec> Iterator for LineScanner<'src, 'spec> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.line[self.pos..];
        let first = rest.chars().next()?;
        let token = self.scan_at(rest, first);
        debug_assert!(!token.text.is_empty());
        self.pos += token.text.len();
        Some(token)
    }
}

/// Iterator over the lines of one input, yielding a [`LineScanner`] per
/// line. Newlines are not part of any token; callers reinsert them when
/// joining lines back together.
#[derive(Debug, Clone)]
pub struct TokenLines<'src, 'spec> {
    lines: std::str::Split<'src, char>,
    spec: &'spec LanguageSpec,
}

impl<'src, 'spec> TokenLines<'src, 'spec> {
    pub fn new(code: &'src str, spec: &'spec LanguageSpec) -> Self {
        Self {
            lines: code.split('\n'),
            spec,
        }
    }
}

impl<'src, 'spec> Iterator for TokenLines<'src, 'spec> {
    type Item = LineScanner<'src, 'spec>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.next().map(|line| LineScanner::new(line, self.spec))
    }
}

/// A tokenizer bound to a language registry.
///
/// The registry is injected at construction and read-only afterwards, so a
/// single highlighter can serve any number of concurrent calls.
#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    registry: LanguageRegistry,
}

impl Highlighter {
    pub fn new(registry: LanguageRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    /// Lazily tokenize `code`, one scanner per line. Any `language` string
    /// is accepted; unknown ids use the registry fallback.
    pub fn lines<'src, 'h>(&'h self, code: &'src str, language: &str) -> TokenLines<'src, 'h> {
        TokenLines::new(code, self.registry.resolve(language))
    }

    /// Eager form of [`lines`](Highlighter::lines): all tokens, collected
    /// per line.
    pub fn tokenize<'src>(&self, code: &'src str, language: &str) -> Vec<Vec<Token<'src>>> {
        self.lines(code, language).map(Iterator::collect).collect()
    }
}
