//! Token definitions for highlighted code.

use serde::Serialize;

/// A classified contiguous substring of one source line.
///
/// The text borrows from the input; concatenating the texts of all tokens
/// emitted for a line reproduces that line exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, text: &'src str) -> Self {
        Self { kind, text }
    }

    /// Owned counterpart, for serialization.
    pub fn into_owned(self) -> OwnedToken {
        OwnedToken {
            kind: self.kind,
            text: self.text.to_string(),
        }
    }
}

/// A token that owns its text. Used where the source string does not
/// outlive the consumer, e.g. JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnedToken {
    pub kind: TokenKind,
    pub text: String,
}

/// The closed set of highlight categories.
///
/// This is a presentation vocabulary, not a grammar: a `Text` token may be
/// an identifier, an operator, whitespace, or anything else the scanner
/// has no more specific rule for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Keyword,
    /// String literal, delimiters included when the literal is closed.
    Str,
    Comment,
    Number,
    /// Everything else: identifiers, punctuation, whitespace.
    Text,
}

impl TokenKind {
    /// Stable lowercase name, matching the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Str => "string",
            TokenKind::Comment => "comment",
            TokenKind::Number => "number",
            TokenKind::Text => "text",
        }
    }

    /// Check if this kind carries literal content (string or number).
    pub fn is_literal(self) -> bool {
        matches!(self, TokenKind::Str | TokenKind::Number)
    }
}
