//! # Glint Syntax
//!
//! Best-effort, per-line syntax tokenization for code snippets.
//!
//! The scanner classifies source text into a small closed set of highlight
//! kinds (keyword, string, comment, number, text). It is total: any input
//! string for any language id produces a token sequence, and concatenating
//! the token texts line by line (lines rejoined with `\n`) reproduces the
//! input exactly.
//!
//! ## Example
//!
//! ```
//! use glint_syntax::{tokenize, TokenKind};
//!
//! let lines = tokenize("const x = 1", "javascript");
//!
//! assert_eq!(lines[0][0].kind, TokenKind::Keyword);
//! assert_eq!(lines[0][0].text, "const");
//! ```

mod language;
mod scan;
mod token;

pub use language::{LanguageRegistry, LanguageSpec, DEFAULT_LANGUAGE};
pub use scan::{Highlighter, LineScanner, TokenLines};
pub use token::{OwnedToken, Token, TokenKind};

use language::DEFAULT_REGISTRY;

/// Tokenize `code` with the built-in language registry, collecting the
/// tokens of each line. Unknown language ids fall back to
/// [`DEFAULT_LANGUAGE`].
pub fn tokenize<'src>(code: &'src str, language: &str) -> Vec<Vec<Token<'src>>> {
    token_lines(code, language).map(Iterator::collect).collect()
}

/// Lazy counterpart of [`tokenize`]: one [`LineScanner`] per input line,
/// backed by the built-in registry.
pub fn token_lines<'src>(code: &'src str, language: &str) -> TokenLines<'src, 'static> {
    TokenLines::new(code, DEFAULT_REGISTRY.resolve(language))
}
