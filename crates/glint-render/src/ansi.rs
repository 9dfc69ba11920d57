//! ANSI terminal rendering of token lines.

use std::fmt::Write;

use crossterm::style::{style, Attribute, Stylize};
use glint_syntax::{token_lines, Token};

use crate::theme::{Style, Theme};

/// Render pre-tokenized lines to a single string with ANSI styling,
/// newlines reinserted between lines.
pub fn render_lines<'src, I, L>(lines: I, theme: &Theme) -> String
where
    I: IntoIterator<Item = L>,
    L: IntoIterator<Item = Token<'src>>,
{
    let mut out = String::new();
    for (i, line) in lines.into_iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        for token in line {
            push_styled(&mut out, token.text, theme.style_for(token.kind));
        }
    }
    out
}

/// Tokenize with the built-in registry and render in one step.
pub fn render(code: &str, language: &str, theme: &Theme) -> String {
    render_lines(token_lines(code, language), theme)
}

fn push_styled(out: &mut String, text: &str, style_spec: Style) {
    if style_spec == Style::plain() {
        out.push_str(text);
        return;
    }
    let mut styled = style(text);
    if let Some(color) = style_spec.color {
        styled = styled.with(color);
    }
    if style_spec.bold {
        styled = styled.attribute(Attribute::Bold);
    }
    if style_spec.italic {
        styled = styled.attribute(Attribute::Italic);
    }
    // Writing into a String cannot fail.
    let _ = write!(out, "{styled}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_theme_is_identity() {
        let source = "const x = \"hi\" // done";
        assert_eq!(render(source, "javascript", &Theme::plain()), source);
    }

    #[test]
    fn test_plain_theme_identity_across_lines() {
        let source = "let a = 1\n# not a comment here\n";
        assert_eq!(render(source, "javascript", &Theme::plain()), source);
    }

    #[test]
    fn test_dark_theme_emits_escapes_for_keywords() {
        let rendered = render("const", "javascript", &Theme::dark());
        assert!(rendered.contains("const"));
        assert!(rendered.contains('\u{1b}'));
    }

    #[test]
    fn test_unstyled_text_has_no_escapes() {
        let rendered = render("plain words", "javascript", &Theme::dark());
        assert_eq!(rendered, "plain words");
    }
}
