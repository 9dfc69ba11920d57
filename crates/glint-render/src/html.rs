//! HTML rendering of token lines: one `<span>` per non-text token.

use glint_syntax::{token_lines, Token, TokenKind};

/// CSS class names used per token kind. Plain text tokens are emitted
/// without a wrapping span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssClasses {
    pub keyword: String,
    pub string: String,
    pub comment: String,
    pub number: String,
}

impl CssClasses {
    fn class_for(&self, kind: TokenKind) -> Option<&str> {
        match kind {
            TokenKind::Keyword => Some(&self.keyword),
            TokenKind::Str => Some(&self.string),
            TokenKind::Comment => Some(&self.comment),
            TokenKind::Number => Some(&self.number),
            TokenKind::Text => None,
        }
    }
}

impl Default for CssClasses {
    fn default() -> Self {
        Self {
            keyword: "tok-keyword".to_string(),
            string: "tok-string".to_string(),
            comment: "tok-comment".to_string(),
            number: "tok-number".to_string(),
        }
    }
}

/// Render pre-tokenized lines to HTML markup, newlines reinserted between
/// lines. Token text is escaped; class names are emitted as given.
pub fn render_lines<'src, I, L>(lines: I, classes: &CssClasses) -> String
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
            match classes.class_for(token.kind) {
                Some(class) => {
                    out.push_str("<span class=\"");
                    out.push_str(class);
                    out.push_str("\">");
                    push_escaped(&mut out, token.text);
                    out.push_str("</span>");
                }
                None => push_escaped(&mut out, token.text),
            }
        }
    }
    out
}

/// Tokenize with the built-in registry and render in one step.
pub fn render(code: &str, language: &str, classes: &CssClasses) -> String {
    render_lines(token_lines(code, language), classes)
}

fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_span() {
        let html = render("const x", "javascript", &CssClasses::default());
        assert_eq!(html, "<span class=\"tok-keyword\">const</span> x");
    }

    #[test]
    fn test_text_is_escaped() {
        let html = render("a < b && c > d", "javascript", &CssClasses::default());
        assert_eq!(html, "a &lt; b &amp;&amp; c &gt; d");
    }

    #[test]
    fn test_comment_span_is_escaped_too() {
        let html = render("// <b>", "javascript", &CssClasses::default());
        assert_eq!(html, "<span class=\"tok-comment\">// &lt;b&gt;</span>");
    }

    #[test]
    fn test_lines_joined_with_newline() {
        let html = render("x\ny", "javascript", &CssClasses::default());
        assert_eq!(html, "x\ny");
    }
}
