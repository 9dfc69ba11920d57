//! Per-kind presentation styles.

use crossterm::style::Color;
use glint_syntax::TokenKind;

/// How one token kind is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    /// `None` keeps the terminal's default foreground.
    pub color: Option<Color>,
    pub bold: bool,
    pub italic: bool,
}

impl Style {
    pub const fn plain() -> Self {
        Self {
            color: None,
            bold: false,
            italic: false,
        }
    }

    pub const fn colored(color: Color) -> Self {
        Self {
            color: Some(color),
            bold: false,
            italic: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }
}

/// A kind -> style table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub keyword: Style,
    pub string: Style,
    pub comment: Style,
    pub number: Style,
    pub text: Style,
}

impl Theme {
    /// The stock dark palette: bold blue keywords, green strings, italic
    /// gray comments, orange numbers, untouched text.
    pub fn dark() -> Self {
        Self {
            keyword: Style::colored(Color::Blue).bold(),
            string: Style::colored(Color::Green),
            comment: Style::colored(Color::DarkGrey).italic(),
            number: Style::colored(Color::Yellow),
            text: Style::plain(),
        }
    }

    /// No colors at all; output is the input.
    pub fn plain() -> Self {
        Self {
            keyword: Style::plain(),
            string: Style::plain(),
            comment: Style::plain(),
            number: Style::plain(),
            text: Style::plain(),
        }
    }

    pub fn style_for(&self, kind: TokenKind) -> Style {
        match kind {
            TokenKind::Keyword => self.keyword,
            TokenKind::Str => self.string,
            TokenKind::Comment => self.comment,
            TokenKind::Number => self.number,
            TokenKind::Text => self.text,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_theme_styles_every_kind() {
        let theme = Theme::dark();
        assert!(theme.style_for(TokenKind::Keyword).bold);
        assert!(theme.style_for(TokenKind::Comment).italic);
        assert_eq!(theme.style_for(TokenKind::Text), Style::plain());
    }
}
