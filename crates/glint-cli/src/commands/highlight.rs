//! Highlight command - render a file to the terminal.

use std::path::Path;

use glint_render::{ansi, html, CssClasses, Theme};

use crate::input;

pub fn run(file: &Path, lang: Option<&str>, as_html: bool) -> miette::Result<()> {
    let source = input::read_source(file)?;
    let language = input::language_for(file, lang);
    tracing::debug!(file = %file.display(), %language, "highlighting");

    let rendered = if as_html {
        html::render(&source, &language, &CssClasses::default())
    } else {
        ansi::render(&source, &language, &Theme::dark())
    };

    println!("{rendered}");
    Ok(())
}
