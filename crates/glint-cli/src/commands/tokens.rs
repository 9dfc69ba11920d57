//! Tokens command - dump the token stream of a file.

use std::path::Path;

use glint_syntax::{tokenize, OwnedToken};
use miette::IntoDiagnostic;

use crate::input;

pub fn run(file: &Path, lang: Option<&str>, json: bool) -> miette::Result<()> {
    let source = input::read_source(file)?;
    let language = input::language_for(file, lang);
    let lines = tokenize(&source, &language);

    if json {
        let owned: Vec<Vec<OwnedToken>> = lines
            .iter()
            .map(|line| line.iter().map(|t| t.into_owned()).collect())
            .collect();
        let out = serde_json::to_string_pretty(&owned).into_diagnostic()?;
        println!("{out}");
        return Ok(());
    }

    println!("Tokenizing: {} ({})\n", file.display(), language);

    let mut token_count = 0;
    for (line_no, line) in lines.iter().enumerate() {
        for token in line {
            println!("{:4}  {:8}  {:?}", line_no + 1, token.kind.name(), token.text);
            token_count += 1;
        }
    }

    println!("\n{} tokens across {} lines", token_count, lines.len());
    Ok(())
}
