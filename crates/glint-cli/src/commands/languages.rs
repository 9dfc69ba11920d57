//! Languages command - list the registered language ids.

use glint_syntax::{LanguageRegistry, DEFAULT_LANGUAGE};

pub fn run() -> miette::Result<()> {
    let registry = LanguageRegistry::builtin();

    let mut ids: Vec<&str> = registry.ids().collect();
    ids.sort_unstable();

    println!("Registered languages:\n");
    for id in &ids {
        let spec = registry.resolve(id);
        let mut notes = Vec::new();
        if spec.id() != *id {
            notes.push(format!("alias of {}", spec.id()));
        }
        if *id == DEFAULT_LANGUAGE {
            notes.push("default".to_string());
        }
        let suffix = if notes.is_empty() {
            String::new()
        } else {
            format!("  ({})", notes.join(", "))
        };
        println!("  {:12} {:3} keywords{}", id, spec.keyword_count(), suffix);
    }

    println!("\nUnknown ids fall back to {DEFAULT_LANGUAGE}.");
    Ok(())
}
