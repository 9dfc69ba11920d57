//! Input loading and language guessing shared by the commands.

use std::path::Path;

use miette::Diagnostic;
use thiserror::Error;

use glint_syntax::DEFAULT_LANGUAGE;

/// Failure to load an input file.
#[derive(Debug, Error, Diagnostic)]
pub enum InputError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Read a source file as UTF-8 text.
pub fn read_source(path: &Path) -> Result<String, InputError> {
    std::fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.display().to_string(),
        source,
    })
}

/// Pick the language id for a file: an explicit flag wins, then the file
/// extension, then the registry default.
pub fn language_for(path: &Path, flag: Option<&str>) -> String {
    if let Some(lang) = flag {
        return lang.to_string();
    }
    let guessed = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(guess_from_extension)
        .unwrap_or(DEFAULT_LANGUAGE);
    tracing::debug!(language = guessed, "language guessed from extension");
    guessed.to_string()
}

fn guess_from_extension(ext: &str) -> Option<&'static str> {
    match ext {
        "js" | "mjs" | "cjs" => Some("javascript"),
        "ts" => Some("typescript"),
        "jsx" | "tsx" => Some("react"),
        "py" => Some("python"),
        "c" | "h" => Some("c"),
        "cpp" | "cc" | "cxx" | "hpp" => Some("cpp"),
        "java" => Some("java"),
        "cs" => Some("csharp"),
        "html" | "htm" => Some("html"),
        "css" => Some("css"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_flag_beats_extension() {
        assert_eq!(language_for(Path::new("a.py"), Some("css")), "css");
    }

    #[test]
    fn test_extension_guess() {
        assert_eq!(language_for(Path::new("a.py"), None), "python");
        assert_eq!(language_for(Path::new("b.tsx"), None), "react");
    }

    #[test]
    fn test_unknown_extension_uses_default() {
        assert_eq!(language_for(Path::new("notes.txt"), None), DEFAULT_LANGUAGE);
        assert_eq!(language_for(Path::new("no_extension"), None), DEFAULT_LANGUAGE);
    }
}
