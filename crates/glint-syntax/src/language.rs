//! Language specs and the registry that resolves language ids to them.
//!
//! A language id is whatever string the caller hands us ("javascript",
//! "python", "COBOL-85"). Resolution is total: unknown ids silently fall
//! back to the default (javascript) spec, so the scanner never has to deal
//! with an absent keyword set.

use once_cell::sync::Lazy;
use rustc_hash::{FxHashMap, FxHashSet};

/// The language id whose spec backs every unknown id.
pub const DEFAULT_LANGUAGE: &str = "javascript";

/// Tokenization conventions for one language: its reserved words and
/// whether `#` opens a line comment. `//` and `/* */` apply everywhere.
#[derive(Debug, Clone)]
pub struct LanguageSpec {
    id: String,
    keywords: FxHashSet<String>,
    hash_line_comments: bool,
}

impl LanguageSpec {
    pub fn new(id: impl Into<String>, keywords: &[&str]) -> Self {
        Self {
            id: id.into(),
            keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
            hash_line_comments: false,
        }
    }

    /// Mark `#` as opening a line comment (python).
    pub fn with_hash_comments(mut self) -> Self {
        self.hash_line_comments = true;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Exact, case-sensitive membership test.
    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    pub fn hash_line_comments(&self) -> bool {
        self.hash_line_comments
    }

    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }
}

/// Read-only table of language id -> spec, built once and handed to the
/// highlighter. Construct with [`LanguageRegistry::builtin`] for the stock
/// languages, or from [`LanguageRegistry::new`] plus [`register`] calls for
/// custom sets in tests.
///
/// [`register`]: LanguageRegistry::register
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    specs: FxHashMap<String, LanguageSpec>,
    aliases: FxHashMap<String, String>,
    fallback: LanguageSpec,
}

impl LanguageRegistry {
    /// An empty registry; `fallback` answers every id until specs are
    /// registered.
    pub fn new(fallback: LanguageSpec) -> Self {
        Self {
            specs: FxHashMap::default(),
            aliases: FxHashMap::default(),
            fallback,
        }
    }

    /// The registry with all built-in languages.
    pub fn builtin() -> Self {
        let mut registry = Self::new(LanguageSpec::new(DEFAULT_LANGUAGE, JAVASCRIPT_KEYWORDS));
        registry.register(LanguageSpec::new("javascript", JAVASCRIPT_KEYWORDS));
        registry.register(LanguageSpec::new("python", PYTHON_KEYWORDS).with_hash_comments());
        registry.register(LanguageSpec::new("react", REACT_KEYWORDS));
        registry.register(LanguageSpec::new("typescript", TYPESCRIPT_KEYWORDS));
        registry.register(LanguageSpec::new("css", CSS_KEYWORDS));
        registry.register(LanguageSpec::new("c", C_KEYWORDS));
        registry.register(LanguageSpec::new("cpp", CPP_KEYWORDS));
        registry.register(LanguageSpec::new("java", JAVA_KEYWORDS));
        registry.register(LanguageSpec::new("csharp", CSHARP_KEYWORDS));
        registry.register(LanguageSpec::new("html", HTML_KEYWORDS));
        registry.alias("nextjs", "react");
        registry
    }

    /// Add or replace a spec under its own id.
    pub fn register(&mut self, spec: LanguageSpec) {
        self.specs.insert(spec.id.clone(), spec);
    }

    /// Make `id` resolve to the spec registered under `target`. The alias
    /// is followed at resolution time, so it may be installed before the
    /// target spec.
    pub fn alias(&mut self, id: impl Into<String>, target: impl Into<String>) {
        self.aliases.insert(id.into(), target.into());
    }

    /// Resolve a language id to a concrete spec, falling back rather than
    /// failing: direct hit, then one alias hop, then the fallback spec.
    pub fn resolve(&self, id: &str) -> &LanguageSpec {
        if let Some(spec) = self.specs.get(id) {
            return spec;
        }
        if let Some(target) = self.aliases.get(id) {
            if let Some(spec) = self.specs.get(target) {
                return spec;
            }
        }
        &self.fallback
    }

    /// Registered language ids (aliases included), unordered.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.specs
            .keys()
            .map(String::as_str)
            .chain(self.aliases.keys().map(String::as_str))
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Process-wide registry backing the free-function API. Built on first use,
/// never mutated.
pub(crate) static DEFAULT_REGISTRY: Lazy<LanguageRegistry> = Lazy::new(LanguageRegistry::builtin);

const JAVASCRIPT_KEYWORDS: &[&str] = &[
    "const", "let", "var", "function", "if", "else", "for", "while", "return", "import", "export",
    "class", "extends", "async", "await", "try", "catch",
];

const PYTHON_KEYWORDS: &[&str] = &[
    "def", "class", "if", "else", "elif", "for", "while", "return", "import", "from", "as", "try",
    "except", "finally", "with",
];

const REACT_KEYWORDS: &[&str] = &[
    "import",
    "export",
    "const",
    "let",
    "function",
    "return",
    "useState",
    "useEffect",
    "useContext",
];

const TYPESCRIPT_KEYWORDS: &[&str] = &[
    "interface",
    "type",
    "extends",
    "implements",
    "public",
    "private",
    "protected",
    "readonly",
];

const CSS_KEYWORDS: &[&str] = &[
    "display",
    "flex",
    "grid",
    "position",
    "color",
    "background",
    "margin",
    "padding",
    "border",
    "width",
    "height",
];

const C_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "int", "long", "register", "return", "short",
    "signed", "sizeof", "static", "struct", "switch", "typedef", "union", "unsigned", "void",
    "volatile", "while",
];

const CPP_KEYWORDS: &[&str] = &[
    "auto", "bool", "break", "case", "catch", "char", "class", "const", "continue", "default",
    "delete", "do", "double", "else", "enum", "false", "float", "for", "if", "int", "long",
    "namespace", "new", "nullptr", "operator", "private", "protected", "public", "return",
    "sizeof", "static", "struct", "switch", "template", "this", "throw", "true", "try", "typedef",
    "union", "unsigned", "using", "virtual", "void", "while",
];

const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "boolean", "break", "byte", "case", "catch", "char", "class", "continue",
    "default", "do", "double", "else", "enum", "extends", "final", "finally", "float", "for",
    "if", "implements", "import", "int", "interface", "long", "new", "package", "private",
    "protected", "public", "return", "static", "switch", "this", "throw", "throws", "try",
    "void", "while",
];

const CSHARP_KEYWORDS: &[&str] = &[
    "abstract", "async", "await", "base", "bool", "break", "case", "catch", "char", "class",
    "const", "continue", "decimal", "default", "do", "double", "else", "enum", "finally", "for",
    "foreach", "if", "int", "interface", "internal", "namespace", "new", "private", "protected",
    "public", "readonly", "return", "static", "string", "struct", "switch", "this", "throw",
    "try", "using", "var", "void", "while",
];

const HTML_KEYWORDS: &[&str] = &[
    "html", "head", "body", "title", "meta", "link", "script", "style", "div", "span", "header",
    "footer", "nav", "main", "section", "article", "ul", "ol", "li", "a", "img", "form", "input",
    "button",
];
