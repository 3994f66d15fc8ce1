/// Language tag handed to the code renderer.
///
/// The renderer treats this as opaque styling input; no snippet is ever
/// parsed or executed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    Javascript,
    Json,
    Sql,
    Shell,
    Text,
}

impl Language {
    /// CSS class hook for the rendered code block.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Language::Javascript => "language-javascript",
            Language::Json => "language-json",
            Language::Sql => "language-sql",
            Language::Shell => "language-shell",
            Language::Text => "language-text",
        }
    }
}

/// A language-tagged block of illustrative source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Snippet {
    pub language: Language,
    pub source: &'static str,
}

impl Snippet {
    #[must_use]
    pub const fn new(language: Language, source: &'static str) -> Self {
        Self { language, source }
    }
}
