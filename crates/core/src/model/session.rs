use crate::model::{Day, QueryExample, SessionId, Snippet};

/// Broad session category, used for icon/accent selection in the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionKind {
    Theory,
    HandsOn,
    Project,
}

impl SessionKind {
    /// CSS accent hook for the session badge.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            SessionKind::Theory => "badge-theory",
            SessionKind::HandsOn => "badge-hands-on",
            SessionKind::Project => "badge-project",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SessionKind::Theory => "Theory",
            SessionKind::HandsOn => "Hands-on",
            SessionKind::Project => "Project",
        }
    }
}

/// A code snippet with a short caption, used where two snippets sit side by
/// side (e.g. a SQL table next to the equivalent document).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LabeledSnippet {
    pub label: &'static str,
    pub snippet: Snippet,
}

/// One card in a card-grid detail block: a named concept with examples,
/// use cases, an illustrative snippet, and a pros/cons split.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DetailCard {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub examples: &'static [&'static str],
    pub use_cases: &'static [&'static str],
    pub snippet: Snippet,
    pub pros: &'static [&'static str],
    pub cons: &'static [&'static str],
}

/// One entry in a fact-grid detail block: a named property with a short
/// description, a longer explanation, and a concrete example.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FactCard {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub detail: &'static str,
    pub example: &'static str,
}

/// A rendering descriptor for one block of expanded-session content.
///
/// Day pages iterate these generically instead of branching per session id,
/// so adding content never touches rendering code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetailBlock {
    /// Markdown prose under a heading.
    Prose {
        heading: &'static str,
        body: &'static str,
    },
    /// A plain bullet list.
    Bullets {
        heading: &'static str,
        items: &'static [&'static str],
    },
    /// A single captioned code snippet.
    Code {
        heading: &'static str,
        snippet: Snippet,
    },
    /// Two snippets rendered side by side.
    Comparison {
        heading: &'static str,
        left: LabeledSnippet,
        right: LabeledSnippet,
    },
    /// A grid of concept cards.
    Cards {
        heading: &'static str,
        intro: &'static str,
        cards: &'static [DetailCard],
    },
    /// A grid of fact cards.
    Facts {
        heading: &'static str,
        intro: &'static str,
        facts: &'static [FactCard],
    },
    /// A run of query/result pairs.
    Examples {
        heading: &'static str,
        examples: &'static [QueryExample],
    },
}

/// One labeled block of course content with nested detail sections.
///
/// Static data with the page's lifetime; only the disclosure state that
/// points at it ever changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Session {
    pub id: SessionId,
    pub title: &'static str,
    pub duration: &'static str,
    pub kind: SessionKind,
    pub summary: &'static str,
    pub topics: &'static [&'static str],
    pub details: &'static [DetailBlock],
}

/// The full content set for one day page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CourseDay {
    pub day: Day,
    pub title: &'static str,
    pub tagline: &'static str,
    pub sessions: &'static [Session],
}
