use dioxus::prelude::*;

use course_core::model::Snippet;

/// The one place snippets turn into markup. The language tag only selects a
/// CSS class; the source text is rendered verbatim.
#[component]
pub fn CodeBlock(snippet: Snippet) -> Element {
    rsx! {
        pre { class: "code-block",
            code { class: "{snippet.language.css_class()}", "{snippet.source}" }
        }
    }
}
