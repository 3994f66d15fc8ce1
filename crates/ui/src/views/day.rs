use dioxus::document::eval;
use dioxus::prelude::*;

use course_core::content;
use course_core::model::{
    Day, DetailBlock, DetailCard, FactCard, QueryExample, Session, SessionId,
};

use crate::components::CodeBlock;
use crate::views::Disclosure;
use crate::vm::markdown_to_html;

/// One day content page: hero header plus the single-open session accordion.
///
/// Every expanded session renders its detail blocks generically; no session
/// gets bespoke markup.
#[component]
pub fn DayView(day: Day) -> Element {
    let course = content::course_day(day);
    let mut expanded = use_signal(Disclosure::<SessionId>::default);

    let on_explore = move |_| {
        let _ = eval(
            "document.getElementById('content')?.scrollIntoView({behavior: 'smooth', block: 'start'});",
        );
    };

    rsx! {
        div { class: "page day-page",
            section { class: "day-hero",
                h1 { class: "day-hero-label", "{day.label()}" }
                h2 { class: "day-hero-title", "{course.title}" }
                p { class: "day-hero-tagline", "{course.tagline}" }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: on_explore,
                    "Explore {day.label()} Content"
                }
            }

            section { id: "content", class: "day-content",
                header { class: "day-content-header",
                    h3 { "Today's Sessions" }
                    p {
                        "{course.sessions.len()} comprehensive sessions covering \
                         all of today's material"
                    }
                }

                div { class: "session-list",
                    for session in course.sessions {
                        SessionPanel {
                            session: *session,
                            open: expanded().is_open(session.id),
                            on_toggle: move |id| expanded.write().select(id),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SessionPanel(session: Session, open: bool, on_toggle: EventHandler<SessionId>) -> Element {
    let chevron = if open { "chevron open" } else { "chevron" };
    rsx! {
        article { class: "session-panel",
            button {
                class: "session-header",
                r#type: "button",
                onclick: move |_| on_toggle.call(session.id),
                div { class: "session-heading",
                    span { class: "session-badge {session.kind.css_class()}",
                        "{session.kind.label()}"
                    }
                    div {
                        h4 { class: "session-title", "Session {session.id.value()}: {session.title}" }
                        p { class: "session-duration", "{session.duration}" }
                    }
                }
                span { class: "{chevron}", aria_hidden: "true", "⌄" }
            }

            if open {
                div { class: "session-body",
                    p { class: "session-summary", "{session.summary}" }
                    h5 { "Key Topics:" }
                    ul { class: "topic-list",
                        for topic in session.topics {
                            li { "{topic}" }
                        }
                    }
                    for block in session.details {
                        DetailBlockView { block: *block }
                    }
                }
            }
        }
    }
}

#[component]
fn DetailBlockView(block: DetailBlock) -> Element {
    match block {
        DetailBlock::Prose { heading, body } => {
            let html = markdown_to_html(body);
            rsx! {
                div { class: "detail detail-prose",
                    h6 { "{heading}" }
                    div { class: "prose", dangerous_inner_html: "{html}" }
                }
            }
        }
        DetailBlock::Bullets { heading, items } => rsx! {
            div { class: "detail detail-bullets",
                h6 { "{heading}" }
                ul {
                    for item in items {
                        li { "{item}" }
                    }
                }
            }
        },
        DetailBlock::Code { heading, snippet } => rsx! {
            div { class: "detail detail-code",
                h6 { "{heading}" }
                CodeBlock { snippet }
            }
        },
        DetailBlock::Comparison { heading, left, right } => rsx! {
            div { class: "detail detail-comparison",
                h6 { "{heading}" }
                div { class: "comparison-grid",
                    div {
                        p { class: "comparison-label", "{left.label}" }
                        CodeBlock { snippet: left.snippet }
                    }
                    div {
                        p { class: "comparison-label", "{right.label}" }
                        CodeBlock { snippet: right.snippet }
                    }
                }
            }
        },
        DetailBlock::Cards { heading, intro, cards } => rsx! {
            div { class: "detail detail-cards",
                h6 { "{heading}" }
                p { "{intro}" }
                div { class: "card-grid",
                    for card in cards {
                        DetailCardView { card: *card }
                    }
                }
            }
        },
        DetailBlock::Facts { heading, intro, facts } => rsx! {
            div { class: "detail detail-facts",
                h6 { "{heading}" }
                p { "{intro}" }
                div { class: "fact-grid",
                    for fact in facts {
                        FactCardView { fact: *fact }
                    }
                }
            }
        },
        DetailBlock::Examples { heading, examples } => rsx! {
            div { class: "detail detail-examples",
                h6 { "{heading}" }
                for example in examples {
                    ExampleView { example: *example }
                }
            }
        },
    }
}

#[component]
fn DetailCardView(card: DetailCard) -> Element {
    let examples = card.examples.join(", ");
    let use_cases = card.use_cases.join(", ");
    rsx! {
        div { class: "detail-card",
            div { class: "detail-card-heading",
                span { class: "detail-card-icon", "{card.icon}" }
                h6 { "{card.name}" }
            }
            p { "{card.description}" }
            p { class: "detail-card-meta",
                strong { "Examples: " }
                "{examples}"
            }
            p { class: "detail-card-meta",
                strong { "Use Cases: " }
                "{use_cases}"
            }
            CodeBlock { snippet: card.snippet }
            div { class: "pros-cons",
                div {
                    h6 { class: "pros-label", "Pros:" }
                    ul {
                        for pro in card.pros {
                            li { "{pro}" }
                        }
                    }
                }
                div {
                    h6 { class: "cons-label", "Cons:" }
                    ul {
                        for con in card.cons {
                            li { "{con}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FactCardView(fact: FactCard) -> Element {
    rsx! {
        div { class: "fact-card",
            div { class: "fact-card-heading",
                span { class: "fact-card-icon", "{fact.icon}" }
                h6 { "{fact.name}" }
            }
            p { "{fact.description}" }
            p { class: "fact-card-detail", "{fact.detail}" }
            p { class: "fact-card-example", "Example: {fact.example}" }
        }
    }
}

#[component]
fn ExampleView(example: QueryExample) -> Element {
    rsx! {
        div { class: "query-example",
            h6 { "{example.title}" }
            p { "{example.description}" }
            CodeBlock { snippet: example.code }
            if let Some(result) = example.result {
                p { class: "query-example-result-label", "Result" }
                CodeBlock { snippet: result }
            }
        }
    }
}
