use dioxus::document::eval;
use dioxus::prelude::*;

use course_core::content;

use crate::components::CodeBlock;
use crate::views::{DemoRun, FAKE_RUN_DELAY, Selector};

/// The interactive demo panel.
///
/// "Run" never executes anything: it raises a running flag, waits the fixed
/// delay, and lowers it again. The displayed result is whatever canned text
/// is paired with the selected example.
#[component]
pub fn CodeDemo() -> Element {
    let queries = content::demo_queries();
    let mut selected = use_signal(|| Selector::new(0usize));
    let mut run = use_signal(DemoRun::default);

    let on_run = move |_| {
        let generation = run.write().begin();
        spawn(async move {
            tokio::time::sleep(FAKE_RUN_DELAY).await;
            run.write().finish(generation);
        });
    };

    let on_copy = move |_| {
        let source = queries[selected().active()].code.source;
        spawn(async move {
            let script = format!("await navigator.clipboard.writeText({source:?});");
            if eval(&script).await.is_err() {
                // Denied clipboard permission. Nothing on screen depends on
                // the copy having happened.
                tracing::warn!("clipboard write failed");
            }
        });
    };

    let active = selected().active();
    let query = &queries[active];
    let running = run().is_running();
    let run_label = if running { "Running..." } else { "Run" };

    rsx! {
        section { id: "demo", class: "code-demo",
            header { class: "section-header",
                h2 { "Interactive MongoDB Demo" }
                p { "Try out real MongoDB queries and see the results in action" }
            }

            div { class: "demo-grid",
                div { class: "query-picker",
                    h3 { "Choose a Query" }
                    for (index, candidate) in queries.iter().enumerate() {
                        button {
                            class: if selected().is_active(index) { "query-option active" } else { "query-option" },
                            r#type: "button",
                            onclick: move |_| selected.write().select(index),
                            h4 { "{candidate.title}" }
                            p { "{candidate.description}" }
                        }
                    }
                }

                div { class: "demo-terminal",
                    div { class: "terminal-chrome",
                        div { class: "terminal-lights",
                            span { class: "light red" }
                            span { class: "light yellow" }
                            span { class: "light green" }
                        }
                        span { class: "terminal-title", "MongoDB Shell" }
                        div { class: "terminal-actions",
                            button {
                                class: "terminal-button",
                                r#type: "button",
                                aria_label: "Copy query",
                                onclick: on_copy,
                                "Copy"
                            }
                            button {
                                class: "terminal-button run",
                                r#type: "button",
                                disabled: running,
                                onclick: on_run,
                                "{run_label}"
                            }
                        }
                    }

                    CodeBlock { snippet: query.code }

                    div { class: "result-panel",
                        div { class: "result-header",
                            span { "Result" }
                            if running {
                                span { class: "spinner", aria_hidden: "true" }
                            }
                        }
                        if let Some(result) = query.result {
                            CodeBlock { snippet: result }
                        }
                    }
                }
            }
        }
    }
}
