use dioxus::prelude::*;

/// Full-screen overlay shown while startup state (the persisted theme) is
/// still loading.
#[component]
pub fn Loading() -> Element {
    rsx! {
        div { class: "loading-overlay",
            div { class: "loading-box",
                div { class: "loading-mark", span { "M" } }
                p { class: "loading-title", "Loading MongoDB Course..." }
                p { class: "loading-subtitle",
                    "Please wait while we prepare your learning experience"
                }
            }
        }
    }
}
