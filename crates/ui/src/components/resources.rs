use dioxus::prelude::*;

use course_core::content::{LinkKind, RESOURCES, Resource};

#[component]
pub fn Resources() -> Element {
    rsx! {
        section { id: "resources", class: "resources",
            header { class: "section-header",
                h2 { "Resources & Materials" }
                p { "Everything you need to continue learning and building with MongoDB" }
            }

            div { class: "resource-grid",
                for category in RESOURCES.iter() {
                    div { class: "resource-category",
                        h3 { "{category.name}" }
                        div { class: "resource-items",
                            for item in category.items {
                                ResourceItem { item: *item }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ResourceItem(item: Resource) -> Element {
    let glyph = match item.kind {
        LinkKind::Download => "↓",
        LinkKind::External | LinkKind::Email => "↗",
    };
    rsx! {
        a {
            class: "resource-item",
            href: "{item.href}",
            target: "_blank",
            div { class: "resource-text",
                h4 { "{item.title}" }
                p { "{item.description}" }
            }
            span { class: "resource-kind", aria_hidden: "true", "{glyph}" }
        }
    }
}
