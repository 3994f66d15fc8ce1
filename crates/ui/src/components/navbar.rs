use dioxus::prelude::*;
use dioxus_router::{Link, use_route};

use course_core::model::Theme;

use crate::routes::Route;
use crate::views::use_theme;

const NAV_ITEMS: [(&str, Route); 3] = [
    ("Home", Route::Home {}),
    ("Day 1", Route::Day1 {}),
    ("Day 2", Route::Day2 {}),
];

#[component]
pub fn Navbar() -> Element {
    let theme = use_theme();
    let current: Route = use_route();

    let toggle_label = match theme.theme() {
        Theme::Dark => "☀",
        Theme::Light => "☾",
    };

    rsx! {
        nav { class: "navbar",
            div { class: "navbar-inner",
                div { class: "brand",
                    span { class: "brand-mark", "M" }
                    span { class: "brand-name", "MongoDB Course" }
                }

                div { class: "nav-links",
                    for (label, route) in NAV_ITEMS {
                        Link {
                            to: route.clone(),
                            class: if current == route { "nav-link active" } else { "nav-link" },
                            "{label}"
                        }
                    }
                }

                button {
                    class: "theme-toggle",
                    r#type: "button",
                    aria_label: "Toggle color theme",
                    onclick: move |_| theme.toggle(),
                    "{toggle_label}"
                }
            }
        }
    }
}
