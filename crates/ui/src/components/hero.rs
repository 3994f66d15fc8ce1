use dioxus::document::eval;
use dioxus::prelude::*;

use course_core::content::HERO;

use crate::components::CountdownBanner;

#[component]
pub fn Hero() -> Element {
    let on_start = move |_| {
        let _ = eval(
            "document.getElementById('overview')?.scrollIntoView({behavior: 'smooth', block: 'start'});",
        );
    };

    rsx! {
        section { id: "hero", class: "hero",
            div { class: "hero-inner",
                h1 { class: "hero-heading",
                    "{HERO.heading_lead} "
                    span { class: "accent", "{HERO.heading_accent_a}" }
                    " & "
                    span { class: "accent", "{HERO.heading_accent_b}" }
                    br {}
                    span { class: "hero-heading-tail", "{HERO.heading_tail}" }
                }

                p { class: "hero-pitch", "{HERO.pitch}" }

                CountdownBanner {}

                div { class: "hero-actions",
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: on_start,
                        "{HERO.cta} ⌄"
                    }

                    ul { class: "hero-highlights",
                        for highlight in HERO.highlights {
                            li { "{highlight}" }
                        }
                    }
                }
            }
        }
    }
}
