use dioxus::prelude::*;

use course_core::content::{ABOUT_BLURB, CONTACT, COPYRIGHT, QUICK_LINKS};

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "footer",
            div { class: "footer-grid",
                div { class: "footer-column",
                    h3 { "Contact Information" }
                    ul { class: "footer-contact",
                        li { "✉ {CONTACT.email}" }
                        li { "☎ {CONTACT.phone}" }
                        li { "📍 {CONTACT.location}" }
                    }
                }

                div { class: "footer-column",
                    h3 { "Quick Links" }
                    ul { class: "footer-links",
                        for (label, href) in QUICK_LINKS {
                            li {
                                a { class: "footer-link", href: "{href}", "{label}" }
                            }
                        }
                    }
                }

                div { class: "footer-column",
                    h3 { "About This Course" }
                    p { "{ABOUT_BLURB}" }
                }
            }

            div { class: "footer-bottom",
                p { "{COPYRIGHT}" }
            }
        }
    }
}
