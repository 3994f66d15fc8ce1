use dioxus::prelude::*;

use course_core::content::INSTRUCTOR;

#[component]
pub fn Instructor() -> Element {
    rsx! {
        section { id: "instructor", class: "instructor",
            header { class: "section-header",
                h2 { "Meet Your Instructor" }
                p { "Learn from industry experts with real-world MongoDB experience" }
            }

            div { class: "instructor-card",
                div { class: "instructor-portrait",
                    span { class: "instructor-initials", "AH" }
                }

                div { class: "instructor-body",
                    h3 { "{INSTRUCTOR.name}" }
                    p { class: "instructor-role", "{INSTRUCTOR.role}" }
                    p { class: "instructor-bio", "{INSTRUCTOR.bio}" }

                    div { class: "instructor-links",
                        for link in INSTRUCTOR.links {
                            a {
                                class: "btn btn-contact",
                                href: "{link.href}",
                                target: "_blank",
                                "{link.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
