use dioxus::prelude::*;

use crate::components::{CodeDemo, CourseOverview, Hero, Instructor, Resources};

#[component]
pub fn HomeView() -> Element {
    rsx! {
        div { class: "page home-page",
            Hero {}
            CourseOverview {}
            CodeDemo {}
            Resources {}
            Instructor {}
        }
    }
}
