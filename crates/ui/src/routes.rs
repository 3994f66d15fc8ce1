use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use course_core::model::Day;

use crate::components::{Footer, Navbar};
use crate::views::{DayView, HomeView, ThemeProvider, use_theme};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/day1", Day1View)] Day1 {},
        #[route("/day2", Day2View)] Day2 {},
}

#[component]
fn Day1View() -> Element {
    rsx! { DayView { day: Day::One } }
}

#[component]
fn Day2View() -> Element {
    rsx! { DayView { day: Day::Two } }
}

#[component]
fn Layout() -> Element {
    rsx! {
        ThemeProvider {
            Chrome {}
        }
    }
}

/// Everything under the theme provider: the theme class has to be applied on
/// a node that can actually read the context.
#[component]
fn Chrome() -> Element {
    let theme = use_theme();
    rsx! {
        div { class: "app theme-{theme.theme().as_str()}",
            Navbar {}
            main { class: "content",
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}
