use dioxus::prelude::*;

use course_core::content;
use course_core::model::{Day, DaySchedule, ScheduleEntry};

use crate::views::{Disclosure, Selector};

/// Home-page overview: day tab selector over the two schedules, with a
/// single-open accordion of timeslots under the active tab.
#[component]
pub fn CourseOverview() -> Element {
    let mut active_day = use_signal(|| Selector::new(Day::default()));
    let mut expanded = use_signal(Disclosure::<usize>::default);

    let schedule: &DaySchedule = content::day_schedule(active_day().active());

    rsx! {
        section { id: "overview", class: "overview",
            header { class: "section-header",
                h2 { "Course Overview" }
                p { "A comprehensive 2-day journey through NoSQL concepts and MongoDB mastery" }
            }

            div { class: "day-tabs",
                for day in Day::ALL {
                    button {
                        class: if active_day().is_active(day) { "day-tab active" } else { "day-tab" },
                        r#type: "button",
                        onclick: move |_| {
                            active_day.write().select(day);
                            // The accordion is scoped to the visible list;
                            // switching tabs starts it collapsed.
                            expanded.set(Disclosure::default());
                        },
                        "{day.label()}"
                    }
                }
            }

            h3 { class: "overview-title", "{schedule.title}" }

            div { class: "schedule-list",
                for (index, entry) in schedule.entries.iter().enumerate() {
                    SchedulePanel {
                        entry: *entry,
                        open: expanded().is_open(index),
                        on_toggle: move |_| expanded.write().select(index),
                    }
                }
            }
        }
    }
}

#[component]
fn SchedulePanel(entry: ScheduleEntry, open: bool, on_toggle: EventHandler<()>) -> Element {
    let chevron = if open { "chevron open" } else { "chevron" };
    rsx! {
        article { class: "schedule-panel",
            button {
                class: "schedule-header",
                r#type: "button",
                onclick: move |_| on_toggle.call(()),
                div { class: "schedule-heading",
                    span { class: "session-badge {entry.kind.css_class()}", "{entry.kind.label()}" }
                    div {
                        h4 { "{entry.title}" }
                        p { class: "schedule-time", "{entry.time}" }
                    }
                }
                span { class: "{chevron}", aria_hidden: "true", "⌄" }
            }

            if open {
                div { class: "schedule-body",
                    h5 { "What you'll learn:" }
                    ul {
                        for topic in entry.topics {
                            li { "{topic}" }
                        }
                    }
                }
            }
        }
    }
}
